//! Logging hook for bus observation.

use fieldhook_core::{ActionHook, BoxError, FilterHook, Message};
use std::fmt::Debug;

/// A hook that logs what it observes and changes nothing.
///
/// Registered as an action it logs the arguments; registered as a filter it
/// logs the running value and passes it through untouched.
///
/// # Example
///
/// ```rust
/// use fieldhook_std::{HookBus, hooks::LoggingHook};
///
/// let bus = HookBus::new();
/// bus.add_action_hook::<(), _>("core.ready", LoggingHook::named("page"), 0);
/// bus.add_filter_hook::<bool, (), _>("core.enabled", LoggingHook::new(), 0);
///
/// bus.do_action("core.ready", &()).unwrap();
/// assert!(bus.apply_filter("core.enabled", true).unwrap());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LoggingHook {
    name: &'static str,
}

impl LoggingHook {
    /// Create a new `LoggingHook` with a default name.
    pub fn new() -> Self {
        Self { name: "hook" }
    }

    /// Create a new `LoggingHook` with a custom name, used in log lines to
    /// identify who registered it.
    pub fn named(name: &'static str) -> Self {
        Self { name }
    }
}

impl Default for LoggingHook {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> ActionHook<A> for LoggingHook
where
    A: Message + Debug,
{
    fn on_action(&self, args: &A) -> Result<(), BoxError> {
        tracing::debug!(name = %self.name, ?args, "action observed");
        Ok(())
    }
}

impl<V, A> FilterHook<V, A> for LoggingHook
where
    V: Message + Debug,
    A: Message + Debug,
{
    fn on_filter(&self, value: V, args: &A) -> Result<V, BoxError> {
        tracing::debug!(name = %self.name, ?value, ?args, "filter observed");
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct TestEvent {
        data: String,
    }

    #[test]
    fn test_logging_hook_action_succeeds() {
        let hook = LoggingHook::new();
        let event = TestEvent {
            data: "test".into(),
        };
        assert!(hook.on_action(&event).is_ok());
        assert_eq!(event.data, "test");
    }

    #[test]
    fn test_logging_hook_filter_passes_value_through() {
        let hook = LoggingHook::named("my_pipeline");
        let out = hook.on_filter(vec![1, 2, 3], &"args").unwrap();
        assert_eq!(out, vec![1, 2, 3]);
    }
}
