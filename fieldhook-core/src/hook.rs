//! # Handler traits
//!
//! A hook is a named extension point. Handlers attach to it in one of two
//! shapes:
//!
//! - [`ActionHook`]: observes the dispatched arguments. Its return value only
//!   signals failure.
//! - [`FilterHook`]: receives the running value and returns the value the
//!   next handler sees.
//!
//! Closures of the right shape implement both traits, so most callers never
//! name them. Implement them on a struct when a handler carries state or
//! configuration.

use crate::{error::BoxError, message::Message};

/// A handler for a fire-and-forget action.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `ActionHook<{A}>`",
    label = "missing `ActionHook` implementation",
    note = "Action handlers take `&{A}` and return `Result<(), BoxError>`."
)]
pub trait ActionHook<A: Message>: Send + Sync + 'static {
    /// Called once per dispatch of the action.
    fn on_action(&self, args: &A) -> Result<(), BoxError>;
}

impl<A, F> ActionHook<A> for F
where
    A: Message,
    F: Fn(&A) -> Result<(), BoxError> + Send + Sync + 'static,
{
    fn on_action(&self, args: &A) -> Result<(), BoxError> {
        (self)(args)
    }
}

/// A handler for a value-transforming filter.
///
/// `V` is the running value, `A` the extra arguments passed unchanged to
/// every handler.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `FilterHook<{V}, {A}>`",
    label = "missing `FilterHook` implementation",
    note = "Filter handlers take `({V}, &{A})` and return `Result<{V}, BoxError>`."
)]
pub trait FilterHook<V: Message, A: Message>: Send + Sync + 'static {
    /// Transform the running value.
    fn on_filter(&self, value: V, args: &A) -> Result<V, BoxError>;
}

impl<V, A, F> FilterHook<V, A> for F
where
    V: Message,
    A: Message,
    F: Fn(V, &A) -> Result<V, BoxError> + Send + Sync + 'static,
{
    fn on_filter(&self, value: V, args: &A) -> Result<V, BoxError> {
        (self)(value, args)
    }
}
