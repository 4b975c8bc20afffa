//! The hook bus: registration and dispatch of actions and filters.
//!
//! A [`HookBus`] is constructed once per page and shared by `Arc` with every
//! widget that needs it. All methods take `&self`; handlers may therefore
//! hold the bus and register, remove or dispatch hooks while running.
//!
//! # Example
//!
//! ```rust
//! use fieldhook_std::HookBus;
//!
//! let bus = HookBus::new();
//! bus.add_filter("shop.price", |v: i32, _: &()| Ok(v + 1), 5)
//!     .add_filter("shop.price", |v: i32, _: &()| Ok(v * 2), 10);
//!
//! assert_eq!(bus.apply_filter("shop.price", 3).unwrap(), 8);
//! assert_eq!(bus.apply_filter("shop.unknown", 42).unwrap(), 42);
//! ```

use crate::registry::{Callback, DispatchCounts, HandlerEntry, HookTable};
use fieldhook_core::{ActionHook, BoxError, FilterHook, HookError, HookKind, HookName, Message};
use std::{
    any::type_name,
    fmt,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

/// Type-erased storage for an action handler taking `&A`.
struct ActionSlot<A: Message>(Box<dyn ActionHook<A>>);

/// Type-erased storage for a filter handler over `V` with arguments `A`.
struct FilterSlot<V: Message, A: Message>(Box<dyn FilterHook<V, A>>);

/// A namespaced, priority-ordered registry of actions and filters.
#[derive(Default)]
pub struct HookBus {
    table: RwLock<HookTable>,
    dispatched: DispatchCounts,
}

impl HookBus {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty bus ready to be shared.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    fn read(&self) -> RwLockReadGuard<'_, HookTable> {
        self.table.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HookTable> {
        self.table.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------

    /// Register an action handler. Lower priorities run first.
    ///
    /// An invalid hook name is ignored.
    pub fn add_action<A, F>(&self, name: &str, callback: F, priority: i32) -> &Self
    where
        A: Message,
        F: Fn(&A) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.add_action_hook::<A, F>(name, callback, priority)
    }

    /// Register a struct implementing [`ActionHook`].
    pub fn add_action_hook<A, H>(&self, name: &str, hook: H, priority: i32) -> &Self
    where
        A: Message,
        H: ActionHook<A>,
    {
        let slot: Callback = Arc::new(ActionSlot::<A>(Box::new(hook)));
        self.register(HookKind::Action, name, slot, priority, type_name::<A>())
    }

    /// Register a filter handler. Lower priorities run first.
    ///
    /// An invalid hook name is ignored.
    pub fn add_filter<V, A, F>(&self, name: &str, callback: F, priority: i32) -> &Self
    where
        V: Message,
        A: Message,
        F: Fn(V, &A) -> Result<V, BoxError> + Send + Sync + 'static,
    {
        self.add_filter_hook::<V, A, F>(name, callback, priority)
    }

    /// Register a struct implementing [`FilterHook`].
    pub fn add_filter_hook<V, A, H>(&self, name: &str, hook: H, priority: i32) -> &Self
    where
        V: Message,
        A: Message,
        H: FilterHook<V, A>,
    {
        let slot: Callback = Arc::new(FilterSlot::<V, A>(Box::new(hook)));
        self.register(HookKind::Filter, name, slot, priority, type_name::<(V, A)>())
    }

    fn register(
        &self,
        kind: HookKind,
        name: &str,
        callback: Callback,
        priority: i32,
        payload: &'static str,
    ) -> &Self {
        match HookName::parse(name) {
            Ok(hook) => {
                tracing::debug!(%kind, %hook, priority, payload, "registered handler");
                self.write().insert(
                    kind,
                    hook,
                    HandlerEntry {
                        callback,
                        priority,
                        payload,
                    },
                );
            }
            Err(err) => tracing::debug!(%kind, %err, "ignoring registration"),
        }
        self
    }

    /// Remove every handler of an action. Unknown or invalid names are a no-op.
    pub fn remove_action(&self, name: &str) -> &Self {
        self.remove(HookKind::Action, name)
    }

    /// Remove every handler of a filter. Unknown or invalid names are a no-op.
    pub fn remove_filter(&self, name: &str) -> &Self {
        self.remove(HookKind::Filter, name)
    }

    fn remove(&self, kind: HookKind, name: &str) -> &Self {
        if let Ok(hook) = HookName::parse(name) {
            let dropped = self.write().clear(kind, &hook);
            tracing::debug!(%kind, %hook, dropped, "removed handlers");
        }
        self
    }

    // ------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------

    /// Run every handler of an action in priority order.
    ///
    /// The first handler error aborts the dispatch and is returned. A name
    /// without handlers (or an invalid name) is a successful no-op.
    pub fn do_action<A: Message>(&self, name: &str, args: &A) -> Result<&Self, HookError> {
        let Ok(hook) = HookName::parse(name) else {
            tracing::debug!(name, "ignoring dispatch of invalid action name");
            return Ok(self);
        };
        self.dispatched.record(&hook);
        let handlers = self.read().snapshot(HookKind::Action, &hook);
        if handlers.is_empty() {
            return Ok(self);
        }

        let _span = tracing::debug_span!("do_action", %hook, handlers = handlers.len()).entered();
        for entry in &handlers {
            let Some(slot) = entry.callback.downcast_ref::<ActionSlot<A>>() else {
                tracing::warn!(
                    %hook,
                    registered = entry.payload,
                    dispatched = type_name::<A>(),
                    "skipping action handler with mismatched payload"
                );
                continue;
            };
            tracing::trace!(priority = entry.priority, "calling action handler");
            slot.0
                .on_action(args)
                .map_err(|source| HookError::handler(HookKind::Action, hook.as_str(), source))?;
        }
        Ok(self)
    }

    /// Thread `value` through every handler of a filter in priority order and
    /// return the result. Without handlers, `value` comes back unchanged.
    pub fn apply_filters<V, A>(&self, name: &str, value: V, args: &A) -> Result<V, HookError>
    where
        V: Message,
        A: Message,
    {
        let Ok(hook) = HookName::parse(name) else {
            tracing::debug!(name, "ignoring invalid filter name");
            return Ok(value);
        };
        let handlers = self.read().snapshot(HookKind::Filter, &hook);
        if handlers.is_empty() {
            return Ok(value);
        }

        let _span =
            tracing::debug_span!("apply_filters", %hook, handlers = handlers.len()).entered();
        let mut value = value;
        for entry in &handlers {
            let Some(slot) = entry.callback.downcast_ref::<FilterSlot<V, A>>() else {
                tracing::warn!(
                    %hook,
                    registered = entry.payload,
                    dispatched = type_name::<(V, A)>(),
                    "skipping filter handler with mismatched payload"
                );
                continue;
            };
            tracing::trace!(priority = entry.priority, "calling filter handler");
            value = slot
                .0
                .on_filter(value, args)
                .map_err(|source| HookError::handler(HookKind::Filter, hook.as_str(), source))?;
        }
        Ok(value)
    }

    /// [`apply_filters`](Self::apply_filters) without extra arguments.
    pub fn apply_filter<V: Message>(&self, name: &str, value: V) -> Result<V, HookError> {
        self.apply_filters(name, value, &())
    }

    // ------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------

    /// Number of handlers currently registered for a hook.
    pub fn handler_count(&self, kind: HookKind, name: &str) -> usize {
        HookName::parse(name).map_or(0, |hook| self.read().len(kind, &hook))
    }

    /// Whether an action has at least one handler.
    pub fn has_action(&self, name: &str) -> bool {
        self.handler_count(HookKind::Action, name) > 0
    }

    /// Whether a filter has at least one handler.
    pub fn has_filter(&self, name: &str) -> bool {
        self.handler_count(HookKind::Filter, name) > 0
    }

    /// How many times an action has been dispatched, with or without
    /// handlers.
    pub fn did_action(&self, name: &str) -> usize {
        HookName::parse(name).map_or(0, |hook| self.dispatched.get(&hook))
    }
}

impl fmt::Debug for HookBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.read();
        f.debug_struct("HookBus")
            .field("actions", &table.hook_count(HookKind::Action))
            .field("filters", &table.hook_count(HookKind::Filter))
            .finish()
    }
}
