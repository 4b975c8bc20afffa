//! # fieldhook - Hook Bus and Conditional Field Logic
//!
//! `fieldhook` is the client-side core of a form editor: a namespaced,
//! priority-ordered hook bus that widgets use to talk to each other, and a
//! conditional rule engine that shows or hides fields based on the values of
//! other fields.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldhook::prelude::*;
//!
//! let bus = HookBus::shared();
//! bus.add_action("core.ready", |_: &()| {
//!     // widget setup
//!     Ok(())
//! }, DEFAULT_PRIORITY);
//! bus.add_filter("core.title", |title: String, _: &()| Ok(title.to_uppercase()), 5);
//!
//! bus.do_action("core.ready", &()).unwrap();
//! assert_eq!(bus.apply_filter("core.title", "draft".to_string()).unwrap(), "DRAFT");
//! ```
//!
//! See [`page::Page`] for wiring a form and its rules onto a bus.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use fieldhook_core::{
    // Handler traits
    ActionHook,
    // Errors
    BoxError,
    // Names
    DEFAULT_PRIORITY,
    FilterHook,
    HookError,
    HookKind,
    HookName,
    HookNameError,
    Message,
};

pub use fieldhook_std::{HookBus, hooks, testing};

pub mod conditional;
pub mod config;
mod error;
pub mod events;
pub mod form;
pub mod page;

pub use error::{ConfigError, FieldHookError, FormError};

/// Prelude module - common imports for fieldhook.
///
/// # Usage
///
/// ```rust
/// use fieldhook::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        ActionHook,
        BoxError,
        DEFAULT_PRIORITY,
        FieldHookError,
        FilterHook,
        HookBus,
        HookError,
        HookKind,
        conditional::{AllOrAny, ConditionalEngine, Operator, Rule, RuleItem},
        config::RuleSet,
        form::{FieldId, FieldKey, FieldKind, FieldValue, Form, ScopeId},
        page::Page,
    };
}
