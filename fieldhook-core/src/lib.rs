//! # fieldhook-core
//!
//! Core types for the fieldhook hook bus.
//!
//! This crate has minimal dependencies and is meant to be imported by widgets
//! and extensions that register handlers but don't need the bus itself.
//!
//! # Hooks
//!
//! A hook is identified by its [`HookKind`] and its [`HookName`]:
//!
//! - **Actions** are fire-and-forget broadcasts. Every [`ActionHook`]
//!   registered under the name observes the arguments; nothing flows back.
//! - **Filters** are value-transforming broadcasts. Every [`FilterHook`]
//!   receives the running value and returns the value the next one sees.
//!
//! Handlers run in ascending priority ([`DEFAULT_PRIORITY`] is `10`), ties in
//! registration order.
//!
//! # Error Types
//!
//! - [`HookNameError`] - Malformed `namespace.identifier` names
//! - [`HookError`] - A handler failed during dispatch

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod hook;
mod message;
mod name;

// Re-exports
pub use error::{BoxError, HookError, HookNameError};
pub use hook::{ActionHook, FilterHook};
pub use message::Message;
pub use name::{DEFAULT_PRIORITY, HookKind, HookName, SEPARATOR};
