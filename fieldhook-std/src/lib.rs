//! # fieldhook-std
//!
//! Standard implementations for the fieldhook hook bus.
//!
//! This crate provides:
//! - **The bus**: [`HookBus`], a priority-ordered registry of actions and filters
//! - **Standard hooks**: [`hooks::LoggingHook`]
//! - **Testing utilities**: recorders and counters in [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use fieldhook_core;

mod bus;
pub mod hooks;
mod registry;
pub mod testing;

pub use bus::HookBus;
