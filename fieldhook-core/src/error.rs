//! Error types for fieldhook.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`HookNameError`] - A hook name could not be parsed
//! - [`HookError`] - A handler failed during dispatch

use crate::name::HookKind;
use thiserror::Error;

/// A boxed error type returned by handlers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors produced while parsing a `namespace.identifier` hook name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HookNameError {
    /// The name was empty.
    #[error("hook name is empty")]
    Empty,

    /// The name has no `.` separating namespace from identifier.
    #[error("hook name `{0}` has no namespace separator")]
    MissingSeparator(String),

    /// The part before the separator is empty.
    #[error("hook name `{0}` has an empty namespace")]
    MissingNamespace(String),

    /// The part after the separator is empty.
    #[error("hook name `{0}` has an empty identifier")]
    MissingIdentifier(String),

    /// The name has more than one separator.
    #[error("hook name `{0}` has more than two parts")]
    TooManyParts(String),
}

/// Errors raised while dispatching a hook.
#[derive(Error, Debug)]
pub enum HookError {
    /// A handler returned an error; the remaining handlers of that dispatch
    /// were not run.
    #[error("{kind} `{name}` handler failed: {source}")]
    Handler {
        /// Kind of the hook being dispatched.
        kind: HookKind,
        /// Name of the hook being dispatched.
        name: String,
        /// The error returned by the handler.
        #[source]
        source: BoxError,
    },
}

impl HookError {
    /// Build a handler failure for the given hook.
    pub fn handler(kind: HookKind, name: impl Into<String>, source: BoxError) -> Self {
        HookError::Handler {
            kind,
            name: name.into(),
            source,
        }
    }

    /// Name of the hook whose dispatch failed.
    pub fn hook_name(&self) -> &str {
        match self {
            HookError::Handler { name, .. } => name,
        }
    }
}
