//! Error types for fieldhook.
//!
//! - [`FieldHookError`] - Top-level error type
//! - [`FormError`] - Bad field or scope handles
//! - [`ConfigError`] - Rule sets that fail to load

use crate::form::{FieldId, FieldKey, ScopeId};
use fieldhook_core::HookError;
use thiserror::Error;

/// Top-level error type for fieldhook operations.
#[derive(Error, Debug)]
pub enum FieldHookError {
    /// A hook handler failed.
    #[error("hook error: {0}")]
    Hook(#[from] HookError),

    /// A form operation referenced something that does not exist.
    #[error("form error: {0}")]
    Form(#[from] FormError),

    /// Rule configuration could not be loaded.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised by [`Form`](crate::form::Form) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// No field instance has this handle.
    #[error("unknown field {0}")]
    UnknownField(FieldId),

    /// No scope has this handle.
    #[error("unknown scope {0}")]
    UnknownScope(ScopeId),

    /// The scope exists but is not a template row.
    #[error("{0} is not a template row")]
    NotATemplate(ScopeId),
}

/// Errors raised while loading a rule set.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The input is not valid rule JSON.
    #[error("invalid rule JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A rule item has no conditions.
    #[error("rule item for `{field}` has no conditions")]
    EmptyRules {
        /// The governed field of the offending item.
        field: FieldKey,
    },
}
