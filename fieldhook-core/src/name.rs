//! Hook names, kinds and priorities.

use crate::error::HookNameError;
use std::{fmt, str::FromStr};

/// Separator between the namespace and the identifier of a hook name.
pub const SEPARATOR: char = '.';

/// Priority used when a caller does not pick one.
pub const DEFAULT_PRIORITY: i32 = 10;

/// The kind of a hook. Part of a hook's identity: an action and a filter
/// sharing the same textual name are unrelated hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    /// Fire-and-forget broadcast.
    Action,
    /// Value-transforming broadcast.
    Filter,
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookKind::Action => f.write_str("action"),
            HookKind::Filter => f.write_str("filter"),
        }
    }
}

/// A validated `namespace.identifier` hook name.
///
/// # Example
///
/// ```rust
/// use fieldhook_core::HookName;
///
/// let name: HookName = "core.ready".parse().unwrap();
/// assert_eq!(name.namespace(), "core");
/// assert_eq!(name.identifier(), "ready");
/// assert!("ready".parse::<HookName>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HookName {
    full: String,
    split: usize,
}

impl HookName {
    /// Parse and validate a hook name.
    pub fn parse(name: &str) -> Result<Self, HookNameError> {
        if name.is_empty() {
            return Err(HookNameError::Empty);
        }
        let mut parts = name.split(SEPARATOR);
        let namespace = parts.next().unwrap_or_default();
        let Some(identifier) = parts.next() else {
            return Err(HookNameError::MissingSeparator(name.to_owned()));
        };
        if parts.next().is_some() {
            return Err(HookNameError::TooManyParts(name.to_owned()));
        }
        if namespace.is_empty() {
            return Err(HookNameError::MissingNamespace(name.to_owned()));
        }
        if identifier.is_empty() {
            return Err(HookNameError::MissingIdentifier(name.to_owned()));
        }
        Ok(Self {
            full: name.to_owned(),
            split: namespace.len(),
        })
    }

    /// The namespace part (before the separator).
    pub fn namespace(&self) -> &str {
        &self.full[..self.split]
    }

    /// The identifier part (after the separator).
    pub fn identifier(&self) -> &str {
        &self.full[self.split + SEPARATOR.len_utf8()..]
    }

    /// The full `namespace.identifier` string.
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl FromStr for HookName {
    type Err = HookNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for HookName {
    type Error = HookNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl fmt::Display for HookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}

impl AsRef<str> for HookName {
    fn as_ref(&self) -> &str {
        &self.full
    }
}
