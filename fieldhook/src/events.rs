//! Well-known hooks and their payloads.
//!
//! | Hook | Kind | Payload |
//! |---|---|---|
//! | [`READY`] | action | `()` |
//! | [`APPEND`] | action | [`Appended`] |
//! | [`LOAD`] | action | `()` |
//! | [`CHANGE`] | action | [`FieldChanged`] |
//! | [`FIELD_READY_FOR_JS`] | filter | `bool`, args [`FieldReady`] |
//! | [`CONDITIONAL_SHOW`] / [`CONDITIONAL_HIDE`] | action | [`ConditionalToggle`] |

use crate::{
    conditional::RuleItem,
    form::{FieldId, FieldKey, FieldKind, ScopeId},
};
use std::sync::Arc;

/// The page is set up; widgets run their setup logic.
pub const READY: &str = "core.ready";
/// New content (a row) was inserted; widgets initialize it.
pub const APPEND: &str = "core.append";
/// The page finished loading; late-binding setup runs.
pub const LOAD: &str = "core.load";
/// A field's value changed.
pub const CHANGE: &str = "core.change";
/// Decides whether a field participates in client logic.
pub const FIELD_READY_FOR_JS: &str = "core.fieldReadyForJs";
/// A governed field was shown by its conditional rules.
pub const CONDITIONAL_SHOW: &str = "core.conditionalShow";
/// A governed field was hidden by its conditional rules.
pub const CONDITIONAL_HIDE: &str = "core.conditionalHide";

/// Payload of [`APPEND`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appended {
    /// The inserted scope.
    pub scope: ScopeId,
}

/// Payload of [`CHANGE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldChanged {
    /// The field whose value changed.
    pub field: FieldId,
}

/// Arguments of [`FIELD_READY_FOR_JS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldReady {
    /// The candidate field instance.
    pub field: FieldId,
    /// Its key.
    pub key: FieldKey,
    /// Its kind.
    pub kind: FieldKind,
    /// Whether it sits in a template row.
    pub in_template: bool,
}

/// Payload of [`CONDITIONAL_SHOW`] and [`CONDITIONAL_HIDE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalToggle {
    /// The governed field instance.
    pub target: FieldId,
    /// Its key.
    pub key: FieldKey,
    /// The rule item that decided.
    pub rule: Arc<RuleItem>,
    /// A toggle was resolved outside the target's row: the decision applies
    /// to the whole column of the group, not just this row.
    pub hide_all: bool,
    /// The decision.
    pub shown: bool,
}

impl ConditionalToggle {
    /// The hook this toggle is announced on.
    pub fn hook(&self) -> &'static str {
        if self.shown {
            CONDITIONAL_SHOW
        } else {
            CONDITIONAL_HIDE
        }
    }
}
