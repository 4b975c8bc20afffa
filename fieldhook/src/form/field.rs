//! Field identities, kinds and values.

use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt};

/// The configured key of a field (`field_5a1b...`). Every repeated instance
/// of a field shares its key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldKey(String);

impl FieldKey {
    /// Wrap a key string.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for FieldKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Handle of one field instance inside a [`Form`](super::Form).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub(crate) usize);

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field#{}", self.0)
    }
}

/// The widget type of a field, as far as rule matching cares.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Multiple checkable options.
    Checkbox,
    /// One checkable option out of many.
    Radio,
    /// A single on/off toggle; "on" selects the option `"1"`.
    TrueFalse,
    /// A dropdown, possibly multi-select.
    Select,
    /// Free text.
    Text,
    /// Any other widget, matched on its value set.
    Other(String),
}

impl FieldKind {
    /// The value a freshly rendered widget of this kind holds.
    pub fn empty_value(&self) -> FieldValue {
        match self {
            FieldKind::TrueFalse => FieldValue::Toggle(false),
            FieldKind::Text | FieldKind::Other(_) => FieldValue::Text(String::new()),
            FieldKind::Checkbox | FieldKind::Radio | FieldKind::Select => {
                FieldValue::Choices(BTreeSet::new())
            }
        }
    }
}

/// The current value of a field instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Selected options of a checkbox, radio or select.
    Choices(BTreeSet<String>),
    /// State of a true/false toggle.
    Toggle(bool),
    /// Free text. The text itself, empty or not, is the single member of
    /// its value set.
    Text(String),
}

impl FieldValue {
    /// A single selected option.
    pub fn choice(option: impl Into<String>) -> Self {
        FieldValue::Choices(BTreeSet::from([option.into()]))
    }

    /// Several selected options.
    pub fn choices<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldValue::Choices(options.into_iter().map(Into::into).collect())
    }

    /// Free text.
    pub fn text(text: impl Into<String>) -> Self {
        FieldValue::Text(text.into())
    }

    /// Whether `option` is part of the current value set.
    pub fn contains(&self, option: &str) -> bool {
        match self {
            FieldValue::Choices(set) => set.contains(option),
            FieldValue::Toggle(on) => *on && option == "1",
            FieldValue::Text(text) => text == option,
        }
    }
}

/// Runtime state of one field instance.
#[derive(Debug, Clone)]
pub struct FieldState {
    pub(crate) id: FieldId,
    pub(crate) key: FieldKey,
    pub(crate) kind: FieldKind,
    pub(crate) scope: super::ScopeId,
    pub(crate) value: FieldValue,
    pub(crate) visible: bool,
    pub(crate) disabled: bool,
}

impl FieldState {
    /// The instance handle.
    pub fn id(&self) -> FieldId {
        self.id
    }

    /// The configured key.
    pub fn key(&self) -> &FieldKey {
        &self.key
    }

    /// The widget kind.
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// The repetition context the instance lives in.
    pub fn scope(&self) -> super::ScopeId {
        self.scope
    }

    /// The current value.
    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    /// Whether the field is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the field's controls are disabled. Disabled controls are not
    /// submitted with the form.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether `option` is currently selected (choice widgets) or present in
    /// the value set (everything else).
    pub fn selects(&self, option: &str) -> bool {
        self.value.contains(option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_selects_one() {
        assert!(FieldValue::Toggle(true).contains("1"));
        assert!(!FieldValue::Toggle(false).contains("1"));
        assert!(!FieldValue::Toggle(true).contains("0"));
    }

    #[test]
    fn test_choices_membership() {
        let value = FieldValue::choices(["red", "green"]);
        assert!(value.contains("red"));
        assert!(!value.contains("blue"));
    }

    #[test]
    fn test_text_matches_its_whole_value() {
        assert!(FieldValue::text("").contains(""));
        assert!(!FieldValue::text("").contains("hello"));
        assert!(FieldValue::text("hello").contains("hello"));
        assert!(!FieldValue::text("hello").contains(""));
    }

    #[test]
    fn test_empty_values_per_kind() {
        assert_eq!(FieldKind::TrueFalse.empty_value(), FieldValue::Toggle(false));
        assert_eq!(FieldKind::Text.empty_value(), FieldValue::text(""));
        assert_eq!(FieldKind::Radio.empty_value(), FieldValue::Choices(BTreeSet::new()));
    }
}
