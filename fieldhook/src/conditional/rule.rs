//! Conditional rule items.

use crate::form::FieldKey;
use serde::{Deserialize, Deserializer, Serialize};

/// How the conditions of a rule item combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllOrAny {
    /// Every condition must match.
    All,
    /// At least one condition must match.
    Any,
}

/// Comparison between a toggle field and a rule value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// The value is selected / present.
    #[serde(rename = "==")]
    Equal,
    /// The value is not selected / absent.
    #[serde(rename = "!=")]
    NotEqual,
}

impl Operator {
    /// Turn a presence test into a match.
    pub fn test(self, present: bool) -> bool {
        match self {
            Operator::Equal => present,
            Operator::NotEqual => !present,
        }
    }
}

/// One condition: `field operator value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// The toggle field whose value is tested.
    pub field: FieldKey,
    /// How the value is compared.
    pub operator: Operator,
    /// The option the toggle is compared against.
    #[serde(default, deserialize_with = "scalar_string")]
    pub value: String,
}

impl Rule {
    /// Build a condition.
    pub fn new(field: impl Into<FieldKey>, operator: Operator, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }
}

/// The conditions governing one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleItem {
    /// The governed field.
    pub field: FieldKey,
    /// How [`rules`](Self::rules) combine.
    #[serde(rename = "allorany", alias = "all_or_any")]
    pub all_or_any: AllOrAny,
    /// The conditions.
    pub rules: Vec<Rule>,
}

impl RuleItem {
    /// Build a rule item.
    pub fn new(field: impl Into<FieldKey>, all_or_any: AllOrAny, rules: Vec<Rule>) -> Self {
        Self {
            field: field.into(),
            all_or_any,
            rules,
        }
    }
}

/// Rule values arrive as JSON strings, numbers or booleans; all compare as
/// strings. `true` is the checked toggle option `"1"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Text(text)) => text,
        Some(Scalar::Number(n)) => n.to_string(),
        Some(Scalar::Bool(true)) => "1".to_owned(),
        Some(Scalar::Bool(false)) | None => String::new(),
    })
}
