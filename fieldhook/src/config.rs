//! Rule set configuration.
//!
//! Rule items are rendered by the server as JSON and loaded once per page:
//!
//! ```json
//! [
//!   { "field": "field_b", "allorany": "all",
//!     "rules": [{ "field": "field_a", "operator": "==", "value": "x" }] }
//! ]
//! ```

use crate::{conditional::RuleItem, error::ConfigError, form::FieldKey};
use std::{io::Read, sync::Arc};

/// The static, validated rule items of a page.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    items: Vec<Arc<RuleItem>>,
}

impl RuleSet {
    /// Validate and wrap rule items. Every item needs at least one condition.
    pub fn new(items: impl IntoIterator<Item = RuleItem>) -> Result<Self, ConfigError> {
        let items = items
            .into_iter()
            .map(|item| {
                if item.rules.is_empty() {
                    Err(ConfigError::EmptyRules { field: item.field })
                } else {
                    Ok(Arc::new(item))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(items = items.len(), "loaded conditional rules");
        Ok(Self { items })
    }

    /// Parse a JSON array of rule items.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let items: Vec<RuleItem> = serde_json::from_str(json)?;
        Self::new(items)
    }

    /// Parse a JSON array of rule items from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let items: Vec<RuleItem> = serde_json::from_reader(reader)?;
        Self::new(items)
    }

    /// The rule items, in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<RuleItem>> {
        self.items.iter()
    }

    /// Whether some rule item governs `field`.
    pub fn governs(&self, field: &FieldKey) -> bool {
        self.items.iter().any(|item| &item.field == field)
    }

    /// Number of rule items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no rule items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
