//! The form: every field instance on a page and the scopes they live in.
//!
//! Field instances are indexed by [`FieldKey`] as they are added, so looking
//! up the instances of a key never walks the whole form.
//!
//! # Example
//!
//! ```rust
//! use fieldhook::form::{FieldKind, FieldValue, Form, ScopeId};
//!
//! let mut form = Form::new();
//! let toggle = form.add_field(ScopeId::ROOT, "field_toggle", FieldKind::TrueFalse).unwrap();
//! let rows = form.add_scope(ScopeId::ROOT).unwrap();
//! form.add_field(rows, "field_note", FieldKind::Text).unwrap();
//!
//! form.set_value(toggle, FieldValue::Toggle(true)).unwrap();
//! assert_eq!(form.instances(&"field_note".into()).count(), 1);
//! ```

mod field;
mod scope;

pub use field::{FieldId, FieldKey, FieldKind, FieldState, FieldValue};
pub use scope::{Scope, ScopeId};

use crate::error::FormError;
use std::collections::HashMap;

/// All field instances of a page.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<FieldState>,
    scopes: Vec<Scope>,
    by_key: HashMap<FieldKey, Vec<FieldId>>,
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl Form {
    /// An empty form holding only the root scope.
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            scopes: vec![Scope {
                parent: None,
                template: false,
            }],
            by_key: HashMap::new(),
        }
    }

    // ------------------------------------------------------------------
    // Building
    // ------------------------------------------------------------------

    /// Open a new row scope under `parent`.
    pub fn add_scope(&mut self, parent: ScopeId) -> Result<ScopeId, FormError> {
        self.push_scope(parent, false)
    }

    /// Open a template scope under `parent`. Fields inside it are excluded
    /// from client logic until the row is cloned with
    /// [`clone_template`](Self::clone_template).
    pub fn add_template_scope(&mut self, parent: ScopeId) -> Result<ScopeId, FormError> {
        self.push_scope(parent, true)
    }

    fn push_scope(&mut self, parent: ScopeId, template: bool) -> Result<ScopeId, FormError> {
        self.scope(parent).ok_or(FormError::UnknownScope(parent))?;
        let id = ScopeId(self.scopes.len());
        self.scopes.push(Scope {
            parent: Some(parent),
            template,
        });
        Ok(id)
    }

    /// Add a field instance to `scope`, holding the empty value of its kind.
    pub fn add_field(
        &mut self,
        scope: ScopeId,
        key: impl Into<FieldKey>,
        kind: FieldKind,
    ) -> Result<FieldId, FormError> {
        self.scope(scope).ok_or(FormError::UnknownScope(scope))?;
        let id = FieldId(self.fields.len());
        let key = key.into();
        self.by_key.entry(key.clone()).or_default().push(id);
        self.fields.push(FieldState {
            id,
            key,
            value: kind.empty_value(),
            kind,
            scope,
            visible: true,
            disabled: false,
        });
        Ok(id)
    }

    /// Copy a template row (its fields and nested scopes) into a new live
    /// row next to it. Returns the new row.
    pub fn clone_template(&mut self, template: ScopeId) -> Result<ScopeId, FormError> {
        let scope = self.scope(template).ok_or(FormError::UnknownScope(template))?;
        if !scope.is_template() {
            return Err(FormError::NotATemplate(template));
        }
        let parent = scope.parent().ok_or(FormError::NotATemplate(template))?;
        let row = self.add_scope(parent)?;
        self.copy_contents(template, row)?;
        Ok(row)
    }

    fn copy_contents(&mut self, from: ScopeId, to: ScopeId) -> Result<(), FormError> {
        let fields: Vec<(FieldKey, FieldKind)> = self
            .fields
            .iter()
            .filter(|f| f.scope == from)
            .map(|f| (f.key.clone(), f.kind.clone()))
            .collect();
        for (key, kind) in fields {
            self.add_field(to, key, kind)?;
        }

        let children: Vec<ScopeId> = self.children(from).collect();
        for child in children {
            let copy = self.add_scope(to)?;
            self.copy_contents(child, copy)?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Replace the value of a field instance.
    pub fn set_value(&mut self, field: FieldId, value: FieldValue) -> Result<(), FormError> {
        let state = self
            .fields
            .get_mut(field.0)
            .ok_or(FormError::UnknownField(field))?;
        state.value = value;
        Ok(())
    }

    /// Show and enable, or hide and disable, a field instance.
    pub(crate) fn set_shown(&mut self, field: FieldId, shown: bool) -> Result<(), FormError> {
        let state = self
            .fields
            .get_mut(field.0)
            .ok_or(FormError::UnknownField(field))?;
        state.visible = shown;
        state.disabled = !shown;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Lookup
    // ------------------------------------------------------------------

    /// A field instance by handle.
    pub fn field(&self, id: FieldId) -> Option<&FieldState> {
        self.fields.get(id.0)
    }

    /// A scope by handle.
    pub fn scope(&self, id: ScopeId) -> Option<&Scope> {
        self.scopes.get(id.0)
    }

    /// Direct child scopes of `parent`.
    pub fn children(&self, parent: ScopeId) -> impl Iterator<Item = ScopeId> + '_ {
        self.scopes
            .iter()
            .enumerate()
            .filter(move |(_, s)| s.parent == Some(parent))
            .map(|(i, _)| ScopeId(i))
    }

    /// Every instance of a key, in insertion order.
    pub fn instances<'a>(&'a self, key: &FieldKey) -> impl Iterator<Item = &'a FieldState> + 'a {
        self.by_key
            .get(key)
            .into_iter()
            .flatten()
            .filter_map(|id| self.fields.get(id.0))
    }

    /// The instance of `key` that lives directly in `scope`, if any.
    pub fn find_in_scope(&self, key: &FieldKey, scope: ScopeId) -> Option<&FieldState> {
        self.instances(key).find(|f| f.scope == scope)
    }

    /// Whether `scope` is a template or sits inside one.
    pub fn in_template(&self, scope: ScopeId) -> bool {
        let mut current = Some(scope);
        while let Some(id) = current {
            match self.scope(id) {
                Some(s) if s.is_template() => return true,
                Some(s) => current = s.parent(),
                None => return false,
            }
        }
        false
    }
}
