//! Page bootstrap.
//!
//! A [`Page`] owns the three page-lifetime objects: the shared bus, the form
//! and the conditional engine. Its methods are the event sources of the page:
//! bootstrap ([`ready`](Page::ready), [`load`](Page::load)), dynamic content
//! ([`add_row`](Page::add_row)) and user input ([`set_value`](Page::set_value)).
//!
//! # Example
//!
//! ```rust
//! use fieldhook::{
//!     config::RuleSet,
//!     form::{FieldKind, FieldValue, Form, ScopeId},
//!     page::Page,
//! };
//!
//! let mut form = Form::new();
//! let color = form.add_field(ScopeId::ROOT, "field_color", FieldKind::Radio).unwrap();
//! let shade = form.add_field(ScopeId::ROOT, "field_shade", FieldKind::Text).unwrap();
//! let rules = RuleSet::from_json(
//!     r#"[{"field":"field_shade","allorany":"all",
//!          "rules":[{"field":"field_color","operator":"==","value":"red"}]}]"#,
//! )
//! .unwrap();
//!
//! let page = Page::new(form, rules);
//! page.ready().unwrap();
//! assert!(!page.form().field(shade).unwrap().is_visible());
//!
//! page.set_value(color, FieldValue::choice("red")).unwrap();
//! assert!(page.form().field(shade).unwrap().is_visible());
//! ```

use crate::{
    config::RuleSet,
    conditional::ConditionalEngine,
    error::FieldHookError,
    events::{self, Appended, FieldChanged},
    form::{FieldId, FieldValue, Form, ScopeId},
};
use fieldhook_core::DEFAULT_PRIORITY;
use fieldhook_std::HookBus;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

/// The bus, form and conditional engine of one page.
pub struct Page {
    bus: Arc<HookBus>,
    form: Arc<RwLock<Form>>,
    engine: Arc<ConditionalEngine>,
}

impl Page {
    /// Set up a page on a fresh bus.
    pub fn new(form: Form, rules: RuleSet) -> Self {
        Self::with_bus(HookBus::shared(), form, rules)
    }

    /// Set up a page on an existing bus, e.g. one third parties already
    /// registered handlers on.
    pub fn with_bus(bus: Arc<HookBus>, form: Form, rules: RuleSet) -> Self {
        let form = Arc::new(RwLock::new(form));
        let engine = ConditionalEngine::new(rules, Arc::clone(&form), &bus);
        engine.attach(DEFAULT_PRIORITY);
        Self { bus, form, engine }
    }

    /// The page's bus.
    pub fn bus(&self) -> &Arc<HookBus> {
        &self.bus
    }

    /// The page's conditional engine.
    pub fn engine(&self) -> &Arc<ConditionalEngine> {
        &self.engine
    }

    /// Read access to the form. Release the guard before dispatching.
    pub fn form(&self) -> RwLockReadGuard<'_, Form> {
        self.form.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fire [`events::READY`].
    pub fn ready(&self) -> Result<(), FieldHookError> {
        tracing::debug!("page ready");
        self.bus.do_action(events::READY, &())?;
        Ok(())
    }

    /// Fire [`events::LOAD`].
    pub fn load(&self) -> Result<(), FieldHookError> {
        tracing::debug!("page loaded");
        self.bus.do_action(events::LOAD, &())?;
        Ok(())
    }

    /// Clone a template row into a live row and fire [`events::APPEND`] for
    /// it. Returns the new row.
    pub fn add_row(&self, template: ScopeId) -> Result<ScopeId, FieldHookError> {
        let row = self
            .form
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clone_template(template)?;
        tracing::debug!(%template, %row, "row appended");
        self.bus.do_action(events::APPEND, &Appended { scope: row })?;
        Ok(row)
    }

    /// Store a new value and fire [`events::CHANGE`].
    pub fn set_value(&self, field: FieldId, value: FieldValue) -> Result<(), FieldHookError> {
        self.form
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .set_value(field, value)?;
        tracing::trace!(%field, "value changed");
        self.bus.do_action(events::CHANGE, &FieldChanged { field })?;
        Ok(())
    }
}
