//! The conditional rule engine.
//!
//! Every run re-evaluates every rule item against every instance of its
//! governed field; nothing is diffed or cached between runs. Forms hold tens
//! of governed fields, not thousands.

use crate::{
    config::RuleSet,
    conditional::{AllOrAny, RuleItem},
    error::FieldHookError,
    events::{self, Appended, ConditionalToggle, FieldChanged, FieldReady},
    form::{FieldId, FieldKey, FieldState, Form, Scope, ScopeId},
};
use fieldhook_core::{BoxError, Message};
use fieldhook_std::HookBus;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};

/// A toggle instance found for a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    /// The toggle instance.
    pub field: FieldId,
    /// Found in an ancestor scope rather than the target's own row.
    pub inherited: bool,
}

/// Find the instance of `key` a target in scope `from` should test: a
/// sibling in the same scope first, then the nearest ancestor scope holding
/// one.
pub fn resolve_toggle(form: &Form, key: &FieldKey, from: ScopeId) -> Option<Resolved> {
    let mut scope = Some(from);
    let mut inherited = false;
    while let Some(id) = scope {
        if let Some(found) = form.find_in_scope(key, id) {
            return Some(Resolved {
                field: found.id(),
                inherited,
            });
        }
        scope = form.scope(id).and_then(Scope::parent);
        inherited = true;
    }
    None
}

/// Outcome of one rule item for one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Decision {
    shown: bool,
    hide_all: bool,
}

fn decide(form: &Form, item: &RuleItem, target: &FieldState) -> Decision {
    let mut shown = item.all_or_any == AllOrAny::All;
    let mut hide_all = false;

    for rule in &item.rules {
        let resolved = resolve_toggle(form, &rule.field, target.scope());
        hide_all |= resolved.is_some_and(|r| r.inherited);
        // An unresolved toggle matches nothing, whatever the operator.
        let matched = resolved
            .and_then(|r| form.field(r.field))
            .is_some_and(|toggle| rule.operator.test(toggle.selects(&rule.value)));
        tracing::trace!(field = %target.id(), toggle = %rule.field, matched, "evaluated condition");

        match item.all_or_any {
            AllOrAny::All if !matched => {
                shown = false;
                break;
            }
            AllOrAny::Any if matched => {
                shown = true;
                break;
            }
            _ => {}
        }
    }

    Decision { shown, hide_all }
}

/// Evaluates a page's [`RuleSet`] against its [`Form`] and announces the
/// results on the bus.
pub struct ConditionalEngine {
    rules: RuleSet,
    form: Arc<RwLock<Form>>,
    bus: Weak<HookBus>,
}

impl ConditionalEngine {
    /// Create an engine. It does nothing until [`attach`](Self::attach)ed or
    /// [`refresh`](Self::refresh)ed.
    pub fn new(rules: RuleSet, form: Arc<RwLock<Form>>, bus: &Arc<HookBus>) -> Arc<Self> {
        Arc::new(Self {
            rules,
            form,
            bus: Arc::downgrade(bus),
        })
    }

    /// Subscribe to [`events::READY`], [`events::APPEND`] and
    /// [`events::CHANGE`]; each re-runs the full evaluation.
    pub fn attach(self: &Arc<Self>, priority: i32) {
        let Some(bus) = self.bus.upgrade() else {
            return;
        };
        self.subscribe::<()>(&bus, events::READY, priority);
        self.subscribe::<Appended>(&bus, events::APPEND, priority);
        self.subscribe::<FieldChanged>(&bus, events::CHANGE, priority);
    }

    fn subscribe<A: Message>(self: &Arc<Self>, bus: &HookBus, hook: &str, priority: i32) {
        let engine = Arc::clone(self);
        bus.add_action(
            hook,
            move |_: &A| {
                engine
                    .refresh()
                    .map(|_| ())
                    .map_err(BoxError::from)
            },
            priority,
        );
    }

    /// The rules this engine evaluates.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Evaluate, apply, then announce every decision on
    /// [`events::CONDITIONAL_SHOW`] or [`events::CONDITIONAL_HIDE`].
    pub fn refresh(&self) -> Result<Vec<ConditionalToggle>, FieldHookError> {
        let Some(bus) = self.bus.upgrade() else {
            tracing::debug!("bus dropped, skipping conditional refresh");
            return Ok(Vec::new());
        };
        let toggles = self.evaluate(&bus)?;
        for toggle in &toggles {
            bus.do_action(toggle.hook(), toggle)?;
        }
        Ok(toggles)
    }

    /// Evaluate every rule item and apply the decisions to the form without
    /// announcing them.
    ///
    /// Targets are filtered through [`events::FIELD_READY_FOR_JS`] first;
    /// by default template rows are left out. No form lock is held while
    /// filter handlers run.
    pub fn evaluate(&self, bus: &HookBus) -> Result<Vec<ConditionalToggle>, FieldHookError> {
        let mut candidates = Vec::new();
        {
            let form = self.read_form();
            for item in self.rules.iter() {
                for field in form.instances(&item.field) {
                    let ready = FieldReady {
                        field: field.id(),
                        key: field.key().clone(),
                        kind: field.kind().clone(),
                        in_template: form.in_template(field.scope()),
                    };
                    candidates.push((Arc::clone(item), ready));
                }
            }
        }

        let mut targets = Vec::with_capacity(candidates.len());
        for (item, ready) in candidates {
            let default = !ready.in_template;
            if bus.apply_filters(events::FIELD_READY_FOR_JS, default, &ready)? {
                targets.push((item, ready.field));
            }
        }

        let mut form = self.write_form();
        let mut toggles = Vec::with_capacity(targets.len());
        for (rule, target) in targets {
            let Some(state) = form.field(target) else {
                continue;
            };
            let decision = decide(&form, &rule, state);
            let key = state.key().clone();
            form.set_shown(target, decision.shown)?;
            toggles.push(ConditionalToggle {
                target,
                key,
                rule,
                hide_all: decision.hide_all,
                shown: decision.shown,
            });
        }
        drop(form);

        tracing::debug!(
            evaluated = toggles.len(),
            hidden = toggles.iter().filter(|t| !t.shown).count(),
            "conditional rules evaluated"
        );
        Ok(toggles)
    }

    fn read_form(&self) -> RwLockReadGuard<'_, Form> {
        self.form.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_form(&self) -> RwLockWriteGuard<'_, Form> {
        self.form.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        conditional::{Operator, Rule},
        form::{FieldKind, FieldValue},
    };

    fn item(all_or_any: AllOrAny, rules: Vec<Rule>) -> RuleItem {
        RuleItem::new("field_target", all_or_any, rules)
    }

    #[test]
    fn test_resolve_prefers_sibling() {
        let mut form = Form::new();
        let outer = form.add_field(ScopeId::ROOT, "field_t", FieldKind::Radio).unwrap();
        let row = form.add_scope(ScopeId::ROOT).unwrap();
        let inner = form.add_field(row, "field_t", FieldKind::Radio).unwrap();
        let key = FieldKey::from("field_t");

        assert_eq!(
            resolve_toggle(&form, &key, row),
            Some(Resolved {
                field: inner,
                inherited: false
            })
        );
        let other_row = form.add_scope(ScopeId::ROOT).unwrap();
        assert_eq!(
            resolve_toggle(&form, &key, other_row),
            Some(Resolved {
                field: outer,
                inherited: true
            })
        );
        assert_eq!(resolve_toggle(&form, &"missing".into(), row), None);
    }

    #[test]
    fn test_decide_all_short_circuits() {
        let mut form = Form::new();
        let a = form.add_field(ScopeId::ROOT, "a", FieldKind::Select).unwrap();
        let target_id = form
            .add_field(ScopeId::ROOT, "field_target", FieldKind::Text)
            .unwrap();
        form.set_value(a, FieldValue::choice("x")).unwrap();

        let rule = item(
            AllOrAny::All,
            vec![
                Rule::new("a", Operator::Equal, "x"),
                Rule::new("missing", Operator::NotEqual, "y"),
            ],
        );
        let target = form.field(target_id).unwrap();
        assert!(!decide(&form, &rule, target).shown);
    }

    #[test]
    fn test_decide_any_with_no_match_hides() {
        let mut form = Form::new();
        form.add_field(ScopeId::ROOT, "a", FieldKind::Checkbox).unwrap();
        let target_id = form
            .add_field(ScopeId::ROOT, "field_target", FieldKind::Text)
            .unwrap();

        let rule = item(AllOrAny::Any, vec![Rule::new("a", Operator::Equal, "x")]);
        let target = form.field(target_id).unwrap();
        assert_eq!(
            decide(&form, &rule, target),
            Decision {
                shown: false,
                hide_all: false
            }
        );
    }

    #[test]
    fn test_decide_marks_inherited_toggle() {
        let mut form = Form::new();
        let toggle = form
            .add_field(ScopeId::ROOT, "flag", FieldKind::TrueFalse)
            .unwrap();
        let row = form.add_scope(ScopeId::ROOT).unwrap();
        let target_id = form.add_field(row, "field_target", FieldKind::Text).unwrap();
        form.set_value(toggle, FieldValue::Toggle(true)).unwrap();

        let rule = item(AllOrAny::All, vec![Rule::new("flag", Operator::Equal, "1")]);
        let target = form.field(target_id).unwrap();
        assert_eq!(
            decide(&form, &rule, target),
            Decision {
                shown: true,
                hide_all: true
            }
        );
    }
}
