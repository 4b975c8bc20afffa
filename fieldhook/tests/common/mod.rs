#![allow(dead_code)]

use fieldhook::{
    conditional::{AllOrAny, Operator, Rule, RuleItem},
    config::RuleSet,
    form::{FieldId, FieldKind, Form, ScopeId},
};

// ============================================================================
// Forms
// ============================================================================

/// Two toggles `field_a` / `field_b` and a governed `field_target`, all at the
/// root.
pub struct FlatForm {
    pub form: Form,
    pub a: FieldId,
    pub b: FieldId,
    pub target: FieldId,
}

pub fn flat_form() -> FlatForm {
    let mut form = Form::new();
    let a = form
        .add_field(ScopeId::ROOT, "field_a", FieldKind::Select)
        .unwrap();
    let b = form
        .add_field(ScopeId::ROOT, "field_b", FieldKind::Radio)
        .unwrap();
    let target = form
        .add_field(ScopeId::ROOT, "field_target", FieldKind::Text)
        .unwrap();
    FlatForm {
        form,
        a,
        b,
        target,
    }
}

/// A repeater with two live rows and a template row. Each row holds a
/// `field_kind` radio and a `field_detail` text governed by it.
pub struct RepeaterForm {
    pub form: Form,
    pub rows: [ScopeId; 2],
    pub template: ScopeId,
    pub kinds: [FieldId; 2],
    pub details: [FieldId; 2],
    pub template_detail: FieldId,
}

pub fn repeater_form() -> RepeaterForm {
    let mut form = Form::new();
    let mut rows = [ScopeId::ROOT; 2];
    let mut kinds = Vec::new();
    let mut details = Vec::new();
    for row in rows.iter_mut() {
        *row = form.add_scope(ScopeId::ROOT).unwrap();
        kinds.push(form.add_field(*row, "field_kind", FieldKind::Radio).unwrap());
        details.push(form.add_field(*row, "field_detail", FieldKind::Text).unwrap());
    }
    let template = form.add_template_scope(ScopeId::ROOT).unwrap();
    form.add_field(template, "field_kind", FieldKind::Radio)
        .unwrap();
    let template_detail = form
        .add_field(template, "field_detail", FieldKind::Text)
        .unwrap();

    RepeaterForm {
        form,
        rows,
        template,
        kinds: [kinds[0], kinds[1]],
        details: [details[0], details[1]],
        template_detail,
    }
}

// ============================================================================
// Rules
// ============================================================================

/// `field_target` shows when `field_a == "x"` and/or `field_b == "y"`.
pub fn two_condition_rules(all_or_any: AllOrAny) -> RuleSet {
    RuleSet::new([RuleItem::new(
        "field_target",
        all_or_any,
        vec![
            Rule::new("field_a", Operator::Equal, "x"),
            Rule::new("field_b", Operator::Equal, "y"),
        ],
    )])
    .unwrap()
}

/// `field_detail` shows when its row's `field_kind == "other"`.
pub fn detail_rules() -> RuleSet {
    RuleSet::new([RuleItem::new(
        "field_detail",
        AllOrAny::All,
        vec![Rule::new("field_kind", Operator::Equal, "other")],
    )])
    .unwrap()
}
