//! End-to-end page flow: bootstrap, user input, dynamic rows.

use fieldhook::{
    BoxError, FieldHookError, HookBus,
    conditional::AllOrAny,
    config::RuleSet,
    events::{self, Appended, ConditionalToggle, FieldChanged},
    form::FieldValue,
    page::Page,
    testing::{CountingAction, RecordingAction},
};

mod common;
use common::{detail_rules, flat_form, repeater_form, two_condition_rules};

#[test]
fn test_ready_computes_initial_state() {
    let fixture = flat_form();
    let target = fixture.target;
    let page = Page::new(fixture.form, two_condition_rules(AllOrAny::All));

    assert!(page.form().field(target).unwrap().is_visible());
    page.ready().unwrap();
    assert!(!page.form().field(target).unwrap().is_visible());
    assert_eq!(page.bus().did_action(events::READY), 1);
}

#[test]
fn test_set_value_reevaluates() {
    let fixture = flat_form();
    let (a, b, target) = (fixture.a, fixture.b, fixture.target);
    let page = Page::new(fixture.form, two_condition_rules(AllOrAny::All));
    let changes = RecordingAction::<FieldChanged>::new();
    page.bus()
        .add_action_hook::<FieldChanged, _>(events::CHANGE, changes.clone(), 20);
    page.ready().unwrap();

    page.set_value(a, FieldValue::choice("x")).unwrap();
    page.set_value(b, FieldValue::choice("y")).unwrap();
    assert!(page.form().field(target).unwrap().is_visible());

    page.set_value(b, FieldValue::choice("n")).unwrap();
    assert!(!page.form().field(target).unwrap().is_visible());
    assert_eq!(changes.count(), 3);
    assert_eq!(changes.events()[0], FieldChanged { field: a });
}

#[test]
fn test_add_row_fires_append_and_evaluates_new_row() {
    let fixture = repeater_form();
    let template = fixture.template;
    let page = Page::new(fixture.form, detail_rules());
    let appended = RecordingAction::<Appended>::new();
    let hidden = RecordingAction::<ConditionalToggle>::new();
    page.bus()
        .add_action_hook::<Appended, _>(events::APPEND, appended.clone(), 5)
        .add_action_hook::<ConditionalToggle, _>(events::CONDITIONAL_HIDE, hidden.clone(), 10);
    page.ready().unwrap();
    assert_eq!(hidden.count(), 2);
    hidden.clear();

    let row = page.add_row(template).unwrap();
    assert_eq!(appended.events(), vec![Appended { scope: row }]);
    assert_eq!(hidden.count(), 3, "Both old rows and the new row are re-evaluated");

    let (kind, detail) = {
        let form = page.form();
        let kind = form.find_in_scope(&"field_kind".into(), row).unwrap().id();
        let detail = form.find_in_scope(&"field_detail".into(), row).unwrap().id();
        (kind, detail)
    };
    page.set_value(kind, FieldValue::choice("other")).unwrap();
    assert!(page.form().field(detail).unwrap().is_visible());
}

#[test]
fn test_add_row_rejects_live_rows() {
    let fixture = repeater_form();
    let live = fixture.rows[0];
    let page = Page::new(fixture.form, detail_rules());

    let err = page.add_row(live).unwrap_err();
    assert!(matches!(err, FieldHookError::Form(_)));
}

#[test]
fn test_load_is_separate_from_ready() {
    let fixture = flat_form();
    let page = Page::new(fixture.form, RuleSet::default());
    let loaded = CountingAction::new();
    page.bus()
        .add_action_hook::<(), _>(events::LOAD, loaded.clone(), 10);

    page.ready().unwrap();
    assert_eq!(loaded.count(), 0);
    page.load().unwrap();
    assert_eq!(loaded.count(), 1);
}

#[test]
fn test_existing_bus_handlers_see_page_events() {
    let bus = HookBus::shared();
    let ready = CountingAction::new();
    bus.add_action_hook::<(), _>(events::READY, ready.clone(), 1);

    let fixture = flat_form();
    let page = Page::with_bus(bus.clone(), fixture.form, RuleSet::default());
    page.ready().unwrap();
    assert_eq!(ready.count(), 1);
}

#[test]
fn test_failing_listener_surfaces_from_set_value() {
    let fixture = flat_form();
    let a = fixture.a;
    let page = Page::new(fixture.form, two_condition_rules(AllOrAny::Any));
    page.bus().add_action(
        events::CONDITIONAL_SHOW,
        |_: &ConditionalToggle| -> Result<(), BoxError> { Err("layout broke".into()) },
        10,
    );
    page.ready().unwrap();

    let err = page.set_value(a, FieldValue::choice("x")).unwrap_err();
    assert!(matches!(err, FieldHookError::Hook(_)));
    // the value itself was stored before dispatch
    assert_eq!(
        page.form().field(a).unwrap().value(),
        &FieldValue::choice("x")
    );
}
