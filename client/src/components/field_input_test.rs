use super::*;

#[test]
fn input_type_matches_kind() {
    assert_eq!(input_type(&FieldKind::Number), "number");
    assert_eq!(input_type(&FieldKind::Date), "date");
    assert_eq!(input_type(&FieldKind::Month), "month");
    assert_eq!(input_type(&FieldKind::Text), "text");
}

#[test]
fn field_class_flags_errors() {
    assert_eq!(field_class(false), "field");
    assert_eq!(field_class(true), "field field--error");
}

#[test]
fn checkbox_labels_itself_but_keeps_error_slot() {
    assert!(!has_outer_label(&FieldKind::Checkbox, false));
    assert!(has_outer_label(&FieldKind::Text, false));
    assert!(!has_outer_label(&FieldKind::Text, true));
}

#[test]
fn checkbox_error_is_readable_at_its_path() {
    let schema = forms::FormSchema::new("settings", "trigger-engine", "Triggers", "Trigger Engine").field(
        FieldSpec::group("events", "Events", vec![FieldSpec::checkbox("newSalesOrder", "New Sales Order")]),
    );
    let mut form = FormState::new(schema);
    form.set("events.newSalesOrder", Value::String("yes".into()));
    assert!(form.validate().is_err());
    assert!(form.error("events.newSalesOrder").is_some());
}
