use super::*;
use serde_json::json;
use time::macros::date;

const TODAY: Date = date!(2024 - 06 - 15);

#[test]
fn constructors_pick_kind_defaults() {
    assert_eq!(FieldSpec::text("a", "A").default_json(TODAY), json!(""));
    assert_eq!(FieldSpec::number("a", "A").default_json(TODAY), json!(0.0));
    assert_eq!(FieldSpec::checkbox("a", "A").default_json(TODAY), json!(false));
    assert_eq!(FieldSpec::date("a", "A").default_json(TODAY), json!("2024-06-15"));
    assert_eq!(FieldSpec::month("a", "A").default_json(TODAY), json!("2024-06"));
    assert_eq!(FieldSpec::date_range("a", "A").default_json(TODAY), Value::Null);
}

#[test]
fn current_year_default_is_four_digits() {
    let year = FieldSpec::text("year", "Year").default_value(DefaultValue::CurrentYear);
    assert_eq!(year.default_json(TODAY), json!("2024"));
}

#[test]
fn select_defaults_to_first_option_unless_overridden() {
    let status = FieldSpec::select("status", "Status", &[("New", "New"), ("Lost", "Lost")]);
    assert_eq!(status.default_json(TODAY), json!("New"));
    assert_eq!(status.kind.options().len(), 2);
    assert_eq!(status.default_text("Lost").default_json(TODAY), json!("Lost"));
    assert!(FieldSpec::text("a", "A").kind.options().is_empty());
}

#[test]
fn group_and_line_items_nest_child_defaults() {
    let tasks = FieldSpec::group(
        "tasks",
        "Tasks",
        vec![FieldSpec::checkbox("greasing", "Greasing").default_bool(true), FieldSpec::checkbox("cleaning", "Cleaning")],
    );
    assert_eq!(tasks.default_json(TODAY), json!({"greasing": true, "cleaning": false}));
    assert!(tasks.default_row(TODAY).is_none());

    let items = FieldSpec::line_items("items", "Items", "Add Item", vec![FieldSpec::number("qty", "Qty").default_number(1.0)]);
    assert_eq!(items.default_json(TODAY), json!([{"qty": 1.0}]));
    assert_eq!(items.default_row(TODAY).map(Value::Object), Some(json!({"qty": 1.0})));
    assert_eq!(items.rules, [Rule::MinRows { rows: 1, message: None }]);
}

#[test]
fn min_rows_message_rewrites_the_row_rule() {
    let items = FieldSpec::line_items("items", "Items", "Add Item", Vec::new()).min_rows_message("Add one.");
    assert_eq!(items.rules, [Rule::MinRows { rows: 1, message: Some("Add one.".to_owned()) }]);
}

#[test]
fn past_only_bounds_both_ends() {
    let date = FieldSpec::date("d", "D").past_only();
    assert!(matches!(date.rules[0], Rule::NotFuture { .. }));
    assert!(matches!(&date.rules[1], Rule::NotBefore { date, .. } if date == "1900-01-01"));
}

#[test]
fn form_builder_fills_identity_and_notification() {
    let form = FormSchema::new("finance", "journal-voucher", "Journal Voucher", "Journal Voucher")
        .auto_number("Journal No")
        .field(FieldSpec::text("narration", "Narration"));
    assert_eq!(form.id, "finance.journal-voucher");
    assert_eq!(form.submit_label, "Save");
    assert_eq!(form.notification.title, "Journal Voucher Saved");
    assert_eq!(form.readonly[0].placeholder, "Auto-generated");
    assert!(form.resets_on_submit);
    assert!(form.field_named("narration").is_some());
    assert!(form.field_named("missing").is_none());
    assert!(!form.keep_values().resets_on_submit);
}

#[test]
fn schema_json_uses_tagged_kinds() {
    let form = FormSchema::new("m", "t", "T", "Title")
        .field(FieldSpec::select("s", "S", &[("a", "A")]))
        .derived("Net", Formula::difference("x", "y"));
    let json = serde_json::to_value(&form).unwrap();
    assert_eq!(json["fields"][0]["kind"]["type"], json!("select"));
    assert_eq!(json["fields"][0]["default"], json!({"kind": "text", "value": "a"}));
    assert_eq!(json["derived"][0]["formula"]["op"], json!("difference"));
    assert!(json.get("table").is_none());

    let back: FormSchema = serde_json::from_value(json).unwrap();
    assert_eq!(back, form);
}

#[test]
fn table_copies_cells() {
    let form = FormSchema::new("m", "t", "T", "Title").table("Tracker", &["Leaf"], &[&["1001"], &["1002"]]);
    let table = form.table.unwrap();
    assert_eq!(table.columns, ["Leaf"]);
    assert_eq!(table.rows, [vec!["1001".to_owned()], vec!["1002".to_owned()]]);
}
