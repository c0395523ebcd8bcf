use super::*;
use crate::derive::Formula;
use crate::schema::DefaultValue;
use serde_json::json;
use time::macros::date;

const TODAY: Date = date!(2024 - 06 - 15);

fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        _ => panic!("fixture must be an object"),
    }
}

fn inquiry() -> FormSchema {
    FormSchema::new("sales", "inquiry", "Inquiry", "New Sales Inquiry")
        .field(FieldSpec::text("customerName", "Customer Name").required("Customer name is required."))
        .field(FieldSpec::date("inquiryDate", "Inquiry Date").past_only())
        .field(FieldSpec::select("status", "Status", &[("New", "New"), ("Lost", "Lost")]))
        .field(
            FieldSpec::line_items(
                "items",
                "Items",
                "Add Item",
                vec![
                    FieldSpec::text("itemName", "Item Name").required("Item name is required."),
                    FieldSpec::number("quantity", "Quantity").min(1.0, Some("Quantity must be at least 1.")),
                ],
            )
            .min_rows_message("Please add at least one item."),
        )
}

fn grn() -> FormSchema {
    FormSchema::new("purchase", "goods-receipt", "GRN", "Goods Receipt Note")
        .field(FieldSpec::number("totalQty", "Total Qty").min(1.0, None))
        .field(FieldSpec::number("acceptedQty", "Accepted Qty").min(0.0, None))
        .refine(Refinement::LessOrEqual {
            field: "acceptedQty".into(),
            limit: "totalQty".into(),
            message: "Accepted quantity cannot exceed total quantity.".into(),
        })
        .derived("Rejected Qty", Formula::difference("totalQty", "acceptedQty"))
}

// =============================================================================
// COERCION
// =============================================================================

#[test]
fn coerce_number_trims_and_parses() {
    assert_eq!(coerce_number(&json!(" 12.5 ")), Ok(12.5));
    assert_eq!(coerce_number(&json!(7)), Ok(7.0));
}

#[test]
fn coerce_number_blank_is_zero() {
    assert_eq!(coerce_number(&json!("")), Ok(0.0));
    assert_eq!(coerce_number(&json!("   ")), Ok(0.0));
}

#[test]
fn coerce_number_rejects_text() {
    assert_eq!(coerce_number(&json!("12abc")), Err("Expected number, received nan".to_owned()));
    assert_eq!(coerce_number(&json!("inf")), Err("Expected number, received nan".to_owned()));
    assert!(coerce_number(&json!([1])).is_err());
}

// =============================================================================
// FIELD RULES
// =============================================================================

#[test]
fn valid_record_produces_normalised_payload() {
    let rec = record(json!({
        "customerName": "Acme",
        "inquiryDate": "2024-06-01",
        "status": "New",
        "items": [{"itemName": "Bolt", "quantity": "5"}],
        "extra": "dropped"
    }));
    let payload = validate_at(&inquiry(), &rec, TODAY).expect("valid");
    assert_eq!(payload.get("items"), Some(&json!([{"itemName": "Bolt", "quantity": 5.0}])));
    assert!(!payload.contains_key("extra"));
}

#[test]
fn custom_message_reported_for_empty_text() {
    let rec = record(json!({
        "customerName": "",
        "inquiryDate": "2024-06-01",
        "status": "New",
        "items": [{"itemName": "Bolt", "quantity": 1}]
    }));
    let errors = validate_at(&inquiry(), &rec, TODAY).expect_err("invalid");
    assert_eq!(errors.get("customerName"), Some("Customer name is required."));
    assert_eq!(errors.len(), 1);
}

#[test]
fn missing_field_is_required() {
    let rec = record(json!({"status": "New", "items": [{"itemName": "Bolt", "quantity": 1}]}));
    let errors = validate_at(&inquiry(), &rec, TODAY).expect_err("invalid");
    assert_eq!(errors.get("customerName"), Some("Required"));
    assert_eq!(errors.get("inquiryDate"), Some("Required"));
}

#[test]
fn future_and_ancient_dates_rejected() {
    let schema = inquiry();
    let mut rec = record(json!({
        "customerName": "Acme",
        "inquiryDate": "2024-06-16",
        "status": "New",
        "items": [{"itemName": "Bolt", "quantity": 1}]
    }));
    let errors = validate_at(&schema, &rec, TODAY).expect_err("future");
    assert_eq!(errors.get("inquiryDate"), Some("Date cannot be in the future"));

    rec.insert("inquiryDate".into(), json!("1899-12-31"));
    let errors = validate_at(&schema, &rec, TODAY).expect_err("ancient");
    assert_eq!(errors.get("inquiryDate"), Some("Date cannot be before 1900-01-01"));

    rec.insert("inquiryDate".into(), json!("yesterday"));
    let errors = validate_at(&schema, &rec, TODAY).expect_err("garbage");
    assert_eq!(errors.get("inquiryDate"), Some("Invalid date"));
}

#[test]
fn unknown_choice_lists_options() {
    let rec = record(json!({
        "customerName": "Acme",
        "inquiryDate": "2024-06-01",
        "status": "Won",
        "items": [{"itemName": "Bolt", "quantity": 1}]
    }));
    let errors = validate_at(&inquiry(), &rec, TODAY).expect_err("invalid");
    assert_eq!(errors.get("status"), Some("Invalid enum value. Expected 'New' | 'Lost', received 'Won'"));
}

#[test]
fn first_failing_rule_wins() {
    let schema = FormSchema::new("assets", "asset-addition", "Addition", "Asset Addition").field(
        FieldSpec::number("depreciationRate", "Rate")
            .min(0.0, Some("Rate must be positive."))
            .max(100.0, Some("Rate cannot exceed 100.")),
    );
    let low = validate_at(&schema, &record(json!({"depreciationRate": -1})), TODAY).expect_err("low");
    assert_eq!(low.get("depreciationRate"), Some("Rate must be positive."));
    let high = validate_at(&schema, &record(json!({"depreciationRate": "100.5"})), TODAY).expect_err("high");
    assert_eq!(high.get("depreciationRate"), Some("Rate cannot exceed 100."));
    assert!(validate_at(&schema, &record(json!({"depreciationRate": 100})), TODAY).is_ok());
}

#[test]
fn default_messages_print_whole_numbers_plainly() {
    let schema = FormSchema::new("x", "y", "Y", "Y")
        .field(FieldSpec::number("qty", "Qty").min(1.0, None))
        .field(FieldSpec::number("amount", "Amount").min(0.01, None))
        .field(FieldSpec::text("gstin", "GSTIN").exact_len(15, None));
    let errors = validate_at(&schema, &record(json!({"qty": 0, "amount": 0, "gstin": "ABC"})), TODAY)
        .expect_err("invalid");
    assert_eq!(errors.get("qty"), Some("Number must be greater than or equal to 1"));
    assert_eq!(errors.get("amount"), Some("Number must be greater than or equal to 0.01"));
    assert_eq!(errors.get("gstin"), Some("String must contain exactly 15 character(s)"));
}

#[test]
fn exact_length_counts_characters() {
    let schema = FormSchema::new("contractors", "employee-master", "Employee", "Contractor Employee")
        .field(FieldSpec::text("aadharNo", "Aadhar").exact_len(12, Some("Aadhar number must be 12 digits.")));
    for bad in ["12345678901", "1234567890123"] {
        let errors = validate_at(&schema, &record(json!({"aadharNo": bad})), TODAY).expect_err("length");
        assert_eq!(errors.get("aadharNo"), Some("Aadhar number must be 12 digits."));
    }
    assert!(validate_at(&schema, &record(json!({"aadharNo": "123456789012"})), TODAY).is_ok());
}

#[test]
fn optional_blank_text_is_omitted_and_blank_number_is_zero() {
    let schema = FormSchema::new("maintenance", "rectification-memo", "Memo", "Rectification Memo")
        .field(FieldSpec::text("sparesUsed", "Spares").optional())
        .field(FieldSpec::number("cost", "Cost").min(0.0, None).optional());
    let payload = validate_at(&schema, &record(json!({"sparesUsed": "", "cost": " "})), TODAY).expect("valid");
    assert!(!payload.contains_key("sparesUsed"));
    assert_eq!(payload["cost"], json!(0.0));

    let payload = validate_at(&schema, &record(json!({"sparesUsed": null})), TODAY).expect("valid");
    assert!(payload.is_empty());

    let errors = validate_at(&schema, &record(json!({"cost": "-5"})), TODAY).expect_err("negative");
    assert_eq!(errors.get("cost"), Some("Number must be greater than or equal to 0"));
}

#[test]
fn wrong_json_type_is_reported() {
    let schema = FormSchema::new("x", "y", "Y", "Y")
        .field(FieldSpec::text("name", "Name"))
        .field(FieldSpec::checkbox("done", "Done"));
    let errors = validate_at(&schema, &record(json!({"name": 5, "done": "yes"})), TODAY).expect_err("types");
    assert_eq!(errors.get("name"), Some("Expected string, received number"));
    assert_eq!(errors.get("done"), Some("Expected boolean, received string"));
}

// =============================================================================
// LINE ITEMS, GROUPS, RANGES
// =============================================================================

#[test]
fn row_errors_use_indexed_paths() {
    let rec = record(json!({
        "customerName": "Acme",
        "inquiryDate": "2024-06-01",
        "status": "New",
        "items": [
            {"itemName": "Bolt", "quantity": 1},
            {"itemName": "", "quantity": "0"}
        ]
    }));
    let errors = validate_at(&inquiry(), &rec, TODAY).expect_err("invalid");
    assert_eq!(errors.get("items.1.itemName"), Some("Item name is required."));
    assert_eq!(errors.get("items.1.quantity"), Some("Quantity must be at least 1."));
    assert!(errors.get("items.0.itemName").is_none());
}

#[test]
fn empty_rows_hit_minimum() {
    let rec = record(json!({
        "customerName": "Acme",
        "inquiryDate": "2024-06-01",
        "status": "New",
        "items": []
    }));
    let errors = validate_at(&inquiry(), &rec, TODAY).expect_err("invalid");
    assert_eq!(errors.get("items"), Some("Please add at least one item."));
}

#[test]
fn group_members_validated_under_group_path() {
    let schema = FormSchema::new("maintenance", "maintenance-chart", "Chart", "Maintenance Chart").field(
        FieldSpec::group("tasks", "Tasks", vec![FieldSpec::checkbox("greasing", "Greasing")]),
    );
    let payload = validate_at(&schema, &record(json!({"tasks": {"greasing": true}})), TODAY).expect("valid");
    assert_eq!(payload.get("tasks"), Some(&json!({"greasing": true})));

    let errors = validate_at(&schema, &record(json!({"tasks": {"greasing": 1}})), TODAY).expect_err("type");
    assert_eq!(errors.get("tasks.greasing"), Some("Expected boolean, received number"));
}

#[test]
fn date_range_checks_both_ends_and_order() {
    let schema = FormSchema::new("statutory", "gstr-register", "Register", "GSTR Register")
        .field(FieldSpec::date_range("dateRange", "Date Range"))
        .refine(Refinement::DateOrder {
            start: "dateRange.from".into(),
            end: "dateRange.to".into(),
            message: "End date must be on or after start date.".into(),
        });

    let errors = validate_at(&schema, &record(json!({"dateRange": null})), TODAY).expect_err("unset");
    assert_eq!(errors.get("dateRange"), Some("Required"));

    let errors = validate_at(&schema, &record(json!({"dateRange": {"from": "2024-01-01"}})), TODAY)
        .expect_err("half");
    assert_eq!(errors.get("dateRange.to"), Some("Required"));

    let errors = validate_at(
        &schema,
        &record(json!({"dateRange": {"from": "2024-03-01", "to": "2024-02-01"}})),
        TODAY,
    )
    .expect_err("reversed");
    assert_eq!(errors.get("dateRange.to"), Some("End date must be on or after start date."));

    assert!(
        validate_at(&schema, &record(json!({"dateRange": {"from": "2024-02-01", "to": "2024-02-01"}})), TODAY).is_ok()
    );
}

// =============================================================================
// REFINEMENTS
// =============================================================================

#[test]
fn accepted_over_total_fails_on_accepted_field() {
    let errors = validate_at(&grn(), &record(json!({"totalQty": 10, "acceptedQty": 11})), TODAY).expect_err("over");
    assert_eq!(errors.get("acceptedQty"), Some("Accepted quantity cannot exceed total quantity."));
    assert!(errors.get("totalQty").is_none());
}

#[test]
fn accepted_equal_to_total_passes() {
    assert!(validate_at(&grn(), &record(json!({"totalQty": "10", "acceptedQty": "10"})), TODAY).is_ok());
}

#[test]
fn refinement_skipped_when_inputs_invalid() {
    let errors = validate_at(&grn(), &record(json!({"totalQty": "x", "acceptedQty": 11})), TODAY).expect_err("nan");
    assert_eq!(errors.get("totalQty"), Some("Expected number, received nan"));
    assert!(errors.get("acceptedQty").is_none());
}

#[test]
fn errors_display_count() {
    let errors = validate_at(&grn(), &record(json!({"totalQty": 0, "acceptedQty": -1})), TODAY).expect_err("both");
    assert_eq!(errors.to_string(), "2 field(s) failed validation");
    assert_eq!(errors.iter().count(), 2);
}

#[test]
fn errors_serialize_as_flat_map() {
    let mut errors = ValidationErrors::new();
    errors.insert("items.0.quantity", "Quantity must be at least 1.");
    errors.insert("items.0.quantity", "ignored");
    assert_eq!(
        serde_json::to_value(&errors).expect("serialize"),
        json!({"items.0.quantity": "Quantity must be at least 1."})
    );
    assert!(errors.touches("items"));
    assert!(!errors.touches("item"));
}

#[test]
fn number_without_value_is_nan_not_required() {
    let schema = FormSchema::new("statutory", "cheque-book", "Cheque Book", "Add New Cheque Book")
        .field(FieldSpec::text("bankAccount", "Bank Account").non_empty().default_value(DefaultValue::Unset))
        .field(FieldSpec::number("startLeafNo", "Start Leaf No").default_value(DefaultValue::Unset));
    let errors = validate_at(&schema, &schema.defaults(TODAY), TODAY).expect_err("blank");
    assert_eq!(errors.get("bankAccount"), Some("Required"));
    assert_eq!(errors.get("startLeafNo"), Some("Expected number, received nan"));
}

#[test]
fn client_ahead_of_utc_passes_with_next_day_allowance() {
    let utc_today = date!(2024 - 06 - 14);
    let rec = record(json!({
        "customerName": "Acme",
        "inquiryDate": "2024-06-15",
        "status": "New",
        "items": [{"itemName": "Bolt", "quantity": 1}]
    }));
    let errors = validate_at(&inquiry(), &rec, utc_today).expect_err("strict");
    assert_eq!(errors.get("inquiryDate"), Some("Date cannot be in the future"));
    assert!(validate_at(&inquiry(), &rec, clock::next_day(utc_today)).is_ok());
}
