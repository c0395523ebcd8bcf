use super::*;
use serde_json::json;

fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        _ => panic!("fixture must be an object"),
    }
}

#[test]
fn difference_reads_numbers_and_numeric_strings() {
    let rec = record(json!({"openingBalance": 1000, "depreciationAmount": "150.5"}));
    let value = Formula::difference("openingBalance", "depreciationAmount").evaluate(&rec);
    assert!((value - 849.5).abs() < f64::EPSILON);
}

#[test]
fn missing_and_garbage_inputs_count_as_zero() {
    let rec = record(json!({"laborCharges": "abc"}));
    assert!(Formula::sum(&["laborCharges", "gst"]).evaluate(&rec).abs() < f64::EPSILON);
}

#[test]
fn linear_applies_coefficients() {
    let rec = record(json!({"daysWorked": 20, "overtimeHours": 5}));
    let value = Formula::linear(&[("daysWorked", 500.0), ("overtimeHours", 100.0)]).evaluate(&rec);
    assert!((value - 10_500.0).abs() < f64::EPSILON);
}

#[test]
fn percent_divides_by_hundred() {
    let rec = record(json!({"paymentAmount": 20000, "tdsRate": 1}));
    let value = Formula::percent("paymentAmount", "tdsRate").evaluate(&rec);
    assert!((value - 200.0).abs() < f64::EPSILON);
}

#[test]
fn constant_ignores_record() {
    assert!((Formula::constant(12_345.67).evaluate(&Record::new()) - 12_345.67).abs() < f64::EPSILON);
}

#[test]
fn format_amount_uses_two_decimals() {
    assert_eq!(format_amount(45_000.0), "45000.00");
    assert_eq!(format_amount(0.1 + 0.2), "0.30");
    assert_eq!(format_amount(-12.5), "-12.50");
    assert_eq!(format_amount(-0.001), "0.00");
}

#[test]
fn derive_all_labels_each_value() {
    let schema = FormSchema::new("production", "job-bill", "Job Bill", "Job Work Bill")
        .derived("Total", Formula::sum(&["laborCharges", "gst"]));
    let rec = record(json!({"laborCharges": 1000, "gst": 180}));
    let values = derive_all(&schema, &rec);
    assert_eq!(values.len(), 1);
    assert_eq!(values[0].label, "Total");
    assert_eq!(values[0].display, "1180.00");
}
