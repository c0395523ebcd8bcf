use super::*;
use serde_json::json;

fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        _ => panic!("fixture must be an object"),
    }
}

#[test]
fn join_skips_empty_prefix() {
    assert_eq!(join("", "amount"), "amount");
    assert_eq!(join("items.2", "quantity"), "items.2.quantity");
}

#[test]
fn get_walks_objects_and_arrays() {
    let rec = record(json!({
        "items": [{"itemName": "Bolt"}, {"itemName": "Nut"}],
        "tasks": {"greasing": true}
    }));
    assert_eq!(get(&rec, "items.1.itemName"), Some(&json!("Nut")));
    assert_eq!(get(&rec, "tasks.greasing"), Some(&json!(true)));
    assert_eq!(get(&rec, "items.5.itemName"), None);
    assert_eq!(get(&rec, "tasks.greasing.deeper"), None);
}

#[test]
fn set_top_level_field() {
    let mut rec = Record::new();
    assert!(set(&mut rec, "amount", json!("12")));
    assert_eq!(rec.get("amount"), Some(&json!("12")));
}

#[test]
fn set_row_field_in_place() {
    let mut rec = record(json!({"items": [{"quantity": 1}]}));
    assert!(set(&mut rec, "items.0.quantity", json!("4")));
    assert_eq!(get(&rec, "items.0.quantity"), Some(&json!("4")));
}

#[test]
fn set_creates_object_under_null_parent() {
    let mut rec = record(json!({"dateRange": null}));
    assert!(set(&mut rec, "dateRange.from", json!("2024-01-01")));
    assert_eq!(rec.get("dateRange"), Some(&json!({"from": "2024-01-01"})));
}

#[test]
fn set_out_of_range_row_is_rejected() {
    let mut rec = record(json!({"items": [{"quantity": 1}]}));
    assert!(!set(&mut rec, "items.3.quantity", json!(2)));
    assert_eq!(rec, record(json!({"items": [{"quantity": 1}]})));
}

#[test]
fn set_through_scalar_is_rejected() {
    let mut rec = record(json!({"amount": 5}));
    assert!(!set(&mut rec, "amount.cents", json!(1)));
}
