use super::*;

#[test]
fn last_row_cannot_be_removed() {
    assert!(!can_remove(0));
    assert!(!can_remove(1));
    assert!(can_remove(2));
}

#[test]
fn cell_path_addresses_row_field() {
    assert_eq!(cell_path("items", 2, "quantity"), "items.2.quantity");
}
