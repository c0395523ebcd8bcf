use super::*;

#[test]
fn tab_class_marks_active_trigger() {
    assert_eq!(tab_class(false), "tabs__trigger");
    assert_eq!(tab_class(true), "tabs__trigger tabs__trigger--active");
}
