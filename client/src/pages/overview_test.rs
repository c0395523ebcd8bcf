use super::*;

#[test]
fn form_count_label_pluralises() {
    let modules = catalog();
    assert_eq!(form_count_label(modules.module("sales").unwrap()), "1 form");
    assert_eq!(form_count_label(modules.module("production").unwrap()), "10 forms");
    assert_eq!(form_count_label(modules.module("reports").unwrap()), "Overview");
}
