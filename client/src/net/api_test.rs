use super::*;

#[test]
fn submissions_endpoint_formats_form_id() {
    assert_eq!(submissions_endpoint("sales.inquiry"), "/api/forms/sales.inquiry/submissions");
}

#[test]
fn submission_failed_message_includes_status() {
    assert_eq!(
        submission_failed_message("hr.salary-sheet", 422),
        "submission report for hr.salary-sheet failed: 422"
    );
}
