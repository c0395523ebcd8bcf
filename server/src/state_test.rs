use super::*;

#[test]
fn new_state_has_no_submissions() {
    let state = test_helpers::test_app_state();
    assert_eq!(state.submission_count(), 0);
    assert!(state.catalog.form("sales.inquiry").is_ok());
}

#[test]
fn submissions_are_numbered_from_one() {
    let state = test_helpers::test_app_state();
    assert_eq!(state.record_submission(), 1);
    assert_eq!(state.record_submission(), 2);
    assert_eq!(state.submission_count(), 2);
}

#[test]
fn clones_share_the_counter() {
    let state = test_helpers::test_app_state();
    let other = state.clone();
    other.record_submission();
    assert_eq!(state.submission_count(), 1);
}
