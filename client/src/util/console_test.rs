use super::*;
use forms::Notification;
use serde_json::json;

#[test]
fn submission_line_has_form_id_and_payload() {
    let mut payload = forms::Record::new();
    payload.insert("customerName".into(), json!("Globex"));
    let submission = Submission {
        form_id: "sales.inquiry".into(),
        payload,
        notification: Notification { title: "Inquiry Saved".into(), description: None },
    };
    assert_eq!(submission_line(&submission), r#"sales.inquiry submitted: {"customerName":"Globex"}"#);
    log_submission(&submission);
}
