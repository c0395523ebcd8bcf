//! Browser console output for accepted submissions.
//!
//! Under `hydrate` lines go through the `log` facade, which `console_log`
//! routes to `console.info`. Without a browser this is a no-op.

#[cfg(test)]
#[path = "console_test.rs"]
mod console_test;

use forms::Submission;

/// Console line for an accepted submission: form id then the JSON payload.
pub fn submission_line(submission: &Submission) -> String {
    let payload = serde_json::to_string(&submission.payload).unwrap_or_else(|_| "{}".to_owned());
    format!("{} submitted: {payload}", submission.form_id)
}

pub fn log_submission(submission: &Submission) {
    #[cfg(feature = "hydrate")]
    {
        log::info!("{}", submission_line(submission));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = submission;
    }
}
