//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): no-ops, since submissions only happen in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Submission reports are fire-and-forget. The form has already been accepted
//! and confirmed locally, so failures are logged and otherwise ignored.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use forms::Record;

fn submissions_endpoint(form_id: &str) -> String {
    format!("/api/forms/{form_id}/submissions")
}

#[cfg(any(test, feature = "hydrate"))]
fn submission_failed_message(form_id: &str, status: u16) -> String {
    format!("submission report for {form_id} failed: {status}")
}

/// Report an accepted submission via `POST /api/forms/{id}/submissions`.
pub async fn report_submission(form_id: String, payload: Record) {
    #[cfg(feature = "hydrate")]
    {
        let url = submissions_endpoint(&form_id);
        let request = match gloo_net::http::Request::post(&url).json(&payload) {
            Ok(request) => request,
            Err(e) => {
                log::warn!("submission report for {form_id} not sent: {e}");
                return;
            }
        };
        match request.send().await {
            Ok(resp) if !resp.ok() => log::warn!("{}", submission_failed_message(&form_id, resp.status())),
            Ok(_) => {}
            Err(e) => log::warn!("submission report for {form_id} not sent: {e}"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (submissions_endpoint(&form_id), payload);
    }
}
