//! Catalog and form submission routes.
//!
//! Nothing here stores data. A submission is validated against the catalog
//! schema, logged as one structured line and echoed back with an id.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use forms::{CatalogError, FormSchema, Module, NavPlacement, Notification, Record, ValidationErrors};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TabSummary {
    pub id: String,
    pub tab: String,
    pub label: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModuleSummary {
    pub slug: String,
    pub title: String,
    pub nav_label: String,
    pub placement: NavPlacement,
    pub tabs: Vec<TabSummary>,
}

fn to_summary(module: &Module) -> ModuleSummary {
    ModuleSummary {
        slug: module.slug.clone(),
        title: module.title.clone(),
        nav_label: module.nav_label.clone(),
        placement: module.placement,
        tabs: module
            .forms
            .iter()
            .map(|form| TabSummary { id: form.id.clone(), tab: form.tab.clone(), label: form.tab_label.clone() })
            .collect(),
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub id: Uuid,
    pub notification: Notification,
    pub payload: Record,
}

/// `GET /api/modules`: navigation-ordered module summaries.
pub async fn list_modules(State(state): State<AppState>) -> Json<Vec<ModuleSummary>> {
    Json(state.catalog.modules().iter().map(to_summary).collect())
}

/// `GET /api/forms/{id}`: full schema of one form.
pub async fn get_form(
    State(state): State<AppState>,
    Path(form_id): Path<String>,
) -> Result<Json<FormSchema>, StatusCode> {
    let schema = state.catalog.form(&form_id).map_err(catalog_error_to_status)?;
    Ok(Json(schema.clone()))
}

/// `POST /api/forms/{id}/validate`: check a record without submitting it.
pub async fn validate_form(
    State(state): State<AppState>,
    Path(form_id): Path<String>,
    Json(record): Json<Record>,
) -> Result<Response, StatusCode> {
    let schema = state.catalog.form(&form_id).map_err(catalog_error_to_status)?;
    let response = match validate_record(schema, &record) {
        Ok(payload) => Json(json!({ "ok": true, "payload": payload })).into_response(),
        Err(errors) => rejected(&errors),
    };
    Ok(response)
}

/// `POST /api/forms/{id}/submissions`: validate, log and acknowledge.
pub async fn submit_form(
    State(state): State<AppState>,
    Path(form_id): Path<String>,
    Json(record): Json<Record>,
) -> Result<Response, StatusCode> {
    let schema = state.catalog.form(&form_id).map_err(catalog_error_to_status)?;
    let payload = match validate_record(schema, &record) {
        Ok(payload) => payload,
        Err(errors) => {
            tracing::debug!(form = %form_id, errors = errors.len(), "submission rejected");
            return Ok(rejected(&errors));
        }
    };

    let id = Uuid::new_v4();
    let seq = state.record_submission();
    let logged = serde_json::to_string(&payload).map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    tracing::info!(submission_id = %id, form = %form_id, seq, payload = %logged, "form submitted");

    Ok(Json(SubmissionResponse { id, notification: schema.notification.clone(), payload }).into_response())
}

/// Validate as the browser would, allowing for clients a calendar day ahead
/// of the server.
fn validate_record(schema: &FormSchema, record: &Record) -> Result<Record, ValidationErrors> {
    forms::validate_at(schema, record, forms::clock::client_today())
}

fn rejected(errors: &ValidationErrors) -> Response {
    (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "ok": false, "errors": errors }))).into_response()
}

pub(crate) fn catalog_error_to_status(err: CatalogError) -> StatusCode {
    match err {
        CatalogError::UnknownModule(_) | CatalogError::UnknownForm(_) => StatusCode::NOT_FOUND,
        CatalogError::DuplicateForm(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
