//! Report filter routes.
//!
//! Hosts fetch a report's filter descriptor to render its query form, and
//! may post the collected values back for validation before running the
//! report.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, error, warn};

use super::error_response;
use crate::AppState;
use timesheet_core::filter::{FilterDescriptor, FilterValues};
use timesheet_shared::AppError;

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reports", get(list_reports))
        .route("/reports/{name}/filters", get(get_filters))
        .route("/reports/{name}/filters/validate", post(validate_filters))
}

/// Response listing registered reports.
#[derive(Debug, Serialize)]
pub struct ReportListResponse {
    /// Report names, sorted.
    pub reports: Vec<String>,
}

/// GET `/reports` - List registered reports.
async fn list_reports(State(state): State<AppState>) -> Json<ReportListResponse> {
    Json(ReportListResponse {
        reports: state
            .registry
            .names()
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}

/// GET `/reports/{name}/filters` - Evaluate a report's filter descriptor.
async fn get_filters(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    match evaluate(&state, &name) {
        Ok(descriptor) => (StatusCode::OK, Json(descriptor)).into_response(),
        Err(err) => error_response(&err),
    }
}

/// POST `/reports/{name}/filters/validate` - Check submitted filter values.
async fn validate_filters(
    State(state): State<AppState>,
    Path(name): Path<String>,
    payload: Result<Json<FilterValues>, JsonRejection>,
) -> Response {
    let values = match payload {
        Ok(Json(values)) => values,
        Err(rejection) => {
            debug!(report = %name, error = %rejection, "Malformed filter values");
            return error_response(&AppError::Validation(rejection.body_text()));
        }
    };

    let descriptor = match evaluate(&state, &name) {
        Ok(descriptor) => descriptor,
        Err(err) => return error_response(&err),
    };

    match descriptor.validate(&values) {
        Ok(()) => (StatusCode::OK, Json(json!({ "valid": true }))).into_response(),
        Err(violations) => {
            debug!(report = %name, count = violations.len(), "Filter values rejected");
            let messages: Vec<String> = violations.iter().map(ToString::to_string).collect();
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "valid": false,
                    "error": "VALIDATION_ERROR",
                    "message": messages.join("; "),
                    "violations": violations,
                })),
            )
                .into_response()
        }
    }
}

fn evaluate(state: &AppState, name: &str) -> Result<FilterDescriptor, AppError> {
    let descriptor = state
        .registry
        .evaluate(name, state.clock.as_ref(), state.localizer.as_ref())
        .map_err(|e| {
            let err = AppError::from(e);
            if err.status_code() >= 500 {
                error!(report = %name, error = %err, "Failed to build report filters");
            } else {
                warn!(report = %name, error = %err, "Report filters unavailable");
            }
            err
        })?;

    debug!(report = %name, fields = descriptor.len(), "Report filters evaluated");
    Ok(descriptor)
}
