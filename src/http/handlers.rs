//! Endpoint handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::http::error::{ApiError, ErrorBody};
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::rfc::{
    validator, BulkValidationRequest, BulkValidationResult, HealthStatus, ValidationRequest,
    ValidationResult,
};

/// `GET /api/health` and `GET /health`.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}

/// `POST /api/validate`.
///
/// A non-matching RFC is a normal `200` with `is_valid: false`; only an
/// unusable body is an error.
pub async fn validate_rfc(
    payload: Result<Json<ValidationRequest>, JsonRejection>,
) -> Result<Json<ValidationResult>, ApiError> {
    let Json(request) = payload?;

    let result = validator::validate(&request.rfc);
    metrics::record_validation(result.is_valid);

    Ok(Json(result))
}

/// `POST /api/validate/bulk`.
///
/// Every entry shares one `created_at`; results keep request order.
pub async fn validate_bulk(
    State(state): State<AppState>,
    payload: Result<Json<BulkValidationRequest>, JsonRejection>,
) -> Result<Json<BulkValidationResult>, ApiError> {
    let Json(request) = payload?;

    if request.rfcs.is_empty() {
        return Err(ApiError::BadRequest("rfcs must not be empty".to_string()));
    }
    let max = state.limits.max_bulk_items;
    if request.rfcs.len() > max {
        return Err(ApiError::BadRequest(format!(
            "too many rfcs: {} exceeds the limit of {}",
            request.rfcs.len(),
            max
        )));
    }

    let now = Utc::now();
    let results: Vec<ValidationResult> = request
        .rfcs
        .iter()
        .map(|raw| validator::validate_at(raw, now))
        .collect();

    let valid = results.iter().filter(|r| r.is_valid).count();
    for result in &results {
        metrics::record_validation(result.is_valid);
    }
    tracing::debug!(count = results.len(), valid, "Bulk validation complete");

    Ok(Json(BulkValidationResult {
        count: results.len(),
        results,
    }))
}

/// Fallback for unknown paths.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "not found".to_string(),
        }),
    )
}
