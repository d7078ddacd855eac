//! Roll Handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use validator::Validate;

use crate::application::dto::request::RollRequestBody;
use crate::application::dto::response::roll_result_body;
use crate::infrastructure::metrics;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

/// Roll dice from typed notation or a spell's stored damage formula
///
/// `POST /api/v1/roll` with `{"input_type": "manual" | "spell", "value": "..."}`
/// and an optional `"advantage": true` for a second roll.
pub async fn roll(
    State(state): State<AppState>,
    payload: Result<Json<RollRequestBody>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(body) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    body.validate().map_err(validation_error)?;
    let mode = body.roll_mode();
    let request = body.into_roll_request()?;

    let result = state.roller.roll(request, mode).await;

    metrics::record_roll(
        result.request_kind.as_str(),
        result.error().map(|kind| kind.as_str()).unwrap_or("ok"),
    );

    let response = match roll_result_body(result) {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(body) => (body.status_code(), Json(body)).into_response(),
    };

    Ok(response)
}
