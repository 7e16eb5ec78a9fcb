use axum::{extract::State, Json};
use serde_json::Value;

use cf_common::api::{FilterRequest, FilterResponse};

use crate::error::ApiError;
use crate::SharedState;

/// POST /filter: score every item of the batch against the admin choice and
/// role vocabulary, echoing the resolved threshold.
///
/// The payload is taken as raw JSON first so that a structurally invalid
/// body maps to a 400 instead of axum's default rejection; absent or null
/// fields inside a valid object degrade to defaults and never error.
pub async fn filter_applications(
    State(state): State<SharedState>,
    Json(payload): Json<Value>,
) -> Result<Json<FilterResponse>, ApiError> {
    let request: FilterRequest = serde_json::from_value(payload)
        .map_err(|err| ApiError::BadRequest(format!("invalid filter payload: {err}")))?;

    Ok(Json(state.engine.run(&request)))
}
