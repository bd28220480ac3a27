use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

use super::{errors::DefaultApiError, models::api_error::ApiError};

pub async fn get_root(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    Ok(Json(json!({
        "status": "online",
        "credentials": state.dispatcher.pool().len(),
    })))
}

pub async fn fallback() -> ApiError {
    DefaultApiError::RouteNotFound.value()
}
