use axum::http::StatusCode;

use super::models::api_error::ApiError;

/// Failures that belong to no feature: unknown routes and middleware errors.
#[derive(Debug)]
pub enum DefaultApiError {
    RouteNotFound,
    InternalServerError,
}

impl DefaultApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::RouteNotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "No such route.".to_string(),
            },
            Self::InternalServerError => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "The studio could not handle this request.".to_string(),
            },
        }
    }
}
