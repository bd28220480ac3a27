use axum::http::StatusCode;
use thiserror::Error;

use crate::app::models::api_error::ApiError;

/// Terminal outcomes of a single dispatch. None of them are retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("No API credentials are configured.")]
    PoolExhausted,
    #[error("Provider error: {0}")]
    ProviderError(String),
    #[error("The provider returned no usable content.")]
    EmptyResponse,
}

impl DispatchError {
    pub fn value(&self) -> ApiError {
        let code = match *self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::PoolExhausted => StatusCode::SERVICE_UNAVAILABLE,
            Self::ProviderError(_) | Self::EmptyResponse => StatusCode::BAD_GATEWAY,
        };

        ApiError {
            code,
            message: self.to_string(),
        }
    }
}

impl From<DispatchError> for ApiError {
    fn from(e: DispatchError) -> Self {
        e.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_to_http_status() {
        assert_eq!(
            DispatchError::InvalidRequest("x".into()).value().code,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            DispatchError::PoolExhausted.value().code,
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            DispatchError::EmptyResponse.value().code,
            StatusCode::BAD_GATEWAY
        );

        let api_error = DispatchError::ProviderError("quota exceeded".into()).value();
        assert_eq!(api_error.code, StatusCode::BAD_GATEWAY);
        assert_eq!(api_error.message, "Provider error: quota exceeded");
    }
}
