use axum::{async_trait, extract::FromRequest, http::Request, Json};
use axum_macros::FromRequest;
use validator::Validate;

use super::api_error::ApiError;

#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct JsonFromRequest<T>(pub T);

/// Normalizes user input (trimming, line breaks) before it is validated.
pub trait Sanitize {
    fn sanitized(self) -> Self;
}

/// JSON body that has been sanitized and then validated, so length rules
/// apply to what actually reaches the dispatcher.
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<S, B, T> FromRequest<S, B> for ValidJson<T>
where
    JsonFromRequest<T>: FromRequest<S, B, Rejection = ApiError>,
    T: Sanitize + Validate + Send,
    S: Send + Sync,
    B: Send + 'static,
{
    type Rejection = ApiError;

    async fn from_request(req: Request<B>, state: &S) -> Result<Self, Self::Rejection> {
        let JsonFromRequest(dto) = JsonFromRequest::<T>::from_request(req, state).await?;

        let dto = dto.sanitized();
        dto.validate()?;

        Ok(Self(dto))
    }
}
