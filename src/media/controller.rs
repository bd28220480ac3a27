use axum::{extract::State, Json};

use crate::{
    app::models::{api_error::ApiError, json_from_request::ValidJson},
    AppState,
};

use super::{
    dtos::{
        edit_image_dto::EditImageDto, generate_image_dto::GenerateImageDto,
        upscale_image_dto::UpscaleImageDto,
    },
    models::{gallery::Gallery, image_output::ImageOutput},
    service,
};

pub async fn generate_image(
    State(state): State<AppState>,
    ValidJson(dto): ValidJson<GenerateImageDto>,
) -> Result<Json<ImageOutput>, ApiError> {
    match service::generate_image(&dto, &state.dispatcher).await {
        Ok(output) => Ok(Json(output)),
        Err(e) => Err(e.value()),
    }
}

pub async fn generate_gallery(
    State(state): State<AppState>,
    ValidJson(dto): ValidJson<GenerateImageDto>,
) -> Json<Gallery> {
    Json(service::generate_gallery(&dto, &state.dispatcher).await)
}

pub async fn edit_image(
    State(state): State<AppState>,
    ValidJson(dto): ValidJson<EditImageDto>,
) -> Result<Json<ImageOutput>, ApiError> {
    match service::edit_image(&dto, &state.dispatcher).await {
        Ok(output) => Ok(Json(output)),
        Err(e) => Err(e.value()),
    }
}

pub async fn edit_gallery(
    State(state): State<AppState>,
    ValidJson(dto): ValidJson<EditImageDto>,
) -> Json<Gallery> {
    Json(service::edit_gallery(&dto, &state.dispatcher).await)
}

pub async fn upscale_image(
    State(state): State<AppState>,
    ValidJson(dto): ValidJson<UpscaleImageDto>,
) -> Result<Json<ImageOutput>, ApiError> {
    match service::upscale_image(&dto.image_url, &state.dispatcher).await {
        Ok(output) => Ok(Json(output)),
        Err(e) => Err(e.value()),
    }
}
