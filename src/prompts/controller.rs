use axum::{extract::State, Json};

use crate::{
    app::models::{api_error::ApiError, json_from_request::ValidJson},
    AppState,
};

use super::{
    dtos::upscale_prompt_dto::UpscalePromptDto,
    models::{explore_prompt::ExplorePrompt, upscaled_prompt::UpscaledPrompt},
    service,
};

pub async fn upscale_prompt(
    State(state): State<AppState>,
    ValidJson(dto): ValidJson<UpscalePromptDto>,
) -> Result<Json<UpscaledPrompt>, ApiError> {
    match service::upscale_prompt(&dto.prompt, &state.dispatcher).await {
        Ok(upscaled) => Ok(Json(upscaled)),
        Err(e) => Err(e.value()),
    }
}

pub async fn get_explore_prompts() -> Json<Vec<ExplorePrompt>> {
    Json(ExplorePrompt::catalog().to_vec())
}
