use axum::{extract::State, Json};

use crate::{
    app::models::{api_error::ApiError, json_from_request::ValidJson},
    AppState,
};

use super::{
    dtos::suggest_styles_dto::SuggestStylesDto,
    models::{style_list::StyleList, style_suggestions::StyleSuggestions},
    service,
};

pub async fn suggest_styles(
    State(state): State<AppState>,
    ValidJson(dto): ValidJson<SuggestStylesDto>,
) -> Result<Json<StyleSuggestions>, ApiError> {
    match service::suggest_styles(&dto.base_prompt, &state.dispatcher).await {
        Ok(suggestions) => Ok(Json(suggestions)),
        Err(e) => Err(e.value()),
    }
}

pub async fn get_styles() -> Json<StyleList> {
    Json(StyleList::defaults())
}
