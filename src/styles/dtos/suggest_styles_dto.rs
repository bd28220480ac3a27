use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    app::models::json_from_request::Sanitize, prompts::dtos::upscale_prompt_dto::sanitize_prompt,
};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SuggestStylesDto {
    #[validate(length(
        min = 1,
        max = 2000,
        message = "basePrompt must be between 1 and 2000 characters."
    ))]
    pub base_prompt: String,
}

impl Sanitize for SuggestStylesDto {
    fn sanitized(self) -> Self {
        Self {
            base_prompt: sanitize_prompt(&self.base_prompt),
        }
    }
}
