use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    app::models::json_from_request::Sanitize, dispatch::enums::quality::Quality,
    prompts::dtos::upscale_prompt_dto::sanitize_prompt,
};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageDto {
    #[validate(length(
        min = 10,
        max = 2000,
        message = "prompt must be between 10 and 2000 characters."
    ))]
    pub prompt: String,
    #[validate(length(
        min = 1,
        max = 100,
        message = "style must be between 1 and 100 characters."
    ))]
    pub style: String,
    pub quality: Option<String>,
    pub upscale: Option<bool>,
    pub expand_prompt: Option<bool>,
}

impl Sanitize for GenerateImageDto {
    fn sanitized(self) -> Self {
        Self {
            prompt: sanitize_prompt(&self.prompt),
            style: self.style.trim().to_string(),
            ..self
        }
    }
}

impl GenerateImageDto {
    pub fn quality(&self) -> Quality {
        Quality::normalize(self.quality.as_deref())
    }
}
