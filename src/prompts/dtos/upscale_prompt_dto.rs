use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::app::models::json_from_request::Sanitize;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpscalePromptDto {
    #[validate(length(
        min = 1,
        max = 2000,
        message = "prompt must be between 1 and 2000 characters."
    ))]
    pub prompt: String,
}

impl Sanitize for UpscalePromptDto {
    fn sanitized(self) -> Self {
        Self {
            prompt: sanitize_prompt(&self.prompt),
        }
    }
}

/// Trims and folds line breaks into spaces.
pub fn sanitize_prompt(prompt: &str) -> String {
    prompt
        .trim()
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
}
