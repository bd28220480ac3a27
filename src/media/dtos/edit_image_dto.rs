use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    app::{models::json_from_request::Sanitize, util::data_uri::validate_image_data_uri},
    prompts::dtos::upscale_prompt_dto::sanitize_prompt,
};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EditImageDto {
    #[validate(length(
        min = 5,
        max = 2000,
        message = "prompt must be between 5 and 2000 characters."
    ))]
    pub prompt: String,
    #[validate(custom = "validate_image_data_uri")]
    pub image: String,
}

impl Sanitize for EditImageDto {
    fn sanitized(self) -> Self {
        Self {
            prompt: sanitize_prompt(&self.prompt),
            image: self.image.trim().to_string(),
        }
    }
}
