use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::app::{models::json_from_request::Sanitize, util::data_uri::validate_image_data_uri};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpscaleImageDto {
    #[validate(custom = "validate_image_data_uri")]
    pub image_url: String,
}

impl Sanitize for UpscaleImageDto {
    fn sanitized(self) -> Self {
        Self {
            image_url: self.image_url.trim().to_string(),
        }
    }
}
