use serde::Serialize;

use crate::dispatch::enums::request_kind::RequestKind;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Image {
        #[serde(rename = "imageUrl")]
        image_url: String,
    },
    Text {
        text: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationResult {
    pub kind: RequestKind,
    pub payload: Payload,
}

impl GenerationResult {
    pub fn image_url(&self) -> Option<&str> {
        match &self.payload {
            Payload::Image { image_url } => Some(image_url),
            Payload::Text { .. } => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.payload {
            Payload::Text { text } => Some(text),
            Payload::Image { .. } => None,
        }
    }
}
