use serde::Serialize;

use crate::dispatch::errors::DispatchError;

use super::image_output::ImageOutput;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GallerySlot {
    Image(ImageOutput),
    Error { error: String },
}

impl From<Result<ImageOutput, DispatchError>> for GallerySlot {
    fn from(result: Result<ImageOutput, DispatchError>) -> Self {
        match result {
            Ok(output) => Self::Image(output),
            Err(e) => Self::Error {
                error: e.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gallery {
    pub slots: Vec<GallerySlot>,
}

impl Gallery {
    pub fn failures(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, GallerySlot::Error { .. }))
            .count()
    }
}
