use crate::{
    app::util::data_uri::DataUri,
    dispatch::{
        enums::{quality::Quality, request_kind::RequestKind},
        errors::DispatchError,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub enum GenerationRequest {
    Generate {
        prompt: String,
        style: String,
        quality: Quality,
        upscale: bool,
    },
    Edit {
        prompt: String,
        image: String,
    },
    UpscalePrompt {
        prompt: String,
    },
    UpscaleImage {
        image: String,
    },
    SuggestStyles {
        base_prompt: String,
    },
}

impl GenerationRequest {
    pub fn kind(&self) -> RequestKind {
        match self {
            Self::Generate { .. } => RequestKind::Generate,
            Self::Edit { .. } => RequestKind::Edit,
            Self::UpscalePrompt { .. } => RequestKind::UpscalePrompt,
            Self::UpscaleImage { .. } => RequestKind::UpscaleImage,
            Self::SuggestStyles { .. } => RequestKind::SuggestStyles,
        }
    }

    /// Local checks only; nothing here touches the credential pool.
    pub fn validate(&self) -> Result<(), DispatchError> {
        match self {
            Self::Generate { prompt, .. } | Self::UpscalePrompt { prompt } => {
                require_text("prompt", prompt)
            }
            Self::SuggestStyles { base_prompt } => require_text("base prompt", base_prompt),
            Self::Edit { prompt, image } => {
                require_text("prompt", prompt)?;
                require_image(image)
            }
            Self::UpscaleImage { image } => require_image(image),
        }
    }
}

fn require_text(field: &str, value: &str) -> Result<(), DispatchError> {
    if value.trim().is_empty() {
        return Err(DispatchError::InvalidRequest(format!(
            "{} must not be empty.",
            field
        )));
    }

    Ok(())
}

fn require_image(image: &str) -> Result<(), DispatchError> {
    DataUri::parse_image(image)
        .map(|_| ())
        .map_err(DispatchError::InvalidRequest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_prompts_are_invalid() {
        let request = GenerationRequest::UpscalePrompt {
            prompt: "   ".to_string(),
        };

        assert!(matches!(
            request.validate(),
            Err(DispatchError::InvalidRequest(_))
        ));
    }

    #[test]
    fn edit_requires_an_image_data_uri() {
        let request = GenerationRequest::Edit {
            prompt: "make it blue".to_string(),
            image: "https://example.com/cat.png".to_string(),
        };
        assert!(request.validate().is_err());

        let request = GenerationRequest::Edit {
            prompt: "make it blue".to_string(),
            image: "data:image/png;base64,AAAA".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn upscale_image_needs_no_prompt() {
        let request = GenerationRequest::UpscaleImage {
            image: "data:image/webp;base64,AAAA".to_string(),
        };

        assert!(request.validate().is_ok());
        assert_eq!(request.kind(), RequestKind::UpscaleImage);
    }
}
