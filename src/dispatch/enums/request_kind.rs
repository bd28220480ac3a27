use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    Generate,
    Edit,
    UpscalePrompt,
    UpscaleImage,
    SuggestStyles,
}

impl RequestKind {
    pub fn value(&self) -> &'static str {
        match *self {
            Self::Generate => "generate",
            Self::Edit => "edit",
            Self::UpscalePrompt => "upscale_prompt",
            Self::UpscaleImage => "upscale_image",
            Self::SuggestStyles => "suggest_styles",
        }
    }

    pub fn produces_image(&self) -> bool {
        matches!(*self, Self::Generate | Self::Edit | Self::UpscaleImage)
    }
}
