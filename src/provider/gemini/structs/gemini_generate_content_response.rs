use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GeminiGenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
    #[serde(rename(deserialize = "promptFeedback"))]
    pub prompt_feedback: Option<GeminiPromptFeedback>,
}

#[derive(Debug, Deserialize)]
pub struct GeminiCandidate {
    pub content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
pub struct GeminiContent {
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

#[derive(Debug, Deserialize)]
pub struct GeminiPart {
    pub text: Option<String>,
    #[serde(rename(deserialize = "inlineData"), alias = "inline_data")]
    pub inline_data: Option<GeminiInlineData>,
}

#[derive(Debug, Deserialize)]
pub struct GeminiInlineData {
    #[serde(rename(deserialize = "mimeType"), alias = "mime_type")]
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Deserialize)]
pub struct GeminiPromptFeedback {
    #[serde(rename(deserialize = "blockReason"))]
    pub block_reason: Option<String>,
}
