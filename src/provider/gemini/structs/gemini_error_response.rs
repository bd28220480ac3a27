use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GeminiErrorResponse {
    #[serde(rename(deserialize = "error"))]
    pub error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct GeminiErrorBody {
    #[serde(default)]
    pub message: String,
    pub status: Option<String>,
}
