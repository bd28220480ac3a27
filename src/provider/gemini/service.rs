use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Response, StatusCode};

use crate::{
    app::util::data_uri::DataUri,
    credentials::Credential,
    dispatch::errors::DispatchError,
    provider::{
        models::{
            provider_call::{Part, ProviderCall},
            provider_reply::{ProviderReply, ReplyMedia},
        },
        Provider,
    },
};

use super::{
    config::{API_KEY_HEADER, API_URL, SAFETY_CATEGORIES},
    models::input_spec::{GenerationConfig, InlineData, InputContent, InputPart, InputSpec, SafetySetting},
    structs::{
        gemini_error_response::GeminiErrorResponse,
        gemini_generate_content_response::GeminiGenerateContentResponse,
    },
};

const BODY_PREVIEW_CHARS: usize = 256;

/// Google Gemini `generateContent` over REST.
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    api_url: String,
    http: reqwest::Client,
}

impl GeminiProvider {
    pub fn new(api_url: Option<&str>, timeout: Duration) -> Result<Self, String> {
        let api_url = api_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| API_URL.to_string());

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| e.to_string())?;

        Ok(Self { api_url, http })
    }

    fn endpoint_for_model(&self, model: &str) -> String {
        let model = model.trim();
        let model_path = match model.starts_with("models/") {
            true => model.to_string(),
            false => ["models/", model].concat(),
        };

        format!("{}/{}:generateContent", self.api_url, model_path)
    }
}

#[async_trait]
impl Provider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(
        &self,
        credential: &Credential,
        call: &ProviderCall,
    ) -> Result<ProviderReply, DispatchError> {
        let input_spec = provide_input_spec(call)?;
        let url = self.endpoint_for_model(&call.model);

        let result = self
            .http
            .post(url)
            .header(API_KEY_HEADER, credential.expose())
            .json(&input_spec)
            .send()
            .await;

        match result {
            Ok(res) => parse_response_to_provider_reply(res).await,
            Err(e) => {
                tracing::error!(%e, "gemini request failed");
                Err(DispatchError::ProviderError(e.to_string()))
            }
        }
    }
}

fn provide_input_spec(call: &ProviderCall) -> Result<InputSpec, DispatchError> {
    let mut parts = Vec::with_capacity(call.parts.len());

    for part in &call.parts {
        match part {
            Part::Text(text) => parts.push(InputPart::Text {
                text: text.to_string(),
            }),
            Part::Media(url) => {
                let data_uri = DataUri::parse(url).map_err(DispatchError::InvalidRequest)?;
                parts.push(InputPart::InlineData {
                    inline_data: InlineData {
                        mime_type: data_uri.mime_type,
                        data: data_uri.data,
                    },
                });
            }
        }
    }

    let safety_settings = call.safety_threshold.as_ref().map(|threshold| {
        SAFETY_CATEGORIES
            .iter()
            .map(|category| SafetySetting {
                category: category.to_string(),
                threshold: threshold.to_string(),
            })
            .collect()
    });

    Ok(InputSpec {
        contents: vec![InputContent {
            role: "user".to_string(),
            parts,
        }],
        generation_config: GenerationConfig {
            response_modalities: call
                .modalities
                .iter()
                .map(|modality| modality.value().to_string())
                .collect(),
        },
        safety_settings,
    })
}

async fn parse_response_to_provider_reply(res: Response) -> Result<ProviderReply, DispatchError> {
    let status = res.status();

    let text = match res.text().await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(%e);
            return Err(DispatchError::ProviderError(e.to_string()));
        }
    };

    if !status.is_success() {
        let message = error_message_from_body(status, &text);
        tracing::warn!(%status, %message, "gemini returned an error");
        return Err(DispatchError::ProviderError(message));
    }

    match serde_json::from_str::<GeminiGenerateContentResponse>(&text) {
        Ok(response) => reply_from_response(response),
        Err(e) => {
            tracing::error!(
                %e,
                body_len = text.len(),
                preview = %body_preview(&text),
                "unreadable gemini response"
            );
            Err(DispatchError::ProviderError(
                "Failed to deserialize provider response.".to_string(),
            ))
        }
    }
}

fn error_message_from_body(status: StatusCode, body: &str) -> String {
    if let Ok(error_response) = serde_json::from_str::<GeminiErrorResponse>(body) {
        if !error_response.error.message.is_empty() {
            return error_response.error.message;
        }
        if let Some(status) = error_response.error.status {
            return status;
        }
    }

    match body.trim().is_empty() {
        true => status.to_string(),
        false => body_preview(body.trim()),
    }
}

/// At most `BODY_PREVIEW_CHARS` characters of an upstream body.
fn body_preview(body: &str) -> String {
    match body.char_indices().nth(BODY_PREVIEW_CHARS) {
        Some((end, _)) => format!("{}...", &body[..end]),
        None => body.to_string(),
    }
}

fn reply_from_response(response: GeminiGenerateContentResponse) -> Result<ProviderReply, DispatchError> {
    if response.candidates.is_empty() {
        if let Some(reason) = response
            .prompt_feedback
            .and_then(|feedback| feedback.block_reason)
        {
            return Err(DispatchError::ProviderError(format!(
                "Prompt was blocked by the provider ({}).",
                reason
            )));
        }
    }

    let mut reply = ProviderReply::default();
    let mut texts = Vec::new();

    for candidate in response.candidates {
        let Some(content) = candidate.content else {
            continue;
        };

        for part in content.parts {
            if let Some(inline_data) = part.inline_data {
                if reply.media.is_none() && !inline_data.data.is_empty() {
                    let data_uri = DataUri {
                        mime_type: inline_data.mime_type,
                        data: inline_data.data,
                    };
                    reply.media = Some(ReplyMedia {
                        url: data_uri.to_uri(),
                    });
                }
            }
            if let Some(text) = part.text {
                texts.push(text);
            }
        }
    }

    let text = texts.concat();
    if !text.trim().is_empty() {
        reply.text = Some(text);
    }

    Ok(reply)
}
