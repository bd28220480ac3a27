use crate::dispatch::{
    errors::DispatchError, models::generation_request::GenerationRequest, Dispatcher,
};

use super::models::upscaled_prompt::UpscaledPrompt;

pub async fn upscale_prompt(
    prompt: &str,
    dispatcher: &Dispatcher,
) -> Result<UpscaledPrompt, DispatchError> {
    let result = dispatcher
        .dispatch(GenerationRequest::UpscalePrompt {
            prompt: prompt.to_string(),
        })
        .await?;

    match result.text() {
        Some(text) => Ok(UpscaledPrompt {
            upscaled_prompt: strip_quotes(text).to_string(),
        }),
        None => Err(DispatchError::EmptyResponse),
    }
}

/// Text models like to echo the template's quoting back.
fn strip_quotes(text: &str) -> &str {
    let text = text.trim();
    text.strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .map(str::trim)
        .unwrap_or(text)
}
