use std::sync::Arc;

use crate::{
    credentials::CredentialPool,
    provider::{
        gemini::config::{IMAGE_MODEL, TEXT_MODEL},
        models::{
            provider_call::{Modality, Part, ProviderCall},
            provider_reply::ProviderReply,
        },
        Provider,
    },
};

use super::{
    errors::DispatchError,
    models::{
        generation_request::GenerationRequest,
        generation_result::{GenerationResult, Payload},
    },
    instructions,
};

#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    pub image_model: String,
    pub text_model: String,
    pub safety_threshold: Option<String>,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            image_model: IMAGE_MODEL.to_string(),
            text_model: TEXT_MODEL.to_string(),
            safety_threshold: None,
        }
    }
}

/// Fronts the provider: one credential per call, taken round-robin from
/// the shared pool.
pub struct Dispatcher {
    pool: Arc<CredentialPool>,
    provider: Arc<dyn Provider>,
    config: DispatcherConfig,
}

impl Dispatcher {
    pub fn new(
        pool: Arc<CredentialPool>,
        provider: Arc<dyn Provider>,
        config: DispatcherConfig,
    ) -> Self {
        Self {
            pool,
            provider,
            config,
        }
    }

    pub fn pool(&self) -> &CredentialPool {
        &self.pool
    }

    pub async fn dispatch(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResult, DispatchError> {
        request.validate()?;

        let (slot, credential) = self.pool.next_credential()?;
        let kind = request.kind();
        let call = self.compose_call(request);

        tracing::info!(
            kind = kind.value(),
            provider = self.provider.name(),
            model = %call.model,
            slot,
            "dispatching"
        );

        let reply = match self.provider.generate(&credential, &call).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(kind = kind.value(), slot, error = %e, "dispatch failed");
                return Err(e);
            }
        };

        let payload = match kind.produces_image() {
            true => image_payload(reply)?,
            false => text_payload(reply)?,
        };

        Ok(GenerationResult { kind, payload })
    }

    pub fn compose_call(&self, request: GenerationRequest) -> ProviderCall {
        let (model, parts, modalities) = match request {
            GenerationRequest::Generate {
                prompt,
                style,
                quality,
                upscale,
            } => (
                &self.config.image_model,
                vec![Part::Text(instructions::generate_instruction(
                    &prompt, &style, quality, upscale,
                ))],
                vec![Modality::Text, Modality::Image],
            ),
            GenerationRequest::Edit { prompt, image } => (
                &self.config.image_model,
                vec![Part::Media(image.trim().to_string()), Part::Text(prompt)],
                vec![Modality::Text, Modality::Image],
            ),
            GenerationRequest::UpscaleImage { image } => (
                &self.config.image_model,
                vec![
                    Part::Media(image.trim().to_string()),
                    Part::Text(instructions::UPSCALE_IMAGE_INSTRUCTION.to_string()),
                ],
                vec![Modality::Text, Modality::Image],
            ),
            GenerationRequest::UpscalePrompt { prompt } => (
                &self.config.text_model,
                vec![Part::Text(instructions::upscale_prompt_instruction(&prompt))],
                vec![Modality::Text],
            ),
            GenerationRequest::SuggestStyles { base_prompt } => (
                &self.config.text_model,
                vec![Part::Text(instructions::suggest_styles_instruction(&base_prompt))],
                vec![Modality::Text],
            ),
        };

        ProviderCall {
            model: model.to_string(),
            parts,
            modalities,
            safety_threshold: self.config.safety_threshold.clone(),
        }
    }
}

fn image_payload(reply: ProviderReply) -> Result<Payload, DispatchError> {
    match reply.media {
        Some(media) if !media.url.is_empty() => Ok(Payload::Image {
            image_url: media.url,
        }),
        _ => Err(DispatchError::EmptyResponse),
    }
}

fn text_payload(reply: ProviderReply) -> Result<Payload, DispatchError> {
    match reply.text {
        Some(text) if !text.trim().is_empty() => Ok(Payload::Text {
            text: text.trim().to_string(),
        }),
        _ => Err(DispatchError::EmptyResponse),
    }
}
