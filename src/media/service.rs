use futures::future::join_all;

use crate::{
    dispatch::{
        errors::DispatchError, models::generation_request::GenerationRequest, Dispatcher,
    },
    prompts,
};

use super::{
    config::GALLERY_SIZE,
    dtos::{edit_image_dto::EditImageDto, generate_image_dto::GenerateImageDto},
    models::{
        gallery::{Gallery, GallerySlot},
        image_output::ImageOutput,
    },
};

/// Expands the prompt first unless the caller opted out, then generates.
pub async fn generate_image(
    dto: &GenerateImageDto,
    dispatcher: &Dispatcher,
) -> Result<ImageOutput, DispatchError> {
    let prompt = match dto.expand_prompt.unwrap_or(true) {
        true => {
            prompts::service::upscale_prompt(&dto.prompt, dispatcher)
                .await?
                .upscaled_prompt
        }
        false => dto.prompt.to_string(),
    };

    let result = dispatcher
        .dispatch(GenerationRequest::Generate {
            prompt,
            style: dto.style.to_string(),
            quality: dto.quality(),
            upscale: dto.upscale.unwrap_or(false),
        })
        .await?;

    image_output(result.image_url())
}

pub async fn edit_image(
    dto: &EditImageDto,
    dispatcher: &Dispatcher,
) -> Result<ImageOutput, DispatchError> {
    let result = dispatcher
        .dispatch(GenerationRequest::Edit {
            prompt: dto.prompt.to_string(),
            image: dto.image.to_string(),
        })
        .await?;

    image_output(result.image_url())
}

pub async fn upscale_image(
    image_url: &str,
    dispatcher: &Dispatcher,
) -> Result<ImageOutput, DispatchError> {
    let result = dispatcher
        .dispatch(GenerationRequest::UpscaleImage {
            image: image_url.to_string(),
        })
        .await?;

    image_output(result.image_url())
}

/// Runs `GALLERY_SIZE` independent generations. A failed slot never
/// cancels its siblings.
pub async fn generate_gallery(dto: &GenerateImageDto, dispatcher: &Dispatcher) -> Gallery {
    let futures = (0..GALLERY_SIZE).map(|_| generate_image(dto, dispatcher));
    collect_gallery(join_all(futures).await)
}

pub async fn edit_gallery(dto: &EditImageDto, dispatcher: &Dispatcher) -> Gallery {
    let futures = (0..GALLERY_SIZE).map(|_| edit_image(dto, dispatcher));
    collect_gallery(join_all(futures).await)
}

fn collect_gallery(results: Vec<Result<ImageOutput, DispatchError>>) -> Gallery {
    let gallery = Gallery {
        slots: results.into_iter().map(GallerySlot::from).collect(),
    };

    if gallery.failures() > 0 {
        tracing::warn!(
            "{} of {} gallery slot(s) failed",
            gallery.failures(),
            gallery.slots.len()
        );
    }

    gallery
}

fn image_output(image_url: Option<&str>) -> Result<ImageOutput, DispatchError> {
    match image_url {
        Some(image_url) => Ok(ImageOutput {
            image_url: image_url.to_string(),
        }),
        None => Err(DispatchError::EmptyResponse),
    }
}
