use super::enums::quality::Quality;

pub const UPSCALE_IMAGE_INSTRUCTION: &str = "Upscale this image to a higher resolution, enhancing details and clarity. Make it photorealistic and 8k resolution.";

const UPSCALE_TO_HIGHER_RESOLUTION: &str = "The image should be upscaled to a higher resolution.";

pub fn quality_sentence(quality: Quality) -> String {
    match quality {
        Quality::Standard | Quality::High => format!("A {} image.", quality.clause()),
        Quality::Ultra => format!(
            "A masterpiece image, {}. Emphasize intricate details, professional lighting, and advanced rendering techniques for a visually stunning result.",
            quality.clause()
        ),
    }
}

pub fn generate_instruction(prompt: &str, style: &str, quality: Quality, upscale: bool) -> String {
    let mut lines = vec![
        quality_sentence(quality),
        format!("Style: {}.", style.trim()),
        format!("Prompt: {}.", prompt.trim().trim_end_matches('.')),
    ];

    if upscale {
        lines.push(UPSCALE_TO_HIGHER_RESOLUTION.to_string());
    }

    lines.join("\n")
}

pub fn upscale_prompt_instruction(prompt: &str) -> String {
    format!(
        "You are an expert prompt engineer for a text-to-image model.
Your task is to take a user's simple prompt and expand it into a rich, detailed, and vivid description that will result in a stunning and high-quality image.
Focus on adding details about the scene, lighting, composition, and artistic style.
Return only the upscaled prompt text.

User Prompt: \"{}\"",
        prompt.trim()
    )
}

pub fn suggest_styles_instruction(base_prompt: &str) -> String {
    format!(
        "You are a creative assistant helping users explore artistic styles for image generation.

Given the following base prompt: \"{}\", suggest a list of 10 diverse and interesting artistic styles that would be suitable for generating images from this prompt.
Return the styles as a JSON array of strings. Do not include any descriptions or introductory text.
Example: [\"Photorealistic\", \"Surrealist\", \"Pop Art\", \"Abstract Expressionism\", \"Cyberpunk\", \"Vintage Photo\", \"Fantasy Art\", \"Minimalist\", \"Oil Painting\", \"Watercolor\"]",
        base_prompt.trim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_instruction_contains_each_quality_clause() {
        let cases = [
            (Quality::Standard, "good quality"),
            (Quality::High, "high-quality, detailed"),
            (Quality::Ultra, "hyper-detailed, photorealistic, cinematic, 8k"),
        ];

        for (quality, clause) in cases {
            let instruction = generate_instruction("a lighthouse", "Oil Painting", quality, false);
            assert!(instruction.starts_with(&quality_sentence(quality)));
            assert!(instruction.contains(clause), "{}", instruction);
        }
    }

    #[test]
    fn generate_instruction_layout() {
        let instruction = generate_instruction("a lighthouse.", "Watercolor", Quality::High, true);

        assert_eq!(
            instruction,
            "A high-quality, detailed image.\nStyle: Watercolor.\nPrompt: a lighthouse.\nThe image should be upscaled to a higher resolution."
        );
    }

    #[test]
    fn templates_embed_the_prompt() {
        assert!(upscale_prompt_instruction(" a fox ").contains("User Prompt: \"a fox\""));
        assert!(suggest_styles_instruction("a fox").contains("base prompt: \"a fox\""));
    }
}
