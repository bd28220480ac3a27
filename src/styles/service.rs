use crate::dispatch::{
    errors::DispatchError, models::generation_request::GenerationRequest, Dispatcher,
};

use super::{
    config::{DEFAULT_STYLES, MAX_STYLE_LENGTH},
    models::style_suggestions::StyleSuggestions,
};

pub async fn suggest_styles(
    base_prompt: &str,
    dispatcher: &Dispatcher,
) -> Result<StyleSuggestions, DispatchError> {
    let result = dispatcher
        .dispatch(GenerationRequest::SuggestStyles {
            base_prompt: base_prompt.to_string(),
        })
        .await?;

    let Some(text) = result.text() else {
        return Err(DispatchError::EmptyResponse);
    };

    let suggested_styles = parse_styles(text);
    if suggested_styles.is_empty() {
        tracing::warn!(%text, "no styles could be parsed from suggestion");
        return Err(DispatchError::EmptyResponse);
    }

    let styles = merge_styles(
        DEFAULT_STYLES.iter().map(|s| s.to_string()),
        &suggested_styles,
    );

    Ok(StyleSuggestions {
        suggested_styles,
        styles,
    })
}

/// Reads a JSON array of strings out of free text, falling back to one
/// style per line.
pub fn parse_styles(text: &str) -> Vec<String> {
    let from_json = match (text.find('['), text.rfind(']')) {
        (Some(start), Some(end)) if start < end => {
            serde_json::from_str::<Vec<String>>(&text[start..=end]).ok()
        }
        _ => None,
    };

    let candidates = match from_json {
        Some(styles) => styles,
        None => text
            .lines()
            .map(|line| {
                strip_list_marker(line)
                    .trim_end_matches(',')
                    .trim_matches('"')
                    .to_string()
            })
            .filter(|line| !line.starts_with("```"))
            .collect(),
    };

    merge_styles(
        std::iter::empty(),
        &candidates
            .into_iter()
            .map(|style| style.trim().to_string())
            .filter(|style| !style.is_empty() && style.chars().count() <= MAX_STYLE_LENGTH)
            .collect::<Vec<_>>(),
    )
}

/// Drops a leading `-`, `*` or `1.` / `1)` list marker.
fn strip_list_marker(line: &str) -> &str {
    let line = line
        .trim()
        .trim_start_matches(|c: char| c == '-' || c == '*')
        .trim_start();

    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        if let Some(rest) = line[digits..].strip_prefix(|c: char| c == '.' || c == ')') {
            return rest.trim_start();
        }
    }

    line
}

/// Appends `extra` to `base`, skipping case-insensitive duplicates.
pub fn merge_styles(base: impl IntoIterator<Item = String>, extra: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();

    for style in base.into_iter().chain(extra.iter().cloned()) {
        if !merged.iter().any(|s| s.eq_ignore_ascii_case(&style)) {
            merged.push(style);
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::dispatch::service::tests::{dispatcher_with, FakeProvider};

    #[test]
    fn parses_fenced_json_array() {
        let text = "```json\n[\"Art Nouveau\", \"Ukiyo-e\", \"Cyberpunk\"]\n```";

        assert_eq!(parse_styles(text), vec!["Art Nouveau", "Ukiyo-e", "Cyberpunk"]);
    }

    #[test]
    fn parses_array_embedded_in_prose() {
        let text = "Sure! Here are some styles: [\"Baroque\", \"baroque\", \"Bauhaus\"] Enjoy.";

        assert_eq!(parse_styles(text), vec!["Baroque", "Bauhaus"]);
    }

    #[test]
    fn falls_back_to_lines() {
        let text = "1. Art Deco\n2. Low Poly\n- \"Pixel Art\",\n\n";

        assert_eq!(parse_styles(text), vec!["Art Deco", "Low Poly", "Pixel Art"]);
    }

    #[test]
    fn keeps_leading_digits_that_are_part_of_a_style() {
        assert_eq!(parse_styles("3D Render\n2) Claymation"), vec!["3D Render", "Claymation"]);
    }

    #[test]
    fn merge_keeps_order_and_drops_duplicates() {
        let merged = merge_styles(
            vec!["Photorealistic".to_string(), "Watercolor".to_string()],
            &["watercolor".to_string(), "Gouache".to_string()],
        );

        assert_eq!(merged, vec!["Photorealistic", "Watercolor", "Gouache"]);
    }

    #[tokio::test]
    async fn suggestions_are_merged_with_defaults() {
        let provider = Arc::new(FakeProvider::text("[\"Cyberpunk\", \"Steampunk\"]"));
        let dispatcher = dispatcher_with(&["k1"], provider);

        let suggestions = suggest_styles("a clockwork city", &dispatcher).await.unwrap();

        assert_eq!(suggestions.suggested_styles, vec!["Cyberpunk", "Steampunk"]);
        assert_eq!(suggestions.styles.len(), DEFAULT_STYLES.len() + 1);
        assert_eq!(suggestions.styles.last().map(String::as_str), Some("Steampunk"));
    }

    #[tokio::test]
    async fn unparseable_suggestion_is_empty_response() {
        let provider = Arc::new(FakeProvider::text("```\n```"));
        let dispatcher = dispatcher_with(&["k1"], provider);

        assert_eq!(
            suggest_styles("a clockwork city", &dispatcher).await,
            Err(DispatchError::EmptyResponse)
        );
    }
}
