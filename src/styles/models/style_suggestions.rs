use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSuggestions {
    pub suggested_styles: Vec<String>,
    /// Defaults followed by the new suggestions, without duplicates.
    pub styles: Vec<String>,
}
