#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    Text(String),
    /// A base64 data URI.
    Media(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modality {
    Text,
    Image,
}

impl Modality {
    pub fn value(&self) -> &'static str {
        match *self {
            Self::Text => "TEXT",
            Self::Image => "IMAGE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProviderCall {
    pub model: String,
    pub parts: Vec<Part>,
    pub modalities: Vec<Modality>,
    pub safety_threshold: Option<String>,
}

impl ProviderCall {
    /// Concatenated text parts, mostly useful for logging and tests.
    pub fn instruction(&self) -> String {
        self.parts
            .iter()
            .filter_map(|part| match part {
                Part::Text(text) => Some(text.as_str()),
                Part::Media(_) => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
