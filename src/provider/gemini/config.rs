pub const API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const IMAGE_MODEL: &str = "gemini-2.0-flash-preview-image-generation";
pub const TEXT_MODEL: &str = "gemini-pro";
pub const API_KEY_HEADER: &str = "x-goog-api-key";

pub const SAFETY_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];
