use regex::Regex;
use validator::ValidationError;

lazy_static! {
    static ref DATA_URI_REGEX: Regex =
        Regex::new(r"^data:([A-Za-z0-9!#$&^_.+-]+/[A-Za-z0-9!#$&^_.+-]+)(?:;[^;,]+)*;base64,(.+)$")
            .unwrap();
}

/// A `data:<mime>;base64,<payload>` URI, as exchanged with the UI and the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct DataUri {
    pub mime_type: String,
    pub data: String,
}

impl DataUri {
    pub fn parse(uri: &str) -> Result<Self, String> {
        let Some(captures) = DATA_URI_REGEX.captures(uri.trim()) else {
            return Err("image must be a base64 data URI.".to_string());
        };

        let mime_type = captures[1].to_ascii_lowercase();
        let data = captures[2].to_string();

        if let Err(e) = base64::decode(&data) {
            return Err(format!("image payload is not valid base64: {}", e));
        }

        Ok(Self { mime_type, data })
    }

    /// Parses and additionally requires an `image/*` media type.
    pub fn parse_image(uri: &str) -> Result<Self, String> {
        let data_uri = Self::parse(uri)?;

        match data_uri.mime_type.parse::<mime::Mime>() {
            Ok(m) if m.type_() == mime::IMAGE => Ok(data_uri),
            _ => Err(format!(
                "image media type must be image/*, got {}.",
                data_uri.mime_type
            )),
        }
    }

    pub fn to_uri(&self) -> String {
        ["data:", &self.mime_type, ";base64,", &self.data].concat()
    }
}

/// `validator` hook for DTO fields carrying an image data URI.
pub fn validate_image_data_uri(uri: &str) -> Result<(), ValidationError> {
    match DataUri::parse_image(uri) {
        Ok(_) => Ok(()),
        Err(message) => {
            let mut e = ValidationError::new("data_uri");
            e.message = Some(message.into());
            Err(e)
        }
    }
}
