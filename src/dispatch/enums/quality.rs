use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Quality {
    Standard,
    #[default]
    High,
    Ultra,
}

impl Quality {
    pub fn value(&self) -> &'static str {
        match *self {
            Self::Standard => "Standard",
            Self::High => "High",
            Self::Ultra => "Ultra",
        }
    }

    /// Descriptive clause embedded in the generate instruction.
    pub fn clause(&self) -> &'static str {
        match *self {
            Self::Standard => "good quality",
            Self::High => "high-quality, detailed",
            Self::Ultra => "hyper-detailed, photorealistic, cinematic, 8k",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "standard" => Some(Self::Standard),
            "high" => Some(Self::High),
            "ultra" => Some(Self::Ultra),
            _ => None,
        }
    }

    /// Unset or unrecognized labels fall back to `High`.
    pub fn normalize(label: Option<&str>) -> Self {
        let Some(label) = label else {
            return Self::default();
        };

        match Self::from_label(label) {
            Some(quality) => quality,
            None => {
                tracing::warn!("unrecognized quality {:?}, using High", label);
                Self::default()
            }
        }
    }
}
