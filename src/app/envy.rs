use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub port: Option<u16>,

    /// Comma separated, rotated round-robin.
    #[serde(default)]
    pub gemini_api_keys: Vec<String>,
    pub gemini_api_url: Option<String>,

    pub image_model: Option<String>,
    pub text_model: Option<String>,
    pub safety_threshold: Option<String>,

    pub request_timeout_secs: Option<u64>,
    pub body_limit_bytes: Option<usize>,
    pub rate_limit_per_sec: Option<u64>,
}

fn default_app_env() -> String {
    "development".to_string()
}

impl Envy {
    pub const DEFAULT_PORT: u16 = 3000;
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
    pub const DEFAULT_BODY_LIMIT_BYTES: usize = 20 * 1024 * 1024;
    pub const DEFAULT_RATE_LIMIT_PER_SEC: u64 = 20;

    /// Non-blank credentials in configured order.
    pub fn credentials(&self) -> Vec<String> {
        self.gemini_api_keys
            .iter()
            .map(|key| key.trim())
            .filter(|key| !key.is_empty())
            .map(|key| key.to_string())
            .collect()
    }
}
