use serde::Serialize;

use crate::styles::config::DEFAULT_STYLES;

#[derive(Debug, Clone, Serialize)]
pub struct StyleList {
    pub styles: Vec<String>,
}

impl StyleList {
    pub fn defaults() -> Self {
        Self {
            styles: DEFAULT_STYLES.iter().map(|s| s.to_string()).collect(),
        }
    }
}
