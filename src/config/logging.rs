use serde::Deserialize;
use validator::Validate;

use crate::validator::{validate_log_format, validate_log_level};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    #[validate(custom(function = "validate_log_level"))]
    pub level: String, // "debug", "info", "warning", "error"
    #[serde(default = "default_format")]
    #[validate(custom(function = "validate_log_format"))]
    pub format: String, // "json" for machine parsing, "console" for key=value lines
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "json".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}
