use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::env;
use validator::Validate;

use super::identity::IdentityConfig;
use super::logging::LoggingConfig;

#[derive(Debug, Deserialize, Validate)]
pub struct Settings {
    #[serde(default = "default_environment")]
    pub environment: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_app_port")]
    pub app_port: u16,
    #[serde(default)]
    #[validate(nested)]
    pub logging: LoggingConfig,
    #[serde(default)]
    #[validate(nested)]
    pub identity: IdentityConfig,
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_app_port() -> u16 {
    8000
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            host: default_host(),
            app_port: default_app_port(),
            logging: LoggingConfig::default(),
            identity: IdentityConfig::default(),
        }
    }
}

pub fn load() -> Result<Settings, ConfigError> {
    let env = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
    let env_file = match env.as_str() {
        "production" => ".env.production",
        _ => ".env.development",
    };

    dotenv::from_filename(env_file).ok();

    // Nested fields map from e.g. LOGGING__LEVEL and IDENTITY__USER_HEADER.
    let settings = Config::builder()
        .add_source(Environment::default().separator("__").try_parsing(true))
        .build()?
        .try_deserialize::<Settings>()
        .map_err(|e| ConfigError::Message(format!("Failed to deserialize settings: {}", e)))?;

    settings
        .validate()
        .map_err(|e| ConfigError::Message(format!("Invalid settings: {}", e)))?;

    Ok(settings)
}
