use std::env::var;
use std::fs;

use serde::{Deserialize, Serialize};

pub const MESSAGEFLOW_API_BASE_URL: &str = "https://api.messageflow.com/v2.1";

/// One outbound message kind: provider endpoint path, fixed success message,
/// and first-missing-field validation. The `Serialize` impl is the wire payload.
pub trait OutboundMessage: Serialize {
    const ENDPOINT: &'static str;
    const SENT_MESSAGE: &'static str;

    fn validate(&self) -> Result<(), &'static str>;
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub authorization: String,
    #[serde(default)]
    pub application_key: String,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    rest_api: ProviderConfig,
}

impl ProviderConfig {
    // Environment variables win; config.json is the local-development fallback.
    // Missing credentials surface on the first send attempt, not here.
    pub fn load() -> Self {
        if let (Ok(authorization), Ok(application_key)) =
            (var("REST_API_AUTHORIZATION"), var("REST_API_APPLICATION_KEY"))
        {
            tracing::info!("Loading configuration from environment variables");
            return Self {
                authorization,
                application_key,
            };
        }

        Self::from_file("config.json")
    }

    fn from_file(path: &str) -> Self {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(_) => {
                tracing::error!("config.json not found and environment variables not set");
                return Self::default();
            }
        };

        match serde_json::from_str::<ConfigFile>(&raw) {
            Ok(file) => {
                tracing::info!("Loading configuration from config.json");
                file.rest_api
            }
            Err(error) => {
                tracing::error!("Error parsing config.json: {error}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_file_parses_the_rest_api_section() {
        let raw = r#"{"rest_api":{"authorization":"token","application_key":"key"}}"#;
        let file: ConfigFile = serde_json::from_str(raw).unwrap();
        assert_eq!(file.rest_api.authorization, "token");
        assert_eq!(file.rest_api.application_key, "key");
    }

    #[test]
    fn config_file_tolerates_missing_sections() {
        let file: ConfigFile = serde_json::from_str("{}").unwrap();
        assert_eq!(file.rest_api.authorization, "");
        assert_eq!(file.rest_api.application_key, "");
    }

    #[test]
    fn missing_config_file_yields_empty_credentials() {
        let config = ProviderConfig::from_file("does-not-exist.json");
        assert_eq!(config.authorization, "");
        assert_eq!(config.application_key, "");
    }
}
