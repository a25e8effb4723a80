use std::path::PathBuf;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{NotesError, Result};

/// Environment variable holding the Gemini API credential.
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub default_model: Option<String>,
    pub default_lang: Option<String>,
}

impl Config {
    /// Load config from ~/.config/ytnotes/config.toml if it exists
    pub fn load() -> eyre::Result<Self> {
        let path = config_path();
        if path.exists() {
            debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            debug!("No config file found at {}", path.display());
            Ok(Config::default())
        }
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("ytnotes")
        .join("config.toml")
}

/// Resolve the API credential from the environment, once, at startup.
pub fn api_key_from_env() -> Result<String> {
    std::env::var(API_KEY_VAR).map_err(|_| NotesError::MissingApiKey(API_KEY_VAR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml_str = r#"
default_model = "gemini-1.5-flash"
default_lang = "es"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.default_model.as_deref(), Some("gemini-1.5-flash"));
        assert_eq!(config.default_lang.as_deref(), Some("es"));
    }

    #[test]
    fn test_parse_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.default_model.is_none());
        assert!(config.default_lang.is_none());
    }

    #[test]
    fn test_parse_partial_config() {
        let config: Config = toml::from_str(r#"default_lang = "fr""#).unwrap();
        assert_eq!(config.default_lang.as_deref(), Some("fr"));
        assert!(config.default_model.is_none());
    }
}
