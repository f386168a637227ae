//! Embedded application configuration
//!
//! Defaults for the menu layout and capture naming, compiled in from
//! `config.toml` at the repository root.

use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;

const CONFIG_TOML: &str = include_str!("../config.toml");

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub menu: MenuConfig,
    pub naming: NamingConfig,
}

/// Filename field settings for the quick task menu
#[derive(Debug, Clone, Deserialize)]
pub struct MenuConfig {
    pub file_name_width: u32,
    pub file_name_tooltip: String,
}

/// Default capture naming
#[derive(Debug, Clone, Deserialize)]
pub struct NamingConfig {
    /// chrono strftime pattern, without extension
    pub pattern: String,
    pub extension: String,
}

impl NamingConfig {
    /// Reject patterns chrono cannot format
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pattern.trim().is_empty() {
            return Err(ConfigError::Invalid("naming.pattern must not be empty".into()));
        }
        if StrftimeItems::new(&self.pattern).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::Invalid(format!(
                "naming.pattern is not a valid strftime pattern: {}",
                self.pattern
            )));
        }
        Ok(())
    }
}

/// Load configuration from embedded config.toml
pub fn load_config() -> Result<Config, ConfigError> {
    parse_config(CONFIG_TOML)
}

fn parse_config(source: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(source)?;
    config.naming.validate()?;
    Ok(config)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = load_config().unwrap();
        assert_eq!(config.menu.file_name_width, 300);
        assert_eq!(config.naming.extension, "png");
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let source = r#"
            [menu]
            file_name_width = 200
            file_name_tooltip = "Name"

            [naming]
            pattern = "  "
            extension = "png"
        "#;
        assert!(matches!(parse_config(source), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_bad_strftime_pattern_rejected() {
        let source = r#"
            [menu]
            file_name_width = 200
            file_name_tooltip = "Name"

            [naming]
            pattern = "shot-%Q"
            extension = "png"
        "#;
        assert!(matches!(parse_config(source), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_naming_directly() {
        let naming = NamingConfig {
            pattern: "shot-%Q".into(),
            extension: "png".into(),
        };
        assert!(matches!(naming.validate(), Err(ConfigError::Invalid(_))));
        assert!(load_config().unwrap().naming.validate().is_ok());
    }

    #[test]
    fn test_missing_section_is_toml_error() {
        let source = "[menu]\nfile_name_width = 200\nfile_name_tooltip = \"x\"\n";
        assert!(matches!(parse_config(source), Err(ConfigError::Toml(_))));
    }
}
