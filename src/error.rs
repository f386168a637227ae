use thiserror::Error;

pub use crate::config::ConfigError;
pub use crate::preferences::PreferencesError;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Preferences error: {0}")]
    Preferences(#[from] PreferencesError),
}
