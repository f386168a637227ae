//! User preferences storage
//!
//! Holds the user's quick task presets in a JSON file in the application
//! config directory. A missing or unreadable file means "use the defaults".

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::preset::{default_presets, Preset};

/// User preferences
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Presets listed in the quick task menu (None = built-in defaults)
    pub quick_task_presets: Option<Vec<Preset>>,
    /// Show the quick task menu after each capture (defaults to true)
    pub show_quick_task_menu: Option<bool>,
}

/// Get the preferences file path
pub fn preferences_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("QuickTask").join("preferences.json"))
}

/// Load preferences from the default location
///
/// Returns default preferences if the file doesn't exist or can't be read
pub fn load_preferences() -> Preferences {
    match preferences_path() {
        Some(path) => load_preferences_from(&path),
        None => Preferences::default(),
    }
}

/// Load preferences from a specific file
pub fn load_preferences_from(path: &Path) -> Preferences {
    if !path.exists() {
        return Preferences::default();
    }

    match fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str(&contents) {
            Ok(prefs) => prefs,
            Err(e) => {
                error!("Failed to parse preferences: {}", e);
                Preferences::default()
            }
        },
        Err(e) => {
            error!("Failed to read preferences file: {}", e);
            Preferences::default()
        }
    }
}

/// Save preferences to the default location
pub fn save_preferences(prefs: &Preferences) -> Result<(), PreferencesError> {
    let path = preferences_path().ok_or(PreferencesError::NoConfigDir)?;
    save_preferences_to(&path, prefs)
}

/// Save preferences to a specific file
pub fn save_preferences_to(path: &Path, prefs: &Preferences) -> Result<(), PreferencesError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
            info!("Created preferences directory: {:?}", parent);
        }
    }

    let json = serde_json::to_string_pretty(prefs)?;
    fs::write(path, json)?;
    info!("Saved preferences to: {:?}", path);

    Ok(())
}

/// Presets to offer in the menu
///
/// Falls back to the built-in list when none are configured.
pub fn quick_task_presets(prefs: &Preferences) -> Vec<Preset> {
    match &prefs.quick_task_presets {
        Some(presets) if !presets.is_empty() => presets.clone(),
        _ => default_presets(),
    }
}

/// Whether the menu should be shown after a capture
pub fn show_quick_task_menu(prefs: &Preferences) -> bool {
    prefs.show_quick_task_menu.unwrap_or(true)
}

/// Replace the configured presets
pub fn set_quick_task_presets(presets: Vec<Preset>) -> Result<(), PreferencesError> {
    let mut prefs = load_preferences();
    prefs.quick_task_presets = Some(presets);
    save_preferences(&prefs)
}

/// Preferences errors
#[derive(Debug, thiserror::Error)]
pub enum PreferencesError {
    #[error("Could not find config directory")]
    NoConfigDir,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
