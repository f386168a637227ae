//! Task selection resolver
//!
//! Tracks the filename edits made during one menu session and turns the
//! user's final choice into a [`TaskSelection`]. Constructing the resolver
//! begins the session and [`TaskSelectionResolver::resolve`] consumes it, so
//! a session resolves exactly once.

use serde::Serialize;
use tracing::debug;

use crate::preset::Preset;

/// What the user picked in the menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskChoice {
    /// Keep the current after-capture settings
    Continue,
    /// Run the given preset
    Preset(Preset),
}

/// Result handed to the selection callback
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskSelection {
    /// Chosen preset; `None` means default behavior
    pub preset: Option<Preset>,
    /// Set only when the user renamed the capture
    pub file_name_override: Option<String>,
    /// The caller should not apply its own naming when no preset was chosen
    pub suppress_auto_naming: bool,
}

/// Filename state for one menu session
#[derive(Debug, Clone)]
pub struct TaskSelectionResolver {
    original_file_name: String,
    current_file_name: String,
    has_custom_file_name: bool,
}

impl TaskSelectionResolver {
    /// Begin a session for the given capture name (may be empty)
    pub fn begin(original_file_name: impl Into<String>) -> Self {
        let original_file_name = original_file_name.into();
        debug!("Quick task session started for {:?}", original_file_name);
        Self {
            current_file_name: original_file_name.clone(),
            original_file_name,
            has_custom_file_name: false,
        }
    }

    /// Commit the filename field's value
    ///
    /// A value equal to the original name is not a customization. Committing
    /// the original after an earlier rename reverts that rename.
    pub fn commit_file_name_edit(&mut self, new_value: impl Into<String>) {
        let new_value = new_value.into();
        self.has_custom_file_name = new_value != self.original_file_name;
        self.current_file_name = new_value;
    }

    pub fn original_file_name(&self) -> &str {
        &self.original_file_name
    }

    pub fn current_file_name(&self) -> &str {
        &self.current_file_name
    }

    pub fn has_custom_file_name(&self) -> bool {
        self.has_custom_file_name
    }

    /// Finish the session with the user's choice
    pub fn resolve(self, choice: TaskChoice) -> TaskSelection {
        let file_name_override = self.has_custom_file_name.then_some(self.current_file_name);

        match choice {
            TaskChoice::Continue => TaskSelection {
                preset: None,
                file_name_override,
                suppress_auto_naming: true,
            },
            TaskChoice::Preset(preset) => TaskSelection {
                preset: Some(preset),
                file_name_override,
                suppress_auto_naming: false,
            },
        }
    }
}
