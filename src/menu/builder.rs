//! Menu building logic

use tracing::debug;

use super::icons::find_suitable_icon;
use super::items::MenuEntry;
use crate::config::MenuConfig;
use crate::preset::Preset;

/// Layout options for the filename field
#[derive(Debug, Clone)]
pub struct MenuOptions {
    pub file_name_width: u32,
    pub file_name_tooltip: String,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            file_name_width: 300,
            file_name_tooltip: "Filename".to_string(),
        }
    }
}

impl From<&MenuConfig> for MenuOptions {
    fn from(config: &MenuConfig) -> Self {
        Self {
            file_name_width: config.file_name_width,
            file_name_tooltip: config.file_name_tooltip.clone(),
        }
    }
}

/// The full quick task menu, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickTaskMenuModel {
    pub entries: Vec<MenuEntry>,
}

impl QuickTaskMenuModel {
    /// Index of the filename field
    pub const FILE_NAME_INDEX: usize = 0;

    pub fn entry(&self, index: usize) -> Option<&MenuEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build all menu entries for a capture
pub fn build_menu(file_name: &str, presets: &[Preset], options: &MenuOptions) -> QuickTaskMenuModel {
    let mut entries = vec![
        MenuEntry::FileName {
            text: file_name.to_string(),
            tooltip: options.file_name_tooltip.clone(),
            width: options.file_name_width,
        },
        MenuEntry::Continue,
        MenuEntry::Separator,
    ];

    if !presets.is_empty() {
        for (index, preset) in presets.iter().enumerate() {
            if preset.is_valid() {
                entries.push(MenuEntry::Preset {
                    index,
                    label: preset.menu_label(),
                    icon: find_suitable_icon(preset),
                });
            } else {
                entries.push(MenuEntry::Separator);
            }
        }
        entries.push(MenuEntry::Separator);
    }

    entries.push(MenuEntry::EditPresets);
    entries.push(MenuEntry::Separator);
    entries.push(MenuEntry::Cancel);

    debug!(
        "Built quick task menu with {} entries from {} presets",
        entries.len(),
        presets.len()
    );

    QuickTaskMenuModel { entries }
}
