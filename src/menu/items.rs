//! Menu entries
//!
//! Toolkit-neutral description of what the quick task menu shows.

use super::icons::IconHint;

pub(crate) const CONTINUE_LABEL: &str = "Continue";
pub(crate) const EDIT_PRESETS_LABEL: &str = "Edit this menu...";
pub(crate) const CANCEL_LABEL: &str = "Cancel";

/// One row of the quick task menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// Editable filename field, focused with its text selected
    FileName {
        text: String,
        tooltip: String,
        width: u32,
    },
    Continue,
    Separator,
    /// A valid preset; `index` points into the preset slice the menu was built from
    Preset {
        index: usize,
        label: String,
        icon: IconHint,
    },
    EditPresets,
    Cancel,
}

impl MenuEntry {
    /// Text a toolkit should render for this entry
    pub fn label(&self) -> &str {
        match self {
            MenuEntry::FileName { text, .. } => text,
            MenuEntry::Continue => CONTINUE_LABEL,
            MenuEntry::Separator => "",
            MenuEntry::Preset { label, .. } => label,
            MenuEntry::EditPresets => EDIT_PRESETS_LABEL,
            MenuEntry::Cancel => CANCEL_LABEL,
        }
    }

    pub fn icon(&self) -> Option<IconHint> {
        match self {
            MenuEntry::FileName { .. } => Some(IconHint::Rename),
            MenuEntry::Continue => Some(IconHint::Continue),
            MenuEntry::Separator => None,
            MenuEntry::Preset { icon, .. } => Some(*icon),
            MenuEntry::EditPresets => Some(IconHint::Pencil),
            MenuEntry::Cancel => Some(IconHint::Cross),
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, MenuEntry::Separator)
    }
}
