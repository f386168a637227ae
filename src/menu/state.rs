//! Session state, input events and callbacks for the quick task menu

use crate::resolver::TaskSelection;

/// Keys the menu reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Other,
}

/// Input raised by the UI toolkit while the menu is open
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEvent {
    /// The filename field's text changed (not yet committed)
    FileNameChanged(String),
    /// Key pressed while the filename field has focus
    KeyDown(Key),
    /// Key released anywhere in the menu
    KeyUp(Key),
    /// Entry at this model index was clicked
    Click(usize),
}

/// Where a menu session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Open,
    /// A selection was handed to the callback
    Selected,
    Cancelled,
    /// Closed so the host can open the preset editor
    EditRequested,
}

impl SessionState {
    pub fn is_closed(self) -> bool {
        self != SessionState::Open
    }
}

/// Callbacks for menu outcomes
///
/// Each callback fires at most once per session.
pub struct MenuCallbacks {
    pub(super) on_task_selected: Option<Box<dyn FnOnce(TaskSelection)>>,
    pub(super) on_edit_presets: Option<Box<dyn FnOnce()>>,
}

impl MenuCallbacks {
    pub fn new(on_task_selected: impl FnOnce(TaskSelection) + 'static) -> Self {
        Self {
            on_task_selected: Some(Box::new(on_task_selected)),
            on_edit_presets: None,
        }
    }

    pub fn with_edit_presets(mut self, on_edit_presets: impl FnOnce() + 'static) -> Self {
        self.on_edit_presets = Some(Box::new(on_edit_presets));
        self
    }
}
