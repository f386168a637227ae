//! Menu session
//!
//! Turns toolkit events into resolver calls. The session owns the resolver
//! for its whole lifetime and closes on the first confirm, cancel or edit
//! request; later events are ignored.

use tracing::{info, warn};

use super::builder::{build_menu, MenuOptions, QuickTaskMenuModel};
use super::items::MenuEntry;
use super::state::{Key, MenuCallbacks, MenuEvent, SessionState};
use crate::preset::Preset;
use crate::resolver::{TaskChoice, TaskSelectionResolver};

/// One open quick task menu
pub struct QuickTaskMenu {
    model: QuickTaskMenuModel,
    presets: Vec<Preset>,
    field_text: String,
    resolver: Option<TaskSelectionResolver>,
    callbacks: MenuCallbacks,
    state: SessionState,
}

impl QuickTaskMenu {
    /// Open a menu for the given capture name
    pub fn show(
        file_name: &str,
        presets: &[Preset],
        options: &MenuOptions,
        callbacks: MenuCallbacks,
    ) -> Self {
        info!("Showing quick task menu for {:?}", file_name);
        Self {
            model: build_menu(file_name, presets, options),
            presets: presets.to_vec(),
            field_text: file_name.to_string(),
            resolver: Some(TaskSelectionResolver::begin(file_name)),
            callbacks,
            state: SessionState::Open,
        }
    }

    pub fn model(&self) -> &QuickTaskMenuModel {
        &self.model
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Current (uncommitted) text of the filename field
    pub fn field_text(&self) -> &str {
        &self.field_text
    }

    /// Handle one toolkit event and return the resulting state
    pub fn handle_event(&mut self, event: MenuEvent) -> SessionState {
        if self.state.is_closed() {
            warn!("Ignoring {:?}: quick task menu already closed", event);
            return self.state;
        }

        match event {
            MenuEvent::FileNameChanged(text) => self.field_text = text,
            MenuEvent::KeyDown(Key::Enter) => self.select(TaskChoice::Continue),
            MenuEvent::KeyUp(Key::Escape) => self.cancel(),
            MenuEvent::KeyDown(_) | MenuEvent::KeyUp(_) => {}
            MenuEvent::Click(index) => self.click(index),
        }

        self.state
    }

    fn click(&mut self, index: usize) {
        let Some(entry) = self.model.entry(index).cloned() else {
            warn!("Click on unknown menu entry {}", index);
            return;
        };

        match entry {
            MenuEntry::Continue => self.select(TaskChoice::Continue),
            MenuEntry::Preset { index, .. } => {
                let Some(preset) = self.presets.get(index).cloned() else {
                    warn!("Menu entry points at missing preset {}", index);
                    return;
                };
                self.select(TaskChoice::Preset(preset));
            }
            MenuEntry::EditPresets => self.edit_presets(),
            MenuEntry::Cancel => self.cancel(),
            MenuEntry::FileName { .. } | MenuEntry::Separator => {}
        }
    }

    fn select(&mut self, choice: TaskChoice) {
        let Some(mut resolver) = self.resolver.take() else {
            return;
        };
        resolver.commit_file_name_edit(self.field_text.clone());
        self.state = SessionState::Selected;

        let selection = resolver.resolve(choice);
        info!(
            "Quick task selected: preset={:?}, file_name_override={:?}",
            selection.preset.as_ref().map(ToString::to_string),
            selection.file_name_override
        );

        if let Some(callback) = self.callbacks.on_task_selected.take() {
            callback(selection);
        }
    }

    fn cancel(&mut self) {
        self.resolver = None;
        self.state = SessionState::Cancelled;
        info!("Quick task menu cancelled");
    }

    fn edit_presets(&mut self) {
        self.resolver = None;
        self.state = SessionState::EditRequested;
        info!("Quick task preset editor requested");

        if let Some(callback) = self.callbacks.on_edit_presets.take() {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::AfterCaptureTask;
    use crate::resolver::TaskSelection;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    const CONTINUE: usize = 1;
    // FileName, Continue, Separator, then presets
    const FIRST_PRESET: usize = 3;

    fn presets() -> Vec<Preset> {
        vec![
            Preset::new("Upload", &[AfterCaptureTask::UploadImageToHost], &[]),
            Preset::separator(),
            Preset::new("Save", &[AfterCaptureTask::SaveImageToFile], &[]),
        ]
    }

    type Selections = Rc<RefCell<Vec<TaskSelection>>>;

    fn open(file_name: &str) -> (QuickTaskMenu, Selections, Rc<Cell<u32>>) {
        let selections = Rc::new(RefCell::new(Vec::new()));
        let edits = Rc::new(Cell::new(0));
        let sink = selections.clone();
        let edit_count = edits.clone();
        let callbacks = MenuCallbacks::new(move |selection| sink.borrow_mut().push(selection))
            .with_edit_presets(move || edit_count.set(edit_count.get() + 1));
        let menu = QuickTaskMenu::show(file_name, &presets(), &MenuOptions::default(), callbacks);
        (menu, selections, edits)
    }

    fn index_of(menu: &QuickTaskMenu, wanted: &MenuEntry) -> usize {
        menu.model().entries.iter().position(|e| e == wanted).unwrap()
    }

    #[test]
    fn test_enter_commits_and_continues() {
        let (mut menu, selections, _) = open("shot.png");
        menu.handle_event(MenuEvent::FileNameChanged("renamed.png".into()));
        assert_eq!(menu.handle_event(MenuEvent::KeyDown(Key::Enter)), SessionState::Selected);

        let selections = selections.borrow();
        assert_eq!(selections.len(), 1);
        assert_eq!(selections[0].file_name_override.as_deref(), Some("renamed.png"));
        assert!(selections[0].suppress_auto_naming);
        assert!(selections[0].preset.is_none());
    }

    #[test]
    fn test_continue_click_without_edit() {
        let (mut menu, selections, _) = open("shot.png");
        menu.handle_event(MenuEvent::Click(CONTINUE));
        assert_eq!(
            selections.borrow().as_slice(),
            &[TaskSelection {
                preset: None,
                file_name_override: None,
                suppress_auto_naming: true,
            }]
        );
    }

    #[test]
    fn test_preset_click_uses_field_text() {
        let (mut menu, selections, _) = open("shot.png");
        menu.handle_event(MenuEvent::FileNameChanged("renamed.png".into()));
        menu.handle_event(MenuEvent::Click(FIRST_PRESET));

        let selections = selections.borrow();
        assert_eq!(selections.len(), 1);
        assert_eq!(selections[0].preset.as_ref().map(|p| p.to_string()), Some("Upload".into()));
        assert_eq!(selections[0].file_name_override.as_deref(), Some("renamed.png"));
        assert!(!selections[0].suppress_auto_naming);
    }

    #[test]
    fn test_second_preset_maps_to_its_slice_index() {
        let (mut menu, selections, _) = open("shot.png");
        // Upload, separator, Save
        menu.handle_event(MenuEvent::Click(FIRST_PRESET + 2));
        assert_eq!(
            selections.borrow()[0].preset.as_ref().map(|p| p.to_string()),
            Some("Save".into())
        );
    }

    #[test]
    fn test_escape_cancels_without_callback() {
        let (mut menu, selections, edits) = open("shot.png");
        menu.handle_event(MenuEvent::FileNameChanged("renamed.png".into()));
        assert_eq!(menu.handle_event(MenuEvent::KeyUp(Key::Escape)), SessionState::Cancelled);
        assert!(selections.borrow().is_empty());
        assert_eq!(edits.get(), 0);
    }

    #[test]
    fn test_cancel_click() {
        let (mut menu, selections, _) = open("shot.png");
        let cancel = index_of(&menu, &MenuEntry::Cancel);
        assert_eq!(menu.handle_event(MenuEvent::Click(cancel)), SessionState::Cancelled);
        assert!(selections.borrow().is_empty());
    }

    #[test]
    fn test_edit_presets_fires_edit_callback_only() {
        let (mut menu, selections, edits) = open("shot.png");
        let edit = index_of(&menu, &MenuEntry::EditPresets);
        assert_eq!(menu.handle_event(MenuEvent::Click(edit)), SessionState::EditRequested);
        assert!(selections.borrow().is_empty());
        assert_eq!(edits.get(), 1);
    }

    #[test]
    fn test_events_after_close_are_ignored() {
        let (mut menu, selections, _) = open("shot.png");
        menu.handle_event(MenuEvent::KeyDown(Key::Enter));
        assert_eq!(menu.handle_event(MenuEvent::Click(FIRST_PRESET)), SessionState::Selected);
        assert_eq!(menu.handle_event(MenuEvent::KeyUp(Key::Escape)), SessionState::Selected);
        assert_eq!(selections.borrow().len(), 1);
    }

    #[test]
    fn test_separator_and_field_clicks_keep_menu_open() {
        let (mut menu, selections, _) = open("shot.png");
        assert_eq!(menu.handle_event(MenuEvent::Click(0)), SessionState::Open);
        assert_eq!(menu.handle_event(MenuEvent::Click(2)), SessionState::Open);
        assert_eq!(menu.handle_event(MenuEvent::Click(999)), SessionState::Open);
        assert_eq!(menu.handle_event(MenuEvent::KeyUp(Key::Other)), SessionState::Open);
        assert!(selections.borrow().is_empty());
    }

    #[test]
    fn test_escape_keydown_does_not_cancel() {
        let (mut menu, _, _) = open("shot.png");
        assert_eq!(menu.handle_event(MenuEvent::KeyDown(Key::Escape)), SessionState::Open);
    }
}
