#![deny(clippy::all)]

//! Interactive quick task menu driven from the terminal
//!
//! Usage: `quicktask [FILE_NAME]` or `quicktask --write-default-presets`

use anyhow::{Context, Result};
use quicktask::config::{self, Config};
use quicktask::menu::{Key, MenuCallbacks, MenuEntry, MenuEvent, MenuOptions, QuickTaskMenu};
use quicktask::{naming, preferences, preset, AppError, Preset};
use std::io::{self, BufRead, Write};
use tracing::info;

/// Everything needed to open one menu
struct SessionInputs {
    config: Config,
    file_name: String,
    presets: Vec<Preset>,
}

fn main() -> Result<()> {
    // Initialize tracing for structured logging
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let arg = std::env::args().nth(1);
    if arg.as_deref() == Some("--write-default-presets") {
        write_default_presets().context("Failed to save default presets")?;
        return Ok(());
    }

    let Some(inputs) = prepare_session(arg).context("Failed to prepare quick task menu")? else {
        info!("Quick task menu disabled in preferences");
        return Ok(());
    };

    let callbacks = MenuCallbacks::new(|selection| match serde_json::to_string_pretty(&selection) {
        Ok(json) => println!("{}", json),
        Err(e) => tracing::error!("Failed to serialize selection: {}", e),
    })
    .with_edit_presets(|| {
        if let Some(path) = preferences::preferences_path() {
            println!("Edit presets in {}", path.display());
        }
    });

    let mut menu = QuickTaskMenu::show(
        &inputs.file_name,
        &inputs.presets,
        &MenuOptions::from(&inputs.config.menu),
        callbacks,
    );
    print_menu(&menu)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        let Some(event) = parse_command(&line) else {
            eprintln!("Commands: name <text>, enter, esc, <entry number>");
            continue;
        };
        if menu.handle_event(event).is_closed() {
            break;
        }
    }

    Ok(())
}

fn write_default_presets() -> Result<(), AppError> {
    // Validate the embedded config before touching the preferences file
    config::load_config()?;
    preferences::set_quick_task_presets(preset::default_presets())?;
    Ok(())
}

/// Load config and presets; `None` when the menu is turned off
fn prepare_session(file_name: Option<String>) -> Result<Option<SessionInputs>, AppError> {
    let config = config::load_config()?;

    let prefs = preferences::load_preferences();
    if !preferences::show_quick_task_menu(&prefs) {
        return Ok(None);
    }

    let file_name = match file_name {
        Some(name) => name,
        None => naming::default_file_name(&config.naming)?,
    };

    Ok(Some(SessionInputs {
        presets: preferences::quick_task_presets(&prefs),
        config,
        file_name,
    }))
}

/// Print the menu entries with their click indices
fn print_menu(menu: &QuickTaskMenu) -> Result<()> {
    let mut out = io::stdout().lock();
    for (index, entry) in menu.model().entries.iter().enumerate() {
        match entry {
            MenuEntry::Separator => writeln!(out, "    ----")?,
            MenuEntry::FileName { text, .. } => writeln!(out, "    [{}]", text)?,
            other => writeln!(out, "{:>3} {}", index, other.label())?,
        }
    }
    out.flush()?;
    Ok(())
}

fn parse_command(line: &str) -> Option<MenuEvent> {
    let line = line.trim_end_matches(['\r', '\n']);
    if let Some(text) = line.strip_prefix("name ") {
        return Some(MenuEvent::FileNameChanged(text.to_string()));
    }
    match line.trim() {
        "enter" => Some(MenuEvent::KeyDown(Key::Enter)),
        "esc" => Some(MenuEvent::KeyUp(Key::Escape)),
        other => other.parse().ok().map(MenuEvent::Click),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert_eq!(
            parse_command("name  my shot.png\r"),
            Some(MenuEvent::FileNameChanged(" my shot.png".into()))
        );
        assert_eq!(parse_command("enter"), Some(MenuEvent::KeyDown(Key::Enter)));
        assert_eq!(parse_command(" esc "), Some(MenuEvent::KeyUp(Key::Escape)));
        assert_eq!(parse_command("4"), Some(MenuEvent::Click(4)));
        assert_eq!(parse_command("quit"), None);
    }

    #[test]
    fn test_naming_error_surfaces_as_app_error() {
        let mut config = config::load_config().unwrap();
        config.naming.pattern = "shot-%Q".into();
        let err: AppError = naming::default_file_name(&config.naming).unwrap_err().into();
        assert!(matches!(err, AppError::Config(_)));
    }
}
