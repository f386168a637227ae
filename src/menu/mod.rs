//! Quick task menu
//!
//! Toolkit-neutral model of the menu shown after a capture: a filename
//! field, a Continue entry, the user's presets, an entry to edit them and a
//! Cancel entry. A UI toolkit renders [`QuickTaskMenuModel`] and feeds
//! [`MenuEvent`]s back into a [`QuickTaskMenu`] session.

mod builder;
mod icons;
mod items;
mod session;
mod state;

pub use builder::{build_menu, MenuOptions, QuickTaskMenuModel};
pub use icons::{find_suitable_icon, IconHint};
pub use items::MenuEntry;
pub use session::QuickTaskMenu;
pub use state::{Key, MenuCallbacks, MenuEvent, SessionState};
