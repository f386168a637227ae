#![deny(clippy::all)]

//! Post-capture quick task menu
//!
//! After a capture the user may rename the file and pick a preset of
//! after-capture tasks. This crate models that menu without a UI toolkit:
//! [`menu::build_menu`] produces the entries to render,
//! [`menu::QuickTaskMenu`] consumes toolkit events, and
//! [`resolver::TaskSelectionResolver`] turns the outcome into a
//! [`resolver::TaskSelection`] for the capture pipeline.

pub mod config;
pub mod error;
pub mod menu;
pub mod naming;
pub mod preferences;
pub mod preset;
pub mod resolver;

pub use error::*;
pub use preset::{AfterCaptureTask, AfterUploadTask, Preset};
pub use resolver::{TaskChoice, TaskSelection, TaskSelectionResolver};
