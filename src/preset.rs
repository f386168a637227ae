//! Quick task presets
//!
//! A preset is a named bundle of after-capture (and after-upload) tasks the
//! user can pick from the quick task menu. A preset without any after-capture
//! task is not selectable and is shown as a separator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Task performed on a capture before (or instead of) uploading it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AfterCaptureTask {
    AnnotateImage,
    CopyImageToClipboard,
    CopyFileToClipboard,
    CopyFilePathToClipboard,
    SaveImageToFile,
    SaveImageToFileWithDialog,
    UploadImageToHost,
    ShowInExplorer,
}

impl fmt::Display for AfterCaptureTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            AfterCaptureTask::AnnotateImage => "Annotate image",
            AfterCaptureTask::CopyImageToClipboard => "Copy image to clipboard",
            AfterCaptureTask::CopyFileToClipboard => "Copy file to clipboard",
            AfterCaptureTask::CopyFilePathToClipboard => "Copy file path to clipboard",
            AfterCaptureTask::SaveImageToFile => "Save image to file",
            AfterCaptureTask::SaveImageToFileWithDialog => "Save image to file as...",
            AfterCaptureTask::UploadImageToHost => "Upload image to host",
            AfterCaptureTask::ShowInExplorer => "Show file in explorer",
        };
        f.write_str(text)
    }
}

/// Task performed once an upload finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AfterUploadTask {
    ShortenUrl,
    CopyUrlToClipboard,
    OpenUrl,
    ShowQrCode,
}

impl fmt::Display for AfterUploadTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            AfterUploadTask::ShortenUrl => "Shorten URL",
            AfterUploadTask::CopyUrlToClipboard => "Copy URL to clipboard",
            AfterUploadTask::OpenUrl => "Open URL",
            AfterUploadTask::ShowQrCode => "Show QR code window",
        };
        f.write_str(text)
    }
}

/// A selectable quick task preset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    /// Display name; a description is generated from the tasks when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub after_capture_tasks: Vec<AfterCaptureTask>,
    #[serde(default)]
    pub after_upload_tasks: Vec<AfterUploadTask>,
}

impl Preset {
    pub fn new(
        name: &str,
        after_capture_tasks: &[AfterCaptureTask],
        after_upload_tasks: &[AfterUploadTask],
    ) -> Self {
        Self {
            name: Some(name.to_string()),
            after_capture_tasks: after_capture_tasks.to_vec(),
            after_upload_tasks: after_upload_tasks.to_vec(),
        }
    }

    /// A preset that only marks a separator in the menu
    pub fn separator() -> Self {
        Self::default()
    }

    /// A preset is selectable once it performs at least one after-capture task
    pub fn is_valid(&self) -> bool {
        !self.after_capture_tasks.is_empty()
    }

    pub fn has_after_capture_task(&self, task: AfterCaptureTask) -> bool {
        self.after_capture_tasks.contains(&task)
    }

    pub fn has_after_upload_task(&self, task: AfterUploadTask) -> bool {
        self.after_upload_tasks.contains(&task)
    }

    pub fn uploads(&self) -> bool {
        self.has_after_capture_task(AfterCaptureTask::UploadImageToHost)
    }

    /// Label for menu toolkits that treat `&` as a mnemonic prefix
    pub fn menu_label(&self) -> String {
        self.to_string().replace('&', "&&")
    }

    fn describe_tasks(&self) -> String {
        let mut parts: Vec<String> = self
            .after_capture_tasks
            .iter()
            .map(ToString::to_string)
            .collect();

        // After-upload tasks only run when something gets uploaded
        if self.uploads() {
            parts.extend(self.after_upload_tasks.iter().map(ToString::to_string));
        }

        parts.join(", ")
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => f.write_str(name),
            _ => f.write_str(&self.describe_tasks()),
        }
    }
}

/// Presets offered when the user has not configured any
pub fn default_presets() -> Vec<Preset> {
    use AfterCaptureTask::*;
    use AfterUploadTask::*;

    vec![
        Preset::new(
            "Save, Upload, Copy URL",
            &[SaveImageToFile, UploadImageToHost],
            &[CopyUrlToClipboard],
        ),
        Preset::new(
            "Save, Copy image",
            &[SaveImageToFile, CopyImageToClipboard],
            &[],
        ),
        Preset::new(
            "Save, Copy image file",
            &[SaveImageToFile, CopyFileToClipboard],
            &[],
        ),
        Preset::new(
            "Annotate, Save, Upload, Copy URL",
            &[AnnotateImage, SaveImageToFile, UploadImageToHost],
            &[CopyUrlToClipboard],
        ),
        Preset::new(
            "Annotate, Save, Copy image",
            &[AnnotateImage, SaveImageToFile, CopyImageToClipboard],
            &[],
        ),
        Preset::separator(),
        Preset::new("Upload, Copy URL", &[UploadImageToHost], &[CopyUrlToClipboard]),
        Preset::new("Save", &[SaveImageToFile], &[]),
        Preset::new("Copy image", &[CopyImageToClipboard], &[]),
        Preset::new("Annotate", &[AnnotateImage], &[]),
    ]
}
