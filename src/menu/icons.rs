//! Menu icon hints
//!
//! The toolkit owns the actual image resources; entries only say which one
//! they want.

use crate::preset::{AfterCaptureTask, Preset};

/// Icon requested by a menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconHint {
    Rename,
    Continue,
    Pencil,
    Cross,
    UploadCloud,
    Clipboard,
    Disk,
    Image,
}

/// Pick the icon that best describes what a preset does
///
/// Uploading wins over copying, which wins over saving.
pub fn find_suitable_icon(preset: &Preset) -> IconHint {
    use AfterCaptureTask::*;

    if preset.has_after_capture_task(UploadImageToHost) {
        IconHint::UploadCloud
    } else if preset.has_after_capture_task(CopyImageToClipboard)
        || preset.has_after_capture_task(CopyFileToClipboard)
    {
        IconHint::Clipboard
    } else if preset.has_after_capture_task(SaveImageToFile)
        || preset.has_after_capture_task(SaveImageToFileWithDialog)
    {
        IconHint::Disk
    } else {
        IconHint::Image
    }
}
