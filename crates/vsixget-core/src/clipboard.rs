//! System clipboard access for the copy-link affordance.

use crate::error::VsixError;

/// Writes `text` to the system clipboard.
///
/// Best-effort: failures come back as [`VsixError::ClipboardWriteFailed`] and
/// never abort the primary flow.
pub fn copy_text(text: &str) -> Result<(), VsixError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| VsixError::ClipboardWriteFailed(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| VsixError::ClipboardWriteFailed(e.to_string()))
}
