//! User-facing error taxonomy for a download operation.
//!
//! These are the errors the front end surfaces verbatim. Internal fetch
//! failures (proxy transport errors, non-2xx statuses) stay `anyhow` inside
//! the fallback chain and never reach the user individually.

use thiserror::Error;

/// Errors a single user-triggered operation can end in.
#[derive(Debug, Error)]
pub enum VsixError {
    /// Input was not a parseable URL.
    #[error("Invalid URL format: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// URL parsed but carried no `itemName` query parameter.
    #[error("Invalid marketplace URL. Missing itemName parameter.")]
    MissingItemName,

    /// `itemName` had fewer than two dot-separated segments.
    #[error("Invalid itemName format. Expected: Publisher.ExtensionName")]
    MalformedItemName,

    /// Both fetch strategies were exhausted, or a fetched page matched no
    /// version pattern.
    #[error("Could not extract version from marketplace page. Please check the URL.")]
    VersionNotFound,

    /// Clipboard write failed. Best-effort only; never aborts the main flow.
    #[error("Failed to copy to clipboard: {0}")]
    ClipboardWriteFailed(String),
}
