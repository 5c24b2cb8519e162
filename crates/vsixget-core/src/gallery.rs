//! Gallery download URL synthesis and local filename derivation.

/// A synthesized download: the gallery package URL plus the filename to save
/// it under locally. Pure function of (reference, version); no I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadArtifact {
    pub url: String,
    pub suggested_filename: String,
}

/// Builds the canonical gallery package endpoint URL.
pub fn download_url(host: &str, publisher: &str, extension: &str, version: &str) -> String {
    format!(
        "{}/_apis/public/gallery/publishers/{}/vsextensions/{}/{}/vspackage",
        host.trim_end_matches('/'),
        publisher,
        extension,
        version
    )
}

/// Local filename for a package: `<extension>-<version>.vsix`, sanitized.
pub fn suggested_filename(extension: &str, version: &str) -> String {
    sanitize_filename(&format!("{}-{}.vsix", extension, version))
}

/// Synthesizes the full [`DownloadArtifact`] for an item at `version`.
pub fn artifact(host: &str, publisher: &str, extension: &str, version: &str) -> DownloadArtifact {
    DownloadArtifact {
        url: download_url(host, publisher, extension, version),
        suggested_filename: suggested_filename(extension, version),
    }
}

/// Linux NAME_MAX.
const MAX_FILENAME_BYTES: usize = 255;

/// Makes a candidate filename safe for a Linux filesystem: path separators,
/// NUL, control characters, and whitespace become `_` (runs collapsed), then
/// leading/trailing dots, spaces, and underscores are trimmed and the result
/// is capped at 255 bytes on a char boundary.
fn sanitize_filename(candidate: &str) -> String {
    let mut out = String::with_capacity(candidate.len());
    for c in candidate.chars() {
        let keep = !(c == '/' || c == '\\' || c == '\0' || c.is_control() || c.is_whitespace());
        if keep {
            out.push(c);
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }
    let trimmed = out.trim_matches(|c| c == '.' || c == '_' || c == ' ');

    if trimmed.len() <= MAX_FILENAME_BYTES {
        return trimmed.to_string();
    }
    let mut cut = MAX_FILENAME_BYTES;
    while cut > 0 && !trimmed.is_char_boundary(cut) {
        cut -= 1;
    }
    trimmed[..cut].to_string()
}
