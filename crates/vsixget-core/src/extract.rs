//! Version extraction from fetched page bodies.
//!
//! An ordered table of labeled regex extractors is applied against the HTML;
//! the first capturing match wins. The table is data: adding a pattern never
//! touches call sites.

use once_cell::sync::Lazy;
use regex::Regex;

/// A labeled pattern. The label only feeds logging (which extractor matched).
pub struct VersionExtractor {
    pub label: &'static str,
    pattern: Regex,
}

impl VersionExtractor {
    fn new(label: &'static str, pattern: &str) -> Self {
        Self {
            label,
            // Patterns are compile-time constants; a bad one is a programmer error.
            pattern: Regex::new(pattern).expect("invalid version extractor pattern"),
        }
    }

    /// First capture group in `text`, if the pattern matches.
    pub fn extract(&self, text: &str) -> Option<String> {
        self.pattern
            .captures(text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
    }
}

/// Extraction priority order, highest first. Marketplace pages usually embed a
/// JSON blob with the version; the path-based patterns are the last resort.
static EXTRACTORS: Lazy<Vec<VersionExtractor>> = Lazy::new(|| {
    vec![
        VersionExtractor::new("json-version", r#""version"\s*:\s*"([\d.]+)""#),
        VersionExtractor::new("data-attribute", r#"data-version\s*=\s*"([\d.]+)""#),
        VersionExtractor::new("text-label", r#"(?i)Version["\s:]+([\d.]+)"#),
        VersionExtractor::new("package-path", r"vsextensions/[^/]+/([\d.]+)/"),
        VersionExtractor::new("vspackage-path", r"/vsextensions/[^/]+/([\d.]+)/vspackage"),
    ]
});

/// A version string pulled out of a page body, with the label of the extractor
/// that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersion {
    pub value: String,
    pub matched_by: &'static str,
}

/// Runs the extractor table against `body` in priority order; first match wins.
pub fn extract_version(body: &str) -> Option<ResolvedVersion> {
    for extractor in EXTRACTORS.iter() {
        if let Some(value) = extractor.extract(body) {
            tracing::debug!(extractor = extractor.label, version = %value, "version matched");
            return Some(ResolvedVersion {
                value,
                matched_by: extractor.label,
            });
        }
    }
    None
}
