//! Marketplace item URL parsing.
//!
//! Extracts the `itemName` query parameter from a pasted marketplace page URL
//! and splits it into publisher and extension name.

use crate::error::VsixError;
use url::Url;

/// Identity of a marketplace item, derived once from the input URL.
///
/// `item_identifier` is the full `Publisher.Extension` token; `publisher` is
/// its first dot-segment, `extension` the remaining segments rejoined (an
/// extension name may itself contain dots).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketplaceReference {
    pub publisher: String,
    pub extension: String,
    pub item_identifier: String,
}

impl MarketplaceReference {
    /// Canonical page URL for this item on `host`, with the identifier
    /// percent-encoded into the `itemName` query parameter.
    pub fn item_page_url(&self, host: &str) -> String {
        let mut url = format!("{}/items", host.trim_end_matches('/'));
        // Url::parse_with_params handles the encoding; fall back to a plain
        // format only if the host itself is unparseable (callers validated it).
        match Url::parse_with_params(&url, &[("itemName", self.item_identifier.as_str())]) {
            Ok(u) => u.to_string(),
            Err(_) => {
                url.push_str("?itemName=");
                url.push_str(&self.item_identifier);
                url
            }
        }
    }
}

/// Parses a pasted marketplace page URL into a [`MarketplaceReference`].
///
/// Fails with [`VsixError::InvalidUrl`] on unparseable input,
/// [`VsixError::MissingItemName`] when the query parameter is absent, and
/// [`VsixError::MalformedItemName`] when the identifier has no `.` separator.
pub fn parse_marketplace_url(raw: &str) -> Result<MarketplaceReference, VsixError> {
    let url = Url::parse(raw)?;

    let item_identifier = url
        .query_pairs()
        .find(|(k, _)| k == "itemName")
        .map(|(_, v)| v.into_owned())
        .ok_or(VsixError::MissingItemName)?;

    let mut parts = item_identifier.split('.');
    let publisher = parts.next().unwrap_or_default().to_string();
    let extension = parts.collect::<Vec<_>>().join(".");
    if publisher.is_empty() || extension.is_empty() {
        return Err(VsixError::MalformedItemName);
    }

    Ok(MarketplaceReference {
        publisher,
        extension,
        item_identifier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_publisher_and_extension() {
        let r = parse_ok("https://marketplace.visualstudio.com/items?itemName=ms-python.python");
        assert_eq!(r.publisher, "ms-python");
        assert_eq!(r.extension, "python");
        assert_eq!(r.item_identifier, "ms-python.python");
    }

    #[test]
    fn extension_keeps_inner_dots() {
        let r = parse_ok("https://host.example/items?itemName=Pub.Ext.Sub");
        assert_eq!(r.publisher, "Pub");
        assert_eq!(r.extension, "Ext.Sub");
    }

    #[test]
    fn missing_item_name() {
        let err = parse_marketplace_url("https://host.example/items?other=x").unwrap_err();
        assert!(matches!(err, VsixError::MissingItemName));
    }

    #[test]
    fn item_name_without_dot() {
        let err = parse_marketplace_url("https://host.example/items?itemName=nodots").unwrap_err();
        assert!(matches!(err, VsixError::MalformedItemName));
    }

    #[test]
    fn not_a_url() {
        let err = parse_marketplace_url("definitely not a url").unwrap_err();
        assert!(matches!(err, VsixError::InvalidUrl(_)));
    }

    #[test]
    fn page_url_encodes_identifier() {
        let r = MarketplaceReference {
            publisher: "pub".into(),
            extension: "ext".into(),
            item_identifier: "pub.ext".into(),
        };
        assert_eq!(
            r.item_page_url("https://marketplace.visualstudio.com"),
            "https://marketplace.visualstudio.com/items?itemName=pub.ext"
        );
        // Trailing slash on the host does not double up.
        assert_eq!(
            r.item_page_url("https://host.example/"),
            "https://host.example/items?itemName=pub.ext"
        );
    }

    fn parse_ok(raw: &str) -> MarketplaceReference {
        parse_marketplace_url(raw).expect("parse should succeed")
    }
}
