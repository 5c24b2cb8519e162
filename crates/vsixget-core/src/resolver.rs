//! Latest-version resolution for a marketplace item.
//!
//! Tries each fetch strategy in order; the first successful fetch supplies the
//! only body the extractors run against. A fetched body that matches no
//! pattern is terminal: later strategies are tried on fetch *failure* only,
//! never on a plain non-match.

use crate::error::VsixError;
use crate::extract::{extract_version, ResolvedVersion};
use crate::fetch::FetchStrategy;
use crate::marketplace::MarketplaceReference;

/// Resolves the latest published version of `reference` on `host`.
///
/// Blocking (curl underneath); call from `spawn_blocking` in async code.
/// Returns [`VsixError::VersionNotFound`] once every strategy has failed or
/// the first successful body yields no match.
pub fn resolve_version(
    reference: &MarketplaceReference,
    host: &str,
    strategies: &[Box<dyn FetchStrategy>],
) -> Result<ResolvedVersion, VsixError> {
    let page_url = reference.item_page_url(host);

    for strategy in strategies {
        match strategy.fetch_page(&page_url) {
            Ok(body) => {
                tracing::debug!(
                    strategy = strategy.name(),
                    bytes = body.len(),
                    "page fetched"
                );
                return extract_version(&body).ok_or(VsixError::VersionNotFound);
            }
            Err(err) => {
                // Expected for the proxy when the service is down and for
                // direct fetches behind restrictive networks; fall through.
                tracing::debug!(strategy = strategy.name(), error = %err, "fetch failed");
            }
        }
    }

    Err(VsixError::VersionNotFound)
}
