//! Direct fetch strategy: plain GET of the marketplace page.
//!
//! Second in the strategy order: the proxy stays the primary path and the
//! direct request only runs when the proxy fails. Marketplace hosts behind
//! restrictive networks may reject it; that is an ordinary strategy failure.

use anyhow::Result;

use super::{http_get, FetchStrategy};

/// Fetches the page straight from the marketplace host.
pub struct DirectFetch;

impl FetchStrategy for DirectFetch {
    fn name(&self) -> &'static str {
        "direct"
    }

    fn fetch_page(&self, page_url: &str) -> Result<String> {
        http_get(page_url)
    }
}
