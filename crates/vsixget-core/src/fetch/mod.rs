//! Page fetch strategies.
//!
//! Version resolution tries an ordered list of strategies: the CORS-bypass
//! proxy first, then a direct fetch of the marketplace page. Each strategy
//! either yields the raw page body or fails; failures are logged and the next
//! strategy is tried. All fetching is blocking curl; call from
//! `spawn_blocking` in async code.

mod direct;
mod http;
mod proxy;

pub use direct::DirectFetch;
pub use http::http_get;
pub use proxy::ProxyFetch;

use anyhow::Result;

/// A way of obtaining the raw body of a marketplace page.
pub trait FetchStrategy: Send + Sync {
    /// Short name for logging ("proxy", "direct").
    fn name(&self) -> &'static str;

    /// Fetches `page_url` and returns the page body. Any transport error,
    /// non-2xx status, or unusable response is an `Err`.
    fn fetch_page(&self, page_url: &str) -> Result<String>;
}

/// The standard strategy order: proxy first, direct fetch as fallback.
pub fn default_strategies(proxy_base: &str) -> Vec<Box<dyn FetchStrategy>> {
    vec![
        Box::new(ProxyFetch::new(proxy_base)),
        Box::new(DirectFetch),
    ]
}
