//! Proxy fetch strategy: retrieve the page through a CORS-bypass fetch proxy.
//!
//! The proxy wraps the target page's raw body in a JSON envelope:
//! `{ "contents": "<body>" }`. The target URL is percent-encoded and appended
//! to the proxy base (e.g. `https://api.allorigins.win/get?url=`).

use anyhow::{Context, Result};
use serde::Deserialize;

use super::{http_get, FetchStrategy};

/// JSON envelope the proxy wraps around the target body.
#[derive(Debug, Deserialize)]
struct ProxyEnvelope {
    contents: String,
}

/// Fetches pages through an intermediary proxy service.
pub struct ProxyFetch {
    proxy_base: String,
}

impl ProxyFetch {
    pub fn new(proxy_base: &str) -> Self {
        Self {
            proxy_base: proxy_base.to_string(),
        }
    }

    /// Full proxy request URL for `page_url`.
    fn proxy_url(&self, page_url: &str) -> String {
        let encoded: String =
            url::form_urlencoded::byte_serialize(page_url.as_bytes()).collect();
        format!("{}{}", self.proxy_base, encoded)
    }
}

impl FetchStrategy for ProxyFetch {
    fn name(&self) -> &'static str {
        "proxy"
    }

    fn fetch_page(&self, page_url: &str) -> Result<String> {
        let body = http_get(&self.proxy_url(page_url))?;
        let envelope: ProxyEnvelope =
            serde_json::from_str(&body).context("malformed proxy envelope")?;
        Ok(envelope.contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proxy_url_encodes_target() {
        let p = ProxyFetch::new("https://proxy.example/get?url=");
        assert_eq!(
            p.proxy_url("https://host.example/items?itemName=a.b"),
            "https://proxy.example/get?url=https%3A%2F%2Fhost.example%2Fitems%3FitemName%3Da.b"
        );
    }

    #[test]
    fn envelope_parses_contents() {
        let env: ProxyEnvelope =
            serde_json::from_str(r#"{"contents":"<html></html>","status":{"http_code":200}}"#)
                .unwrap();
        assert_eq!(env.contents, "<html></html>");
    }

    #[test]
    fn envelope_missing_contents_is_error() {
        assert!(serde_json::from_str::<ProxyEnvelope>(r#"{"status":{}}"#).is_err());
    }
}
