//! Blocking HTTP GET returning the response body as a string.
//!
//! Uses the curl crate (libcurl). Follows redirects. No read timeout is
//! applied; a hung transfer blocks the operation (single fallback chain, no
//! retry policy).

use anyhow::{Context, Result};
use std::time::Duration;

/// Performs a GET and returns the body as UTF-8 (lossy).
///
/// Non-2xx responses are errors; the fallback chain treats them the same as
/// transport failures. Runs in the current thread; call from `spawn_blocking`
/// if used from async code.
pub fn http_get(url: &str) -> Result<String> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(Duration::from_secs(15))?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform().context("GET request failed")?;
    }

    let code = easy.response_code().context("no response code")?;
    if !(200..300).contains(&code) {
        anyhow::bail!("GET {} returned HTTP {}", url, code);
    }

    Ok(String::from_utf8_lossy(&body).into_owned())
}
