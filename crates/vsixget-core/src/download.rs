//! Single-stream package download to a local file.
//!
//! Streams a plain GET to `<name>.part` in the target directory and renames
//! to the final name on success, so an interrupted transfer never leaves a
//! plausible-looking file behind.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::gallery::DownloadArtifact;

/// Downloads `artifact.url` into `dir` under the suggested filename.
///
/// Returns the final path and the number of bytes written. Blocking; call
/// from `spawn_blocking` in async code.
pub fn download_to_dir(artifact: &DownloadArtifact, dir: &Path) -> Result<(PathBuf, u64)> {
    let final_path = dir.join(&artifact.suggested_filename);
    let temp_path = dir.join(format!("{}.part", artifact.suggested_filename));

    let bytes = fetch_to_file(&artifact.url, &temp_path)?;

    fs::rename(&temp_path, &final_path).with_context(|| {
        format!(
            "renaming {} to {}",
            temp_path.display(),
            final_path.display()
        )
    })?;

    tracing::info!(path = %final_path.display(), bytes, "package saved");
    Ok((final_path, bytes))
}

/// Streams a GET response body into `dest`. Removes the partial file on error.
fn fetch_to_file(url: &str, dest: &Path) -> Result<u64> {
    let result = fetch_to_file_inner(url, dest);
    if result.is_err() {
        let _ = fs::remove_file(dest);
    }
    result
}

fn fetch_to_file_inner(url: &str, dest: &Path) -> Result<u64> {
    let file = fs::File::create(dest)
        .with_context(|| format!("creating {}", dest.display()))?;
    let mut writer = std::io::BufWriter::new(file);
    let mut written: u64 = 0;

    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(Duration::from_secs(15))?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            match writer.write_all(data) {
                Ok(()) => {
                    written += data.len() as u64;
                    Ok(data.len())
                }
                // Signal curl to abort the transfer on storage failure.
                Err(_) => Ok(0),
            }
        })?;
        transfer.perform().context("GET request failed")?;
    }

    let code = easy.response_code().context("no response code")?;
    if !(200..300).contains(&code) {
        anyhow::bail!("GET {} returned HTTP {}", url, code);
    }

    writer.flush().context("flushing download file")?;
    Ok(written)
}
