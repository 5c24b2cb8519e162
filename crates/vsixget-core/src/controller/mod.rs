//! Operation controller: orchestrates parse → resolve → synthesize → download
//! and drives the view state machine.
//!
//! One trigger is one independent operation; nothing persists across triggers
//! except the last displayed link (for the copy affordance).

mod view;

pub use view::{ItemInfo, Render, VersionSlot, ViewState};

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tokio::task::JoinHandle;

use crate::download;
use crate::error::VsixError;
use crate::fetch::FetchStrategy;
use crate::gallery::{self, DownloadArtifact};
use crate::marketplace::{parse_marketplace_url, MarketplaceReference};
use crate::resolver::resolve_version;

/// Outcome of a successful trigger: the synthesized artifact plus the
/// initiated download task, when a download directory is configured.
///
/// The controller never awaits the task itself; the front end decides whether
/// to (one-shot `get` does, the interactive loop does not).
pub struct DownloadHandle {
    pub artifact: DownloadArtifact,
    pub task: Option<JoinHandle<Result<(PathBuf, u64)>>>,
}

/// Drives one operation at a time against a marketplace host.
pub struct Controller<R: Render> {
    host: String,
    strategies: Arc<Vec<Box<dyn FetchStrategy>>>,
    /// Target directory for initiated downloads; None = link-only.
    download_dir: Option<PathBuf>,
    renderer: R,
    last_link: Option<String>,
}

impl<R: Render> Controller<R> {
    pub fn new(
        host: impl Into<String>,
        strategies: Vec<Box<dyn FetchStrategy>>,
        download_dir: Option<PathBuf>,
        renderer: R,
    ) -> Self {
        Self {
            host: host.into(),
            strategies: Arc::new(strategies),
            download_dir,
            renderer,
            last_link: None,
        }
    }

    /// Link currently on display, if the last operation reached `Success`.
    pub fn last_link(&self) -> Option<&str> {
        self.last_link.as_deref()
    }

    /// Runs one user-triggered operation end to end.
    ///
    /// Every outcome is rendered; the return value only exists so front ends
    /// can await or report the initiated download.
    pub async fn trigger(&mut self, input: &str) -> Option<DownloadHandle> {
        let input = input.trim();
        if input.is_empty() {
            self.renderer.render(&ViewState::Error {
                message: "Please enter a marketplace URL.".to_string(),
            });
            return None;
        }

        // Entering Loading clears previous error/result display and disables
        // the action control until Success or Error.
        self.renderer.render(&ViewState::Loading { info: None });

        let reference = match parse_marketplace_url(input) {
            Ok(r) => r,
            Err(err) => {
                self.render_error(&err);
                return None;
            }
        };

        // Partial info straight after parsing: version still pending.
        self.renderer.render(&ViewState::Loading {
            info: Some(item_info(&reference, VersionSlot::Pending)),
        });

        let version = match self.resolve(&reference).await {
            Ok(v) => v,
            Err(err) => {
                self.render_error(&err);
                return None;
            }
        };

        let artifact = gallery::artifact(
            &self.host,
            &reference.publisher,
            &reference.extension,
            &version,
        );
        self.last_link = Some(artifact.url.clone());
        self.renderer.render(&ViewState::Success {
            info: item_info(&reference, VersionSlot::Found(version)),
            link: artifact.url.clone(),
            filename: artifact.suggested_filename.clone(),
        });

        // Initiate the download without awaiting it; the action control is
        // usable again as soon as Success renders.
        let task = self.download_dir.clone().map(|dir| {
            let artifact = artifact.clone();
            tokio::task::spawn_blocking(move || download::download_to_dir(&artifact, &dir))
        });

        Some(DownloadHandle { artifact, task })
    }

    /// Resolution runs blocking curl; hop onto the blocking pool.
    async fn resolve(&self, reference: &MarketplaceReference) -> Result<String, VsixError> {
        let strategies = Arc::clone(&self.strategies);
        let host = self.host.clone();
        let reference = reference.clone();
        let joined = tokio::task::spawn_blocking(move || {
            resolve_version(&reference, &host, &strategies)
        })
        .await;
        match joined {
            Ok(result) => result.map(|v| v.value),
            // A panicked resolve task is indistinguishable from a failed
            // resolution as far as the user is concerned.
            Err(join_err) => {
                tracing::error!(error = %join_err, "resolve task failed");
                Err(VsixError::VersionNotFound)
            }
        }
    }

    fn render_error(&mut self, err: &VsixError) {
        self.renderer.render(&ViewState::Error {
            message: err.to_string(),
        });
    }
}

fn item_info(reference: &MarketplaceReference, version: VersionSlot) -> ItemInfo {
    ItemInfo {
        publisher: reference.publisher.clone(),
        extension: reference.extension.clone(),
        version,
    }
}
