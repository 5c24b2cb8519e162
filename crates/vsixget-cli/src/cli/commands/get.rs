//! `vsixget get <url>` – one-shot resolve and download.

use anyhow::Result;
use std::path::PathBuf;
use vsixget_core::clipboard;
use vsixget_core::config::VsixgetConfig;
use vsixget_core::controller::Controller;
use vsixget_core::fetch;

use crate::cli::render::TermRenderer;

pub async fn run_get(
    cfg: &VsixgetConfig,
    url: &str,
    dir: Option<PathBuf>,
    link_only: bool,
    copy: bool,
) -> Result<()> {
    let download_dir = if link_only {
        None
    } else {
        Some(match dir.or_else(|| cfg.download_dir.clone().map(PathBuf::from)) {
            Some(d) => d,
            None => std::env::current_dir()?,
        })
    };

    let strategies = fetch::default_strategies(&cfg.proxy_base);
    let mut controller = Controller::new(
        cfg.marketplace_host.clone(),
        strategies,
        download_dir,
        TermRenderer,
    );

    let Some(handle) = controller.trigger(url).await else {
        // The renderer already surfaced the failure; exit non-zero.
        anyhow::bail!("operation failed");
    };

    if copy {
        match clipboard::copy_text(&handle.artifact.url) {
            Ok(()) => println!("✓ Copied download link to clipboard."),
            // Best-effort; the download itself goes ahead.
            Err(err) => eprintln!("✗ {}", err),
        }
    }

    if let Some(task) = handle.task {
        let (path, bytes) = task.await??;
        println!("Saved {} ({} bytes)", path.display(), bytes);
    }

    Ok(())
}
