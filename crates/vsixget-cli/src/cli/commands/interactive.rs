//! `vsixget interactive` – prompt loop.
//!
//! Each pasted URL is one operation. Initiated downloads run in the
//! background and never block the prompt; their completion is reported when
//! finished (or drained on exit). `copy` places the last displayed link on
//! the clipboard with a transient acknowledgment.

use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tokio::task::JoinHandle;
use vsixget_core::clipboard;
use vsixget_core::config::VsixgetConfig;
use vsixget_core::controller::Controller;
use vsixget_core::fetch;

use crate::cli::render::TermRenderer;

type DownloadTask = JoinHandle<Result<(PathBuf, u64)>>;

pub async fn run_interactive(cfg: &VsixgetConfig) -> Result<()> {
    let download_dir = match cfg.download_dir.clone().map(PathBuf::from) {
        Some(d) => d,
        None => std::env::current_dir()?,
    };
    let mut controller = Controller::new(
        cfg.marketplace_host.clone(),
        fetch::default_strategies(&cfg.proxy_base),
        Some(download_dir),
        TermRenderer,
    );

    println!("Paste a marketplace item URL. Commands: copy, quit.");
    let mut pending: Vec<DownloadTask> = Vec::new();
    let mut line = String::new();

    loop {
        reap_finished(&mut pending).await;

        print!("> ");
        std::io::stdout().flush()?;
        line.clear();
        if std::io::stdin().read_line(&mut line)? == 0 {
            break; // EOF
        }

        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "copy" => copy_last_link(&controller, cfg.copy_ack_secs).await,
            input => {
                if let Some(handle) = controller.trigger(input).await {
                    if let Some(task) = handle.task {
                        println!("Download started: {}", handle.artifact.suggested_filename);
                        pending.push(task);
                    }
                }
            }
        }
    }

    // Drain whatever is still in flight before exiting.
    for task in pending {
        report_download(task.await);
    }
    Ok(())
}

/// Copy affordance: independent of the main flow, with a transient "Copied"
/// acknowledgment that reverts after the configured duration.
async fn copy_last_link<R: vsixget_core::controller::Render>(
    controller: &Controller<R>,
    ack_secs: u64,
) {
    let Some(link) = controller.last_link() else {
        println!("Nothing to copy yet.");
        return;
    };
    match clipboard::copy_text(link) {
        Ok(()) => {
            print!("✓ Copied!");
            let _ = std::io::stdout().flush();
            tokio::time::sleep(Duration::from_secs(ack_secs)).await;
            print!("\r         \r");
            let _ = std::io::stdout().flush();
        }
        Err(err) => eprintln!("✗ {}", err),
    }
}

/// Reports any background download that finished since the last prompt.
async fn reap_finished(pending: &mut Vec<DownloadTask>) {
    let mut i = 0;
    while i < pending.len() {
        if pending[i].is_finished() {
            let task = pending.swap_remove(i);
            report_download(task.await);
        } else {
            i += 1;
        }
    }
}

fn report_download(joined: Result<Result<(PathBuf, u64)>, tokio::task::JoinError>) {
    match joined {
        Ok(Ok((path, bytes))) => println!("Saved {} ({} bytes)", path.display(), bytes),
        Ok(Err(err)) => eprintln!("✗ Download failed: {:#}", err),
        Err(err) => eprintln!("✗ Download task failed: {}", err),
    }
}
