//! CLI for the vsixget package fetcher.

mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vsixget_core::config;

use commands::{run_get, run_interactive};

/// Top-level CLI for the vsixget package fetcher.
#[derive(Debug, Parser)]
#[command(name = "vsixget")]
#[command(
    about = "Fetch extension packages (VSIX) from a marketplace item page URL",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve the latest version behind a marketplace item URL and download its package.
    Get {
        /// Marketplace item page URL (…/items?itemName=Publisher.Extension).
        url: String,

        /// Directory to save the package into (default: config download_dir, else the current directory).
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,

        /// Resolve and print the download link without downloading.
        #[arg(long)]
        link_only: bool,

        /// Also place the download link on the system clipboard.
        #[arg(long)]
        copy: bool,
    },

    /// Interactive prompt loop: paste URLs, `copy` the last link, `quit` to exit.
    Interactive,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Get {
                url,
                dir,
                link_only,
                copy,
            } => run_get(&cfg, &url, dir, link_only, copy).await?,
            CliCommand::Interactive => run_interactive(&cfg).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
