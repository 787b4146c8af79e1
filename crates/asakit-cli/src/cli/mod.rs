//! CLI for the asakit ASA toolkit.

mod commands;

use anyhow::Result;
use asakit_core::config;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use commands::{
    run_check_url, run_completions, run_defaults, run_explorer, run_fetch_metadata, run_man,
    run_prepare, run_rewrite, run_sample_metadata, run_validate, UrlTarget,
};

/// Top-level CLI for asakit.
#[derive(Debug, Parser)]
#[command(name = "asakit")]
#[command(about = "asakit: validate token configs and metadata URLs before minting an ASA", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Validate a token configuration file (JSON, or TOML by extension).
    Validate {
        /// Path to the configuration draft.
        path: PathBuf,
        /// Fill unset fields from the defaults before validating.
        #[arg(long)]
        with_defaults: bool,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Judge an image URL or IPFS reference.
    CheckImage {
        url: String,
    },

    /// Judge a metadata URL or IPFS reference.
    CheckMetadata {
        url: String,
    },

    /// Print the fetchable (gateway) form of a URL or IPFS reference.
    Rewrite {
        url: String,
    },

    /// Print the effective default token configuration as JSON.
    Defaults,

    /// Print a sample metadata document as JSON.
    SampleMetadata {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Image URL or IPFS reference.
        #[arg(long)]
        image: Option<String>,
    },

    /// Validate a draft and print the asset-creation parameters for SENDER.
    Prepare {
        /// Path to the configuration draft.
        path: PathBuf,
        /// Creator address; also used for unset manager/reserve/freeze/clawback.
        #[arg(long, value_name = "ADDRESS")]
        sender: String,
    },

    /// Print the block explorer URL for an application.
    Explorer {
        /// Application id.
        app_id: u64,
        /// Network name (defaults to the configured network).
        #[arg(long)]
        network: Option<String>,
    },

    /// Fetch a metadata document and print it with its SHA-256 digest.
    FetchMetadata {
        url: String,
    },

    /// Generate shell completions.
    Completions {
        shell: Shell,
    },

    /// Generate a man page.
    Man,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Validate {
                path,
                with_defaults,
                json,
            } => run_validate(&cfg, &path, with_defaults, json)?,
            CliCommand::CheckImage { url } => run_check_url(&cfg, &url, UrlTarget::Image)?,
            CliCommand::CheckMetadata { url } => run_check_url(&cfg, &url, UrlTarget::Metadata)?,
            CliCommand::Rewrite { url } => run_rewrite(&cfg, &url),
            CliCommand::Defaults => run_defaults(&cfg)?,
            CliCommand::SampleMetadata {
                title,
                description,
                image,
            } => run_sample_metadata(title.as_deref(), description.as_deref(), image.as_deref())?,
            CliCommand::Prepare { path, sender } => run_prepare(&cfg, &path, &sender)?,
            CliCommand::Explorer { app_id, network } => {
                run_explorer(network.as_deref().unwrap_or(cfg.network.as_str()), app_id)?
            }
            CliCommand::FetchMetadata { url } => run_fetch_metadata(&cfg, url).await?,
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
