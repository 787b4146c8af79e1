//! `asakit fetch-metadata <url>` – fetch a metadata document.

use anyhow::{Context, Result};
use asakit_core::config::AsakitConfig;
use asakit_core::fetch_metadata::fetch_metadata;

pub async fn run_fetch_metadata(cfg: &AsakitConfig, url: String) -> Result<()> {
    let normalizer = cfg.normalizer();
    let policy = cfg.url_policy;
    let fetched = tokio::task::spawn_blocking(move || fetch_metadata(&normalizer, policy, &url))
        .await
        .context("fetch task panicked")??;

    println!("url:    {}", fetched.url);
    println!("sha256: {}", fetched.sha256);
    println!("{}", serde_json::to_string_pretty(&fetched.document)?);
    Ok(())
}
