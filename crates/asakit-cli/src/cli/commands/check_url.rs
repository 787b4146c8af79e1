//! `asakit check-image <url>` / `asakit check-metadata <url>` – judge a URL.

use anyhow::Result;
use asakit_core::config::AsakitConfig;
use asakit_core::url_model::{extract_gateway_hash, is_content_addressed};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlTarget {
    Image,
    Metadata,
}

/// Prints the judgement; fails only when the configured policy blocks it.
pub fn run_check_url(cfg: &AsakitConfig, url: &str, target: UrlTarget) -> Result<()> {
    let normalizer = cfg.normalizer();
    let judgement = match target {
        UrlTarget::Image => normalizer.judge_image_url(url),
        UrlTarget::Metadata => normalizer.judge_metadata_url(url),
    };
    println!("{:?}: {}", judgement.level, judgement.message);

    let trimmed = url.trim();
    if is_content_addressed(trimmed) {
        println!("  fetch via: {}", normalizer.rewrite_to_fetchable(trimmed));
    } else if let Some(hash) = extract_gateway_hash(trimmed) {
        println!("  ipfs hash: {hash}");
    }

    if cfg.url_policy.blocks(&judgement) {
        anyhow::bail!("URL rejected: {}", judgement.message);
    }
    Ok(())
}
