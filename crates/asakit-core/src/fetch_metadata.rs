//! Metadata document fetch.
//!
//! Resolves a user-supplied metadata reference (HTTP(S) URL, gateway URL,
//! `ipfs://` link or bare CID) to a fetchable URL, GETs it with the curl crate
//! and parses the body as JSON. One attempt; failures are reported, not retried.

use anyhow::{Context, Result};
use serde_json::Value;
use std::time::Duration;

use crate::checksum::sha256_hex;
use crate::url_model::{UrlNormalizer, UrlPolicy};

/// Bodies larger than this are abandoned mid-transfer.
pub const MAX_METADATA_BYTES: usize = 1024 * 1024;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);
const TOTAL_TIMEOUT: Duration = Duration::from_secs(30);

/// A fetched metadata document.
#[derive(Debug, Clone)]
pub struct FetchedMetadata {
    /// URL actually requested, after IPFS rewriting.
    pub url: String,
    pub document: Value,
    /// SHA-256 of the raw body, lowercase hex.
    pub sha256: String,
}

/// Fetches the metadata document `input` refers to.
///
/// Under [`UrlPolicy::Strict`] an input judged invalid is refused before any
/// network access. Runs in the current thread; call from `spawn_blocking` if
/// used from async code.
pub fn fetch_metadata(
    normalizer: &UrlNormalizer,
    policy: UrlPolicy,
    input: &str,
) -> Result<FetchedMetadata> {
    let judgement = normalizer.judge_metadata_url(input);
    if policy.blocks(&judgement) {
        anyhow::bail!("refusing to fetch {:?}: {}", input, judgement.message);
    }
    if judgement.is_warning() {
        tracing::warn!(url = input, "{}", judgement.message);
    }

    let url = normalizer.rewrite_to_fetchable(input.trim());
    tracing::debug!(%url, "fetching metadata");
    let body = get(&url)?;
    let document: Value = serde_json::from_slice(&body)
        .with_context(|| format!("metadata at {} is not valid JSON", url))?;

    Ok(FetchedMetadata {
        sha256: sha256_hex(&body),
        url,
        document,
    })
}

fn get(url: &str) -> Result<Vec<u8>> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.connect_timeout(CONNECT_TIMEOUT)?;
    easy.timeout(TOTAL_TIMEOUT)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            if body.len() + data.len() > MAX_METADATA_BYTES {
                // Short write aborts the transfer.
                return Ok(0);
            }
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer
            .perform()
            .with_context(|| format!("GET {} failed", url))?;
    }

    let code = easy.response_code().context("no response code")?;
    if !(200..300).contains(&code) {
        anyhow::bail!("GET {} returned HTTP {}", url, code);
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_refuses_invalid_without_network() {
        let err = fetch_metadata(&UrlNormalizer::default(), UrlPolicy::Strict, "ftp://x/a.json")
            .unwrap_err();
        assert!(err.to_string().contains("URL must use HTTP or HTTPS"));

        let err = fetch_metadata(&UrlNormalizer::default(), UrlPolicy::Strict, "").unwrap_err();
        assert!(err.to_string().contains("Please provide a URL"));
    }
}
