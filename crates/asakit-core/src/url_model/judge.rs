//! Display-time judgements on user-supplied image and metadata URLs.

use url::Url;

use super::ipfs::{self, GATEWAY_PATH};
use super::{UrlJudgement, UrlNormalizer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Target {
    Image,
    Metadata,
}

pub(super) fn judge(normalizer: &UrlNormalizer, input: &str, target: Target) -> UrlJudgement {
    let s = input.trim();
    if s.is_empty() {
        return UrlJudgement::invalid("Please provide a URL");
    }

    if ipfs::is_content_addressed(s) {
        return UrlJudgement::note(format!(
            "IPFS reference detected; it will be fetched through {}",
            normalizer.gateway()
        ));
    }

    if s.contains(GATEWAY_PATH) {
        return UrlJudgement::note("IPFS gateway URL detected; the content hash will be extracted");
    }

    let parsed = match Url::parse(&normalizer.rewrite_to_fetchable(s)) {
        Ok(u) => u,
        Err(_) => return UrlJudgement::invalid("Invalid URL format"),
    };
    if !matches!(parsed.scheme(), "http" | "https") {
        return UrlJudgement::invalid("URL must use HTTP or HTTPS");
    }

    match target {
        Target::Image => UrlJudgement::valid("Valid image URL"),
        Target::Metadata => {
            let path = parsed.path().to_ascii_lowercase();
            if path.ends_with(".json") || path.contains("metadata") {
                UrlJudgement::valid("Valid metadata URL")
            } else {
                UrlJudgement::warning("URL does not end in .json; it may not return a JSON document")
            }
        }
    }
}
