//! Image and metadata URL handling.
//!
//! Judges whether a user-supplied string looks like a usable image or
//! metadata URL and rewrites IPFS references (`ipfs://...`, bare CIDs) into
//! HTTPS gateway URLs. Everything here is pure: malformed input yields an
//! invalid [`UrlJudgement`], never an error.

mod ipfs;
mod judge;

use serde::{Deserialize, Serialize};

pub use ipfs::{
    extract_gateway_hash, is_content_addressed, DEFAULT_GATEWAY, GATEWAY_PATH, IPFS_SCHEME,
};

use judge::Target;

/// Severity of a judgement. Only `Invalid` means the URL is unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JudgementLevel {
    Valid,
    Note,
    Warning,
    Invalid,
}

/// Advisory verdict on a URL, with a message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlJudgement {
    pub level: JudgementLevel,
    pub message: String,
}

impl UrlJudgement {
    fn with_level(level: JudgementLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn valid(message: impl Into<String>) -> Self {
        Self::with_level(JudgementLevel::Valid, message)
    }

    pub fn note(message: impl Into<String>) -> Self {
        Self::with_level(JudgementLevel::Note, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::with_level(JudgementLevel::Warning, message)
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::with_level(JudgementLevel::Invalid, message)
    }

    pub fn is_valid(&self) -> bool {
        self.level != JudgementLevel::Invalid
    }

    pub fn is_warning(&self) -> bool {
        self.level == JudgementLevel::Warning
    }
}

impl Serialize for UrlJudgement {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Wire<'a> {
            is_valid: bool,
            level: JudgementLevel,
            message: &'a str,
        }
        Wire {
            is_valid: self.is_valid(),
            level: self.level,
            message: &self.message,
        }
        .serialize(serializer)
    }
}

/// Whether an invalid judgement stops a submission or fetch.
///
/// Notes and warnings never block under either policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlPolicy {
    /// Report only; the caller proceeds regardless.
    Advisory,
    /// Refuse URLs judged invalid.
    #[default]
    Strict,
}

impl UrlPolicy {
    pub fn blocks(self, judgement: &UrlJudgement) -> bool {
        self == UrlPolicy::Strict && !judgement.is_valid()
    }
}

/// Judges and rewrites URLs against a particular IPFS gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlNormalizer {
    gateway: String,
}

impl Default for UrlNormalizer {
    fn default() -> Self {
        Self {
            gateway: DEFAULT_GATEWAY.to_string(),
        }
    }
}

impl UrlNormalizer {
    /// `gateway` is the prefix CIDs are appended to, e.g. `https://ipfs.io/ipfs/`.
    /// A missing trailing slash is added.
    pub fn new(gateway: &str) -> Self {
        let gateway = gateway.trim();
        let gateway = if gateway.ends_with('/') {
            gateway.to_string()
        } else {
            format!("{gateway}/")
        };
        Self { gateway }
    }

    pub fn gateway(&self) -> &str {
        &self.gateway
    }

    pub fn judge_image_url(&self, s: &str) -> UrlJudgement {
        judge::judge(self, s, Target::Image)
    }

    pub fn judge_metadata_url(&self, s: &str) -> UrlJudgement {
        judge::judge(self, s, Target::Metadata)
    }

    /// Rewrites IPFS references to gateway HTTPS URLs; other input is returned as is.
    pub fn rewrite_to_fetchable(&self, s: &str) -> String {
        ipfs::rewrite_onto_gateway(s, &self.gateway)
    }
}

/// [`UrlNormalizer::judge_image_url`] with the default gateway.
pub fn judge_image_url(s: &str) -> UrlJudgement {
    UrlNormalizer::default().judge_image_url(s)
}

/// [`UrlNormalizer::judge_metadata_url`] with the default gateway.
pub fn judge_metadata_url(s: &str) -> UrlJudgement {
    UrlNormalizer::default().judge_metadata_url(s)
}

/// [`UrlNormalizer::rewrite_to_fetchable`] with the default gateway.
pub fn rewrite_to_fetchable(s: &str) -> String {
    UrlNormalizer::default().rewrite_to_fetchable(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_empty_is_invalid() {
        let j = judge_image_url("");
        assert!(!j.is_valid());
        assert_eq!(j.message, "Please provide a URL");
        assert!(!judge_image_url("   ").is_valid());
    }

    #[test]
    fn image_ipfs_references_get_a_note() {
        let j = judge_image_url("Qm1234...");
        assert!(j.is_valid());
        assert_eq!(j.level, JudgementLevel::Note);
        assert!(j.message.contains("IPFS"));

        let j = judge_image_url("ipfs://QmHash/image.png");
        assert_eq!(j.level, JudgementLevel::Note);
    }

    #[test]
    fn image_gateway_url_gets_a_note() {
        let j = judge_image_url("https://gateway.pinata.cloud/ipfs/QmHash");
        assert!(j.is_valid());
        assert_eq!(j.level, JudgementLevel::Note);
        assert!(j.message.contains("hash will be extracted"));
    }

    #[test]
    fn image_rejects_other_protocols() {
        let j = judge_image_url("ftp://x");
        assert!(!j.is_valid());
        assert_eq!(j.message, "URL must use HTTP or HTTPS");
        assert!(!judge_image_url("javascript:alert(1)").is_valid());
    }

    #[test]
    fn image_rejects_unparsable() {
        let j = judge_image_url("not a url");
        assert!(!j.is_valid());
        assert_eq!(j.message, "Invalid URL format");
        assert!(!judge_image_url("https://").is_valid());
    }

    #[test]
    fn image_plain_https_is_valid() {
        let j = judge_image_url("https://example.com/cat.png");
        assert_eq!(j.level, JudgementLevel::Valid);
        assert!(!j.is_warning());
    }

    #[test]
    fn metadata_json_path_has_no_warning() {
        let j = judge_metadata_url("https://example.com/data.json");
        assert_eq!(j.level, JudgementLevel::Valid);
        assert!(!j.is_warning());

        let j = judge_metadata_url("https://example.com/api/metadata/7");
        assert_eq!(j.level, JudgementLevel::Valid);
    }

    #[test]
    fn metadata_non_json_path_warns() {
        let j = judge_metadata_url("https://example.com/data");
        assert!(j.is_valid());
        assert!(j.is_warning());
        assert!(j.message.contains("JSON"));
    }

    #[test]
    fn metadata_shares_image_failure_modes() {
        assert!(!judge_metadata_url("").is_valid());
        assert!(!judge_metadata_url("ftp://example.com/a.json").is_valid());
        assert!(!judge_metadata_url("not a url").is_valid());
        assert_eq!(
            judge_metadata_url("ipfs://QmHash").level,
            JudgementLevel::Note
        );
    }

    #[test]
    fn rewrite_is_idempotent_on_gateway_form() {
        for s in [
            "ipfs://QmHash",
            "QmHash",
            "https://ipfs.io/ipfs/QmHash",
            "https://example.com/a.json",
        ] {
            let once = rewrite_to_fetchable(s);
            assert_eq!(rewrite_to_fetchable(&once), once, "input {s}");
        }
        assert_eq!(rewrite_to_fetchable("ipfs://QmHash"), "https://ipfs.io/ipfs/QmHash");
    }

    #[test]
    fn rewrite_agrees_with_judge_on_padded_input() {
        for s in [" QmHash", "ipfs://QmHash ", "\tbafyabc"] {
            assert_eq!(judge_metadata_url(s).level, JudgementLevel::Note, "input {s:?}");
            let fetchable = rewrite_to_fetchable(s);
            assert!(fetchable.starts_with("https://ipfs.io/ipfs/"), "input {s:?}");
            assert_eq!(fetchable, rewrite_to_fetchable(s.trim()));
        }
    }

    #[test]
    fn custom_gateway_gets_trailing_slash() {
        let n = UrlNormalizer::new("https://gw.example.org/ipfs");
        assert_eq!(n.gateway(), "https://gw.example.org/ipfs/");
        assert_eq!(
            n.rewrite_to_fetchable("bafyabc"),
            "https://gw.example.org/ipfs/bafyabc"
        );
    }

    #[test]
    fn strict_policy_blocks_only_invalid() {
        let invalid = judge_image_url("ftp://x");
        let warning = judge_metadata_url("https://example.com/data");
        assert!(UrlPolicy::Strict.blocks(&invalid));
        assert!(!UrlPolicy::Strict.blocks(&warning));
        assert!(!UrlPolicy::Advisory.blocks(&invalid));
    }

    #[test]
    fn judgement_serializes_is_valid() {
        let value = serde_json::to_value(judge_metadata_url("https://example.com/data")).unwrap();
        assert_eq!(value["isValid"], serde_json::json!(true));
        assert_eq!(value["level"], serde_json::json!("warning"));
    }
}
