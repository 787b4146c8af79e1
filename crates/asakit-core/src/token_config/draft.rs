//! Loading drafts from JSON or TOML files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::TokenConfigDraft;

/// Failure to read or parse a draft file.
#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    #[error("read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("parse JSON draft {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("parse TOML draft {}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Reads a draft; `.toml` files are parsed as TOML, anything else as JSON.
pub fn load_draft(path: &Path) -> Result<TokenConfigDraft, DraftError> {
    let data = fs::read_to_string(path).map_err(|source| DraftError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let is_toml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("toml"));
    if is_toml {
        TokenConfigDraft::from_toml_str(&data).map_err(|source| DraftError::Toml {
            path: path.to_path_buf(),
            source,
        })
    } else {
        TokenConfigDraft::from_json_str(&data).map_err(|source| DraftError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}
