//! Token metadata documents.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const SAMPLE_TITLE: &str = "Demo Token";
pub const SAMPLE_DESCRIPTION: &str = "Token created by the demo frontend";

/// The metadata document a token's asset URL points at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub external_url: String,
}

impl TokenMetadata {
    /// As a key/value map, the shape [`crate::token_config::TokenConfig::metadata`] carries.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("title".into(), Value::String(self.title.clone()));
        map.insert("description".into(), Value::String(self.description.clone()));
        map.insert("image".into(), Value::String(self.image.clone()));
        map.insert("external_url".into(), Value::String(self.external_url.clone()));
        map
    }
}

/// Sample metadata; unset fields take the demo defaults and an empty image.
pub fn sample_metadata(
    title: Option<&str>,
    description: Option<&str>,
    image_url: Option<&str>,
) -> TokenMetadata {
    TokenMetadata {
        title: title.unwrap_or(SAMPLE_TITLE).to_string(),
        description: description.unwrap_or(SAMPLE_DESCRIPTION).to_string(),
        image: image_url.unwrap_or_default().to_string(),
        external_url: String::new(),
    }
}
