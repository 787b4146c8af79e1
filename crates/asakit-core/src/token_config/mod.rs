//! Token (ASA) configuration.
//!
//! [`TokenConfigDraft`] is what a form or file hands us: every field optional
//! and loosely typed. [`TokenConfig`] is the validated, typed result produced
//! by [`crate::validate::resolve_token_config`].

mod draft;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::validate::{resolve_token_config, AddressField, ValidationResult};

pub use draft::{load_draft, DraftError};

pub const DEFAULT_TOTAL: u64 = 1_000_000;
pub const DEFAULT_UNIT_NAME: &str = "CUSTOM";
pub const DEFAULT_ASSET_NAME: &str = "Custom Token";

/// A validated asset configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenConfig {
    /// Total supply in base units.
    pub total: u64,
    pub decimals: u32,
    pub default_frozen: bool,
    pub unit_name: String,
    pub asset_name: String,
    #[serde(default, rename = "assetURL", skip_serializing_if = "Option::is_none")]
    pub asset_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserve: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeze: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clawback: Option<String>,
    /// Free-form metadata; carried along, never validated.
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            total: DEFAULT_TOTAL,
            decimals: 0,
            default_frozen: false,
            unit_name: DEFAULT_UNIT_NAME.to_string(),
            asset_name: DEFAULT_ASSET_NAME.to_string(),
            asset_url: Some(String::new()),
            manager: None,
            reserve: None,
            freeze: None,
            clawback: None,
            metadata: Map::new(),
        }
    }
}

impl TokenConfig {
    /// Overlays `draft` onto the built-in defaults and validates the result.
    pub fn from_draft(draft: &TokenConfigDraft) -> Result<Self, ValidationResult> {
        resolve_token_config(&draft.overlay_defaults())
    }

    pub fn address(&self, field: AddressField) -> Option<&str> {
        match field {
            AddressField::Manager => self.manager.as_deref(),
            AddressField::Reserve => self.reserve.as_deref(),
            AddressField::Freeze => self.freeze.as_deref(),
            AddressField::Clawback => self.clawback.as_deref(),
        }
    }
}

/// Partially populated, loosely typed configuration as collected from input.
///
/// Fields whose type is itself checked by validation are kept as raw JSON
/// values so a wrong type is reported as a rule violation rather than a
/// parse failure. An explicit `null` is kept as `Some(Value::Null)` so it is
/// judged like any other wrongly typed value; only a missing key is `None`.
/// `url` is accepted as an alias for `assetURL`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenConfigDraft {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub total: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub decimals: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub default_frozen: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub unit_name: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub asset_name: Option<Value>,
    #[serde(
        default,
        rename = "assetURL",
        alias = "url",
        skip_serializing_if = "Option::is_none"
    )]
    pub asset_url: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub manager: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub reserve: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub freeze: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub clawback: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

/// Present keys, `null` included, deserialize to `Some`.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

impl TokenConfigDraft {
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn address(&self, field: AddressField) -> Option<&Value> {
        match field {
            AddressField::Manager => self.manager.as_ref(),
            AddressField::Reserve => self.reserve.as_ref(),
            AddressField::Freeze => self.freeze.as_ref(),
            AddressField::Clawback => self.clawback.as_ref(),
        }
    }

    /// Fields set here win; unset fields fall through to `base`.
    pub fn overlay(&self, base: &TokenConfigDraft) -> TokenConfigDraft {
        fn pick<T: Clone>(top: &Option<T>, base: &Option<T>) -> Option<T> {
            top.as_ref().or(base.as_ref()).cloned()
        }
        TokenConfigDraft {
            total: pick(&self.total, &base.total),
            decimals: pick(&self.decimals, &base.decimals),
            default_frozen: pick(&self.default_frozen, &base.default_frozen),
            unit_name: pick(&self.unit_name, &base.unit_name),
            asset_name: pick(&self.asset_name, &base.asset_name),
            asset_url: pick(&self.asset_url, &base.asset_url),
            manager: pick(&self.manager, &base.manager),
            reserve: pick(&self.reserve, &base.reserve),
            freeze: pick(&self.freeze, &base.freeze),
            clawback: pick(&self.clawback, &base.clawback),
            metadata: pick(&self.metadata, &base.metadata),
        }
    }

    /// Overlay onto [`TokenConfig::default`].
    pub fn overlay_defaults(&self) -> TokenConfigDraft {
        self.overlay(&TokenConfig::default().into())
    }
}

impl From<TokenConfig> for TokenConfigDraft {
    fn from(cfg: TokenConfig) -> Self {
        let string = |s: Option<String>| s.map(Value::String);
        TokenConfigDraft {
            total: Some(Value::from(cfg.total)),
            decimals: Some(Value::from(cfg.decimals)),
            default_frozen: Some(Value::Bool(cfg.default_frozen)),
            unit_name: Some(Value::String(cfg.unit_name)),
            asset_name: Some(Value::String(cfg.asset_name)),
            asset_url: cfg.asset_url,
            manager: string(cfg.manager),
            reserve: string(cfg.reserve),
            freeze: string(cfg.freeze),
            clawback: string(cfg.clawback),
            metadata: Some(cfg.metadata),
        }
    }
}
