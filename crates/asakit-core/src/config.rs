use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::token_config::TokenConfigDraft;
use crate::url_model::{UrlNormalizer, UrlPolicy, DEFAULT_GATEWAY};

/// Global configuration loaded from `~/.config/asakit/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsakitConfig {
    /// Gateway prefix IPFS references are rewritten onto.
    pub gateway_url: String,
    /// Whether invalid URL judgements block `prepare` and `fetch-metadata`.
    #[serde(default)]
    pub url_policy: UrlPolicy,
    /// Network name used for explorer links ("mainnet", "testnet", "betanet").
    pub network: String,
    /// Optional token field overrides applied on top of the built-in defaults.
    #[serde(default)]
    pub defaults: Option<TokenConfigDraft>,
}

impl Default for AsakitConfig {
    fn default() -> Self {
        Self {
            gateway_url: DEFAULT_GATEWAY.to_string(),
            url_policy: UrlPolicy::Strict,
            network: "testnet".to_string(),
            defaults: None,
        }
    }
}

impl AsakitConfig {
    pub fn normalizer(&self) -> UrlNormalizer {
        UrlNormalizer::new(&self.gateway_url)
    }

    /// Built-in token defaults with the `[defaults]` section laid over them.
    pub fn token_defaults(&self) -> TokenConfigDraft {
        let builtin = TokenConfigDraft::default().overlay_defaults();
        match &self.defaults {
            Some(overrides) => overrides.overlay(&builtin),
            None => builtin,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("asakit")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<AsakitConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<AsakitConfig> {
    if !path.exists() {
        let default_cfg = AsakitConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: AsakitConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
