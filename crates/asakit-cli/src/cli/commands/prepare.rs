//! `asakit prepare <path> --sender <addr>` – validate and print creation parameters.

use anyhow::Result;
use asakit_core::asset::AssetCreateParams;
use asakit_core::config::AsakitConfig;
use asakit_core::token_config::load_draft;
use asakit_core::url_model::JudgementLevel;
use asakit_core::validate::resolve_token_config;
use std::path::Path;

pub fn run_prepare(cfg: &AsakitConfig, path: &Path, sender: &str) -> Result<()> {
    let draft = load_draft(path)?.overlay(&cfg.token_defaults());
    let config = match resolve_token_config(&draft) {
        Ok(c) => c,
        Err(result) => {
            for error in result.errors() {
                eprintln!("  - {error}");
            }
            anyhow::bail!("{} is not a valid token configuration", path.display());
        }
    };

    if let Some(url) = config.asset_url.as_deref().filter(|u| !u.trim().is_empty()) {
        let judgement = cfg.normalizer().judge_metadata_url(url);
        if cfg.url_policy.blocks(&judgement) {
            anyhow::bail!("asset URL {:?} rejected: {}", url, judgement.message);
        }
        if judgement.level != JudgementLevel::Valid {
            eprintln!("asset URL: {}", judgement.message);
        }
    }

    let params = AssetCreateParams::new(&config, sender);
    tracing::info!(unit_name = %params.unit_name, sender, "prepared asset creation");
    println!("{}", serde_json::to_string_pretty(&params)?);
    Ok(())
}
