//! `asakit validate <path>` – check a token configuration draft.

use anyhow::Result;
use asakit_core::config::AsakitConfig;
use asakit_core::token_config::load_draft;
use asakit_core::validate::validate_token_config;
use std::path::Path;

pub fn run_validate(cfg: &AsakitConfig, path: &Path, with_defaults: bool, json: bool) -> Result<()> {
    let mut draft = load_draft(path)?;
    if with_defaults {
        draft = draft.overlay(&cfg.token_defaults());
    }
    let result = validate_token_config(&draft);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if result.is_valid() {
        println!("{}: valid", path.display());
    } else {
        println!("{}: invalid", path.display());
        for error in result.errors() {
            println!("  - {error}");
        }
    }

    if !result.is_valid() {
        anyhow::bail!("{} error(s) in {}", result.issues().len(), path.display());
    }
    Ok(())
}
