//! `asakit defaults` – print the effective default token configuration.

use anyhow::Result;
use asakit_core::config::AsakitConfig;
use asakit_core::validate::resolve_token_config;

pub fn run_defaults(cfg: &AsakitConfig) -> Result<()> {
    let config = resolve_token_config(&cfg.token_defaults())
        .map_err(|result| anyhow::anyhow!("configured [defaults] are invalid: {result}"))?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
