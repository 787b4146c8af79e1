//! `asakit explorer <app-id>` – print the explorer page for an application.

use anyhow::Result;
use asakit_core::explorer::explorer_app_url;

pub fn run_explorer(network: &str, app_id: u64) -> Result<()> {
    match explorer_app_url(network, app_id) {
        Some(url) => {
            println!("{url}");
            Ok(())
        }
        None => anyhow::bail!("no public explorer for network {:?}", network),
    }
}
