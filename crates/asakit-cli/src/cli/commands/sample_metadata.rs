//! `asakit sample-metadata` – print a sample metadata document.

use anyhow::Result;
use asakit_core::metadata::sample_metadata;

pub fn run_sample_metadata(
    title: Option<&str>,
    description: Option<&str>,
    image: Option<&str>,
) -> Result<()> {
    let metadata = sample_metadata(title, description, image);
    println!("{}", serde_json::to_string_pretty(&metadata)?);
    Ok(())
}
