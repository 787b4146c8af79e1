//! CLI command handlers, one file per command.

mod check_url;
mod completions;
mod defaults;
mod explorer;
mod fetch_metadata;
mod prepare;
mod rewrite;
mod sample_metadata;
mod validate;

pub use check_url::{run_check_url, UrlTarget};
pub use completions::{run_completions, run_man};
pub use defaults::run_defaults;
pub use explorer::run_explorer;
pub use fetch_metadata::run_fetch_metadata;
pub use prepare::run_prepare;
pub use rewrite::run_rewrite;
pub use sample_metadata::run_sample_metadata;
pub use validate::run_validate;
