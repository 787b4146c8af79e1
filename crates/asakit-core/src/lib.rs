pub mod config;
pub mod logging;

pub mod asset;
pub mod checksum;
pub mod explorer;
pub mod fetch_metadata;
pub mod metadata;
pub mod token_config;
pub mod url_model;
pub mod validate;
