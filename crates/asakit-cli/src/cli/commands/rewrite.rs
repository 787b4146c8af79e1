//! `asakit rewrite <url>` – print the fetchable form of a URL.

use asakit_core::config::AsakitConfig;

pub fn run_rewrite(cfg: &AsakitConfig, url: &str) {
    println!("{}", cfg.normalizer().rewrite_to_fetchable(url.trim()));
}
