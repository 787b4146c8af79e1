//! Block explorer links for deployed applications.

/// Explorer page for application `app_id` on `network`.
///
/// The network name is matched loosely ("MainNet", "localnet-test", ...);
/// networks without a public explorer (e.g. localnet) give `None`.
pub fn explorer_app_url(network: &str, app_id: u64) -> Option<String> {
    let net = network.to_ascii_lowercase();
    if net.contains("main") {
        Some(format!("https://algoexplorer.io/application/{app_id}"))
    } else if net.contains("test") {
        Some(format!("https://lora.algokit.io/testnet/application/{app_id}"))
    } else if net.contains("beta") {
        Some(format!("https://betanet.algoexplorer.io/application/{app_id}"))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_networks() {
        assert_eq!(
            explorer_app_url("MainNet", 745894647).as_deref(),
            Some("https://algoexplorer.io/application/745894647")
        );
        assert_eq!(
            explorer_app_url("testnet", 1).as_deref(),
            Some("https://lora.algokit.io/testnet/application/1")
        );
        assert_eq!(
            explorer_app_url("betanet", 2).as_deref(),
            Some("https://betanet.algoexplorer.io/application/2")
        );
    }

    #[test]
    fn unknown_network() {
        assert_eq!(explorer_app_url("localnet", 1), None);
        assert_eq!(explorer_app_url("", 1), None);
    }
}
