//! Network gate
//!
//! The farming screens only work against one chain. Any other chain, or no
//! chain at all, shows a "change network" placeholder instead.

use serde::Serialize;

use crate::config::{NetworkConstants, BSC_CHAIN_ID};

/// Whether the wallet's active chain is usable
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum NetworkStatus {
    Supported,
    WrongNetwork {
        expected_chain_id: u64,
        /// Name to ask the user to switch to, when known
        network_name: Option<String>,
    },
}

impl NetworkStatus {
    pub fn is_supported(&self) -> bool {
        matches!(self, NetworkStatus::Supported)
    }
}

/// Well-known name of a chain
pub fn known_network_name(chain_id: u64) -> Option<&'static str> {
    match chain_id {
        BSC_CHAIN_ID => Some("Binance Smart Chain(BSC)"),
        _ => None,
    }
}

/// Compare the wallet's active chain against the expected network
pub fn check_network(active_chain_id: Option<u64>, expected: &NetworkConstants) -> NetworkStatus {
    if active_chain_id == Some(expected.chain_id) {
        return NetworkStatus::Supported;
    }
    tracing::debug!(
        "Active chain {:?} does not match expected chain {}",
        active_chain_id,
        expected.chain_id
    );
    let network_name = if expected.display_name.is_empty() {
        known_network_name(expected.chain_id).map(str::to_string)
    } else {
        Some(expected.display_name.clone())
    };
    NetworkStatus::WrongNetwork {
        expected_chain_id: expected.chain_id,
        network_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_chain_is_supported() {
        let bsc = NetworkConstants::default();
        assert!(check_network(Some(56), &bsc).is_supported());
    }

    #[test]
    fn test_other_or_missing_chain_is_wrong_network() {
        let bsc = NetworkConstants::default();
        let expected = NetworkStatus::WrongNetwork {
            expected_chain_id: 56,
            network_name: Some("Binance Smart Chain(BSC)".to_string()),
        };
        assert_eq!(check_network(Some(1), &bsc), expected);
        assert_eq!(check_network(None, &bsc), expected);
    }

    #[test]
    fn test_name_falls_back_to_known_chains() {
        let mut constants = NetworkConstants::default();
        constants.display_name = String::new();
        match check_network(Some(97), &constants) {
            NetworkStatus::WrongNetwork { network_name, .. } => {
                assert_eq!(network_name.as_deref(), Some("Binance Smart Chain(BSC)"));
            }
            NetworkStatus::Supported => panic!("chain 97 must not be supported"),
        }
        assert_eq!(known_network_name(1), None);
    }
}
