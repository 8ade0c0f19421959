mod utils;

use farm_screens_sdk::config::{ContractAddresses, FarmConfig, NetworkConstants};
use tempfile::tempdir;
use utils::test_utils::{init_test_env, MASTER_CHEF};

#[test]
fn test_network_config_loading() {
    init_test_env();

    let network = NetworkConstants::load("bsc").expect("Failed to load network constants");
    assert_eq!(network.network_name, "bsc");
    assert_eq!(network.chain_id, 56);
    assert_eq!(network.display_name, "Binance Smart Chain(BSC)");
    assert_eq!(network.native_symbol, "BNB");
    assert_eq!(network, NetworkConstants::default());
}

#[test]
fn test_contract_addresses_loading() {
    init_test_env();

    let contracts = ContractAddresses::load("bsc").expect("Failed to load contract addresses");
    assert_eq!(contracts.master_chef, MASTER_CHEF);
}

#[test]
fn test_unknown_network_fails() {
    init_test_env();
    assert!(NetworkConstants::load("solana").is_err());
    assert!(FarmConfig::from_config_dir("solana").is_err());
}

#[test]
fn test_config_from_dir_uses_both_files() {
    init_test_env();

    let config = FarmConfig::from_config_dir("bsc-testnet").expect("Failed to build config");
    assert_eq!(config.network.chain_id, 97);
    assert!(!config.contracts.master_chef.is_empty());
    assert_eq!(config.reward_symbols, ("ESM".to_string(), "ESG".to_string()));
}

#[test]
fn test_config_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = FarmConfig::default().with_master_chef(MASTER_CHEF);
    config.reward_symbols = ("CAKE".to_string(), "SYRUP".to_string());
    config.save(&path).unwrap();

    let loaded = FarmConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_load_rejects_malformed_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "reward_symbols = 3").unwrap();

    assert!(FarmConfig::load(&path).is_err());
}

#[test]
fn test_default_path() {
    let path = FarmConfig::default_path();
    assert!(path.ends_with("farm-screens/config.toml"));
}
