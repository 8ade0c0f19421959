use config::{Config as ConfigLoader, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::error::Error;

/// Chain the farming screens are deployed for
pub const BSC_CHAIN_ID: u64 = 56;

fn config_dir() -> String {
    env::var("FARM_CONFIG_DIR").unwrap_or_else(|_| "config".to_string())
}

/// Network constants loaded from configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConstants {
    /// Network key (e.g., bsc)
    pub network_name: String,
    /// EVM chain ID the wallet must report
    pub chain_id: u64,
    /// Human readable name shown on the wrong-network placeholder
    pub display_name: String,
    /// Native gas token symbol
    pub native_symbol: String,
}

impl NetworkConstants {
    /// Load network constants from the configuration file
    pub fn load(network: &str) -> Result<Self, ConfigError> {
        let settings = ConfigLoader::builder()
            .add_source(File::with_name(&format!("{}/network", config_dir())))
            .build()?;

        // Extract the network section
        settings.get::<NetworkConstants>(network)
    }
}

impl Default for NetworkConstants {
    fn default() -> Self {
        Self {
            network_name: "bsc".to_string(),
            chain_id: BSC_CHAIN_ID,
            display_name: "Binance Smart Chain(BSC)".to_string(),
            native_symbol: "BNB".to_string(),
        }
    }
}

/// Contract address configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractAddresses {
    /// Farm (MasterChef) contract that receives deposits; the approval spender
    pub master_chef: String,
}

impl ContractAddresses {
    /// Load contract addresses from the `contracts` configuration file
    pub fn load(network: &str) -> Result<Self, ConfigError> {
        let settings = ConfigLoader::builder()
            .add_source(File::with_name(&format!("{}/contracts", config_dir())))
            .build()?;

        let master_chef = settings.get::<String>(&format!("{}.master_chef.address", network))?;
        Ok(Self { master_chef })
    }
}

/// Complete configuration of the farming screens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmConfig {
    /// Symbols of the primary and secondary farm rewards
    pub reward_symbols: (String, String),
    /// Network the screens accept
    pub network: NetworkConstants,
    /// Contract addresses
    pub contracts: ContractAddresses,
}

impl Default for FarmConfig {
    fn default() -> Self {
        Self {
            reward_symbols: ("ESM".to_string(), "ESG".to_string()),
            network: NetworkConstants::default(),
            contracts: ContractAddresses::default(),
        }
    }
}

impl FarmConfig {
    /// Create a configuration for the given network and contracts
    pub fn new(network: NetworkConstants, contracts: ContractAddresses) -> Self {
        Self {
            network,
            contracts,
            ..Self::default()
        }
    }

    /// Build a configuration from the `network` and `contracts` files
    pub fn from_config_dir(network: &str) -> Result<Self, Error> {
        let constants = NetworkConstants::load(network)?;
        let contracts = ContractAddresses::load(network)?;
        Ok(Self::new(constants, contracts))
    }

    /// Set the farm contract address
    pub fn with_master_chef(mut self, master_chef: impl Into<String>) -> Self {
        self.contracts.master_chef = master_chef.into();
        self
    }

    /// Load configuration from a file
    pub fn load(path: &PathBuf) -> Result<Self, Error> {
        let content = fs::read_to_string(path)?;
        let config: FarmConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &PathBuf) -> Result<(), Error> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        // Create directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("farm-screens");
        path.push("config.toml");
        path
    }
}
