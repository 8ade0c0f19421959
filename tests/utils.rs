use std::sync::Mutex;

use async_trait::async_trait;
use farm_screens_sdk::{
    FarmConfig, FarmSnapshot, LpToken, TokenInfo, Uint128, WalletError, WalletOperations,
};

#[cfg(test)]
#[allow(dead_code)]
pub mod test_utils {
    use super::*;

    /// One whole token at 18 decimals
    pub const ONE: u128 = 1_000_000_000_000_000_000;

    /// Chain id the default configuration accepts
    pub const BSC: u64 = 56;

    /// Farm contract used as the approval spender in tests
    pub const MASTER_CHEF: &str = "0x73feaa1eE314F8c655E354234017bE2193C9E24E";

    /// Point the config loader at the repository's config directory
    pub fn init_test_env() {
        let dir = format!("{}/config", env!("CARGO_MANIFEST_DIR"));
        std::env::set_var("FARM_CONFIG_DIR", dir);
    }

    pub fn test_config() -> FarmConfig {
        FarmConfig::default().with_master_chef(MASTER_CHEF)
    }

    /// Single 18-decimal token holding `whole` tokens
    pub fn lp(address: &str, whole: u128) -> LpToken {
        LpToken::new(address, address.to_uppercase(), 18, Uint128::new(whole * ONE))
    }

    /// Pair share token with farm data filled in
    pub fn farm_pair(address: &str, symbol_a: &str, symbol_b: &str, whole: u128) -> LpToken {
        lp(address, whole)
            .with_pair(
                TokenInfo::new(format!("{}-a", address), symbol_a, 18),
                TokenInfo::new(format!("{}-b", address), symbol_b, 18),
            )
            .with_reward_rate(Uint128::new(2 * ONE))
            .with_yield(35.5, 2.0)
            .with_total_value_usd(1_250_000.0)
    }

    pub fn bsc_snapshot(tokens: Vec<LpToken>) -> FarmSnapshot {
        FarmSnapshot::new(BSC, tokens)
    }

    /// Call recorded by [`MockWallet`]
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum WalletCall {
        Approve { token: String, spender: String },
        Deposit { token: String, amount: Uint128 },
        Withdraw { token: String, amount: Uint128 },
    }

    /// Wallet that records every call and answers with a scripted result
    #[derive(Debug, Default)]
    pub struct MockWallet {
        calls: Mutex<Vec<WalletCall>>,
        failure: Option<WalletError>,
    }

    impl MockWallet {
        pub fn new() -> Self {
            Self::default()
        }

        /// Every call fails with `error`
        pub fn failing(error: WalletError) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                failure: Some(error),
            }
        }

        pub fn calls(&self) -> Vec<WalletCall> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: WalletCall) -> Result<(), WalletError> {
            self.calls.lock().unwrap().push(call);
            match &self.failure {
                Some(error) => Err(error.clone()),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl WalletOperations for MockWallet {
        async fn approve(&self, token: &LpToken, spender: &str) -> Result<(), WalletError> {
            self.record(WalletCall::Approve {
                token: token.address.clone(),
                spender: spender.to_string(),
            })
        }

        async fn deposit(&self, token: &LpToken, amount: Uint128) -> Result<(), WalletError> {
            self.record(WalletCall::Deposit {
                token: token.address.clone(),
                amount,
            })
        }

        async fn withdraw(&self, token: &LpToken, amount: Uint128) -> Result<(), WalletError> {
            self.record(WalletCall::Withdraw {
                token: token.address.clone(),
                amount,
            })
        }
    }
}
