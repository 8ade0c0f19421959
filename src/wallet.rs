//! Wallet collaborator seam
//!
//! Approve, deposit and withdraw are signed and broadcast by the host's
//! wallet/provider layer. The screens only need the three calls below and
//! their `{ message, code }` failures.

use async_trait::async_trait;
use cosmwasm_std::Uint128;

use crate::error::WalletError;
use crate::token::LpToken;

/// Contract calls the farming screens send through the connected wallet
#[async_trait]
pub trait WalletOperations: Send + Sync {
    /// Allow `spender` to move `token` on the user's behalf
    async fn approve(&self, token: &LpToken, spender: &str) -> Result<(), WalletError>;

    /// Deposit `amount` base units of `token` into its farm
    async fn deposit(&self, token: &LpToken, amount: Uint128) -> Result<(), WalletError>;

    /// Withdraw `amount` base units of `token` from its farm, claiming rewards
    async fn withdraw(&self, token: &LpToken, amount: Uint128) -> Result<(), WalletError>;
}

/// Wallet that accepts every call without sending anything
#[derive(Debug, Default, Clone)]
pub struct DryRunWallet;

#[async_trait]
impl WalletOperations for DryRunWallet {
    async fn approve(&self, token: &LpToken, spender: &str) -> Result<(), WalletError> {
        tracing::info!("[dry-run] approve {} for spender {}", token.address, spender);
        Ok(())
    }

    async fn deposit(&self, token: &LpToken, amount: Uint128) -> Result<(), WalletError> {
        tracing::info!("[dry-run] deposit {} of {}", amount, token.address);
        Ok(())
    }

    async fn withdraw(&self, token: &LpToken, amount: Uint128) -> Result<(), WalletError> {
        tracing::info!("[dry-run] withdraw {} of {}", amount, token.address);
        Ok(())
    }
}
