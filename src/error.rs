use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::farming::eligibility::ActionState;

/// Error code wallets return when the user rejects a request
pub const USER_REJECTED_CODE: i64 = 4001;

/// SDK Error type
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error raised by the layered config loader
    #[error("Config loader error: {0}")]
    ConfigLoader(#[from] config::ConfigError),

    /// Serialization/Deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Two records in one collection share an address
    #[error("Duplicate token address in collection: {0}")]
    DuplicateToken(String),

    /// User input that is not a valid fixed-point amount
    #[error("Invalid amount '{input}': {reason}")]
    InvalidAmount { input: String, reason: String },

    /// The wallet is connected to a chain the screens do not support
    #[error("Wrong network: expected chain {expected}, connected to {active:?}")]
    WrongNetwork { expected: u64, active: Option<u64> },

    /// The pressed action is not valid in the current state
    #[error("No action available in state {0:?}")]
    ActionUnavailable(ActionState),

    /// The same action is already waiting on the wallet
    #[error("{0} is already in flight")]
    ActionInFlight(&'static str),

    /// Wallet or contract call failure
    #[error("Wallet error: {0}")]
    Wallet(#[from] WalletError),
}

/// Failure reported by the wallet/contract layer, passed through unchanged
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message} (code {code})")]
pub struct WalletError {
    pub message: String,
    pub code: i64,
}

impl WalletError {
    pub fn new(message: impl Into<String>, code: i64) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }

    /// The user dismissed the request in their wallet
    pub fn user_rejected() -> Self {
        Self::new("User denied transaction signature.", USER_REJECTED_CODE)
    }

    pub fn is_user_rejection(&self) -> bool {
        self.code == USER_REJECTED_CODE
    }

    /// Whether the error should be shown to the user.
    ///
    /// Rejections are normal cancellations and stay out of the error banner;
    /// empty messages carry nothing to show.
    pub fn is_displayable(&self) -> bool {
        !self.is_user_rejection() && !self.message.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_rejection_is_not_displayable() {
        let rejected = WalletError::user_rejected();
        assert!(rejected.is_user_rejection());
        assert!(!rejected.is_displayable());

        let failed = WalletError::new("execution reverted", -32603);
        assert!(!failed.is_user_rejection());
        assert!(failed.is_displayable());
    }

    #[test]
    fn test_wallet_error_deserializes_from_provider_payload() {
        let payload = r#"{"message":"insufficient funds for gas","code":-32000}"#;
        let err: WalletError = serde_json::from_str(payload).unwrap();
        assert_eq!(err.code, -32000);
        assert_eq!(err.to_string(), "insufficient funds for gas (code -32000)");
    }
}
