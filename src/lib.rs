pub mod config;
pub mod error;
pub mod farming;
pub mod logging;
pub mod network;
pub mod portfolio;
pub mod routes;
pub mod token;
pub mod utils;
pub mod wallet;

pub use crate::config::{ContractAddresses, FarmConfig, NetworkConstants};
pub use error::{Error, WalletError, USER_REJECTED_CODE};
pub use farming::{
    Action, ActionKind, ActionOutcome, ActionState, CollectionView, FarmMode, FarmScreen,
    FarmSnapshot, FarmView, ScreenView,
};
pub use network::NetworkStatus;
pub use portfolio::PortfolioSnapshot;
pub use routes::{Navigator, Route};
pub use token::{LpToken, TokenInfo, TokenShape};
pub use wallet::{DryRunWallet, WalletOperations};

// Re-export the fixed-point types used throughout the API
pub use cosmwasm_std::{Uint128, Uint256};
