//! Farming and Harvest screen state
//!
//! Leaf to root: [`collection`] feeds [`selection`], which feeds
//! [`allowance`] and [`projection`]; [`eligibility`] combines them into the
//! single action the screen offers, and [`screen`] wires everything to a
//! snapshot of remote data and the wallet.

pub mod allowance;
pub mod collection;
pub mod eligibility;
pub mod projection;
pub mod screen;
pub mod selection;

use serde::Serialize;

pub use collection::{display_tokens, ensure_unique_addresses, farm_tokens, CollectionView};
pub use eligibility::{evaluate, Action, ActionState, EligibilityInput};
pub use projection::{projected_reward_per_year, DepositSummary, HarvestSummary};
pub use screen::{
    ActionKind, ActionOutcome, FarmScreen, FarmSnapshot, FarmView, InfoPanel, PendingAction,
    ScreenView,
};
pub use selection::{BusyFlags, SelectionState, SelectionTicket};

/// Which side of a farm a screen works on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FarmMode {
    /// Farming screen: deposit LP tokens from the wallet
    Deposit,
    /// Harvest screen: withdraw deposited LP tokens and claim rewards
    Withdraw,
}
