//! Reward projections and info panels
//!
//! Pure functions of the selected token and the entered amount.

use cosmwasm_std::{Uint128, Uint256};
use serde::Serialize;

use crate::token::LpToken;
use crate::utils::validation::DEFAULT_DECIMALS;
use crate::utils::{parse_amount, read_amount};

/// Projected reward per year for depositing `amount`.
///
/// `amount` is parsed with 18 decimals and multiplied by the per-token
/// reward rate. Missing or invalid input yields zero.
pub fn projected_reward_per_year(
    amount: &str,
    reward_per_year_per_token: Option<Uint128>,
) -> Uint256 {
    let Some(rate) = reward_per_year_per_token else {
        return Uint256::zero();
    };
    let amount = parse_amount(amount, DEFAULT_DECIMALS);
    // Both factors fit in 128 bits, so the product fits in 256
    Uint256::from(amount) * Uint256::from(rate)
}

/// Info panel under the deposit input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepositSummary {
    /// Reward per year, scaled by 18 decimals
    pub reward_per_year: Uint256,
    pub balance: Uint128,
    pub decimals: u8,
    pub total_value_usd: f64,
    pub apy: f64,
}

impl DepositSummary {
    /// Build the panel; `None` while there is nothing to project
    pub fn compute(selected: Option<&LpToken>, amount: &str) -> Option<Self> {
        let token = selected?;
        let reward_per_year = projected_reward_per_year(amount, token.reward_per_year_per_token);
        if reward_per_year.is_zero() {
            return None;
        }
        Some(Self {
            reward_per_year,
            balance: token.balance,
            decimals: token.decimals,
            total_value_usd: token.total_value_usd.unwrap_or(0.0),
            apy: token.apy.unwrap_or(0.0),
        })
    }
}

/// Info panel under the withdraw input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HarvestSummary {
    pub deposited: Option<Uint128>,
    pub decimals: u8,
    /// Claimable primary reward, shown only when non-zero
    pub pending_reward_a: Option<Uint128>,
    /// Claimable secondary reward, shown only when non-zero
    pub pending_reward_b: Option<Uint128>,
}

impl HarvestSummary {
    /// Build the panel for the selected token.
    ///
    /// Pending rewards are listed only while the entered amount does not
    /// exceed the deposit. An unparseable amount counts as zero.
    pub fn compute(selected: Option<&LpToken>, amount: &str) -> Option<Self> {
        let token = selected?;
        let deposited = token.amount_deposited;
        let within_deposit = match deposited {
            Some(total) => !read_amount(amount, DEFAULT_DECIMALS).exceeds(total),
            None => false,
        };
        let visible = |reward: Option<Uint128>| {
            reward.filter(|r| within_deposit && !r.is_zero())
        };
        Some(Self {
            deposited,
            decimals: token.decimals,
            pending_reward_a: visible(token.pending_reward_a),
            pending_reward_b: visible(token.pending_reward_b),
        })
    }
}
