//! Token records as delivered by the LP token discovery layer.

use cosmwasm_std::Uint128;
use serde::{Deserialize, Serialize};

/// Basic token metadata, used for the legs of a pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenInfo {
    /// Contract address
    pub address: String,
    /// Token symbol
    pub symbol: String,
    /// Token decimals
    pub decimals: u8,
}

impl TokenInfo {
    pub fn new(address: impl Into<String>, symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            address: address.into(),
            symbol: symbol.into(),
            decimals,
        }
    }
}

/// Whether a token stands alone or is the share token of a two-asset pool
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenShape {
    #[default]
    Single,
    Pair {
        token_a: TokenInfo,
        token_b: TokenInfo,
    },
}

/// Farm-aware token record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LpToken {
    /// Contract address, unique within one collection
    pub address: String,
    pub symbol: String,
    pub decimals: u8,
    /// Wallet balance in base units
    pub balance: Uint128,
    #[serde(default)]
    pub shape: TokenShape,
    /// Pool type label shown above the symbol
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub amount_deposited: Option<Uint128>,
    #[serde(default)]
    pub pending_reward_a: Option<Uint128>,
    #[serde(default)]
    pub pending_reward_b: Option<Uint128>,
    #[serde(default)]
    pub apy: Option<f64>,
    #[serde(default)]
    pub multiplier: Option<f64>,
    #[serde(default)]
    pub reward_per_year_per_token: Option<Uint128>,
    #[serde(default)]
    pub total_value_usd: Option<f64>,
    #[serde(default)]
    pub value_usd: Option<f64>,
}

impl LpToken {
    /// Create a single (non-pair) token with no farm data
    pub fn new(
        address: impl Into<String>,
        symbol: impl Into<String>,
        decimals: u8,
        balance: Uint128,
    ) -> Self {
        Self {
            address: address.into(),
            symbol: symbol.into(),
            decimals,
            balance,
            shape: TokenShape::Single,
            kind: None,
            amount_deposited: None,
            pending_reward_a: None,
            pending_reward_b: None,
            apy: None,
            multiplier: None,
            reward_per_year_per_token: None,
            total_value_usd: None,
            value_usd: None,
        }
    }

    /// Turn the token into the share token of a pair
    pub fn with_pair(mut self, token_a: TokenInfo, token_b: TokenInfo) -> Self {
        self.shape = TokenShape::Pair { token_a, token_b };
        self
    }

    pub fn with_deposit(mut self, amount_deposited: Uint128) -> Self {
        self.amount_deposited = Some(amount_deposited);
        self
    }

    pub fn with_value_usd(mut self, value_usd: f64) -> Self {
        self.value_usd = Some(value_usd);
        self
    }

    pub fn with_pending_rewards(mut self, reward_a: Uint128, reward_b: Uint128) -> Self {
        self.pending_reward_a = Some(reward_a);
        self.pending_reward_b = Some(reward_b);
        self
    }

    pub fn with_reward_rate(mut self, reward_per_year_per_token: Uint128) -> Self {
        self.reward_per_year_per_token = Some(reward_per_year_per_token);
        self
    }

    pub fn with_yield(mut self, apy: f64, multiplier: f64) -> Self {
        self.apy = Some(apy);
        self.multiplier = Some(multiplier);
        self
    }

    pub fn with_total_value_usd(mut self, total_value_usd: f64) -> Self {
        self.total_value_usd = Some(total_value_usd);
        self
    }

    pub fn is_pair(&self) -> bool {
        matches!(self.shape, TokenShape::Pair { .. })
    }

    /// Symbol shown in lists: `A-B` for pairs, the token's own symbol otherwise
    pub fn display_symbol(&self) -> String {
        match &self.shape {
            TokenShape::Pair { token_a, token_b } => {
                format!("{}-{}", token_a.symbol, token_b.symbol)
            }
            TokenShape::Single => self.symbol.clone(),
        }
    }

    /// Deposited amount when the record carries one, wallet balance otherwise
    pub fn effective_balance(&self) -> Uint128 {
        self.amount_deposited.unwrap_or(self.balance)
    }

    pub fn deposited(&self) -> Uint128 {
        self.amount_deposited.unwrap_or_default()
    }

    pub fn value_usd_or_zero(&self) -> f64 {
        self.value_usd.unwrap_or(0.0)
    }

    /// Multiplier label, e.g. `✨2.00x APY`
    pub fn multiplier_label(&self) -> String {
        let multiplier = self.multiplier.unwrap_or(0.0);
        let sparkle = if multiplier > 1.0 { "✨" } else { "" };
        format!("{}{:.2}x APY", sparkle, multiplier)
    }
}
