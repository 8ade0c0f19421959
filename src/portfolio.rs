//! Portfolio summary for the Home screen
//!
//! Three lists (wallet tokens, liquidity, farms) and the total value across
//! all of them.

use serde::{Deserialize, Serialize};

use crate::farming::collection::{display_tokens, CollectionView};
use crate::routes::Route;
use crate::token::LpToken;
use crate::utils::format_usd;

/// Lists on the Home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SectionKind {
    Tokens,
    Liquidity,
    Farms,
}

impl SectionKind {
    /// Screen the section's "manage" button opens
    pub fn manage_route(&self) -> Route {
        match self {
            SectionKind::Tokens => Route::Swap,
            SectionKind::Liquidity => Route::RemoveLiquidity,
            SectionKind::Farms => Route::Farming,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSection {
    pub kind: SectionKind,
    pub view: CollectionView,
    pub manage: Route,
}

/// Holdings as last fetched by the host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    #[serde(default)]
    pub tokens: Vec<LpToken>,
    #[serde(default)]
    pub lp_tokens: Vec<LpToken>,
    #[serde(default)]
    pub pools: Vec<LpToken>,
    #[serde(default)]
    pub loading_tokens: bool,
    #[serde(default)]
    pub loading_lp_tokens: bool,
    #[serde(default)]
    pub loading_pools: bool,
}

impl PortfolioSnapshot {
    pub fn is_loading(&self) -> bool {
        self.loading_tokens || self.loading_lp_tokens || self.loading_pools
    }

    /// USD value of everything held, deposited or farmed
    pub fn total_value_usd(&self) -> f64 {
        self.tokens
            .iter()
            .chain(&self.lp_tokens)
            .chain(&self.pools)
            .map(LpToken::value_usd_or_zero)
            .sum()
    }

    /// Heading value; `None` while any list is still loading
    pub fn total_value_label(&self) -> Option<String> {
        (!self.is_loading()).then(|| format_usd(self.total_value_usd(), 4))
    }

    pub fn sections(&self) -> Vec<PortfolioSection> {
        [
            (SectionKind::Tokens, &self.tokens, self.loading_tokens),
            (SectionKind::Liquidity, &self.lp_tokens, self.loading_lp_tokens),
            (SectionKind::Farms, &self.pools, self.loading_pools),
        ]
        .into_iter()
        .map(|(kind, tokens, loading)| PortfolioSection {
            kind,
            view: display_tokens(tokens, loading),
            manage: kind.manage_route(),
        })
        .collect()
    }
}
