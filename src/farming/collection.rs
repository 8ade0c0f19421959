//! Display-ready token lists
//!
//! Turns a raw fetched collection into what a list renders: a loading
//! indicator, an empty indicator, or the non-empty tokens ordered by value.

use std::collections::HashSet;

use cosmwasm_std::Uint128;
use serde::Serialize;

use crate::error::Error;
use crate::farming::eligibility::effective_balance;
use crate::farming::FarmMode;
use crate::token::LpToken;

/// What a token list shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CollectionView {
    Loading,
    Empty,
    Items(Vec<LpToken>),
}

impl CollectionView {
    pub fn is_loading(&self) -> bool {
        matches!(self, CollectionView::Loading)
    }

    pub fn items(&self) -> &[LpToken] {
        match self {
            CollectionView::Items(items) => items,
            _ => &[],
        }
    }

    /// Find a displayed token by address
    pub fn find(&self, address: &str) -> Option<&LpToken> {
        self.items().iter().find(|token| token.address == address)
    }
}

/// Reject collections in which two records share an address
pub fn ensure_unique_addresses(tokens: &[LpToken]) -> Result<(), Error> {
    let mut seen = HashSet::with_capacity(tokens.len());
    for token in tokens {
        if !seen.insert(token.address.as_str()) {
            return Err(Error::DuplicateToken(token.address.clone()));
        }
    }
    Ok(())
}

/// Build the list view for a fetched collection.
///
/// Tokens with a zero effective balance are dropped and the rest are sorted
/// by descending USD value; equal values keep their input order. Duplicate
/// addresses keep their first occurrence.
pub fn display_tokens(tokens: &[LpToken], loading: bool) -> CollectionView {
    build_view(tokens, loading, LpToken::effective_balance)
}

/// List view for a Farming or Harvest screen.
///
/// Same rules as [`display_tokens`], except the balance that decides
/// visibility is the one the screen draws from: the wallet balance when
/// depositing, the deposited amount when withdrawing.
pub fn farm_tokens(tokens: &[LpToken], loading: bool, mode: FarmMode) -> CollectionView {
    build_view(tokens, loading, |token| effective_balance(mode, token))
}

fn build_view<F>(tokens: &[LpToken], loading: bool, balance_of: F) -> CollectionView
where
    F: Fn(&LpToken) -> Uint128,
{
    if loading {
        return CollectionView::Loading;
    }

    let mut seen = HashSet::with_capacity(tokens.len());
    let mut items: Vec<LpToken> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if !seen.insert(token.address.as_str()) {
            tracing::warn!("Dropping duplicate token record {}", token.address);
            continue;
        }
        if balance_of(token).is_zero() {
            continue;
        }
        items.push(token.clone());
    }

    // sort_by is stable
    items.sort_by(|a, b| b.value_usd_or_zero().total_cmp(&a.value_usd_or_zero()));

    if items.is_empty() {
        CollectionView::Empty
    } else {
        CollectionView::Items(items)
    }
}
