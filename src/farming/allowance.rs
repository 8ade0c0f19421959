//! Approval gate for deposits
//!
//! The farm contract can only pull LP tokens the user approved it to spend.
//! This module decides whether an approval has to happen before a deposit
//! and applies the outcome of approval and allowance queries to the
//! selection they were started for.

use crate::error::WalletError;
use crate::farming::selection::{SelectionState, SelectionTicket};
use crate::token::LpToken;
use crate::utils::is_empty_value;
use crate::utils::validation::DEFAULT_DECIMALS;

/// Whether an approval must be sent before the deposit can be enabled.
///
/// Nothing is required while the spender is already allowed or while the
/// amount is empty, unparseable or zero.
pub fn requires_approval(selected: Option<&LpToken>, amount: &str, allowed: bool) -> bool {
    if allowed {
        return false;
    }
    let decimals = selected.map(|t| t.decimals).unwrap_or(DEFAULT_DECIMALS);
    !is_empty_value(amount, decimals)
}

/// Apply the result of an allowance query issued by the host.
///
/// Results for a token other than the current selection are ignored.
pub fn on_allowance_fetched(state: &mut SelectionState, address: &str, allowed: bool) -> bool {
    if state.selected().is_some_and(|token| token.address == address) {
        state.set_allowed(allowed);
        true
    } else {
        tracing::debug!("Ignoring allowance result for unselected token {}", address);
        false
    }
}

/// Apply the outcome of an approval transaction.
///
/// Success flips `allowed`; failure surfaces the wallet error unchanged.
/// Returns false when the ticket no longer matches the selection, in which
/// case nothing is applied.
pub fn complete_approval(
    state: &mut SelectionState,
    ticket: &SelectionTicket,
    result: &Result<(), WalletError>,
) -> bool {
    if !state.is_current(ticket) {
        tracing::warn!(
            "Approval for {} completed after the selection changed, discarding",
            ticket.address
        );
        return false;
    }
    match result {
        Ok(()) => {
            tracing::info!("Approval confirmed for {}", ticket.address);
            state.set_allowed(true);
        }
        Err(e) => state.set_error(Some(e.clone())),
    }
    true
}
