//! Per-screen selection state
//!
//! Owns the selected token, the raw amount the user typed, the allowance
//! flag for the selected token and the busy flags of in-flight actions.
//! Every change of selection bumps a generation counter so completions of
//! actions started against an earlier selection can be recognized.

use serde::Serialize;

use crate::error::WalletError;
use crate::token::LpToken;

/// In-flight wallet actions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BusyFlags {
    pub approving: bool,
    pub depositing: bool,
    pub withdrawing: bool,
}

impl BusyFlags {
    pub fn any(&self) -> bool {
        self.approving || self.depositing || self.withdrawing
    }
}

/// Identifies the selection an action was started against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionTicket {
    pub generation: u64,
    pub address: String,
}

#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected: Option<LpToken>,
    amount: String,
    allowed: bool,
    pub(crate) busy: BusyFlags,
    error: Option<WalletError>,
    generation: u64,
    user_changed: bool,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&LpToken> {
        self.selected.as_ref()
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn allowed(&self) -> bool {
        self.allowed
    }

    pub fn busy(&self) -> BusyFlags {
        self.busy
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the user picked a token by hand since the screen mounted
    pub fn user_changed(&self) -> bool {
        self.user_changed
    }

    /// Last surfaced wallet error, including suppressed rejections
    pub fn error(&self) -> Option<&WalletError> {
        self.error.as_ref()
    }

    /// Error the presentation layer should show, if any
    pub fn displayed_error(&self) -> Option<&WalletError> {
        self.error.as_ref().filter(|e| e.is_displayable())
    }

    /// Select a token from the list.
    ///
    /// Invalidates `allowed` and any surfaced error. The entered amount is
    /// kept.
    pub fn select(&mut self, token: LpToken) {
        tracing::debug!("Selected token {}", token.address);
        self.user_changed = true;
        self.replace_selection(Some(token));
    }

    pub fn clear_selection(&mut self) {
        self.replace_selection(None);
    }

    pub fn set_amount(&mut self, raw: impl Into<String>) {
        self.amount = raw.into();
    }

    /// Select the token at `address` when the user has not picked one yet.
    ///
    /// Returns true when the selection changed.
    pub fn preselect(&mut self, tokens: &[LpToken], address: &str) -> bool {
        if self.user_changed {
            return false;
        }
        if self.selected.as_ref().map(|t| t.address.as_str()) == Some(address) {
            return false;
        }
        match tokens.iter().find(|t| t.address == address) {
            Some(token) => {
                tracing::debug!("Preselected token {} from route", address);
                self.replace_selection(Some(token.clone()));
                true
            }
            None => false,
        }
    }

    /// Align the selection with a reloaded collection.
    ///
    /// A selected token that disappeared is dropped. One that is still present
    /// gets its fresh record; `allowed` survives because the token did not
    /// change.
    pub fn reconcile(&mut self, tokens: &[LpToken]) {
        let Some(current) = self.selected.as_ref() else {
            return;
        };
        match tokens.iter().find(|t| t.address == current.address) {
            Some(fresh) => self.selected = Some(fresh.clone()),
            None => {
                tracing::debug!(
                    "Selected token {} left the collection, clearing selection",
                    current.address
                );
                self.replace_selection(None);
            }
        }
    }

    /// Ticket for an action started against the current selection
    pub fn ticket(&self) -> Option<SelectionTicket> {
        self.selected.as_ref().map(|token| SelectionTicket {
            generation: self.generation,
            address: token.address.clone(),
        })
    }

    /// Whether a ticket still refers to the current selection
    pub fn is_current(&self, ticket: &SelectionTicket) -> bool {
        ticket.generation == self.generation
            && self.selected.as_ref().map(|t| t.address.as_str()) == Some(ticket.address.as_str())
    }

    pub(crate) fn set_allowed(&mut self, allowed: bool) {
        self.allowed = allowed;
    }

    pub(crate) fn set_error(&mut self, error: Option<WalletError>) {
        self.error = error;
    }

    fn replace_selection(&mut self, token: Option<LpToken>) {
        self.selected = token;
        self.allowed = false;
        self.error = None;
        self.generation = self.generation.wrapping_add(1);
    }
}
