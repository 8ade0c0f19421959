//! Screen composition
//!
//! A [`FarmScreen`] is mounted once per Farming or Harvest screen. The host
//! hands it a fresh [`FarmSnapshot`] whenever remote data changes and asks
//! for a [`ScreenView`] to render. User events enter through the `on_*`
//! hooks; wallet calls are split into [`FarmScreen::begin_action`] and
//! [`FarmScreen::complete_action`] so selection changes can happen while a
//! transaction is pending.

use cosmwasm_std::Uint128;
use serde::{Deserialize, Serialize};

use crate::config::FarmConfig;
use crate::error::{Error, WalletError};
use crate::farming::allowance::{complete_approval, on_allowance_fetched};
use crate::farming::collection::{farm_tokens, CollectionView};
use crate::farming::eligibility::{evaluate, Action, ActionState, EligibilityInput};
use crate::farming::projection::{DepositSummary, HarvestSummary};
use crate::farming::selection::{BusyFlags, SelectionState, SelectionTicket};
use crate::farming::FarmMode;
use crate::network::{check_network, NetworkStatus};
use crate::routes::Route;
use crate::token::LpToken;
use crate::utils::parse_amount;
use crate::wallet::WalletOperations;

/// Remote data as last fetched by the host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FarmSnapshot {
    /// Chain the wallet is connected to, if any
    #[serde(default)]
    pub chain_id: Option<u64>,
    #[serde(default)]
    pub tokens: Vec<LpToken>,
    /// A token fetch is in flight
    #[serde(default)]
    pub loading: bool,
}

impl FarmSnapshot {
    pub fn new(chain_id: u64, tokens: Vec<LpToken>) -> Self {
        Self {
            chain_id: Some(chain_id),
            tokens,
            loading: false,
        }
    }

    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }
}

/// Info box under the amount input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum InfoPanel {
    Deposit(DepositSummary),
    Harvest(HarvestSummary),
}

/// Everything a Farming/Harvest screen renders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FarmView {
    pub mode: FarmMode,
    pub collection: CollectionView,
    pub selected: Option<LpToken>,
    pub amount: String,
    pub action: ActionState,
    pub busy: BusyFlags,
    /// Error for the banner; wallet rejections never appear here
    pub error: Option<WalletError>,
    pub info: Option<InfoPanel>,
    /// Where to send the user when there is nothing to deposit
    pub link: Option<Route>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ScreenView {
    /// Ask the user to switch networks instead of showing any farm UI
    WrongNetwork { network_name: Option<String> },
    Ready(FarmView),
}

/// Wallet call started from the action area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActionKind {
    Approve,
    Deposit,
    Withdraw,
}

impl ActionKind {
    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::Approve => "approve",
            ActionKind::Deposit => "deposit",
            ActionKind::Withdraw => "withdraw",
        }
    }
}

/// A wallet call that has been started and not yet completed
#[derive(Debug, Clone)]
pub struct PendingAction {
    pub kind: ActionKind,
    pub token: LpToken,
    /// Base units; zero for approvals
    pub amount: Uint128,
    /// Contract allowed to move the token
    pub spender: String,
    pub ticket: SelectionTicket,
}

impl PendingAction {
    /// Send the call through the wallet
    pub async fn execute<W>(&self, wallet: &W) -> Result<(), WalletError>
    where
        W: WalletOperations + ?Sized,
    {
        match self.kind {
            ActionKind::Approve => wallet.approve(&self.token, &self.spender).await,
            ActionKind::Deposit => wallet.deposit(&self.token, self.amount).await,
            ActionKind::Withdraw => wallet.withdraw(&self.token, self.amount).await,
        }
    }
}

/// How a wallet call ended, from the screen's point of view
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    Completed(ActionKind),
    /// The user dismissed the request in the wallet; nothing is displayed
    Rejected(WalletError),
    /// The wallet or contract call failed; the error is displayed
    Failed(WalletError),
    /// The selection changed while the call was pending; nothing was applied
    Stale(ActionKind),
}

/// State core of one Farming or Harvest screen
#[derive(Debug, Clone)]
pub struct FarmScreen {
    mode: FarmMode,
    config: FarmConfig,
    selection: SelectionState,
}

impl FarmScreen {
    pub fn new(mode: FarmMode, config: FarmConfig) -> Self {
        Self {
            mode,
            config,
            selection: SelectionState::new(),
        }
    }

    /// Deposit side: the Farming screen
    pub fn farming(config: FarmConfig) -> Self {
        Self::new(FarmMode::Deposit, config)
    }

    /// Withdraw side: the Harvest screen
    pub fn harvest(config: FarmConfig) -> Self {
        Self::new(FarmMode::Withdraw, config)
    }

    pub fn mode(&self) -> FarmMode {
        self.mode
    }

    pub fn config(&self) -> &FarmConfig {
        &self.config
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn network_status(&self, snapshot: &FarmSnapshot) -> NetworkStatus {
        check_network(snapshot.chain_id, &self.config.network)
    }

    pub fn action_state(&self, snapshot: &FarmSnapshot) -> ActionState {
        evaluate(EligibilityInput {
            mode: self.mode,
            selected: self.selection.selected(),
            amount: self.selection.amount(),
            allowed: self.selection.allowed(),
            loading: snapshot.loading,
        })
    }

    /// Recompute everything the screen shows
    pub fn view(&self, snapshot: &FarmSnapshot) -> ScreenView {
        if let NetworkStatus::WrongNetwork { network_name, .. } = self.network_status(snapshot) {
            return ScreenView::WrongNetwork { network_name };
        }

        let selected = self.selection.selected();
        let amount = self.selection.amount();
        let action = self.action_state(snapshot);
        let info = match self.mode {
            FarmMode::Deposit => DepositSummary::compute(selected, amount).map(InfoPanel::Deposit),
            FarmMode::Withdraw => HarvestSummary::compute(selected, amount).map(InfoPanel::Harvest),
        };
        let link = (self.mode == FarmMode::Deposit && action == ActionState::NeedsLiquidity)
            .then_some(Route::Liquidity);

        ScreenView::Ready(FarmView {
            mode: self.mode,
            collection: farm_tokens(&snapshot.tokens, snapshot.loading, self.mode),
            selected: selected.cloned(),
            amount: amount.to_string(),
            action,
            busy: self.selection.busy(),
            error: self.selection.displayed_error().cloned(),
            info,
            link,
        })
    }

    /// A list item was pressed
    pub fn on_select(&mut self, token: LpToken) {
        self.selection.select(token);
    }

    /// The amount input changed
    pub fn on_amount_change(&mut self, raw: impl Into<String>) {
        self.selection.set_amount(raw);
    }

    /// The host reloaded the token collection
    pub fn on_collection_refreshed(&mut self, snapshot: &FarmSnapshot) {
        self.selection.reconcile(&snapshot.tokens);
    }

    /// The screen was opened on a specific token's path
    pub fn on_route_token(&mut self, snapshot: &FarmSnapshot, address: &str) -> bool {
        self.selection.preselect(&snapshot.tokens, address)
    }

    /// The host finished an allowance query for `address`
    pub fn on_allowance_fetched(&mut self, address: &str, allowed: bool) -> bool {
        on_allowance_fetched(&mut self.selection, address, allowed)
    }

    /// Start the wallet call the current state offers.
    ///
    /// Sets the matching busy flag and clears the surfaced error. The caller
    /// runs [`PendingAction::execute`] and reports back through
    /// [`FarmScreen::complete_action`].
    pub fn begin_action(&mut self, snapshot: &FarmSnapshot) -> Result<PendingAction, Error> {
        if !self.network_status(snapshot).is_supported() {
            return Err(Error::WrongNetwork {
                expected: self.config.network.chain_id,
                active: snapshot.chain_id,
            });
        }

        let kind = match self.action_state(snapshot) {
            ActionState::NeedsApproval => ActionKind::Approve,
            ActionState::Ready(Action::Deposit) => ActionKind::Deposit,
            ActionState::Ready(Action::Withdraw) => ActionKind::Withdraw,
            other => return Err(Error::ActionUnavailable(other)),
        };
        if self.is_busy(kind) {
            return Err(Error::ActionInFlight(kind.label()));
        }

        let (Some(token), Some(ticket)) =
            (self.selection.selected().cloned(), self.selection.ticket())
        else {
            return Err(Error::ActionUnavailable(ActionState::NoSelection));
        };
        let amount = match kind {
            ActionKind::Approve => Uint128::zero(),
            _ => parse_amount(self.selection.amount(), token.decimals),
        };

        self.selection.set_error(None);
        self.set_busy(kind, true);
        tracing::info!(
            "Starting {} for {} (amount {})",
            kind.label(),
            token.address,
            amount
        );

        Ok(PendingAction {
            kind,
            token,
            amount,
            spender: self.config.contracts.master_chef.clone(),
            ticket,
        })
    }

    /// Apply the result of a wallet call started with [`FarmScreen::begin_action`]
    pub fn complete_action(
        &mut self,
        pending: PendingAction,
        result: Result<(), WalletError>,
    ) -> ActionOutcome {
        let kind = pending.kind;
        self.set_busy(kind, false);

        if !self.selection.is_current(&pending.ticket) {
            match &result {
                Ok(()) => tracing::warn!(
                    "{} for {} finished after the selection changed",
                    kind.label(),
                    pending.token.address
                ),
                Err(e) => tracing::warn!(
                    "{} for {} failed after the selection changed: {}",
                    kind.label(),
                    pending.token.address,
                    e
                ),
            }
            return ActionOutcome::Stale(kind);
        }

        if kind == ActionKind::Approve {
            complete_approval(&mut self.selection, &pending.ticket, &result);
        } else if let Err(e) = &result {
            self.selection.set_error(Some(e.clone()));
        }

        match result {
            Ok(()) => {
                tracing::info!("{} for {} confirmed", kind.label(), pending.token.address);
                ActionOutcome::Completed(kind)
            }
            Err(e) if e.is_user_rejection() => {
                tracing::info!("{} rejected in wallet: {}", kind.label(), e);
                ActionOutcome::Rejected(e)
            }
            Err(e) => {
                tracing::warn!("{} failed: {}", kind.label(), e);
                ActionOutcome::Failed(e)
            }
        }
    }

    /// The action button was pressed: start, await and complete the call
    pub async fn on_action_press<W>(
        &mut self,
        snapshot: &FarmSnapshot,
        wallet: &W,
    ) -> Result<ActionOutcome, Error>
    where
        W: WalletOperations + ?Sized,
    {
        let pending = self.begin_action(snapshot)?;
        let result = pending.execute(wallet).await;
        Ok(self.complete_action(pending, result))
    }

    fn is_busy(&self, kind: ActionKind) -> bool {
        let busy = self.selection.busy();
        match kind {
            ActionKind::Approve => busy.approving,
            ActionKind::Deposit => busy.depositing,
            ActionKind::Withdraw => busy.withdrawing,
        }
    }

    fn set_busy(&mut self, kind: ActionKind, value: bool) {
        let busy = &mut self.selection.busy;
        match kind {
            ActionKind::Approve => busy.approving = value,
            ActionKind::Deposit => busy.depositing = value,
            ActionKind::Withdraw => busy.withdrawing = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE: u128 = 1_000_000_000_000_000_000;

    fn snapshot() -> FarmSnapshot {
        FarmSnapshot::new(
            56,
            vec![
                LpToken::new("A", "A", 18, Uint128::new(5 * ONE)).with_value_usd(10.0),
                LpToken::new("B", "B", 18, Uint128::new(3 * ONE)).with_value_usd(50.0),
            ],
        )
    }

    fn ready_view(screen: &FarmScreen, snapshot: &FarmSnapshot) -> FarmView {
        match screen.view(snapshot) {
            ScreenView::Ready(view) => view,
            ScreenView::WrongNetwork { .. } => panic!("expected a ready view"),
        }
    }

    #[test]
    fn test_wrong_network_hides_selection_ui() {
        let screen = FarmScreen::farming(FarmConfig::default());
        let snapshot = FarmSnapshot {
            chain_id: Some(1),
            ..snapshot()
        };
        assert_eq!(
            screen.view(&snapshot),
            ScreenView::WrongNetwork {
                network_name: Some("Binance Smart Chain(BSC)".to_string())
            }
        );
    }

    #[test]
    fn test_begin_action_requires_actionable_state() {
        let mut screen = FarmScreen::farming(FarmConfig::default());
        let snapshot = snapshot();
        assert!(matches!(
            screen.begin_action(&snapshot),
            Err(Error::ActionUnavailable(ActionState::NoSelection))
        ));

        screen.on_select(snapshot.tokens[0].clone());
        assert!(matches!(
            screen.begin_action(&snapshot),
            Err(Error::ActionUnavailable(ActionState::AwaitingAmount(
                Action::Deposit
            )))
        ));
    }

    #[test]
    fn test_second_press_while_busy_is_refused() {
        let mut screen = FarmScreen::farming(FarmConfig::default().with_master_chef("0xchef"));
        let snapshot = snapshot();
        screen.on_select(snapshot.tokens[0].clone());
        screen.on_amount_change("1");

        let pending = screen.begin_action(&snapshot).unwrap();
        assert_eq!(pending.kind, ActionKind::Approve);
        assert_eq!(pending.spender, "0xchef");
        assert!(ready_view(&screen, &snapshot).busy.approving);
        assert!(matches!(
            screen.begin_action(&snapshot),
            Err(Error::ActionInFlight("approve"))
        ));

        screen.complete_action(pending, Ok(()));
        let view = ready_view(&screen, &snapshot);
        assert!(!view.busy.any());
        assert_eq!(view.action, ActionState::Ready(Action::Deposit));
    }

    #[test]
    fn test_add_liquidity_link_for_empty_wallet_balance() {
        let mut screen = FarmScreen::farming(FarmConfig::default());
        let snapshot = snapshot();
        let empty = LpToken::new("C", "C", 18, Uint128::zero());
        screen.on_select(empty);
        let view = ready_view(&screen, &snapshot);
        assert_eq!(view.action, ActionState::NeedsLiquidity);
        assert_eq!(view.link, Some(Route::Liquidity));
    }
}
