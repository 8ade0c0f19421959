//! Action eligibility state machine
//!
//! Decides which single action the screen offers for the current inputs.
//! Evaluated from scratch on every call; there is no stored history.

use cosmwasm_std::Uint128;
use serde::Serialize;

use crate::farming::allowance::requires_approval;
use crate::farming::FarmMode;
use crate::token::LpToken;
use crate::utils::read_amount;

/// Transaction the primary button sends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Action {
    Deposit,
    Withdraw,
}

impl Action {
    pub fn for_mode(mode: FarmMode) -> Self {
        match mode {
            FarmMode::Deposit => Action::Deposit,
            FarmMode::Withdraw => Action::Withdraw,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Action::Deposit => "deposit",
            Action::Withdraw => "withdraw",
        }
    }
}

/// What the screen's action area shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActionState {
    /// No token selected
    NoSelection,
    /// Nothing to deposit (wallet balance) or withdraw (deposit) for the token
    NeedsLiquidity,
    /// Token data is being fetched
    Loading,
    /// The entered amount exceeds the available balance
    InsufficientBalance,
    /// The amount is empty, unparseable or zero; the action stays disabled
    AwaitingAmount(Action),
    /// The farm contract must be approved to spend the token first
    NeedsApproval,
    Ready(Action),
}

impl ActionState {
    /// Whether pressing the action area starts a wallet call
    pub fn is_actionable(&self) -> bool {
        matches!(self, ActionState::NeedsApproval | ActionState::Ready(_))
    }
}

/// Everything the state machine reads
#[derive(Debug, Clone, Copy)]
pub struct EligibilityInput<'a> {
    pub mode: FarmMode,
    pub selected: Option<&'a LpToken>,
    pub amount: &'a str,
    pub allowed: bool,
    pub loading: bool,
}

/// Balance an action draws from: the wallet for deposits, the farm for withdrawals
pub fn effective_balance(mode: FarmMode, token: &LpToken) -> Uint128 {
    match mode {
        FarmMode::Deposit => token.balance,
        FarmMode::Withdraw => token.deposited(),
    }
}

/// Compute the action state. The first matching condition wins.
pub fn evaluate(input: EligibilityInput<'_>) -> ActionState {
    let Some(token) = input.selected else {
        return ActionState::NoSelection;
    };

    let balance = effective_balance(input.mode, token);
    if balance.is_zero() {
        return ActionState::NeedsLiquidity;
    }

    if input.loading {
        return ActionState::Loading;
    }

    // Non-numeric input never exceeds a balance; oversized or over-precise
    // numbers still compare by value
    let amount = read_amount(input.amount, token.decimals);
    if amount.exceeds(balance) {
        return ActionState::InsufficientBalance;
    }

    let action = Action::for_mode(input.mode);
    if amount.value().is_zero() {
        return ActionState::AwaitingAmount(action);
    }

    if input.mode == FarmMode::Deposit
        && requires_approval(Some(token), input.amount, input.allowed)
    {
        return ActionState::NeedsApproval;
    }

    ActionState::Ready(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE: u128 = 1_000_000_000_000_000_000;

    fn token(balance: u128) -> LpToken {
        LpToken::new("0xlp", "LP", 18, Uint128::new(balance))
    }

    fn deposit<'a>(token: &'a LpToken, amount: &'a str, allowed: bool) -> EligibilityInput<'a> {
        EligibilityInput {
            mode: FarmMode::Deposit,
            selected: Some(token),
            amount,
            allowed,
            loading: false,
        }
    }

    #[test]
    fn test_no_selection() {
        let input = EligibilityInput {
            mode: FarmMode::Deposit,
            selected: None,
            amount: "1",
            allowed: true,
            loading: true,
        };
        assert_eq!(evaluate(input), ActionState::NoSelection);
    }

    #[test]
    fn test_zero_balance_wins_over_insufficiency() {
        let t = token(0);
        assert_eq!(evaluate(deposit(&t, "1", true)), ActionState::NeedsLiquidity);
    }

    #[test]
    fn test_insufficient_balance() {
        let t = token(ONE);
        assert_eq!(
            evaluate(deposit(&t, "2", true)),
            ActionState::InsufficientBalance
        );
    }

    #[test]
    fn test_loading_checked_before_amount() {
        let t = token(ONE);
        let mut input = deposit(&t, "2", true);
        input.loading = true;
        assert_eq!(evaluate(input), ActionState::Loading);
    }

    #[test]
    fn test_invalid_amounts_are_never_insufficient() {
        let t = token(ONE);
        for amount in ["", " ", "abc", "-3", "1.2.3", "0"] {
            let state = evaluate(deposit(&t, amount, false));
            assert_eq!(state, ActionState::AwaitingAmount(Action::Deposit), "{:?}", amount);
            assert!(!state.is_actionable());
        }
    }

    #[test]
    fn test_approval_then_ready() {
        let t = token(5 * ONE);
        assert_eq!(evaluate(deposit(&t, "1", false)), ActionState::NeedsApproval);
        assert_eq!(
            evaluate(deposit(&t, "1", true)),
            ActionState::Ready(Action::Deposit)
        );
    }

    #[test]
    fn test_withdraw_uses_deposited_amount_and_skips_approval() {
        let t = token(0).with_deposit(Uint128::new(3 * ONE));
        let input = EligibilityInput {
            mode: FarmMode::Withdraw,
            selected: Some(&t),
            amount: "3",
            allowed: false,
            loading: false,
        };
        assert_eq!(evaluate(input), ActionState::Ready(Action::Withdraw));

        let input = EligibilityInput { amount: "3.1", ..input };
        assert_eq!(evaluate(input), ActionState::InsufficientBalance);

        let none_deposited = token(5 * ONE);
        let input = EligibilityInput {
            selected: Some(&none_deposited),
            ..input
        };
        assert_eq!(evaluate(input), ActionState::NeedsLiquidity);
    }

    #[test]
    fn test_unrepresentable_amounts_compare_by_value() {
        let t = token(5 * ONE);
        assert_eq!(
            evaluate(deposit(&t, "1000000000000000000000", true)),
            ActionState::InsufficientBalance
        );
        assert_eq!(
            evaluate(deposit(&t, "5.0000000000000000001", true)),
            ActionState::InsufficientBalance
        );
        // Finer than one base unit but within the balance: not sendable
        assert_eq!(
            evaluate(deposit(&t, "4.0000000000000000001", true)),
            ActionState::AwaitingAmount(Action::Deposit)
        );
    }
}
