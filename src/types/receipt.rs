//! Outcome reports returned by successful ledger operations
//!
//! Each report renders, via `Display`, as the line the shell prints.

use rust_decimal::Decimal;
use std::fmt;

/// Result of a successful account-level operation
#[derive(Debug, Clone, PartialEq)]
pub enum Receipt {
    /// A new account was opened
    Opened { name: String, balance: Decimal },
    /// Funds were credited
    Deposited { amount: Decimal, balance: Decimal },
    /// Funds were debited
    Withdrew { amount: Decimal, balance: Decimal },
    /// Balance inquiry
    Balance { name: String, balance: Decimal },
}

/// Result of a close attempt that did not end in an error
#[derive(Debug, Clone, PartialEq)]
pub enum ClosureOutcome {
    /// Balance was paid out in full and the account removed
    Closed { name: String, withdrawn: Decimal },
    /// PIN accepted, but the balance is at or below the minimum; nothing changed
    BalanceTooLow { name: String, balance: Decimal },
    /// The PIN prompt ran out of input before a decision was reached
    Cancelled { name: String },
}

/// Render an amount in plain notation without trailing zeros
pub(crate) fn money(amount: &Decimal) -> Decimal {
    amount.normalize()
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Receipt::Opened { name, balance } => {
                write!(f, "Account {} opened with balance: ${}", name, money(balance))
            }
            Receipt::Deposited { amount, .. } => write!(f, "Deposited: ${}", money(amount)),
            Receipt::Withdrew { amount, .. } => write!(f, "Withdrew: ${}", money(amount)),
            Receipt::Balance { name, balance } => {
                write!(f, "Account: {}, Balance: ${}", name, money(balance))
            }
        }
    }
}

impl fmt::Display for ClosureOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClosureOutcome::Closed { withdrawn, .. } => write!(
                f,
                "Total amount withdrawn: ${}\nAccount closed successfully.",
                money(withdrawn)
            ),
            ClosureOutcome::BalanceTooLow { .. } => write!(
                f,
                "Balance too low to withdraw all funds. Please use regular withdrawal."
            ),
            ClosureOutcome::Cancelled { .. } => write!(f, "Account closure canceled."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case::deposit(Receipt::Deposited { amount: dec!(50.00), balance: dec!(150) }, "Deposited: $50")]
    #[case::fractional(Receipt::Withdrew { amount: dec!(12.50), balance: dec!(1) }, "Withdrew: $12.5")]
    #[case::balance(
        Receipt::Balance { name: "alice".to_string(), balance: dec!(100.25) },
        "Account: alice, Balance: $100.25"
    )]
    #[case::opened(
        Receipt::Opened { name: "bob".to_string(), balance: dec!(15) },
        "Account bob opened with balance: $15"
    )]
    fn test_receipt_display(#[case] receipt: Receipt, #[case] expected: &str) {
        assert_eq!(receipt.to_string(), expected);
    }

    #[test]
    fn test_closed_outcome_reports_withdrawal_then_closure() {
        let outcome = ClosureOutcome::Closed {
            name: "alice".to_string(),
            withdrawn: dec!(100.0),
        };
        assert_eq!(
            outcome.to_string(),
            "Total amount withdrawn: $100\nAccount closed successfully."
        );
    }
}
