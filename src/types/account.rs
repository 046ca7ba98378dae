//! Account record for the PIN ledger
//!
//! An account owns its balance, its PIN and its lock flag, and enforces the
//! rules that involve nothing but itself: locked accounts refuse balance
//! changes and balance display, and withdrawals respect the minimum balance.

use super::error::LedgerError;
use super::receipt::Receipt;
use rust_decimal::Decimal;

/// Minimum balance a withdrawal may not cross ($15)
pub const MINIMUM_BALANCE: Decimal = Decimal::from_parts(15, 0, 0, false, 0);

/// Smallest opening deposit accepted at creation ($15)
pub const MINIMUM_OPENING_DEPOSIT: Decimal = Decimal::from_parts(15, 0, 0, false, 0);

/// Check an opening deposit against [`MINIMUM_OPENING_DEPOSIT`]
pub fn validate_opening_deposit(amount: Decimal) -> Result<(), LedgerError> {
    if amount < MINIMUM_OPENING_DEPOSIT {
        return Err(LedgerError::insufficient_opening_deposit(
            amount,
            MINIMUM_OPENING_DEPOSIT,
        ));
    }
    Ok(())
}

/// Check that a name can be stored in the whitespace-separated record format
pub fn validate_name(name: &str) -> Result<(), LedgerError> {
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return Err(LedgerError::invalid_name(name));
    }
    Ok(())
}

/// A named, PIN-protected account
///
/// The PIN is kept in clear text, exactly as it is written to storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    name: String,
    balance: Decimal,
    pin: String,
    locked: bool,
}

impl Account {
    /// Create a new unlocked account
    ///
    /// Validation of the name, PIN and opening deposit belongs to the
    /// creation use case; this constructor accepts whatever it is given.
    pub fn new(name: impl Into<String>, balance: Decimal, pin: impl Into<String>) -> Self {
        Account {
            name: name.into(),
            balance,
            pin: pin.into(),
            locked: false,
        }
    }

    /// Rebuild an account from its stored fields
    pub fn restore(
        name: impl Into<String>,
        balance: Decimal,
        pin: impl Into<String>,
        locked: bool,
    ) -> Self {
        Account {
            name: name.into(),
            balance,
            pin: pin.into(),
            locked,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn pin(&self) -> &str {
        &self.pin
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Credit the account
    ///
    /// The amount is not checked for sign; a negative deposit lowers the
    /// balance.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The account is locked
    /// - The new balance would overflow (the balance is left unchanged)
    pub fn deposit(&mut self, amount: Decimal) -> Result<Receipt, LedgerError> {
        self.ensure_unlocked()?;
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow(&self.name, "deposit"))?;
        Ok(Receipt::Deposited {
            amount,
            balance: self.balance,
        })
    }

    /// Debit the account under the minimum-balance rule
    ///
    /// A withdrawal is refused only when the balance is above
    /// [`MINIMUM_BALANCE`] and the amount would take it below. An account
    /// already at or under the minimum can be drawn down by any amount,
    /// including past zero.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The account is locked
    /// - The withdrawal would cross the minimum balance
    /// - The new balance would overflow (the balance is left unchanged)
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Receipt, LedgerError> {
        self.ensure_unlocked()?;

        // TODO: balances at or below the minimum bypass the floor check entirely;
        // decide whether those withdrawals should at least stop at zero.
        if self.balance > MINIMUM_BALANCE && amount > self.balance - MINIMUM_BALANCE {
            return Err(LedgerError::floor_violation(
                &self.name,
                self.balance,
                amount,
                MINIMUM_BALANCE,
            ));
        }

        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow(&self.name, "withdrawal"))?;
        Ok(Receipt::Withdrew {
            amount,
            balance: self.balance,
        })
    }

    /// Pay out the whole balance when it is above the minimum
    ///
    /// Returns the amount paid out, or `None` when the balance is at or below
    /// [`MINIMUM_BALANCE`] (the balance is then left untouched).
    ///
    /// # Errors
    ///
    /// Returns `AccountLocked` if the account is locked.
    pub fn withdraw_all(&mut self) -> Result<Option<Decimal>, LedgerError> {
        self.ensure_unlocked()?;
        if self.balance > MINIMUM_BALANCE {
            let withdrawn = self.balance;
            self.balance = Decimal::ZERO;
            Ok(Some(withdrawn))
        } else {
            Ok(None)
        }
    }

    /// Report name and balance
    ///
    /// A locked account reveals neither.
    pub fn display(&self) -> Result<Receipt, LedgerError> {
        self.ensure_unlocked()?;
        Ok(Receipt::Balance {
            name: self.name.clone(),
            balance: self.balance,
        })
    }

    /// Exact, case-sensitive comparison against the stored PIN
    pub fn authenticate(&self, candidate: &str) -> bool {
        self.pin == candidate
    }

    /// Lock the account; there is no way back from inside the ledger
    pub fn lock(&mut self) {
        self.locked = true;
    }

    fn ensure_unlocked(&self) -> Result<(), LedgerError> {
        if self.locked {
            return Err(LedgerError::account_locked(&self.name));
        }
        Ok(())
    }
}
