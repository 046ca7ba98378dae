//! Ledger operations
//!
//! This module provides the `Ledger`, the set of use cases the shell calls.
//! It composes the account record, the lockout controller and the store,
//! and finishes every mutating call by bringing storage in line with memory.
//!
//! The ledger enforces:
//! - Creation rules (opening deposit, PIN format, name format, unique names)
//! - A single exact PIN check for deposit, withdrawal and inquiry
//! - Bounded retries with lockout for closure
//!
//! # Persistence
//!
//! Creation appends one record; deposit, withdrawal, closure and lockout
//! rewrite the whole file; purge truncates it. If a write fails the
//! in-memory change is kept and the error is returned, so memory and
//! storage disagree until the next successful full save.

use crate::core::ledger_store::{AccountHandle, LedgerStore};
use crate::core::lockout::{AuthOutcome, FullWithdrawal, LockoutController};
use crate::core::traits::{AccountStorage, PinSource};
use crate::types::{
    is_valid_pin, validate_name, validate_opening_deposit, Account, ClosureOutcome, LedgerError,
    Receipt,
};
use rust_decimal::Decimal;
use tracing::{info, warn};

/// Account ledger use cases over a storage backend
pub struct Ledger<S: AccountStorage> {
    store: LedgerStore<S>,
}

impl<S: AccountStorage> Ledger<S> {
    /// Load the ledger from `storage`
    pub fn open(storage: S) -> Result<Self, LedgerError> {
        Ok(Ledger {
            store: LedgerStore::open(storage)?,
        })
    }

    /// The underlying account store
    pub fn store(&self) -> &LedgerStore<S> {
        &self.store
    }

    /// Whether an account with exactly this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.store.find(name).is_some()
    }

    /// Open a new account
    ///
    /// Checks run in this order: opening deposit, name, PIN, uniqueness.
    /// Nothing is stored unless every check passes.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The opening deposit is below the minimum
    /// - The name is empty or contains whitespace
    /// - The PIN is not exactly five ASCII digits
    /// - An account with the same name exists
    /// - The new record cannot be appended to storage
    pub fn create_account(
        &mut self,
        name: &str,
        opening_deposit: Decimal,
        pin: &str,
    ) -> Result<Receipt, LedgerError> {
        validate_opening_deposit(opening_deposit)?;
        validate_name(name)?;
        if !is_valid_pin(pin) {
            return Err(LedgerError::InvalidPin);
        }
        if self.contains(name) {
            return Err(LedgerError::duplicate_account(name));
        }

        self.store
            .insert(Account::new(name, opening_deposit, pin))?;
        info!(account = name, balance = %opening_deposit, "account created");

        Ok(Receipt::Opened {
            name: name.to_string(),
            balance: opening_deposit,
        })
    }

    /// Credit an account after a single PIN check, then persist
    pub fn deposit(&mut self, name: &str, pin: &str, amount: Decimal) -> Result<Receipt, LedgerError> {
        warn_if_not_positive("deposit", name, amount);
        let handle = self.authorize(name, pin)?;
        let receipt = self.account_mut(handle, name)?.deposit(amount)?;
        self.store.save_all()?;
        Ok(receipt)
    }

    /// Debit an account after a single PIN check, then persist
    pub fn withdraw(&mut self, name: &str, pin: &str, amount: Decimal) -> Result<Receipt, LedgerError> {
        warn_if_not_positive("withdrawal", name, amount);
        let handle = self.authorize(name, pin)?;
        let receipt = self.account_mut(handle, name)?.withdraw(amount)?;
        self.store.save_all()?;
        Ok(receipt)
    }

    /// Show name and balance after a single PIN check
    pub fn inquire(&self, name: &str, pin: &str) -> Result<Receipt, LedgerError> {
        let handle = self.authorize(name, pin)?;
        self.store
            .get(handle)
            .ok_or_else(|| LedgerError::account_not_found(name))?
            .display()
    }

    /// Display every account in creation order
    ///
    /// Locked accounts appear as `AccountLocked` entries.
    pub fn list_accounts(&self) -> Vec<Result<Receipt, LedgerError>> {
        self.store.accounts().iter().map(Account::display).collect()
    }

    /// Pay out and remove an account, guarded by retrying PIN entry
    ///
    /// PIN candidates come from `pins`. Outcomes:
    /// - PIN accepted, balance above the minimum: balance paid out, account
    ///   removed, storage rewritten (`Closed`)
    /// - PIN accepted, balance at or below the minimum: nothing changes
    ///   (`BalanceTooLow`)
    /// - `pins` runs dry: nothing changes (`Cancelled`)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No account has this name
    /// - The account is already locked
    /// - Every allowed PIN attempt fails; the account is then locked and
    ///   the lock persisted (`AuthLockout`)
    /// - Storage cannot be rewritten
    pub fn close_account<P: PinSource + ?Sized>(
        &mut self,
        name: &str,
        pins: &mut P,
    ) -> Result<ClosureOutcome, LedgerError> {
        let handle = self
            .store
            .find(name)
            .ok_or_else(|| LedgerError::account_not_found(name))?;
        let account = self.account_mut(handle, name)?;

        match LockoutController::new().run(account, pins)? {
            AuthOutcome::Authenticated(FullWithdrawal::Withdrawn(withdrawn)) => {
                self.store.remove(name)?;
                info!(account = name, withdrawn = %withdrawn, "account closed");
                Ok(ClosureOutcome::Closed {
                    name: name.to_string(),
                    withdrawn,
                })
            }
            AuthOutcome::Authenticated(FullWithdrawal::BalanceTooLow(balance)) => {
                Ok(ClosureOutcome::BalanceTooLow {
                    name: name.to_string(),
                    balance,
                })
            }
            AuthOutcome::LockedOut { attempts } => {
                self.store.save_all()?;
                Err(LedgerError::auth_lockout(name, attempts))
            }
            AuthOutcome::Abandoned { .. } => Ok(ClosureOutcome::Cancelled {
                name: name.to_string(),
            }),
        }
    }

    /// Delete every account, in storage and in memory
    ///
    /// Returns how many accounts were deleted. Asking for confirmation is
    /// the caller's job.
    pub fn purge_all(&mut self) -> Result<usize, LedgerError> {
        let dropped = self.store.purge_all()?;
        warn!(accounts = dropped, "all accounts deleted");
        Ok(dropped)
    }

    /// Look up `name` and check `pin` once, with no retry
    fn authorize(&self, name: &str, pin: &str) -> Result<AccountHandle, LedgerError> {
        let handle = self
            .store
            .find(name)
            .ok_or_else(|| LedgerError::account_not_found(name))?;
        let authenticated = self
            .store
            .get(handle)
            .is_some_and(|account| account.authenticate(pin));
        if !authenticated {
            info!(account = name, "wrong PIN");
            return Err(LedgerError::wrong_pin(name));
        }
        Ok(handle)
    }

    fn account_mut(&mut self, handle: AccountHandle, name: &str) -> Result<&mut Account, LedgerError> {
        self.store
            .get_mut(handle)
            .ok_or_else(|| LedgerError::account_not_found(name))
    }
}

// Amounts are not sign-checked; zero and negative values go through as given.
fn warn_if_not_positive(operation: &str, name: &str, amount: Decimal) {
    if amount <= Decimal::ZERO {
        warn!(operation, account = name, amount = %amount, "non-positive amount accepted");
    }
}
