//! PIN retry and lockout for account closure
//!
//! Closing an account pays out its whole balance, so it gets a stricter PIN
//! check than ordinary deposits and withdrawals: the holder has a fixed
//! number of tries, and running out of tries locks the account.
//!
//! ```text
//!   Attempting { failures: 0 } --match--> Authenticated
//!        |  mismatch
//!        v
//!   Attempting { failures: n } --n == max--> Locked
//! ```
//!
//! `Authenticated` and `Locked` are terminal. The controller performs the
//! account-level side effect of each terminal state (full withdrawal or
//! lock); persisting the result is left to the caller, which owns the store.

use crate::core::traits::PinSource;
use crate::types::{Account, LedgerError};
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// Wrong PINs allowed before an account is locked
pub const MAX_PIN_ATTEMPTS: u32 = 3;

/// Position in the retry state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    /// Still accepting candidates
    Attempting { failures: u32 },
    /// A candidate matched
    Authenticated,
    /// Too many candidates failed
    Locked,
}

impl AuthState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, AuthState::Attempting { .. })
    }
}

/// What happened to the balance once the PIN was accepted
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FullWithdrawal {
    /// Balance was above the minimum and has been paid out
    Withdrawn(Decimal),
    /// Balance was at or below the minimum and was left as is
    BalanceTooLow(Decimal),
}

/// How a closure authentication run ended
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AuthOutcome {
    Authenticated(FullWithdrawal),
    /// The account has been locked
    LockedOut { attempts: u32 },
    /// The PIN source ran dry before a terminal state
    Abandoned { failures: u32 },
}

/// Bounded-retry PIN checker allowing [`MAX_PIN_ATTEMPTS`] tries
#[derive(Debug, Clone)]
pub struct LockoutController {
    state: AuthState,
}

impl LockoutController {
    pub fn new() -> Self {
        Self {
            state: AuthState::Attempting { failures: 0 },
        }
    }

    pub fn state(&self) -> AuthState {
        self.state
    }

    /// Check one candidate and advance the state machine
    ///
    /// Submitting to a terminal controller changes nothing.
    pub fn submit(&mut self, account: &Account, candidate: &str) -> AuthState {
        if let AuthState::Attempting { failures } = self.state {
            self.state = if account.authenticate(candidate) {
                AuthState::Authenticated
            } else if failures + 1 >= MAX_PIN_ATTEMPTS {
                AuthState::Locked
            } else {
                AuthState::Attempting {
                    failures: failures + 1,
                }
            };
        }
        self.state
    }

    /// Pull candidates from `pins` until a terminal state, then apply it
    ///
    /// On `Authenticated` the balance is paid out if it is above the
    /// minimum; on `Locked` the account is locked.
    ///
    /// # Errors
    ///
    /// Returns `AccountLocked` without consuming any PIN if the account is
    /// already locked.
    pub fn run<P: PinSource + ?Sized>(
        &mut self,
        account: &mut Account,
        pins: &mut P,
    ) -> Result<AuthOutcome, LedgerError> {
        if account.is_locked() {
            return Err(LedgerError::account_locked(account.name()));
        }

        let mut attempt = 1;
        loop {
            match self.state {
                AuthState::Attempting { failures } => {
                    let Some(candidate) = pins.next_pin(attempt) else {
                        debug!(account = account.name(), failures, "PIN entry abandoned");
                        return Ok(AuthOutcome::Abandoned { failures });
                    };
                    self.submit(account, &candidate);
                    attempt += 1;
                }
                AuthState::Authenticated => {
                    let withdrawal = match account.withdraw_all()? {
                        Some(amount) => FullWithdrawal::Withdrawn(amount),
                        None => FullWithdrawal::BalanceTooLow(account.balance()),
                    };
                    return Ok(AuthOutcome::Authenticated(withdrawal));
                }
                AuthState::Locked => {
                    account.lock();
                    warn!(
                        account = account.name(),
                        attempts = MAX_PIN_ATTEMPTS,
                        "account locked after repeated wrong PINs"
                    );
                    return Ok(AuthOutcome::LockedOut {
                        attempts: MAX_PIN_ATTEMPTS,
                    });
                }
            }
        }
    }
}

impl Default for LockoutController {
    fn default() -> Self {
        Self::new()
    }
}
