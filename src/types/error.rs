//! Error types for the PIN ledger
//!
//! Every variant is recoverable at the use-case boundary: the shell prints the
//! message and the session continues. The `#[error]` text is the message the
//! account holder sees, so it is phrased for the menu rather than for logs.
//!
//! # Error Categories
//!
//! - **Creation Errors**: invalid PIN, opening deposit below the minimum, bad or duplicate names
//! - **Access Errors**: unknown account, wrong PIN, locked account, lockout after repeated failures
//! - **Balance Errors**: withdrawal that would breach the minimum balance, or a
//!   balance that no longer fits in a `Decimal`
//! - **Storage Errors**: the data file could not be read or written

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for ledger operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// PIN supplied at creation is not exactly five ASCII digits
    #[error("Invalid PIN. Please enter exactly 5 digits.")]
    InvalidPin,

    /// Opening deposit is below the required minimum
    #[error("Initial deposit must be at least ${minimum} (offered ${deposit}).")]
    InsufficientOpeningDeposit {
        /// Amount offered as the opening deposit
        deposit: Decimal,
        /// Smallest accepted opening deposit
        minimum: Decimal,
    },

    /// Account name is empty or contains whitespace
    #[error("Invalid account name '{name}': names must be non-empty and contain no whitespace.")]
    InvalidName {
        /// The rejected name
        name: String,
    },

    /// An account with this name already exists
    #[error("An account named '{name}' already exists.")]
    DuplicateAccount {
        /// The name already in use
        name: String,
    },

    /// No account matches the given name
    #[error("No such account '{name}' present, please retry.")]
    AccountNotFound {
        /// The name that was looked up
        name: String,
    },

    /// Single-attempt PIN check failed
    #[error("Wrong PIN. Please try again.")]
    WrongPin {
        /// Account the PIN was checked against
        name: String,
    },

    /// Account is locked; balances can be neither changed nor shown
    #[error("Account is locked. Please visit customer support.")]
    AccountLocked {
        /// Name of the locked account
        name: String,
    },

    /// Withdrawal would leave the account below the minimum balance
    #[error("Insufficient funds or withdrawal would drop balance below ${floor}!")]
    InsufficientFundsOrFloorViolation {
        /// Account name
        name: String,
        /// Balance before the attempted withdrawal
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
        /// Minimum balance protected by the rule
        floor: Decimal,
    },

    /// Balance arithmetic would overflow; the balance is left unchanged
    #[error("Amount too large: {operation} on account '{name}' would overflow the balance.")]
    ArithmeticOverflow {
        /// Account name
        name: String,
        /// Operation that overflowed
        operation: String,
    },

    /// Closure was refused after too many wrong PINs; the account is now locked
    #[error("Too many incorrect attempts ({attempts}). Your account has been locked. Please visit customer support.")]
    AuthLockout {
        /// Account name
        name: String,
        /// Number of failed attempts that triggered the lock
        attempts: u32,
    },

    /// Durable storage could not be read or written
    ///
    /// The in-memory ledger keeps whatever mutation preceded the failure; the
    /// next successful full save brings storage back in line.
    #[error("Storage error: {message}")]
    Storage {
        /// Description of the I/O failure
        message: String,
    },
}

// Conversion from io::Error to LedgerError
impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::Storage {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an InsufficientOpeningDeposit error
    pub fn insufficient_opening_deposit(deposit: Decimal, minimum: Decimal) -> Self {
        LedgerError::InsufficientOpeningDeposit { deposit, minimum }
    }

    /// Create an InvalidName error
    pub fn invalid_name(name: &str) -> Self {
        LedgerError::InvalidName {
            name: name.to_string(),
        }
    }

    /// Create a DuplicateAccount error
    pub fn duplicate_account(name: &str) -> Self {
        LedgerError::DuplicateAccount {
            name: name.to_string(),
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(name: &str) -> Self {
        LedgerError::AccountNotFound {
            name: name.to_string(),
        }
    }

    /// Create a WrongPin error
    pub fn wrong_pin(name: &str) -> Self {
        LedgerError::WrongPin {
            name: name.to_string(),
        }
    }

    /// Create an AccountLocked error
    pub fn account_locked(name: &str) -> Self {
        LedgerError::AccountLocked {
            name: name.to_string(),
        }
    }

    /// Create an InsufficientFundsOrFloorViolation error
    pub fn floor_violation(name: &str, balance: Decimal, requested: Decimal, floor: Decimal) -> Self {
        LedgerError::InsufficientFundsOrFloorViolation {
            name: name.to_string(),
            balance,
            requested,
            floor,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(name: &str, operation: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            name: name.to_string(),
            operation: operation.to_string(),
        }
    }

    /// Create an AuthLockout error
    pub fn auth_lockout(name: &str, attempts: u32) -> Self {
        LedgerError::AuthLockout {
            name: name.to_string(),
            attempts,
        }
    }

    /// Create a Storage error that names the file involved
    pub fn storage(path: &std::path::Path, error: std::io::Error) -> Self {
        LedgerError::Storage {
            message: format!("'{}': {}", path.display(), error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use std::path::Path;

    #[rstest]
    #[case::invalid_pin(LedgerError::InvalidPin, "Invalid PIN. Please enter exactly 5 digits.")]
    #[case::opening_deposit(
        LedgerError::insufficient_opening_deposit(dec!(10), dec!(15)),
        "Initial deposit must be at least $15 (offered $10)."
    )]
    #[case::not_found(
        LedgerError::account_not_found("carol"),
        "No such account 'carol' present, please retry."
    )]
    #[case::wrong_pin(LedgerError::wrong_pin("alice"), "Wrong PIN. Please try again.")]
    #[case::locked(
        LedgerError::account_locked("alice"),
        "Account is locked. Please visit customer support."
    )]
    #[case::floor(
        LedgerError::floor_violation("alice", dec!(100), dec!(90), dec!(15)),
        "Insufficient funds or withdrawal would drop balance below $15!"
    )]
    #[case::lockout(
        LedgerError::auth_lockout("alice", 3),
        "Too many incorrect attempts (3). Your account has been locked. Please visit customer support."
    )]
    #[case::duplicate(
        LedgerError::duplicate_account("bob"),
        "An account named 'bob' already exists."
    )]
    #[case::overflow(
        LedgerError::arithmetic_overflow("alice", "deposit"),
        "Amount too large: deposit on account 'alice' would overflow the balance."
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: LedgerError = io_error.into();
        assert!(matches!(error, LedgerError::Storage { .. }));
        assert_eq!(error.to_string(), "Storage error: Permission denied");
    }

    #[test]
    fn test_storage_helper_names_path() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error = LedgerError::storage(Path::new("accounts.txt"), io_error);
        assert_eq!(error.to_string(), "Storage error: 'accounts.txt': gone");
    }
}
