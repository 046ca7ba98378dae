//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: the account record and its balance rules
//! - `pin`: PIN format validation
//! - `receipt`: outcome reports for successful operations
//! - `error`: Error types for the ledger

pub mod account;
pub mod error;
pub mod pin;
pub mod receipt;

pub use account::{
    validate_name, validate_opening_deposit, Account, MINIMUM_BALANCE, MINIMUM_OPENING_DEPOSIT,
};
pub use error::LedgerError;
pub use pin::{is_valid_pin, PIN_LENGTH};
pub use receipt::{ClosureOutcome, Receipt};
