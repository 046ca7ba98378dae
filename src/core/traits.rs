//! Core traits for durable storage and interactive PIN entry
//!
//! These are the two seams of the ledger engine: where account state leaves
//! the process, and where PIN candidates enter it during a close attempt.
//! Both are traits so the file-backed and terminal-backed versions used by
//! the binary can be swapped for in-memory fakes.

use crate::types::{Account, LedgerError};

/// Durable storage port for the account collection
///
/// Implementations hold the serialized ledger. The store calls `load_all`
/// once at startup and one of the write methods at the end of every
/// mutating use case.
pub trait AccountStorage {
    /// Read every account, in stored order
    ///
    /// Missing storage yields an empty collection rather than an error.
    fn load_all(&self) -> Result<Vec<Account>, LedgerError>;

    /// Replace the stored ledger with `accounts`, in order
    fn save_all(&mut self, accounts: &[Account]) -> Result<(), LedgerError>;

    /// Add a single account after the existing records
    fn append_one(&mut self, account: &Account) -> Result<(), LedgerError>;

    /// Truncate storage to empty
    fn purge(&mut self) -> Result<(), LedgerError>;
}

/// Supplies PIN candidates one at a time during a close attempt
///
/// `attempt` starts at 1. Returning `None` means no more input is available
/// and the attempt is abandoned.
pub trait PinSource {
    fn next_pin(&mut self, attempt: u32) -> Option<String>;
}

impl<F> PinSource for F
where
    F: FnMut(u32) -> Option<String>,
{
    fn next_pin(&mut self, attempt: u32) -> Option<String> {
        self(attempt)
    }
}
