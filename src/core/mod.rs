//! Core business logic module
//!
//! This module contains the ledger engine components:
//! - `traits` - Storage and PIN-entry ports
//! - `ledger_store` - Ordered in-memory account collection with write-through persistence
//! - `lockout` - Bounded PIN retries and lockout for closure
//! - `ledger` - Use-case operations called by the shell

pub mod ledger;
pub mod ledger_store;
pub mod lockout;
pub mod traits;

pub use ledger::Ledger;
pub use ledger_store::{AccountHandle, LedgerStore};
pub use lockout::{AuthOutcome, AuthState, FullWithdrawal, LockoutController, MAX_PIN_ATTEMPTS};
pub use traits::{AccountStorage, PinSource};
