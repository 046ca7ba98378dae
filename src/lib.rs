//! PIN Ledger Library
//! # Overview
//!
//! This library provides a single-node account ledger: named accounts
//! protected by a five-digit PIN, persisted to a text file between sessions.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, receipts, errors, PIN validation)
//! - [`cli`] - CLI arguments, logging setup and the interactive menu
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - Use-case operations (create, deposit, withdraw, inquire, close, purge)
//!   - [`core::ledger_store`] - Ordered account collection and write-through persistence
//!   - [`core::lockout`] - PIN retry and lockout state machine for closure
//! - [`io`] - Record format and storage backends (file, in-memory)
//!
//! # Account Rules
//!
//! - Opening deposit of at least $15 and a PIN of exactly five ASCII digits
//! - Withdrawals may not take a balance above $15 below $15; balances already
//!   at or below $15 are not protected
//! - Closing pays out the whole balance and allows three PIN attempts;
//!   three failures lock the account permanently
//! - Locked accounts refuse deposits, withdrawals and balance display
//!
//! # Known Gaps
//!
//! PINs and balances are stored in clear text, deposit and withdrawal
//! amounts are not checked for sign, and file rewrites are not atomic.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use core::{AccountStorage, Ledger, LedgerStore, LockoutController, PinSource};
pub use io::{FileStorage, MemoryStorage};
pub use types::{is_valid_pin, Account, ClosureOutcome, LedgerError, Receipt};
