//! Ledger store
//!
//! This module provides the `LedgerStore` which owns every account in memory
//! and keeps durable storage in step with it.
//!
//! The store is responsible for:
//! - Loading the collection once from storage at startup
//! - Preserving insertion order (display order is creation order)
//! - Exact-name lookup returning index handles
//! - Writing through to storage on insert, remove, save and purge

use crate::core::traits::AccountStorage;
use crate::types::{Account, LedgerError};
use tracing::{debug, info};

/// Position of an account inside a [`LedgerStore`]
///
/// A handle is valid until the next insert, remove or purge on the store it
/// came from. Use it within a single operation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountHandle(usize);

/// In-memory account collection backed by a storage port
pub struct LedgerStore<S: AccountStorage> {
    /// Accounts in creation order
    accounts: Vec<Account>,
    storage: S,
}

impl<S: AccountStorage> LedgerStore<S> {
    /// Load every account from `storage` and take ownership of it
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the backing store exists but cannot be read.
    pub fn open(storage: S) -> Result<Self, LedgerError> {
        let accounts = storage.load_all()?;
        info!(accounts = accounts.len(), "ledger opened");
        Ok(LedgerStore { accounts, storage })
    }

    /// All accounts in creation order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// The backing storage port
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Find the first account whose name matches exactly
    pub fn find(&self, name: &str) -> Option<AccountHandle> {
        self.accounts
            .iter()
            .position(|account| account.name() == name)
            .map(AccountHandle)
    }

    pub fn get(&self, handle: AccountHandle) -> Option<&Account> {
        self.accounts.get(handle.0)
    }

    pub fn get_mut(&mut self, handle: AccountHandle) -> Option<&mut Account> {
        self.accounts.get_mut(handle.0)
    }

    /// Add an account at the end and append its record to storage
    ///
    /// The account stays in memory even if the append fails.
    pub fn insert(&mut self, account: Account) -> Result<AccountHandle, LedgerError> {
        self.accounts.push(account);
        let handle = AccountHandle(self.accounts.len() - 1);
        self.storage.append_one(&self.accounts[handle.0])?;
        Ok(handle)
    }

    /// Remove the first account named `name`, then rewrite storage
    ///
    /// Storage is rewritten even when no account matched. Returns the
    /// removed account, if any.
    pub fn remove(&mut self, name: &str) -> Result<Option<Account>, LedgerError> {
        let removed = self
            .find(name)
            .map(|handle| self.accounts.remove(handle.0));
        self.save_all()?;
        Ok(removed)
    }

    /// Rewrite storage from the in-memory collection
    pub fn save_all(&mut self) -> Result<(), LedgerError> {
        self.storage.save_all(&self.accounts)?;
        debug!(accounts = self.accounts.len(), "ledger persisted");
        Ok(())
    }

    /// Truncate storage and forget every account
    ///
    /// Returns how many accounts were dropped. Memory is cleared only after
    /// storage was truncated successfully.
    pub fn purge_all(&mut self) -> Result<usize, LedgerError> {
        self.storage.purge()?;
        let dropped = self.accounts.len();
        self.accounts.clear();
        Ok(dropped)
    }
}
