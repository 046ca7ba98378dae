//! In-memory account storage
//!
//! Holds the serialized ledger in a `String` using the same record format as
//! [`FileStorage`](crate::io::FileStorage), so tests exercise the real
//! encoding without touching the filesystem. Writes can be made to fail on
//! demand to observe how the ledger behaves when persistence breaks.

use crate::core::traits::AccountStorage;
use crate::io::record_format::{format_record, parse_records, write_records};
use crate::types::{Account, LedgerError};

/// Account storage backed by an in-memory buffer
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    contents: String,
    writes: usize,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing serialized records
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
            ..Self::default()
        }
    }

    /// Current serialized ledger
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Number of successful write operations (save, append or purge)
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Make every subsequent write fail with a storage error
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    fn check_writable(&self) -> Result<(), LedgerError> {
        if self.fail_writes {
            return Err(LedgerError::Storage {
                message: "in-memory storage is read-only".to_string(),
            });
        }
        Ok(())
    }
}

impl AccountStorage for MemoryStorage {
    fn load_all(&self) -> Result<Vec<Account>, LedgerError> {
        Ok(parse_records(&self.contents).accounts)
    }

    fn save_all(&mut self, accounts: &[Account]) -> Result<(), LedgerError> {
        self.check_writable()?;
        let mut buffer = Vec::new();
        write_records(accounts, &mut buffer)?;
        self.contents = String::from_utf8_lossy(&buffer).into_owned();
        self.writes += 1;
        Ok(())
    }

    fn append_one(&mut self, account: &Account) -> Result<(), LedgerError> {
        self.check_writable()?;
        self.contents.push_str(&format_record(account));
        self.contents.push('\n');
        self.writes += 1;
        Ok(())
    }

    fn purge(&mut self) -> Result<(), LedgerError> {
        self.check_writable()?;
        self.contents.clear();
        self.writes += 1;
        Ok(())
    }
}
