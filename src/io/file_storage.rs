//! File-backed account storage
//!
//! Keeps the ledger in a single text file using the record format from
//! [`crate::io::record_format`].
//!
//! # Durability
//!
//! `save_all` truncates and rewrites the file in place. A crash or power
//! loss part-way through leaves a truncated file; the next load keeps the
//! accounts that were fully written and drops the rest. Writes are not
//! atomic and the file is not locked against other processes.

use crate::core::traits::AccountStorage;
use crate::io::record_format::{format_record, parse_records, write_records};
use crate::types::{Account, LedgerError};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Account storage in a plain text file
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Create storage backed by `path`
    ///
    /// The file does not need to exist yet; it is created on the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, error: std::io::Error) -> LedgerError {
        LedgerError::storage(&self.path, error)
    }
}

impl AccountStorage for FileStorage {
    fn load_all(&self) -> Result<Vec<Account>, LedgerError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no ledger file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let parsed = parse_records(&contents);
        if parsed.discarded_tokens > 0 {
            warn!(
                path = %self.path.display(),
                loaded = parsed.accounts.len(),
                discarded_tokens = parsed.discarded_tokens,
                "ledger file has an unreadable record; ignoring it and everything after it"
            );
        }
        debug!(path = %self.path.display(), accounts = parsed.accounts.len(), "ledger loaded");
        Ok(parsed.accounts)
    }

    fn save_all(&mut self, accounts: &[Account]) -> Result<(), LedgerError> {
        let file = File::create(&self.path).map_err(|e| self.io_error(e))?;
        let mut writer = BufWriter::new(file);
        write_records(accounts, &mut writer).map_err(|e| self.io_error(e))?;
        writer.flush().map_err(|e| self.io_error(e))?;
        debug!(path = %self.path.display(), accounts = accounts.len(), "ledger saved");
        Ok(())
    }

    fn append_one(&mut self, account: &Account) -> Result<(), LedgerError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        writeln!(file, "{}", format_record(account)).map_err(|e| self.io_error(e))?;
        debug!(path = %self.path.display(), account = account.name(), "record appended");
        Ok(())
    }

    fn purge(&mut self) -> Result<(), LedgerError> {
        File::create(&self.path).map_err(|e| self.io_error(e))?;
        debug!(path = %self.path.display(), "ledger file truncated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    /// Helper function to create a temporary ledger file for testing
    fn create_temp_ledger(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("accounts.txt"));

        assert!(storage.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_load_existing_file() {
        let file = create_temp_ledger("alice 100 12345 0\nbob 16.5 54321 1\n");
        let storage = FileStorage::new(file.path());

        let accounts = storage.load_all().unwrap();
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].name(), "alice");
        assert_eq!(accounts[1].balance(), dec!(16.5));
        assert!(accounts[1].is_locked());
    }

    #[test]
    fn test_load_keeps_records_before_corruption() {
        let file = create_temp_ledger("alice 100 12345 0\nbroken\ncarol 30 11111 0\n");
        let storage = FileStorage::new(file.path());

        let accounts = storage.load_all().unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].name(), "alice");
    }

    #[test]
    fn test_load_directory_is_storage_error() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        assert!(matches!(
            storage.load_all(),
            Err(LedgerError::Storage { .. })
        ));
    }

    #[test]
    fn test_save_all_overwrites_file() {
        let file = create_temp_ledger("old 1 00000 0\nolder 2 00000 0\n");
        let mut storage = FileStorage::new(file.path());

        storage
            .save_all(&[Account::new("alice", dec!(100), "12345")])
            .unwrap();

        assert_eq!(
            fs::read_to_string(file.path()).unwrap(),
            "alice 100 12345 0\n"
        );
    }

    #[test]
    fn test_append_one_creates_then_extends() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("accounts.txt");
        let mut storage = FileStorage::new(&path);

        storage
            .append_one(&Account::new("alice", dec!(100), "12345"))
            .unwrap();
        storage
            .append_one(&Account::new("bob", dec!(20), "54321"))
            .unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "alice 100 12345 0\nbob 20 54321 0\n"
        );
    }

    #[test]
    fn test_purge_truncates() {
        let file = create_temp_ledger("alice 100 12345 0\n");
        let mut storage = FileStorage::new(file.path());

        storage.purge().unwrap();

        assert_eq!(fs::read_to_string(file.path()).unwrap(), "");
        assert!(storage.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path().join("missing").join("accounts.txt"));

        let result = storage.save_all(&[]);
        assert!(matches!(result, Err(LedgerError::Storage { .. })));
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path().join("accounts.txt"));
        let accounts = vec![
            Account::new("alice", dec!(100.10), "12345"),
            Account::restore("bob", dec!(-3), "54321", true),
            Account::new("carol", dec!(15), "00000"),
        ];

        storage.save_all(&accounts).unwrap();

        assert_eq!(storage.load_all().unwrap(), accounts);
    }
}
