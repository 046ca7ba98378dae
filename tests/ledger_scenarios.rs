//! Ledger scenarios across process restarts
//!
//! Each step reopens the ledger from the same file, the way separate runs of
//! the binary would, so every assertion also checks what reached disk.

use pin_ledger::{ClosureOutcome, FileStorage, Ledger, LedgerError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn reopen(path: &Path) -> Ledger<FileStorage> {
    Ledger::open(FileStorage::new(path)).expect("ledger should open")
}

fn pins(script: &'static [&'static str]) -> impl FnMut(u32) -> Option<String> {
    move |attempt| script.get(attempt as usize - 1).map(|p| p.to_string())
}

fn balance_of(ledger: &Ledger<FileStorage>, name: &str) -> Decimal {
    let handle = ledger.store().find(name).expect("account should exist");
    ledger.store().get(handle).unwrap().balance()
}

#[test]
fn withdrawal_past_floor_is_rejected_and_nothing_changes_on_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("accounts.txt");

    reopen(&path)
        .create_account("alice", dec!(100), "12345")
        .unwrap();

    let mut ledger = reopen(&path);
    let result = ledger.withdraw("alice", "12345", dec!(90));
    assert!(matches!(
        result,
        Err(LedgerError::InsufficientFundsOrFloorViolation { .. })
    ));

    assert_eq!(balance_of(&reopen(&path), "alice"), dec!(100));
}

#[test]
fn low_opening_deposit_leaves_no_file_behind() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("accounts.txt");

    let mut ledger = reopen(&path);
    let result = ledger.create_account("bob", dec!(10), "12345");

    assert!(matches!(
        result,
        Err(LedgerError::InsufficientOpeningDeposit { .. })
    ));
    assert!(ledger.store().is_empty());
    assert!(!path.exists());
}

#[test]
fn closing_with_correct_pin_pays_out_and_removes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("accounts.txt");
    reopen(&path)
        .create_account("alice", dec!(100), "12345")
        .unwrap();

    let outcome = reopen(&path)
        .close_account("alice", &mut pins(&["12345"]))
        .unwrap();

    assert_eq!(
        outcome,
        ClosureOutcome::Closed {
            name: "alice".to_string(),
            withdrawn: dec!(100)
        }
    );
    assert!(!reopen(&path).contains("alice"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn lockout_survives_restart_and_blocks_everything() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("accounts.txt");
    reopen(&path)
        .create_account("alice", dec!(100), "12345")
        .unwrap();

    let result = reopen(&path).close_account("alice", &mut pins(&["00000", "11111", "22222"]));
    assert_eq!(result, Err(LedgerError::auth_lockout("alice", 3)));

    let mut ledger = reopen(&path);
    assert!(ledger.contains("alice"));
    assert!(ledger.store().accounts()[0].is_locked());
    assert!(matches!(
        ledger.deposit("alice", "12345", dec!(1)),
        Err(LedgerError::AccountLocked { .. })
    ));
    assert!(matches!(
        ledger.inquire("alice", "12345"),
        Err(LedgerError::AccountLocked { .. })
    ));
    assert!(matches!(
        ledger.close_account("alice", &mut pins(&["12345"])),
        Err(LedgerError::AccountLocked { .. })
    ));
}

#[test]
fn accounts_keep_creation_order_across_edits() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("accounts.txt");

    let mut ledger = reopen(&path);
    ledger.create_account("zed", dec!(20), "11111").unwrap();
    ledger.create_account("amy", dec!(30), "22222").unwrap();
    ledger.create_account("bea", dec!(40), "33333").unwrap();
    ledger.deposit("zed", "11111", dec!(100)).unwrap();

    let names: Vec<String> = reopen(&path)
        .store()
        .accounts()
        .iter()
        .map(|a| a.name().to_string())
        .collect();
    assert_eq!(names, vec!["zed", "amy", "bea"]);
}

#[test]
fn purge_empties_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("accounts.txt");

    let mut ledger = reopen(&path);
    ledger.create_account("alice", dec!(100), "12345").unwrap();
    ledger.create_account("bob", dec!(50), "54321").unwrap();
    assert_eq!(ledger.purge_all().unwrap(), 2);

    assert!(reopen(&path).store().is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}
