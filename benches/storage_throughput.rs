//! Benchmark suite for ledger persistence
//!
//! Measures the cost of the full-file rewrite that follows every balance
//! change, and of loading and parsing the ledger at startup, using the divan
//! benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//! ```
//!
//! Ledgers are generated in memory with 100, 1,000 and 100,000 accounts, a
//! mix of whole and fractional balances, and every tenth account locked.

use pin_ledger::core::AccountStorage;
use pin_ledger::io::{parse_records, write_records};
use pin_ledger::{Account, FileStorage};
use rust_decimal::Decimal;
use tempfile::tempdir;

fn main() {
    divan::main();
}

const SIZES: &[usize] = &[100, 1_000, 100_000];

fn generate_accounts(count: usize) -> Vec<Account> {
    (0..count)
        .map(|i| {
            let balance = Decimal::new(1_500 + (i as i64 * 37) % 100_000, 2);
            let pin = format!("{:05}", i % 100_000);
            Account::restore(format!("holder{}", i), balance, pin, i % 10 == 0)
        })
        .collect()
}

fn render(accounts: &[Account]) -> String {
    let mut buffer = Vec::new();
    write_records(accounts, &mut buffer).expect("Writing to a Vec cannot fail");
    String::from_utf8(buffer).expect("Records are ASCII")
}

/// Serialize a ledger into the text record format
#[divan::bench(args = SIZES)]
fn format_ledger(bencher: divan::Bencher, count: usize) {
    let accounts = generate_accounts(count);
    bencher.bench_local(|| render(divan::black_box(&accounts)));
}

/// Parse a ledger from the text record format
#[divan::bench(args = SIZES)]
fn parse_ledger(bencher: divan::Bencher, count: usize) {
    let text = render(&generate_accounts(count));
    bencher.bench_local(|| parse_records(divan::black_box(&text)));
}

/// Rewrite the ledger file, as done after every deposit or withdrawal
#[divan::bench(args = SIZES)]
fn save_all_to_file(bencher: divan::Bencher, count: usize) {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut storage = FileStorage::new(dir.path().join("accounts.txt"));
    let accounts = generate_accounts(count);

    bencher.bench_local(|| {
        storage
            .save_all(divan::black_box(&accounts))
            .expect("Save failed")
    });
}

/// Load the ledger file, as done once at startup
#[divan::bench(args = SIZES)]
fn load_all_from_file(bencher: divan::Bencher, count: usize) {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut storage = FileStorage::new(dir.path().join("accounts.txt"));
    storage
        .save_all(&generate_accounts(count))
        .expect("Save failed");

    bencher.bench_local(|| storage.load_all().expect("Load failed"));
}
