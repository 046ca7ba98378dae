//! Text format for stored accounts
//!
//! One line per account with four space-separated fields:
//!
//! ```text
//! name balance pin locked
//! alice 100.5 12345 0
//! ```
//!
//! `balance` is written in plain decimal notation and `locked` as `0`/`1`.
//! Reading treats the input as a stream of whitespace-separated tokens taken
//! four at a time, so line breaks carry no meaning. The first group that
//! fails to parse ends the stream: everything before it is kept and
//! everything from it onward is discarded.
//!
//! All functions are pure (no file access).

use crate::types::Account;
use rust_decimal::Decimal;
use std::io::Write;
use std::str::FromStr;

/// Number of whitespace-separated tokens per stored account
pub const FIELDS_PER_RECORD: usize = 4;

/// Accounts recovered from stored text
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRecords {
    /// Accounts parsed before the first bad group, in stored order
    pub accounts: Vec<Account>,
    /// Tokens left unread after parsing stopped (0 for a clean file)
    pub discarded_tokens: usize,
}

/// Serialize one account as a record line (no trailing newline)
pub fn format_record(account: &Account) -> String {
    format!(
        "{} {} {} {}",
        account.name(),
        account.balance().normalize(),
        account.pin(),
        u8::from(account.is_locked())
    )
}

/// Write every account as one record line, in slice order
pub fn write_records(accounts: &[Account], output: &mut dyn Write) -> std::io::Result<()> {
    for account in accounts {
        writeln!(output, "{}", format_record(account))?;
    }
    Ok(())
}

/// Parse stored text into accounts, stopping at the first unparsable group
///
/// A trailing group with fewer than four tokens counts as unparsable.
pub fn parse_records(input: &str) -> ParsedRecords {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let mut accounts = Vec::new();

    for group in tokens.chunks(FIELDS_PER_RECORD) {
        match parse_group(group) {
            Some(account) => accounts.push(account),
            None => break,
        }
    }

    let consumed = accounts.len() * FIELDS_PER_RECORD;
    ParsedRecords {
        accounts,
        discarded_tokens: tokens.len() - consumed,
    }
}

fn parse_group(group: &[&str]) -> Option<Account> {
    let [name, balance, pin, locked] = group else {
        return None;
    };
    Some(Account::restore(
        *name,
        parse_balance(balance)?,
        *pin,
        parse_locked(locked)?,
    ))
}

/// Balances are written plainly but older files may carry exponents
fn parse_balance(token: &str) -> Option<Decimal> {
    Decimal::from_str(token)
        .or_else(|_| Decimal::from_scientific(token))
        .ok()
}

/// Lock flags are integers; only 0 and 1 are meaningful
fn parse_locked(token: &str) -> Option<bool> {
    match token.parse::<i64>().ok()? {
        0 => Some(false),
        1 => Some(true),
        _ => None,
    }
}
