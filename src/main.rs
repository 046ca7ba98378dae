//! PIN Ledger CLI
//!
//! Interactive menu over a file-backed account ledger.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --data-file /var/lib/ledger/accounts.txt
//! RUST_LOG=debug cargo run
//! cargo run -- --log-level info
//! ```
//!
//! The ledger is loaded from the data file at startup and written back after
//! every change. Menu prompts go to stdout, logs go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Normal exit (menu option 8 or end of input)
//! - 1: The data file could not be read, or the terminal failed

use pin_ledger::cli;
use pin_ledger::{FileStorage, Ledger};
use std::io;
use std::process;
use tracing::error;

fn main() {
    let args = cli::parse_args();
    cli::init_logging(args.log_level.as_deref());

    let storage = FileStorage::new(&args.data_file);
    let mut ledger = match Ledger::open(storage) {
        Ok(ledger) => ledger,
        Err(e) => {
            error!(path = %args.data_file.display(), "failed to open ledger: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = cli::run_session(&mut ledger, stdin.lock(), stdout.lock()) {
        error!("terminal I/O failed: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
