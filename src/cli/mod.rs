// CLI module
// Command-line arguments, logging setup and the interactive menu

mod args;
mod logging;
mod shell;

pub use args::{CliArgs, DEFAULT_DATA_FILE};
pub use logging::{init_logging, DEFAULT_LOG_FILTER};
pub use shell::{parse_amount, MenuChoice, Shell, MENU};

use crate::core::{AccountStorage, Ledger};
use clap::Parser;
use std::io::{BufRead, Write};

/// Parse command-line arguments using clap
///
/// If parsing fails (e.g., an unknown flag, or --help), clap displays an
/// error message or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Run an interactive session over `input`/`output` until exit or end of input
pub fn run_session<S, R, W>(ledger: &mut Ledger<S>, input: R, output: W) -> std::io::Result<()>
where
    S: AccountStorage,
    R: BufRead,
    W: Write,
{
    Shell::new(ledger, input, output).run()
}
