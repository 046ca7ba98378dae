use clap::Parser;
use std::path::PathBuf;

/// Default location of the ledger file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "accounts.txt";

/// Interactive PIN-protected account ledger
#[derive(Parser, Debug)]
#[command(name = "pin-ledger")]
#[command(about = "Interactive PIN-protected account ledger", long_about = None)]
pub struct CliArgs {
    /// Ledger file holding every account between sessions
    #[arg(
        long = "data-file",
        value_name = "PATH",
        default_value = DEFAULT_DATA_FILE,
        help = "Path to the ledger file (created on first write)"
    )]
    pub data_file: PathBuf,

    /// Log filter directive, overriding RUST_LOG
    #[arg(
        long = "log-level",
        value_name = "FILTER",
        help = "Log filter such as 'debug' or 'pin_ledger=info' (default: RUST_LOG, else 'warn')"
    )]
    pub log_level: Option<String>,
}
