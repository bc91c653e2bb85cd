//! Wallet Ledger CLI
//!
//! Command-line interface over a ledger kept in a data directory.
//!
//! # Usage
//!
//! ```bash
//! wallet --data-dir data register +15551230000
//! wallet --data-dir data deposit 1 10000
//! wallet --data-dir data pay 1 2500 groceries
//! wallet --data-dir data favorite <PAYMENT_ID> "Weekly Groceries"
//! wallet --data-dir data accounts
//! ```
//!
//! Each command loads `accounts.dump`, `payments.dump` and `favorites.dump`
//! from the data directory, applies the operation and writes them back.
//! Created IDs and listings go to stdout; logs go to stderr and are
//! controlled with `RUST_LOG` (default `warn`).
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (unknown account, insufficient balance, unreadable dump, etc.)

use rust_wallet_ledger::cli;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = cli::parse_args();

    let mut output = std::io::stdout();
    if let Err(e) = cli::run(&args, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
