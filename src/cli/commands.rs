//! Command execution
//!
//! Every invocation loads the data directory into a fresh wallet, applies
//! one command and, if the command changed anything, exports the directory
//! again. A missing directory loads as an empty ledger and is only created
//! when there is something to save.

use crate::cli::args::{CliArgs, Command};
use crate::core::Wallet;
use crate::io::{write_accounts_csv, write_payments_csv, FsStorage};
use crate::types::WalletError;
use log::info;
use std::fs;
use std::io::Write;

/// Run the command described by `args`, writing its output to `output`
///
/// # Errors
///
/// Returns the first ledger or I/O error. The data directory is only
/// rewritten after the command succeeds.
pub fn run(args: &CliArgs, output: &mut dyn Write) -> Result<(), WalletError> {
    let storage = FsStorage;
    let mut wallet = Wallet::new().with_decode_policy(args.decode_policy());
    wallet.import_from_dir(&storage, &args.data_dir)?;

    let changed = match &args.command {
        Command::Register { phone } => {
            let account = wallet.register_account(phone)?;
            writeln!(output, "{}", account.id)?;
            true
        }
        Command::Deposit { account, amount } => {
            wallet.deposit(*account, *amount)?;
            writeln!(output, "{}", wallet.find_account_by_id(*account)?.balance)?;
            true
        }
        Command::Pay {
            account,
            amount,
            category,
        } => {
            let payment = wallet.pay(*account, *amount, category)?;
            writeln!(output, "{}", payment.id)?;
            true
        }
        Command::Reject { payment } => {
            wallet.reject(payment)?;
            true
        }
        Command::Repeat { payment } => {
            let repeated = wallet.repeat(payment)?;
            writeln!(output, "{}", repeated.id)?;
            true
        }
        Command::Favorite { payment, name } => {
            let favorite = wallet.favorite_payment(payment, name)?;
            writeln!(output, "{}", favorite.id)?;
            true
        }
        Command::PayFavorite { favorite } => {
            let payment = wallet.pay_from_favorite(favorite)?;
            writeln!(output, "{}", payment.id)?;
            true
        }
        Command::Accounts => {
            write_accounts_csv(wallet.accounts(), output)?;
            false
        }
        Command::Payments => {
            write_payments_csv(wallet.payments(), output)?;
            false
        }
        Command::ExportFile { path } => {
            wallet.export_to_file(&storage, path)?;
            false
        }
        Command::ImportFile { path } => {
            let count = wallet.import_from_file(&storage, path)?;
            writeln!(output, "{}", count)?;
            true
        }
    };

    if changed {
        fs::create_dir_all(&args.data_dir)?;
        wallet.export_to_dir(&storage, &args.data_dir)?;
        info!("Saved ledger to {}", args.data_dir.display());
    }
    Ok(())
}
