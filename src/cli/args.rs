use crate::io::DecodePolicy;
use crate::types::{AccountId, Money};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Manage a wallet ledger stored in a data directory
#[derive(Parser, Debug)]
#[command(name = "wallet")]
#[command(about = "Manage accounts, payments and favorites in a wallet ledger", long_about = None)]
pub struct CliArgs {
    /// Directory holding accounts.dump, payments.dump and favorites.dump
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        default_value = ".",
        global = true,
        help = "Directory holding the ledger dump files"
    )]
    pub data_dir: PathBuf,

    /// Fail on malformed dump records instead of skipping them
    #[arg(long = "strict", global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Ledger operations available from the command line
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Register a new account
    Register { phone: String },

    /// Deposit funds into an account
    Deposit {
        account: AccountId,
        #[arg(allow_negative_numbers = true)]
        amount: Money,
    },

    /// Pay from an account
    Pay {
        account: AccountId,
        #[arg(allow_negative_numbers = true)]
        amount: Money,
        category: String,
    },

    /// Reject a payment and return its amount
    Reject { payment: String },

    /// Repeat a payment
    Repeat { payment: String },

    /// Save a payment as a favorite
    Favorite { payment: String, name: String },

    /// Pay using a favorite
    PayFavorite { favorite: String },

    /// List accounts as CSV
    Accounts,

    /// List payments as CSV
    Payments,

    /// Write accounts to a legacy single-file dump
    ExportFile { path: PathBuf },

    /// Replace accounts with those from a legacy single-file dump
    ImportFile { path: PathBuf },
}

impl CliArgs {
    /// Decode policy selected by `--strict`
    pub fn decode_policy(&self) -> DecodePolicy {
        if self.strict {
            DecodePolicy::Strict
        } else {
            DecodePolicy::Lenient
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::register(&["wallet", "register", "+15551230000"], Command::Register { phone: "+15551230000".to_string() })]
    #[case::deposit(&["wallet", "deposit", "1", "10000"], Command::Deposit { account: 1, amount: 10000 })]
    #[case::negative_deposit(&["wallet", "deposit", "1", "-5"], Command::Deposit { account: 1, amount: -5 })]
    #[case::pay(
        &["wallet", "pay", "1", "2500", "groceries"],
        Command::Pay { account: 1, amount: 2500, category: "groceries".to_string() }
    )]
    #[case::reject(&["wallet", "reject", "p1"], Command::Reject { payment: "p1".to_string() })]
    #[case::repeat(&["wallet", "repeat", "p1"], Command::Repeat { payment: "p1".to_string() })]
    #[case::favorite(
        &["wallet", "favorite", "p1", "Weekly Groceries"],
        Command::Favorite { payment: "p1".to_string(), name: "Weekly Groceries".to_string() }
    )]
    #[case::pay_favorite(&["wallet", "pay-favorite", "f1"], Command::PayFavorite { favorite: "f1".to_string() })]
    #[case::accounts(&["wallet", "accounts"], Command::Accounts)]
    #[case::payments(&["wallet", "payments"], Command::Payments)]
    #[case::export_file(&["wallet", "export-file", "ledger.txt"], Command::ExportFile { path: PathBuf::from("ledger.txt") })]
    #[case::import_file(&["wallet", "import-file", "ledger.txt"], Command::ImportFile { path: PathBuf::from("ledger.txt") })]
    fn test_command_parsing(#[case] args: &[&str], #[case] expected: Command) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.command, expected);
    }

    #[rstest]
    #[case::defaults(&["wallet", "accounts"], ".", DecodePolicy::Lenient)]
    #[case::before_subcommand(&["wallet", "--data-dir", "data", "--strict", "accounts"], "data", DecodePolicy::Strict)]
    #[case::after_subcommand(&["wallet", "accounts", "--data-dir", "data"], "data", DecodePolicy::Lenient)]
    fn test_global_options(
        #[case] args: &[&str],
        #[case] data_dir: &str,
        #[case] policy: DecodePolicy,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.data_dir, PathBuf::from(data_dir));
        assert_eq!(parsed.decode_policy(), policy);
    }

    // Error handling tests
    #[rstest]
    #[case::missing_command(&["wallet"])]
    #[case::unknown_command(&["wallet", "withdraw", "1", "5"])]
    #[case::non_numeric_amount(&["wallet", "deposit", "1", "ten"])]
    #[case::missing_category(&["wallet", "pay", "1", "5"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
