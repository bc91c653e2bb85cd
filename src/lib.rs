//! Rust Wallet Ledger Library
//! # Overview
//!
//! This library provides an in-memory ledger of accounts, payments and
//! favorite payment templates, with flat-file persistence so state survives
//! restarts.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Payment, Favorite, errors)
//! - [`cli`] - CLI arguments parsing and command execution
//! - [`core`] - Business logic components:
//!   - [`core::wallet`] - Ledger operations
//!   - [`core::ledger_store`] - Record storage and import merging
//!   - [`core::id_generator`] - Payment and favorite identifiers
//! - [`io`] - Dump encoding, data directory and legacy file persistence
//!
//! # Operations
//!
//! - **Register**: Open an account for a phone number
//! - **Deposit**: Credit funds to an account
//! - **Pay**: Debit funds and record an in-progress payment
//! - **Reject**: Fail a payment and return its amount
//! - **Repeat**: Pay again with a previous payment's details
//! - **Favorite**: Save a payment as a named template
//! - **Pay from favorite**: Pay with a saved template
//!
//! # Persistence
//!
//! - Data directory: `accounts.dump`, `payments.dump`, `favorites.dump`,
//!   merged into the ledger by ID on import
//! - Legacy file: accounts only, replacing the account table on import

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use crate::core::{IdGenerator, LedgerStore, Wallet};
pub use io::{DecodePolicy, FsStorage, Storage};
pub use types::{Account, AccountId, Favorite, Money, Payment, PaymentStatus, WalletError};
