//! Types module
//!
//! Contains core data structures used throughout the ledger.
//! This module organizes types into logical submodules:
//! - `account`: Account state and identifiers
//! - `payment`: Payments and their status lifecycle
//! - `favorite`: Saved payment templates
//! - `error`: Error types for the wallet ledger

pub mod account;
pub mod error;
pub mod favorite;
pub mod payment;

pub use account::{Account, AccountId, Money, Phone};
pub use error::WalletError;
pub use favorite::Favorite;
pub use payment::{Payment, PaymentStatus};
