//! Error types for the wallet ledger
//!
//! This module defines all error types that can occur while operating on the
//! ledger or moving it to and from disk. Errors are descriptive and
//! user-friendly enough to print directly from the CLI.
//!
//! # Error Categories
//!
//! - **Validation Errors**: Duplicate phone, negative amount
//! - **Lookup Errors**: Unknown account, payment or favorite
//! - **Balance Errors**: Insufficient balance, arithmetic overflow
//! - **Persistence Errors**: File not found, I/O failures, undecodable records

use crate::types::account::{AccountId, Money};
use thiserror::Error;

/// Main error type for the wallet ledger
///
/// Every ledger operation returns either its success value or exactly one
/// of these variants. Nothing is recovered internally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WalletError {
    /// Registration with a phone number that already has an account
    #[error("Phone {phone} is already registered")]
    PhoneAlreadyRegistered {
        /// The duplicate phone number
        phone: String,
    },

    /// Negative amount passed to a deposit or payment
    ///
    /// Zero is accepted; only strictly negative amounts are rejected.
    #[error("Amount must be positive, got {amount}")]
    AmountMustBePositive {
        /// The rejected amount
        amount: Money,
    },

    #[error("Account {account} not found")]
    AccountNotFound { account: AccountId },

    #[error("Payment {payment} not found")]
    PaymentNotFound { payment: String },

    #[error("Favorite {favorite} not found")]
    FavoriteNotFound { favorite: String },

    /// A new payment or favorite was given an ID that is already stored
    #[error("Identifier {id} is already in use")]
    DuplicateId { id: String },

    /// A payment would drive the balance below zero
    ///
    /// The account state remains unchanged.
    #[error("Insufficient balance on account {account}: balance {balance}, requested {requested}")]
    InsufficientBalance {
        /// Account ID
        account: AccountId,
        /// Balance at the time of the request
        balance: Money,
        /// Requested payment amount
        requested: Money,
    },

    /// Crediting the balance would overflow
    ///
    /// The account state remains unchanged.
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account ID
        account: AccountId,
    },

    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing a dump
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// A dump record could not be decoded
    ///
    /// Only raised under strict decoding; the lenient policy skips or
    /// zero-fills instead.
    #[error("Decode error{}: {message}", line.map(|l| format!(" at record {}", l)).unwrap_or_default())]
    DecodeError {
        /// 1-based record number within the dump (if available)
        line: Option<u64>,
        /// Description of the decoding error
        message: String,
    },
}

impl From<std::io::Error> for WalletError {
    fn from(error: std::io::Error) -> Self {
        WalletError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for WalletError {
    fn from(error: csv::Error) -> Self {
        if error.is_io_error() {
            return WalletError::IoError {
                message: error.to_string(),
            };
        }

        // Record numbers are attached by the dump decoder, which counts
        // records itself
        WalletError::DecodeError {
            line: None,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl WalletError {
    /// Create a PhoneAlreadyRegistered error
    pub fn phone_already_registered(phone: &str) -> Self {
        WalletError::PhoneAlreadyRegistered {
            phone: phone.to_string(),
        }
    }

    /// Create an AmountMustBePositive error
    pub fn amount_must_be_positive(amount: Money) -> Self {
        WalletError::AmountMustBePositive { amount }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(account: AccountId) -> Self {
        WalletError::AccountNotFound { account }
    }

    /// Create a PaymentNotFound error
    pub fn payment_not_found(payment: &str) -> Self {
        WalletError::PaymentNotFound {
            payment: payment.to_string(),
        }
    }

    /// Create a FavoriteNotFound error
    pub fn favorite_not_found(favorite: &str) -> Self {
        WalletError::FavoriteNotFound {
            favorite: favorite.to_string(),
        }
    }

    /// Create a DuplicateId error
    pub fn duplicate_id(id: &str) -> Self {
        WalletError::DuplicateId { id: id.to_string() }
    }

    /// Create an InsufficientBalance error
    pub fn insufficient_balance(account: AccountId, balance: Money, requested: Money) -> Self {
        WalletError::InsufficientBalance {
            account,
            balance,
            requested,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: AccountId) -> Self {
        WalletError::ArithmeticOverflow {
            operation: operation.to_string(),
            account,
        }
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        WalletError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create a DecodeError error
    pub fn decode_error(line: Option<u64>, message: impl Into<String>) -> Self {
        WalletError::DecodeError {
            line,
            message: message.into(),
        }
    }
}
