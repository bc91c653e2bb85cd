//! Payment-related types for the wallet ledger
//!
//! This module defines payments and the status lifecycle they move through.

use super::account::{AccountId, Money};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Payment status
///
/// The text tags (`OK`, `FAIL`, `INPROGRESS`) are the persisted form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    /// Payment settled
    Ok,

    /// Payment rejected
    ///
    /// Set only by a reject, which also returns the amount to the account.
    Fail,

    /// Payment accepted and funds debited, not yet settled
    ///
    /// Every newly created payment starts here.
    InProgress,
}

impl PaymentStatus {
    /// The persisted text tag for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Ok => "OK",
            PaymentStatus::Fail => "FAIL",
            PaymentStatus::InProgress => "INPROGRESS",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OK" => Ok(PaymentStatus::Ok),
            "FAIL" => Ok(PaymentStatus::Fail),
            "INPROGRESS" => Ok(PaymentStatus::InProgress),
            other => Err(format!("Unknown payment status '{}'", other)),
        }
    }
}

/// A payment made from an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Payment {
    /// Opaque unique identifier
    pub id: String,

    /// The account this payment was debited from
    pub account_id: AccountId,

    /// Amount debited, in minor units
    ///
    /// Never changed after creation by any ledger operation.
    pub amount: Money,

    /// Free-form category label (groceries, pharmacy, ...)
    pub category: String,

    pub status: PaymentStatus,
}

impl Payment {
    /// Create a new in-progress payment
    pub fn new(
        id: String,
        account_id: AccountId,
        amount: Money,
        category: impl Into<String>,
    ) -> Self {
        Payment {
            id,
            account_id,
            amount,
            category: category.into(),
            status: PaymentStatus::InProgress,
        }
    }
}
