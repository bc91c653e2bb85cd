//! Favorite payment templates

use super::account::{AccountId, Money};
use super::payment::Payment;
use serde::Serialize;

/// A saved payment template
///
/// Snapshots the account, amount and category of a payment at the time it
/// was favorited. Later changes to that payment do not propagate here, and
/// the favorite keeps no link back to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Favorite {
    pub id: String,
    pub account_id: AccountId,
    /// Display name chosen by the caller
    pub name: String,
    pub amount: Money,
    pub category: String,
}

impl Favorite {
    /// Snapshot `payment` into a new favorite with the given ID and name
    pub fn from_payment(id: String, name: impl Into<String>, payment: &Payment) -> Self {
        Favorite {
            id,
            account_id: payment.account_id,
            name: name.into(),
            amount: payment.amount,
            category: payment.category.clone(),
        }
    }
}
