//! Account-related types for the wallet ledger
//!
//! This module defines the Account structure and the identifier and
//! money aliases shared by every record kind.

use serde::Serialize;

/// Account identifier
///
/// Assigned sequentially starting at 1 and never reused.
pub type AccountId = i64;

/// Monetary amount in minor currency units (cents, kopecks, dirams)
pub type Money = i64;

/// Phone number an account is registered under
pub type Phone = String;

/// Client account state
///
/// An account is created by registration with a zero balance and is never
/// deleted. Deposits and rejected payments credit it, payments debit it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    /// Sequential account ID
    pub id: AccountId,

    /// Phone number, unique among accounts at registration time
    pub phone: Phone,

    /// Current balance in minor units
    ///
    /// A payment never drives this below zero.
    pub balance: Money,
}

impl Account {
    /// Create a new account with a zero balance
    ///
    /// # Arguments
    ///
    /// * `id` - The sequential ID allocated for this account
    /// * `phone` - The phone number the account is registered under
    pub fn new(id: AccountId, phone: impl Into<Phone>) -> Self {
        Account {
            id,
            phone: phone.into(),
            balance: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account_starts_empty() {
        let account = Account::new(7, "+15551230000");
        assert_eq!(account.id, 7);
        assert_eq!(account.phone, "+15551230000");
        assert_eq!(account.balance, 0);
    }
}
