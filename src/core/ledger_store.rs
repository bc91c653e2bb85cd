//! In-memory ledger storage
//!
//! This module provides the `LedgerStore` which owns every account, payment
//! and favorite along with the account ID counter.
//!
//! # Layout
//!
//! Each record kind lives in a `Vec` kept in insertion order, with a
//! `HashMap` from ID to position beside it. Lookups are O(1) through the
//! index; exports walk the `Vec` so files come out in the order records were
//! created or imported.
//!
//! # Merging
//!
//! Imports go through the `merge_*` methods: a record whose ID is already
//! present overwrites the stored one in place, anything else is appended.
//! Newly created payments and favorites go through `insert_*` instead,
//! which never overwrite.
//! Phone uniqueness is a registration rule and is not re-checked here.

use crate::types::{Account, AccountId, Favorite, Payment, WalletError};
use std::collections::HashMap;
use std::hash::Hash;

/// Owned storage for all ledger records
#[derive(Debug, Default)]
pub struct LedgerStore {
    /// Last account ID handed out (0 before the first registration)
    last_account_id: AccountId,
    accounts: Vec<Account>,
    account_index: HashMap<AccountId, usize>,
    payments: Vec<Payment>,
    payment_index: HashMap<String, usize>,
    favorites: Vec<Favorite>,
    favorite_index: HashMap<String, usize>,
}

/// Append a record under a key the caller has checked is free
fn append<K, T>(items: &mut Vec<T>, index: &mut HashMap<K, usize>, key: K, item: T)
where
    K: Eq + Hash,
{
    index.insert(key, items.len());
    items.push(item);
}

/// Overwrite the record stored under `key` or append it
///
/// Returns `true` when the record was appended.
fn upsert<K, T>(items: &mut Vec<T>, index: &mut HashMap<K, usize>, key: K, item: T) -> bool
where
    K: Eq + Hash,
{
    match index.get(&key) {
        Some(&pos) => {
            items[pos] = item;
            false
        }
        None => {
            index.insert(key, items.len());
            items.push(item);
            true
        }
    }
}

impl LedgerStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// All accounts in insertion order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// All payments in insertion order
    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    /// All favorites in insertion order
    pub fn favorites(&self) -> &[Favorite] {
        &self.favorites
    }

    /// The last account ID allocated or imported
    pub fn last_account_id(&self) -> AccountId {
        self.last_account_id
    }

    /// Allocate the next sequential account ID
    ///
    /// The counter is pre-incremented, so the first ID is 1.
    pub fn next_account_id(&mut self) -> AccountId {
        self.last_account_id += 1;
        self.last_account_id
    }

    /// Check whether any account is registered under `phone`
    pub fn phone_registered(&self, phone: &str) -> bool {
        self.accounts.iter().any(|account| account.phone == phone)
    }

    /// Look up an account by ID
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if no account has this ID.
    pub fn find_account(&self, id: AccountId) -> Result<&Account, WalletError> {
        self.account_index
            .get(&id)
            .map(|&pos| &self.accounts[pos])
            .ok_or_else(|| WalletError::account_not_found(id))
    }

    /// Look up an account by ID for mutation
    pub fn find_account_mut(&mut self, id: AccountId) -> Result<&mut Account, WalletError> {
        match self.account_index.get(&id) {
            Some(&pos) => Ok(&mut self.accounts[pos]),
            None => Err(WalletError::account_not_found(id)),
        }
    }

    /// Look up a payment by ID
    ///
    /// # Errors
    ///
    /// Returns `PaymentNotFound` if no payment has this ID.
    pub fn find_payment(&self, id: &str) -> Result<&Payment, WalletError> {
        self.payment_index
            .get(id)
            .map(|&pos| &self.payments[pos])
            .ok_or_else(|| WalletError::payment_not_found(id))
    }

    /// Look up a payment by ID for mutation
    pub fn find_payment_mut(&mut self, id: &str) -> Result<&mut Payment, WalletError> {
        match self.payment_index.get(id) {
            Some(&pos) => Ok(&mut self.payments[pos]),
            None => Err(WalletError::payment_not_found(id)),
        }
    }

    /// Look up a favorite by ID
    ///
    /// # Errors
    ///
    /// Returns `FavoriteNotFound` if no favorite has this ID.
    pub fn find_favorite(&self, id: &str) -> Result<&Favorite, WalletError> {
        self.favorite_index
            .get(id)
            .map(|&pos| &self.favorites[pos])
            .ok_or_else(|| WalletError::favorite_not_found(id))
    }

    /// Check whether `id` names a stored payment or favorite
    ///
    /// Both kinds draw from the same identifier generator.
    pub fn record_id_taken(&self, id: &str) -> bool {
        self.payment_index.contains_key(id) || self.favorite_index.contains_key(id)
    }

    /// Append a newly created payment
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` if the ID is already used by a payment or a
    /// favorite. The store is unchanged in that case.
    pub fn insert_payment(&mut self, payment: Payment) -> Result<(), WalletError> {
        if self.record_id_taken(&payment.id) {
            return Err(WalletError::duplicate_id(&payment.id));
        }
        append(
            &mut self.payments,
            &mut self.payment_index,
            payment.id.clone(),
            payment,
        );
        Ok(())
    }

    /// Append a newly created favorite
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` if the ID is already used by a payment or a
    /// favorite.
    pub fn insert_favorite(&mut self, favorite: Favorite) -> Result<(), WalletError> {
        if self.record_id_taken(&favorite.id) {
            return Err(WalletError::duplicate_id(&favorite.id));
        }
        append(
            &mut self.favorites,
            &mut self.favorite_index,
            favorite.id.clone(),
            favorite,
        );
        Ok(())
    }

    /// Merge an account into the store
    ///
    /// An existing account with the same ID gets its phone and balance
    /// overwritten; otherwise the account is appended. The ID counter is
    /// raised to cover the merged ID so registration never reuses it.
    ///
    /// # Returns
    ///
    /// `true` if the account was appended, `false` if it overwrote one
    pub fn merge_account(&mut self, account: Account) -> bool {
        self.last_account_id = self.last_account_id.max(account.id);
        upsert(
            &mut self.accounts,
            &mut self.account_index,
            account.id,
            account,
        )
    }

    /// Merge a payment into the store
    ///
    /// An existing payment with the same ID gets account, amount, category
    /// and status overwritten; otherwise the payment is appended.
    pub fn merge_payment(&mut self, payment: Payment) -> bool {
        upsert(
            &mut self.payments,
            &mut self.payment_index,
            payment.id.clone(),
            payment,
        )
    }

    /// Merge a favorite into the store
    ///
    /// An existing favorite with the same ID gets name, account, amount and
    /// category overwritten; otherwise the favorite is appended.
    pub fn merge_favorite(&mut self, favorite: Favorite) -> bool {
        upsert(
            &mut self.favorites,
            &mut self.favorite_index,
            favorite.id.clone(),
            favorite,
        )
    }

    /// Replace the whole account table
    ///
    /// Payments and favorites are left alone. The ID counter never moves
    /// backwards, so IDs handed out before the replacement stay retired.
    /// Duplicate IDs within `accounts` collapse onto the last occurrence.
    pub fn replace_accounts(&mut self, accounts: Vec<Account>) {
        self.accounts.clear();
        self.account_index.clear();
        for account in accounts {
            self.merge_account(account);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PaymentStatus;

    fn account(id: AccountId, phone: &str, balance: i64) -> Account {
        Account {
            id,
            phone: phone.to_string(),
            balance,
        }
    }

    #[test]
    fn test_account_ids_start_at_one() {
        let mut store = LedgerStore::new();
        assert_eq!(store.last_account_id(), 0);
        assert_eq!(store.next_account_id(), 1);
        assert_eq!(store.next_account_id(), 2);
    }

    #[test]
    fn test_find_missing_records() {
        let mut store = LedgerStore::new();

        assert_eq!(
            store.find_account(1),
            Err(WalletError::account_not_found(1))
        );
        assert!(matches!(
            store.find_account_mut(1),
            Err(WalletError::AccountNotFound { account: 1 })
        ));
        assert_eq!(
            store.find_payment("p"),
            Err(WalletError::payment_not_found("p"))
        );
        assert_eq!(
            store.find_favorite("f"),
            Err(WalletError::favorite_not_found("f"))
        );
    }

    #[test]
    fn test_merge_account_appends_then_overwrites() {
        let mut store = LedgerStore::new();

        assert!(store.merge_account(account(1, "+1", 100)));
        assert!(store.merge_account(account(2, "+2", 200)));
        assert!(!store.merge_account(account(1, "+9", 900)));

        assert_eq!(store.accounts().len(), 2);
        assert_eq!(store.accounts()[0], account(1, "+9", 900));
        assert_eq!(store.find_account(2).unwrap().balance, 200);
    }

    #[test]
    fn test_merge_account_advances_counter_past_imported_ids() {
        let mut store = LedgerStore::new();

        store.merge_account(account(5, "+5", 0));
        assert_eq!(store.last_account_id(), 5);
        assert_eq!(store.next_account_id(), 6);

        // A lower imported ID never moves the counter back
        store.merge_account(account(2, "+2", 0));
        assert_eq!(store.last_account_id(), 6);
    }

    #[test]
    fn test_merge_payment_keeps_insertion_order() {
        let mut store = LedgerStore::new();

        store.merge_payment(Payment::new("b".to_string(), 1, 10, "x"));
        store.merge_payment(Payment::new("a".to_string(), 1, 20, "y"));

        let mut updated = Payment::new("b".to_string(), 2, 30, "z");
        updated.status = PaymentStatus::Fail;
        assert!(!store.merge_payment(updated.clone()));

        let ids: Vec<&str> = store.payments().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(store.find_payment("b").unwrap(), &updated);
    }

    #[test]
    fn test_merge_favorite() {
        let mut store = LedgerStore::new();
        let payment = Payment::new("p".to_string(), 1, 10, "x");

        assert!(store.merge_favorite(Favorite::from_payment("f".to_string(), "old", &payment)));
        assert!(!store.merge_favorite(Favorite::from_payment("f".to_string(), "new", &payment)));

        assert_eq!(store.favorites().len(), 1);
        assert_eq!(store.find_favorite("f").unwrap().name, "new");
    }

    #[test]
    fn test_insert_refuses_taken_ids() {
        let mut store = LedgerStore::new();
        let payment = Payment::new("x".to_string(), 1, 700, "rent");
        store.insert_payment(payment.clone()).unwrap();

        let clash = Payment::new("x".to_string(), 1, 5, "coffee");
        assert_eq!(
            store.insert_payment(clash),
            Err(WalletError::duplicate_id("x"))
        );
        assert_eq!(
            store.insert_favorite(Favorite::from_payment("x".to_string(), "fav", &payment)),
            Err(WalletError::duplicate_id("x"))
        );

        assert_eq!(store.payments(), &[payment]);
        assert!(store.favorites().is_empty());
        assert!(store.record_id_taken("x"));
        assert!(!store.record_id_taken("y"));
    }

    #[test]
    fn test_replace_accounts() {
        let mut store = LedgerStore::new();
        store.merge_account(account(1, "+1", 100));
        store.merge_account(account(7, "+7", 700));

        store.replace_accounts(vec![account(2, "+2", 20), account(2, "+22", 22)]);

        assert_eq!(store.accounts(), &[account(2, "+22", 22)]);
        assert!(store.find_account(1).is_err());
        assert_eq!(store.last_account_id(), 7);
    }

    #[test]
    fn test_phone_registered() {
        let mut store = LedgerStore::new();
        store.merge_account(account(1, "+1", 0));

        assert!(store.phone_registered("+1"));
        assert!(!store.phone_registered("+2"));
    }
}
