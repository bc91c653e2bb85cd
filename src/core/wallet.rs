//! Wallet operations
//!
//! This module provides the `Wallet`, the public operation surface of the
//! ledger. It owns the `LedgerStore` and an `IdGenerator` and enforces the
//! business rules:
//! - Phone numbers are unique at registration
//! - Deposits and payments reject negative amounts (zero is allowed)
//! - A payment never drives a balance below zero
//! - A failed operation leaves the store exactly as it was
//!
//! Persistence is delegated to `io::directory` (three-file data directory,
//! merged by ID) and `io::legacy_file` (single accounts file, replaced
//! wholesale).

use crate::core::id_generator::UuidGenerator;
use crate::core::ledger_store::LedgerStore;
use crate::core::traits::IdGenerator;
use crate::io::directory::{self, ImportSummary};
use crate::io::dump_format::DecodePolicy;
use crate::io::legacy_file;
use crate::io::storage::Storage;
use crate::types::{Account, AccountId, Favorite, Money, Payment, PaymentStatus, WalletError};
use log::{debug, warn};
use std::path::Path;

/// In-memory wallet ledger
///
/// Single-threaded: every operation takes `&mut self` and runs to completion.
/// Callers that share a wallet across threads must wrap it in a lock.
#[derive(Debug)]
pub struct Wallet<G: IdGenerator = UuidGenerator> {
    store: LedgerStore,
    id_generator: G,
    decode_policy: DecodePolicy,
}

impl Wallet<UuidGenerator> {
    /// Create an empty wallet that mints UUID identifiers
    pub fn new() -> Self {
        Self::with_id_generator(UuidGenerator)
    }
}

impl Default for Wallet<UuidGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> Wallet<G> {
    /// Create an empty wallet using `id_generator` for payment and favorite IDs
    pub fn with_id_generator(id_generator: G) -> Self {
        Wallet {
            store: LedgerStore::new(),
            id_generator,
            decode_policy: DecodePolicy::default(),
        }
    }

    /// Set how imports treat malformed dump records
    pub fn with_decode_policy(mut self, policy: DecodePolicy) -> Self {
        self.decode_policy = policy;
        self
    }

    pub fn accounts(&self) -> &[Account] {
        self.store.accounts()
    }

    pub fn payments(&self) -> &[Payment] {
        self.store.payments()
    }

    pub fn favorites(&self) -> &[Favorite] {
        self.store.favorites()
    }

    pub fn find_account_by_id(&self, id: AccountId) -> Result<&Account, WalletError> {
        self.store.find_account(id)
    }

    pub fn find_payment_by_id(&self, id: &str) -> Result<&Payment, WalletError> {
        self.store.find_payment(id)
    }

    pub fn find_favorite_by_id(&self, id: &str) -> Result<&Favorite, WalletError> {
        self.store.find_favorite(id)
    }

    /// Register a new account under `phone`
    ///
    /// The account gets the next sequential ID and a zero balance.
    ///
    /// # Errors
    ///
    /// Returns `PhoneAlreadyRegistered` if any account already uses `phone`.
    pub fn register_account(&mut self, phone: &str) -> Result<Account, WalletError> {
        if self.store.phone_registered(phone) {
            warn!("Registration rejected: phone {} already registered", phone);
            return Err(WalletError::phone_already_registered(phone));
        }

        let account = Account::new(self.store.next_account_id(), phone);
        self.store.merge_account(account.clone());
        debug!("Registered account {} for {}", account.id, phone);
        Ok(account)
    }

    /// Credit `amount` to an account
    ///
    /// # Errors
    ///
    /// * `AmountMustBePositive` - If `amount` is negative
    /// * `AccountNotFound` - If the account does not exist
    /// * `ArithmeticOverflow` - If the new balance does not fit
    pub fn deposit(&mut self, account_id: AccountId, amount: Money) -> Result<(), WalletError> {
        if amount < 0 {
            return Err(WalletError::amount_must_be_positive(amount));
        }

        let account = self.store.find_account_mut(account_id)?;
        account.balance = account
            .balance
            .checked_add(amount)
            .ok_or_else(|| WalletError::arithmetic_overflow("deposit", account_id))?;

        debug!(
            "Deposited {} to account {}, balance {}",
            amount, account_id, account.balance
        );
        Ok(())
    }

    /// Debit `amount` from an account and record an in-progress payment
    ///
    /// # Errors
    ///
    /// * `AmountMustBePositive` - If `amount` is negative
    /// * `AccountNotFound` - If the account does not exist
    /// * `InsufficientBalance` - If the balance is lower than `amount`
    /// * `DuplicateId` - If the generator yields no unused identifier
    pub fn pay(
        &mut self,
        account_id: AccountId,
        amount: Money,
        category: &str,
    ) -> Result<Payment, WalletError> {
        if amount < 0 {
            return Err(WalletError::amount_must_be_positive(amount));
        }

        let balance = self.store.find_account(account_id)?.balance;
        if balance < amount {
            warn!(
                "Payment of {} rejected for account {}: balance {}",
                amount, account_id, balance
            );
            return Err(WalletError::insufficient_balance(
                account_id, balance, amount,
            ));
        }

        let payment = Payment::new(self.fresh_id()?, account_id, amount, category);
        self.store.insert_payment(payment.clone())?;
        self.store.find_account_mut(account_id)?.balance -= amount;
        debug!(
            "Payment {} of {} from account {} ({})",
            payment.id, amount, account_id, category
        );
        Ok(payment)
    }

    /// Reject a payment and return its amount to the account
    ///
    /// Rejecting a payment that is already `FAIL` is a no-op: the amount was
    /// returned the first time and is not credited again.
    ///
    /// # Errors
    ///
    /// * `PaymentNotFound` - If the payment does not exist
    /// * `AccountNotFound` - If the paying account has gone missing
    /// * `ArithmeticOverflow` - If crediting the amount back does not fit
    pub fn reject(&mut self, payment_id: &str) -> Result<(), WalletError> {
        let payment = self.store.find_payment(payment_id)?;
        if payment.status == PaymentStatus::Fail {
            debug!("Payment {} already rejected", payment_id);
            return Ok(());
        }
        let (account_id, amount) = (payment.account_id, payment.amount);

        let account = self.store.find_account_mut(account_id)?;
        account.balance = account
            .balance
            .checked_add(amount)
            .ok_or_else(|| WalletError::arithmetic_overflow("reject", account_id))?;

        self.store.find_payment_mut(payment_id)?.status = PaymentStatus::Fail;
        debug!(
            "Rejected payment {}, returned {} to account {}",
            payment_id, amount, account_id
        );
        Ok(())
    }

    /// Make a new payment with the same account, amount and category
    ///
    /// # Errors
    ///
    /// `PaymentNotFound` if the source payment does not exist, otherwise any
    /// error from [`Wallet::pay`].
    pub fn repeat(&mut self, payment_id: &str) -> Result<Payment, WalletError> {
        let source = self.store.find_payment(payment_id)?;
        let (account_id, amount, category) =
            (source.account_id, source.amount, source.category.clone());
        self.pay(account_id, amount, &category)
    }

    /// Save a payment as a named favorite
    ///
    /// # Errors
    ///
    /// * `PaymentNotFound` - If the payment does not exist
    /// * `DuplicateId` - If the generator yields no unused identifier
    pub fn favorite_payment(&mut self, payment_id: &str, name: &str) -> Result<Favorite, WalletError> {
        let payment = self.store.find_payment(payment_id)?.clone();
        let favorite = Favorite::from_payment(self.fresh_id()?, name, &payment);
        self.store.insert_favorite(favorite.clone())?;
        debug!("Saved payment {} as favorite {}", payment_id, favorite.id);
        Ok(favorite)
    }

    /// Make a payment from a favorite's account, amount and category
    ///
    /// # Errors
    ///
    /// `FavoriteNotFound` if the favorite does not exist, otherwise any
    /// error from [`Wallet::pay`].
    pub fn pay_from_favorite(&mut self, favorite_id: &str) -> Result<Payment, WalletError> {
        let favorite = self.store.find_favorite(favorite_id)?;
        let (account_id, amount, category) =
            (favorite.account_id, favorite.amount, favorite.category.clone());
        self.pay(account_id, amount, &category)
    }

    /// Draw an identifier no stored payment or favorite uses yet
    ///
    /// Generators may repeat IDs already present after an import (a
    /// sequential generator restarts at 1), so taken IDs are skipped. A
    /// generator yielding distinct values finds a free one within
    /// `stored + 1` draws; past that it is treated as stuck.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` with the last drawn ID if no free one turns up.
    fn fresh_id(&mut self) -> Result<String, WalletError> {
        let stored = self.store.payments().len() + self.store.favorites().len();
        let mut id = self.id_generator.next_id();
        for _ in 0..stored {
            if !self.store.record_id_taken(&id) {
                return Ok(id);
            }
            debug!("Skipping identifier {} already in use", id);
            id = self.id_generator.next_id();
        }
        if self.store.record_id_taken(&id) {
            return Err(WalletError::duplicate_id(&id));
        }
        Ok(id)
    }

    /// Export all records to the data directory `dir`
    pub fn export_to_dir<S: Storage>(&self, storage: &S, dir: &Path) -> Result<(), WalletError> {
        directory::export_dir(&self.store, storage, dir)
    }

    /// Merge the records in the data directory `dir` into this wallet
    pub fn import_from_dir<S: Storage>(
        &mut self,
        storage: &S,
        dir: &Path,
    ) -> Result<ImportSummary, WalletError> {
        directory::import_dir(&mut self.store, storage, dir, self.decode_policy)
    }

    /// Export accounts to the legacy single-file format
    pub fn export_to_file<S: Storage>(&self, storage: &S, path: &Path) -> Result<(), WalletError> {
        legacy_file::export_file(&self.store, storage, path)
    }

    /// Replace this wallet's accounts with those in a legacy single file
    pub fn import_from_file<S: Storage>(
        &mut self,
        storage: &S,
        path: &Path,
    ) -> Result<usize, WalletError> {
        legacy_file::import_file(&mut self.store, storage, path, self.decode_policy)
    }
}
