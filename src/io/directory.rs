//! Data directory export and import
//!
//! A data directory holds one dump file per record kind:
//! `accounts.dump`, `payments.dump` and `favorites.dump`, each using `;`
//! between fields and a newline after every record.
//!
//! # Export
//!
//! Each file is overwritten when its collection is non-empty. An empty
//! collection writes nothing, so a stale file from an earlier export stays.
//!
//! # Import
//!
//! A missing file means no records of that kind. All three files are read
//! and decoded before the store is touched; records are then merged by ID,
//! so importing the same directory twice leaves the store as importing it
//! once did.

use crate::core::LedgerStore;
use crate::io::dump_format::{
    decode_accounts, decode_favorites, decode_payments, encode_accounts, encode_favorites,
    encode_payments, DecodePolicy, DIRECTORY_SEPARATORS,
};
use crate::io::storage::Storage;
use crate::types::WalletError;
use log::{debug, info};
use std::path::Path;

pub const ACCOUNTS_FILE: &str = "accounts.dump";
pub const PAYMENTS_FILE: &str = "payments.dump";
pub const FAVORITES_FILE: &str = "favorites.dump";

/// Counts of records an import appended or overwrote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub added: usize,
    pub updated: usize,
}

impl ImportSummary {
    fn record(&mut self, appended: bool) {
        if appended {
            self.added += 1;
        } else {
            self.updated += 1;
        }
    }
}

/// Write the store's collections into `dir`
///
/// # Errors
///
/// Returns the first write failure; files written before it stay on disk.
pub fn export_dir<S: Storage>(
    store: &LedgerStore,
    storage: &S,
    dir: &Path,
) -> Result<(), WalletError> {
    if !store.accounts().is_empty() {
        let content = encode_accounts(store.accounts(), DIRECTORY_SEPARATORS)?;
        storage.write_all(&dir.join(ACCOUNTS_FILE), &content)?;
    }

    if !store.payments().is_empty() {
        let content = encode_payments(store.payments(), DIRECTORY_SEPARATORS)?;
        storage.write_all(&dir.join(PAYMENTS_FILE), &content)?;
    }

    if !store.favorites().is_empty() {
        let content = encode_favorites(store.favorites(), DIRECTORY_SEPARATORS)?;
        storage.write_all(&dir.join(FAVORITES_FILE), &content)?;
    }

    debug!(
        "Exported {} accounts, {} payments, {} favorites to {}",
        store.accounts().len(),
        store.payments().len(),
        store.favorites().len(),
        dir.display()
    );
    Ok(())
}

/// Merge the dumps found in `dir` into the store
///
/// # Errors
///
/// Read failures other than a missing file, and decode failures under
/// `DecodePolicy::Strict`. The store is unchanged when an error is returned.
pub fn import_dir<S: Storage>(
    store: &mut LedgerStore,
    storage: &S,
    dir: &Path,
    policy: DecodePolicy,
) -> Result<ImportSummary, WalletError> {
    let accounts = match storage.read_all(&dir.join(ACCOUNTS_FILE))? {
        Some(content) => decode_accounts(&content, DIRECTORY_SEPARATORS, policy)?,
        None => Vec::new(),
    };
    let payments = match storage.read_all(&dir.join(PAYMENTS_FILE))? {
        Some(content) => decode_payments(&content, DIRECTORY_SEPARATORS, policy)?,
        None => Vec::new(),
    };
    let favorites = match storage.read_all(&dir.join(FAVORITES_FILE))? {
        Some(content) => decode_favorites(&content, DIRECTORY_SEPARATORS, policy)?,
        None => Vec::new(),
    };

    let mut summary = ImportSummary::default();
    for account in accounts {
        summary.record(store.merge_account(account));
    }
    for payment in payments {
        summary.record(store.merge_payment(payment));
    }
    for favorite in favorites {
        summary.record(store.merge_favorite(favorite));
    }

    info!(
        "Imported {}: {} added, {} updated",
        dir.display(),
        summary.added,
        summary.updated
    );
    Ok(summary)
}
