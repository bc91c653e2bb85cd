//! Legacy single-file account dump
//!
//! An older on-disk shape that holds accounts only: `id;phone;balance`
//! records separated by `|`, all in one file. Payments and favorites are not
//! part of it.
//!
//! Unlike the data directory, importing this file does not merge: the
//! decoded accounts replace the store's whole account table.

use crate::core::LedgerStore;
use crate::io::dump_format::{decode_accounts, encode_accounts, DecodePolicy, LEGACY_SEPARATORS};
use crate::io::storage::Storage;
use crate::types::WalletError;
use log::info;
use std::path::Path;

/// Write every account to `path`
///
/// The file is created or truncated even when there are no accounts.
pub fn export_file<S: Storage>(
    store: &LedgerStore,
    storage: &S,
    path: &Path,
) -> Result<(), WalletError> {
    let content = encode_accounts(store.accounts(), LEGACY_SEPARATORS)?;
    storage.write_all(path, &content)?;
    info!(
        "Exported {} accounts to {}",
        store.accounts().len(),
        path.display()
    );
    Ok(())
}

/// Replace the store's accounts with the ones in `path`
///
/// # Returns
///
/// The number of accounts now in the store
///
/// # Errors
///
/// * `FileNotFound` - If there is no file at `path`
/// * `IoError` - If the file cannot be read
/// * `DecodeError` - If a record is malformed under `DecodePolicy::Strict`
pub fn import_file<S: Storage>(
    store: &mut LedgerStore,
    storage: &S,
    path: &Path,
    policy: DecodePolicy,
) -> Result<usize, WalletError> {
    let content = storage
        .read_all(path)?
        .ok_or_else(|| WalletError::file_not_found(&path.display().to_string()))?;

    let accounts = decode_accounts(&content, LEGACY_SEPARATORS, policy)?;
    store.replace_accounts(accounts);

    info!(
        "Imported {} accounts from {}",
        store.accounts().len(),
        path.display()
    );
    Ok(store.accounts().len())
}
