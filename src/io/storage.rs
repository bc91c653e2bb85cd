//! Whole-file storage capability
//!
//! Dumps are always read and written in one piece. `Storage` abstracts the
//! three primitives the persistence layer needs so it can run against the
//! real filesystem (`FsStorage`) or an in-memory map in tests.

use crate::types::WalletError;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Whole-file read/write primitives
pub trait Storage {
    /// Read the full contents of `path`
    ///
    /// # Returns
    ///
    /// * `Ok(Some(contents))` - If the file exists
    /// * `Ok(None)` - If there is no file at `path`
    /// * `Err(WalletError)` - On any other I/O failure
    fn read_all(&self, path: &Path) -> Result<Option<String>, WalletError>;

    /// Create or truncate `path` and write `contents` to it
    fn write_all(&self, path: &Path, contents: &str) -> Result<(), WalletError>;

    /// Check whether a file exists at `path`
    fn exists(&self, path: &Path) -> bool;
}

/// Filesystem-backed storage
///
/// File handles are opened and closed inside each call.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStorage;

impl Storage for FsStorage {
    fn read_all(&self, path: &Path) -> Result<Option<String>, WalletError> {
        match fs::read_to_string(path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(WalletError::IoError {
                message: format!("Failed to read '{}': {}", path.display(), e),
            }),
        }
    }

    fn write_all(&self, path: &Path, contents: &str) -> Result<(), WalletError> {
        fs::write(path, contents).map_err(|e| WalletError::IoError {
            message: format!("Failed to write '{}': {}", path.display(), e),
        })
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}
