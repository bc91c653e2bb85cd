//! I/O module
//!
//! Handles ledger persistence and output.
//!
//! # Components
//!
//! - `storage` - Whole-file read/write capability
//! - `dump_format` - Flat-file encoding and decoding of ledger records
//! - `directory` - Three-file data directory export/import (merged by ID)
//! - `legacy_file` - Single-file account dump (replaced on import)
//! - `listing` - CSV listings for the command line

pub mod directory;
pub mod dump_format;
pub mod legacy_file;
pub mod listing;
pub mod storage;

pub use directory::ImportSummary;
pub use dump_format::{DecodePolicy, Separators};
pub use listing::{write_accounts_csv, write_payments_csv};
pub use storage::{FsStorage, Storage};
