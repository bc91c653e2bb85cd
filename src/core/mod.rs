//! Core business logic module
//!
//! This module contains the ledger components:
//! - `traits` - Capabilities the ledger depends on
//! - `id_generator` - Identifier generator implementations
//! - `ledger_store` - Record storage, lookups and import merging
//! - `wallet` - The public ledger operations

pub mod id_generator;
pub mod ledger_store;
pub mod traits;
pub mod wallet;

pub use id_generator::{SequentialIdGenerator, UuidGenerator};
pub use ledger_store::LedgerStore;
pub use traits::IdGenerator;
pub use wallet::Wallet;
