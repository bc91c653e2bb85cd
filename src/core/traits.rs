//! Core traits for the capabilities the ledger depends on
//!
//! The ledger never mints identifiers itself; it asks an `IdGenerator`, so
//! production code can use random UUIDs while tests and benchmarks use
//! predictable sequences.

/// Source of unique opaque identifiers for payments and favorites
///
/// Implementations should not repeat a value. Values that collide with
/// records already in the ledger, such as imported ones, are skipped by
/// drawing again.
pub trait IdGenerator {
    /// Produce the next identifier
    fn next_id(&mut self) -> String;
}
