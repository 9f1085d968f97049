//! Defines the transaction store trait.

use crate::{Error, models::Transaction};

/// Handles the durable, append-only record of transactions.
///
/// Every operation is an immediate write or read of the backing medium; no
/// buffering happens across calls.
pub trait TransactionStore {
    /// Append one record to the end of the persisted set.
    ///
    /// # Errors
    /// Returns [Error::Io] if the backing medium cannot be written. A failed
    /// append leaves the store exactly as it was.
    fn append(&mut self, transaction: Transaction) -> Result<(), Error>;

    /// Retrieve every record, oldest first.
    ///
    /// A store that has not been initialized yet is created empty and an
    /// empty vector is returned.
    ///
    /// # Errors
    /// Returns [Error::Io] if the backing medium cannot be read, or
    /// [Error::InvalidRecord] if a persisted row cannot be deserialized.
    fn read_all(&self) -> Result<Vec<Transaction>, Error>;

    /// Remove and return the most recently appended record.
    ///
    /// # Errors
    /// Returns [Error::EmptyStore] if the store holds no records, leaving it
    /// unchanged, or [Error::Io] if rewriting the backing medium fails.
    fn remove_last(&mut self) -> Result<Transaction, Error>;
}
