//! Contains the store trait and implementations for persisting the ledger's
//! [transactions](crate::models::Transaction).

mod csv;
mod transaction;

pub use self::csv::CsvTransactionStore;
pub use transaction::TransactionStore;
