//! Defines the domain models of the ledger.

mod transaction;

pub use transaction::{DEFAULT_CATEGORY, Transaction, TransactionBuilder, TransactionKind};
