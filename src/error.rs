//! Defines the crate level error type and conversions from I/O and CSV errors.

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The user supplied text that could not be parsed as a non-negative
    /// decimal amount.
    ///
    /// The operation that requested the amount is aborted and no data is
    /// written; the user is prompted again on the next menu cycle.
    #[error("\"{0}\" is not a valid amount, use a number such as 10.5 or 10,5")]
    InvalidAmount(String),

    /// An undo was requested while the ledger holds no records.
    ///
    /// The ledger file is left untouched.
    #[error("the ledger is empty, there is nothing to undo")]
    EmptyStore,

    /// The ledger file could not be read or written.
    ///
    /// Failed operations never leave a partially written record behind.
    #[error("could not access the ledger file: {0}")]
    Io(String),

    /// A persisted row could not be deserialized into a transaction.
    #[error("could not parse a ledger record: {0}")]
    InvalidRecord(String),
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::Io(value.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        let message = value.to_string();

        match value.into_kind() {
            csv::ErrorKind::Io(error) => Error::Io(error.to_string()),
            _ => {
                tracing::error!("could not parse a ledger record: {}", message);
                Error::InvalidRecord(message)
            }
        }
    }
}
