//! Implements a CSV file backed transaction store.

use std::{
    fs::{self, File, OpenOptions},
    io::{Read, Write},
    path::{Path, PathBuf},
};

use crate::{Error, models::Transaction, stores::TransactionStore};

/// The column names of the ledger file, in persisted order.
const HEADER: [&str; 6] = ["date", "time", "type", "category", "amount", "notes"];

/// Stores transactions in a CSV file, one record per row.
///
/// The file location is an explicit construction parameter rather than a
/// process wide constant. The file is created with its header row the first
/// time it is needed.
#[derive(Debug, Clone)]
pub struct CsvTransactionStore {
    path: PathBuf,
}

impl CsvTransactionStore {
    /// Create a store backed by the CSV file at `path`.
    ///
    /// The file itself is created lazily on first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the backing ledger file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the ledger file with its header row if it does not exist yet.
    fn ensure_data_file(&self) -> Result<(), Error> {
        if self.path.exists() {
            return Ok(());
        }

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(HEADER)?;
        let header = writer
            .into_inner()
            .map_err(|error| Error::Io(error.to_string()))?;

        fs::write(&self.path, header)?;
        tracing::debug!("created ledger file at {}", self.path.display());

        Ok(())
    }
}

impl TransactionStore for CsvTransactionStore {
    /// Append one record to the end of the ledger file.
    ///
    /// The record is fully serialized in memory before the file is touched,
    /// then written in a single call, so a failure cannot leave a partial
    /// row behind.
    ///
    /// # Errors
    /// Returns [Error::Io] if the ledger file cannot be written.
    fn append(&mut self, transaction: Transaction) -> Result<(), Error> {
        self.ensure_data_file()?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer.serialize(&transaction)?;
        let row = writer
            .into_inner()
            .map_err(|error| Error::Io(error.to_string()))?;

        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        file.write_all(&row)?;

        tracing::debug!(
            "appended a {} of {} to {}",
            transaction.kind().as_str(),
            transaction.amount(),
            self.path.display()
        );

        Ok(())
    }

    /// Retrieve every record in the ledger file, oldest first.
    ///
    /// # Errors
    /// Returns [Error::Io] if the file cannot be read, or
    /// [Error::InvalidRecord] if a row cannot be deserialized.
    fn read_all(&self) -> Result<Vec<Transaction>, Error> {
        self.ensure_data_file()?;

        let file = File::open(&self.path)?;

        read_records(file)
    }

    /// Remove and return the most recently appended record.
    ///
    /// The remaining records are rewritten to a sibling temporary file which
    /// is then renamed over the original, so a failure part way through
    /// leaves the ledger intact.
    ///
    /// # Errors
    /// Returns [Error::EmptyStore] if the ledger holds no records, or
    /// [Error::Io] if the rewrite fails.
    fn remove_last(&mut self) -> Result<Transaction, Error> {
        let mut transactions = self.read_all()?;
        let removed = transactions.pop().ok_or(Error::EmptyStore)?;

        let tmp_path = self.path.with_extension("tmp");
        let result = File::create(&tmp_path)
            .map_err(Error::from)
            .and_then(|file| write_records(file, &transactions));

        if let Err(error) = result {
            let _ = fs::remove_file(&tmp_path);
            return Err(error);
        }

        fs::rename(&tmp_path, &self.path)?;

        tracing::debug!(
            "removed the last entry, a {} of {}",
            removed.kind().as_str(),
            removed.amount()
        );

        Ok(removed)
    }
}

/// Deserialize every row of `reader` into transactions, oldest first.
///
/// Expects the header row produced by [write_records].
fn read_records<R: Read>(reader: R) -> Result<Vec<Transaction>, Error> {
    csv::Reader::from_reader(reader)
        .into_deserialize()
        .map(|row| row.map_err(Error::from))
        .collect()
}

/// Serialize the header row and `transactions` into `writer`.
fn write_records<W: Write>(writer: W, transactions: &[Transaction]) -> Result<(), Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    writer.write_record(HEADER)?;

    for transaction in transactions {
        writer.serialize(transaction)?;
    }

    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod csv_store_tests {
    use std::{fs, path::PathBuf};

    use time::macros::{date, time};

    use crate::{
        Error,
        amount::Amount,
        models::{Transaction, TransactionKind},
        stores::TransactionStore,
    };

    use super::{CsvTransactionStore, read_records};

    /// A unique, initially absent ledger path for one test.
    fn temp_ledger_path(name: &str) -> PathBuf {
        let path =
            std::env::temp_dir().join(format!("goldlog-{name}-{}.csv", std::process::id()));
        let _ = fs::remove_file(&path);

        path
    }

    fn sample_transaction(kind: TransactionKind, amount: &str) -> Transaction {
        Transaction::build(kind, Amount::parse(amount).unwrap())
            .category("Fractals")
            .notes("daily clears")
            .timestamp(date!(2024 - 05 - 04), time!(14:32))
            .finish()
    }

    #[test]
    fn read_all_creates_the_file_and_returns_an_empty_ledger() {
        let path = temp_ledger_path("init");
        let store = CsvTransactionStore::new(&path);

        assert_eq!(store.read_all().unwrap(), vec![]);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "date,time,type,category,amount,notes\n"
        );
    }

    #[test]
    fn append_then_read_all_round_trips() {
        let path = temp_ledger_path("round-trip");
        let mut store = CsvTransactionStore::new(&path);
        let transaction = sample_transaction(TransactionKind::Gain, "12,5");

        store.append(transaction.clone()).unwrap();

        assert_eq!(store.read_all().unwrap(), vec![transaction]);
    }

    #[test]
    fn append_preserves_insertion_order() {
        let path = temp_ledger_path("order");
        let mut store = CsvTransactionStore::new(&path);

        for amount in ["1", "2", "3"] {
            store
                .append(sample_transaction(TransactionKind::Gain, amount))
                .unwrap();
        }

        let amounts: Vec<String> = store
            .read_all()
            .unwrap()
            .iter()
            .map(|transaction| transaction.amount().to_string())
            .collect();

        assert_eq!(amounts, vec!["1.00g", "2.00g", "3.00g"]);
    }

    #[test]
    fn rows_use_the_documented_column_format() {
        let path = temp_ledger_path("format");
        let mut store = CsvTransactionStore::new(&path);

        store
            .append(sample_transaction(TransactionKind::Gain, "12.5"))
            .unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "date,time,type,category,amount,notes\n\
             2024-05-04,14:32,gain,Fractals,12.50,daily clears\n"
        );
    }

    #[test]
    fn categories_with_commas_survive_a_write_read_cycle() {
        let path = temp_ledger_path("quoting");
        let mut store = CsvTransactionStore::new(&path);
        let transaction = Transaction::build(
            TransactionKind::Spend,
            Amount::parse("3").unwrap(),
        )
        .category("Crafting, misc")
        .timestamp(date!(2024 - 05 - 04), time!(09:05))
        .finish();

        store.append(transaction.clone()).unwrap();

        assert_eq!(store.read_all().unwrap(), vec![transaction]);
    }

    #[test]
    fn remove_last_restores_the_prior_file_content() {
        let path = temp_ledger_path("undo");
        let mut store = CsvTransactionStore::new(&path);

        store
            .append(sample_transaction(TransactionKind::Gain, "10"))
            .unwrap();
        let snapshot = fs::read_to_string(&path).unwrap();

        let last = sample_transaction(TransactionKind::Spend, "4.25");
        store.append(last.clone()).unwrap();

        assert_eq!(store.remove_last().unwrap(), last);
        assert_eq!(fs::read_to_string(&path).unwrap(), snapshot);
    }

    #[test]
    fn remove_last_on_an_empty_store_fails_and_leaves_the_file() {
        let path = temp_ledger_path("undo-empty");
        let mut store = CsvTransactionStore::new(&path);

        store.read_all().unwrap();
        let snapshot = fs::read_to_string(&path).unwrap();

        assert_eq!(store.remove_last(), Err(Error::EmptyStore));
        assert_eq!(fs::read_to_string(&path).unwrap(), snapshot);
    }

    #[test]
    fn read_records_rejects_malformed_amounts() {
        let data = "date,time,type,category,amount,notes\n\
                    2024-05-04,14:32,gain,Other,twelve,\n";

        assert!(matches!(
            read_records(data.as_bytes()),
            Err(Error::InvalidRecord(_))
        ));
    }
}
