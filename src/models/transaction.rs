//! This file defines the type `Transaction`, the core record type of the
//! ledger, and its builder.

use serde::{Deserialize, Serialize};
use time::{Date, Time};

use crate::{amount::Amount, timezone};

time::serde::format_description!(date_format, Date, "[year]-[month]-[day]");
time::serde::format_description!(clock_format, Time, "[hour]:[minute]");

/// The category recorded when the user does not supply one.
pub const DEFAULT_CATEGORY: &str = "Other";

/// Whether a transaction increases or decreases the tracked balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// A transaction increasing the tracked balance.
    Gain,
    /// A transaction decreasing the tracked balance.
    Spend,
}

impl TransactionKind {
    /// The literal stored in the `type` column of the ledger file.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Gain => "gain",
            TransactionKind::Spend => "spend",
        }
    }

    /// The sign shown next to amounts of this kind.
    pub fn sign(self) -> char {
        match self {
            TransactionKind::Gain => '+',
            TransactionKind::Spend => '-',
        }
    }
}

/// A single gain or spend entry in the ledger.
///
/// Records are append-only: they are created through [Transaction::build],
/// persisted immediately and never edited in place. The serialized form is
/// one CSV row with the columns `date,time,type,category,amount,notes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(with = "date_format")]
    date: Date,
    #[serde(with = "clock_format")]
    time: Time,
    #[serde(rename = "type")]
    kind: TransactionKind,
    category: String,
    amount: Amount,
    notes: String,
}

impl Transaction {
    /// Create a new transaction through a [TransactionBuilder].
    ///
    /// The builder stamps the current local date and time and defaults the
    /// category to [DEFAULT_CATEGORY].
    pub fn build(kind: TransactionKind, amount: Amount) -> TransactionBuilder {
        TransactionBuilder::new(kind, amount)
    }

    /// The calendar day the entry was recorded.
    pub fn date(&self) -> Date {
        self.date
    }

    /// The wall clock time the entry was recorded, to the minute.
    pub fn time(&self) -> Time {
        self.time
    }

    /// Whether the entry is a gain or a spend.
    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// The user supplied category, [DEFAULT_CATEGORY] when none was given.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The amount of gold gained or spent.
    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// Free text notes, possibly empty.
    pub fn notes(&self) -> &str {
        &self.notes
    }
}

/// Builder for creating a new [Transaction].
///
/// The function for finalizing the builder is [TransactionBuilder::finish].
/// Persistence is handled separately by a
/// [TransactionStore](crate::stores::TransactionStore).
#[derive(Debug, PartialEq)]
pub struct TransactionBuilder {
    date: Date,
    time: Time,
    kind: TransactionKind,
    category: String,
    amount: Amount,
    notes: String,
}

impl TransactionBuilder {
    /// Create a builder for a new entry of `kind` over `amount`, stamped
    /// with the current local date and time.
    pub fn new(kind: TransactionKind, amount: Amount) -> Self {
        let now = timezone::now_local();
        let time =
            Time::from_hms(now.hour(), now.minute(), 0).expect("invalid wall clock reading");

        Self {
            date: now.date(),
            time,
            kind,
            category: DEFAULT_CATEGORY.to_owned(),
            amount,
            notes: String::new(),
        }
    }

    /// Set the category, keeping the default when `category` is blank.
    pub fn category(mut self, category: &str) -> Self {
        let trimmed = category.trim();

        if !trimmed.is_empty() {
            self.category = trimmed.to_owned();
        }

        self
    }

    /// Set the free text notes.
    pub fn notes(mut self, notes: &str) -> Self {
        self.notes = notes.trim().to_owned();
        self
    }

    /// Override the recorded date and time.
    pub fn timestamp(mut self, date: Date, time: Time) -> Self {
        self.date = date;
        self.time = time;
        self
    }

    /// Finalize the builder.
    pub fn finish(self) -> Transaction {
        Transaction {
            date: self.date,
            time: self.time,
            kind: self.kind,
            category: self.category,
            amount: self.amount,
            notes: self.notes,
        }
    }
}

#[cfg(test)]
mod transaction_tests {
    use time::macros::{date, time};

    use crate::amount::Amount;

    use super::{DEFAULT_CATEGORY, Transaction, TransactionKind};

    fn one_gold() -> Amount {
        Amount::parse("1").unwrap()
    }

    #[test]
    fn builder_defaults_the_category() {
        let transaction = Transaction::build(TransactionKind::Gain, one_gold()).finish();

        assert_eq!(transaction.category(), DEFAULT_CATEGORY);
    }

    #[test]
    fn builder_keeps_the_default_category_for_blank_input() {
        let transaction = Transaction::build(TransactionKind::Gain, one_gold())
            .category("   ")
            .finish();

        assert_eq!(transaction.category(), DEFAULT_CATEGORY);
    }

    #[test]
    fn builder_trims_category_and_notes() {
        let transaction = Transaction::build(TransactionKind::Spend, one_gold())
            .category(" Fractals ")
            .notes(" daily clears ")
            .finish();

        assert_eq!(transaction.category(), "Fractals");
        assert_eq!(transaction.notes(), "daily clears");
    }

    #[test]
    fn builder_timestamp_overrides_date_and_time() {
        let transaction = Transaction::build(TransactionKind::Gain, one_gold())
            .timestamp(date!(2024 - 05 - 04), time!(14:32))
            .finish();

        assert_eq!(transaction.date(), date!(2024 - 05 - 04));
        assert_eq!(transaction.time(), time!(14:32));
    }

    #[test]
    fn kind_maps_to_the_stored_literal_and_sign() {
        assert_eq!(TransactionKind::Gain.as_str(), "gain");
        assert_eq!(TransactionKind::Spend.as_str(), "spend");
        assert_eq!(TransactionKind::Gain.sign(), '+');
        assert_eq!(TransactionKind::Spend.sign(), '-');
    }
}
