//! Goldlog is an interactive ledger for tracking in-game gold gains and
//! spending.
//!
//! Entries are appended to a durable CSV file, one timestamped and
//! categorized record per row, and summarized over three fixed windows:
//! today, the trailing seven days and the current month. Amounts are exact
//! fixed-point decimals throughout.

#![warn(missing_docs)]

mod aggregation;
mod amount;
mod error;
mod menu;
mod models;
mod report;
mod stores;
mod timezone;
mod window;

pub use aggregation::{WindowTotals, sum_range};
pub use amount::Amount;
pub use error::Error;
pub use menu::run_menu;
pub use models::{DEFAULT_CATEGORY, Transaction, TransactionBuilder, TransactionKind};
pub use report::{render_day_listing, render_summary};
pub use stores::{CsvTransactionStore, TransactionStore};
pub use window::{WindowPreset, WindowRange, compute_window_range};
