//! Transaction aggregation over date windows.
//!
//! Pure functions over the in-memory transaction list; sums use exact
//! decimal addition.

use crate::{
    amount::Amount,
    models::{Transaction, TransactionKind},
    window::WindowRange,
};

/// Totals for one reporting window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowTotals {
    /// Sum of all gains in the window.
    pub gains: Amount,
    /// Sum of all spends in the window.
    pub spends: Amount,
}

impl WindowTotals {
    /// Gains minus spends over the window; may be negative.
    pub fn net(&self) -> Amount {
        self.gains - self.spends
    }
}

/// Sum gains and spends over the records dated within `range`, inclusive.
pub fn sum_range(transactions: &[Transaction], range: WindowRange) -> WindowTotals {
    let mut totals = WindowTotals {
        gains: Amount::zero(),
        spends: Amount::zero(),
    };

    for transaction in transactions {
        if !range.contains(transaction.date()) {
            continue;
        }

        match transaction.kind() {
            TransactionKind::Gain => totals.gains += transaction.amount(),
            TransactionKind::Spend => totals.spends += transaction.amount(),
        }
    }

    totals
}
