//! Pure text rendering for day listings and window summaries.
//!
//! Keeping the rendering separate from the menu loop means every line the
//! user sees can be asserted on in tests without a terminal.

use std::fmt::Write as _;

use time::{Date, Time};

use crate::{
    aggregation::sum_range,
    models::Transaction,
    window::{WindowPreset, WindowRange, compute_window_range},
};

/// Render the numbered listing of the entries dated `date`, in insertion
/// order, followed by a gains/spent/net footer.
///
/// Returns a "no entries" message when nothing was recorded on `date`.
pub fn render_day_listing(transactions: &[Transaction], date: Date) -> String {
    let entries: Vec<&Transaction> = transactions
        .iter()
        .filter(|transaction| transaction.date() == date)
        .collect();

    if entries.is_empty() {
        return format!("No entries for {date}.\n");
    }

    let mut output = String::new();

    for (index, transaction) in entries.iter().enumerate() {
        let _ = writeln!(
            output,
            "{:02}. {} {}{}  [{}]  {}",
            index + 1,
            format_clock(transaction.time()),
            transaction.kind().sign(),
            transaction.amount(),
            transaction.category(),
            transaction.notes(),
        );
    }

    let totals = sum_range(
        transactions,
        WindowRange {
            start: date,
            end: date,
        },
    );
    let _ = writeln!(
        output,
        "\nGains: {} | Spent: {} | Net: {}",
        totals.gains,
        totals.spends,
        totals.net()
    );

    output
}

/// Render the three-window summary (today, last 7 days, month to date)
/// anchored on `today`, one gains/spent/net row per window.
pub fn render_summary(transactions: &[Transaction], today: Date) -> String {
    let mut output = String::new();

    for preset in [
        WindowPreset::Today,
        WindowPreset::LastSevenDays,
        WindowPreset::MonthToDate,
    ] {
        let totals = sum_range(transactions, compute_window_range(preset, today));

        let _ = writeln!(
            output,
            "{:<14} Gains: {} | Spent: {} | Net: {}",
            preset.label(),
            totals.gains,
            totals.spends,
            totals.net()
        );
    }

    output
}

/// Format a wall clock time as `HH:MM`.
pub(crate) fn format_clock(time: Time) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}
