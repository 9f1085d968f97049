//! Windowed date-range helpers for the reporting surface.

use time::{Date, Duration};

/// The three canned reporting windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowPreset {
    /// The anchor day on its own.
    Today,
    /// The seven calendar days ending on the anchor day, inclusive.
    LastSevenDays,
    /// From the first of the anchor's month through the anchor day.
    MonthToDate,
}

impl WindowPreset {
    /// The label shown next to this window in summary output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::LastSevenDays => "Last 7 days",
            Self::MonthToDate => "Month to date",
        }
    }
}

/// An inclusive calendar-date range used for aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRange {
    /// The first date in the window.
    pub start: Date,
    /// The last date in the window.
    pub end: Date,
}

impl WindowRange {
    /// Whether `date` lies within the window, inclusive of both ends.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Compute the inclusive date range for `preset` ending on `anchor_date`.
pub fn compute_window_range(preset: WindowPreset, anchor_date: Date) -> WindowRange {
    match preset {
        WindowPreset::Today => WindowRange {
            start: anchor_date,
            end: anchor_date,
        },
        WindowPreset::LastSevenDays => WindowRange {
            start: anchor_date - Duration::days(6),
            end: anchor_date,
        },
        WindowPreset::MonthToDate => WindowRange {
            start: anchor_date
                .replace_day(1)
                .expect("invalid month start date"),
            end: anchor_date,
        },
    }
}

#[cfg(test)]
mod window_tests {
    use time::macros::date;

    use super::{WindowPreset, WindowRange, compute_window_range};

    #[test]
    fn today_window_is_a_single_day() {
        let range = compute_window_range(WindowPreset::Today, date!(2024 - 05 - 04));

        assert_eq!(
            range,
            WindowRange {
                start: date!(2024 - 05 - 04),
                end: date!(2024 - 05 - 04),
            }
        );
    }

    #[test]
    fn last_seven_days_window_spans_seven_calendar_days() {
        let range = compute_window_range(WindowPreset::LastSevenDays, date!(2024 - 05 - 04));

        assert_eq!(range.start, date!(2024 - 04 - 28));
        assert_eq!(range.end, date!(2024 - 05 - 04));
        assert_eq!((range.end - range.start).whole_days(), 6);
    }

    #[test]
    fn month_window_starts_on_the_first() {
        let range = compute_window_range(WindowPreset::MonthToDate, date!(2024 - 05 - 04));

        assert_eq!(range.start, date!(2024 - 05 - 01));
        assert_eq!(range.end, date!(2024 - 05 - 04));
    }

    #[test]
    fn contains_is_inclusive_of_both_ends() {
        let range = WindowRange {
            start: date!(2024 - 05 - 01),
            end: date!(2024 - 05 - 04),
        };

        assert!(range.contains(date!(2024 - 05 - 01)));
        assert!(range.contains(date!(2024 - 05 - 04)));
        assert!(!range.contains(date!(2024 - 04 - 30)));
        assert!(!range.contains(date!(2024 - 05 - 05)));
    }
}
