//! Helpers for reading the wall clock in the local timezone.

use time::{Date, OffsetDateTime};

/// The current local date and time, falling back to UTC when the local
/// offset cannot be determined.
pub fn now_local() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Today's calendar date in the local timezone.
pub fn today() -> Date {
    now_local().date()
}
