//! Monday-to-Sunday week windows and per-day bucketing.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use super::SessionRecord;

/// Aggregated counts for one week window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekStats {
    /// Monday of the window.
    pub start: NaiveDate,
    /// Sunday of the window.
    pub end: NaiveDate,
    /// Session counts Monday (index 0) through Sunday (index 6).
    pub per_day: [u32; 7],
    /// Sum of the daily counts.
    pub total: u32,
}

/// Inclusive bounds of the week `offset` weeks away from the week containing
/// `reference`.
///
/// The window starts on the most recent Monday on or before the reference
/// date. The offset is signed and unbounded: 0 is the current week, negative
/// offsets walk into the past, positive into the future.
pub fn week_bounds(reference: NaiveDate, offset: i64) -> (NaiveDate, NaiveDate) {
    let monday = reference - Duration::days(i64::from(reference.weekday().num_days_from_monday()))
        + Duration::weeks(offset);
    (monday, monday + Duration::days(6))
}

/// Count sessions per weekday within `[start, end]`.
///
/// A session belongs to the day its local calendar date falls on; sessions
/// outside the window are ignored.
pub fn counts_by_day(records: &[SessionRecord], start: NaiveDate, end: NaiveDate) -> WeekStats {
    let mut per_day = [0u32; 7];
    for record in records {
        let date = record.timestamp.date_naive();
        if date >= start && date <= end {
            per_day[date.weekday().num_days_from_monday() as usize] += 1;
        }
    }
    let total = per_day.iter().sum();
    WeekStats {
        start,
        end,
        per_day,
        total,
    }
}
