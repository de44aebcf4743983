//! Completed-session history and weekly statistics.
//!
//! The history is an append-only list of local-time timestamps, one per
//! naturally completed work session. Aggregation buckets them into
//! Monday-to-Sunday weeks; see [`week`] for the calendar math.

pub mod week;

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

pub use week::{counts_by_day, week_bounds, WeekStats};

/// One completed work session. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Completion time in the local zone - the same zone the weekly
    /// aggregation buckets by, so a session never lands on the wrong day.
    pub timestamp: DateTime<Local>,
}

/// Append-only ordered sequence of completed work sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionHistory {
    records: Vec<SessionRecord>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a completion. No deduplication, no validation.
    pub fn record_completion(&mut self, now: DateTime<Local>) {
        self.records.push(SessionRecord { timestamp: now });
    }

    /// Empty the history irreversibly. Confirmation is the caller's job.
    pub fn clear_all(&mut self) {
        self.records.clear();
    }

    pub fn records(&self) -> &[SessionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Per-day counts for the week `offset` weeks away from the week
    /// containing `reference`.
    pub fn week_stats(&self, reference: NaiveDate, offset: i64) -> WeekStats {
        let (start, end) = week_bounds(reference, offset);
        counts_by_day(&self.records, start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, 9, 30, 0).unwrap()
    }

    #[test]
    fn record_appends_in_order() {
        let mut history = SessionHistory::new();
        history.record_completion(at(2024, 6, 3));
        history.record_completion(at(2024, 6, 3));
        history.record_completion(at(2024, 6, 5));
        assert_eq!(history.len(), 3);
        assert_eq!(history.records()[0].timestamp, at(2024, 6, 3));
    }

    #[test]
    fn clear_all_empties_every_week() {
        let mut history = SessionHistory::new();
        history.record_completion(at(2024, 6, 3));
        history.record_completion(at(2024, 5, 27));
        history.clear_all();
        assert!(history.is_empty());

        for offset in [-2, -1, 0, 1] {
            let stats = history.week_stats(NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(), offset);
            assert_eq!(stats.total, 0);
            assert_eq!(stats.per_day, [0; 7]);
        }
    }

    #[test]
    fn week_stats_buckets_by_local_weekday() {
        let mut history = SessionHistory::new();
        history.record_completion(at(2024, 6, 3)); // Monday
        history.record_completion(at(2024, 6, 5)); // Wednesday
        history.record_completion(at(2024, 6, 9)); // Sunday

        let stats = history.week_stats(NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(), 0);
        assert_eq!(stats.per_day, [1, 0, 1, 0, 0, 0, 1]);
        assert_eq!(stats.total, 3);
    }

    #[test]
    fn history_serializes_as_bare_list() {
        let mut history = SessionHistory::new();
        history.record_completion(at(2024, 6, 3));
        let json = serde_json::to_value(&history).unwrap();
        assert!(json.is_array());

        let restored: SessionHistory = serde_json::from_value(json).unwrap();
        assert_eq!(restored, history);
    }
}
