use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::timer::{SessionType, TimerState};

/// Every state change in the engine produces an Event.
///
/// The driver reacts to completion events (recording history, auto-advancing)
/// and renders snapshots. Timestamps are local time -- the same zone the
/// session history is bucketed in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    TimerStarted {
        session_type: SessionType,
        remaining_secs: u64,
        at: DateTime<Local>,
    },
    TimerPaused {
        remaining_secs: u64,
        at: DateTime<Local>,
    },
    TimerReset {
        at: DateTime<Local>,
    },
    SessionChanged {
        session_type: SessionType,
        duration_secs: u64,
        at: DateTime<Local>,
    },
    /// A work session counted down to zero naturally.
    WorkComplete {
        completed_sessions: u32,
        at: DateTime<Local>,
    },
    /// A break counted down to zero naturally.
    BreakComplete {
        session_type: SessionType,
        at: DateTime<Local>,
    },
    StateSnapshot {
        state: TimerState,
        session_type: SessionType,
        status: String,
        time_left_secs: u64,
        total_secs: u64,
        completed_sessions: u32,
        at: DateTime<Local>,
    },
}
