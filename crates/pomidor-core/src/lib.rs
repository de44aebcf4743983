//! # Pomidor Core Library
//!
//! Core business logic for the Pomidor Pomodoro timer. All operations are
//! available through the `pomidor` CLI binary, which is a thin driver layer
//! over this library.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a tick-driven state machine; the caller invokes
//!   [`TimerEngine::tick`] once per second and reacts to the returned events
//! - **History**: append-only record of completed work sessions with
//!   Monday-to-Sunday weekly aggregation
//! - **Storage**: a single JSON document (`settings` + `sessions`) on disk,
//!   falling back to defaults when the file is missing or damaged
//! - **Quotes**: motivational quote fetching with a fixed offline fallback
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: countdown state machine and long-break cadence
//! - [`SessionHistory`]: completed-session records and weekly statistics
//! - [`DataStore`]: document persistence
//! - [`TimerSettings`]: user-configurable durations

pub mod error;
pub mod events;
pub mod history;
pub mod quotes;
pub mod settings;
pub mod storage;
pub mod timer;

pub use error::{SettingsError, StorageError};
pub use events::Event;
pub use history::{SessionHistory, SessionRecord, WeekStats};
pub use settings::TimerSettings;
pub use storage::{AppData, DataStore};
pub use timer::{SessionType, TimerEngine, TimerState};
