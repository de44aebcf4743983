//! Timer engine implementation.
//!
//! The timer engine is a tick-driven state machine. It does not use internal
//! threads or wall-clock reads for progress - the caller invokes `tick()`
//! once per second and the countdown advances by exactly one second per call.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> Paused -> Running
//!          |
//!          +-> Idle (countdown reached zero, completion event emitted)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = TimerEngine::new(settings);
//! engine.start();
//! // Once per second:
//! if let Some(event) = engine.tick() {
//!     // WorkComplete or BreakComplete
//! }
//! ```

use chrono::Local;
use serde::{Deserialize, Serialize};

use super::session::SessionType;
use crate::events::Event;
use crate::settings::TimerSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
    Paused,
}

/// Core timer engine.
///
/// Owns a validated copy of the settings and the full countdown state. The
/// countdown is always derived from the current session type and settings at
/// the moment a session is set up, never adjusted piecemeal. All state
/// changes go through the command methods; none of them can fail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerEngine {
    settings: TimerSettings,
    state: TimerState,
    session_type: SessionType,
    time_left_secs: u64,
    /// Work sessions completed naturally since the last reset.
    completed_sessions: u32,
}

impl TimerEngine {
    /// Create a new engine in the idle state with a fresh work session.
    pub fn new(settings: TimerSettings) -> Self {
        let time_left_secs = SessionType::Work.duration_secs(&settings);
        Self {
            settings,
            state: TimerState::Idle,
            session_type: SessionType::Work,
            time_left_secs,
            completed_sessions: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn session_type(&self) -> SessionType {
        self.session_type
    }

    pub fn time_left_secs(&self) -> u64 {
        self.time_left_secs
    }

    pub fn completed_sessions(&self) -> u32 {
        self.completed_sessions
    }

    pub fn settings(&self) -> &TimerSettings {
        &self.settings
    }

    /// Configured length of the current session type, in seconds.
    pub fn total_secs(&self) -> u64 {
        self.session_type.duration_secs(&self.settings)
    }

    /// The break the next completed work session earns.
    ///
    /// Short until the counter is a positive multiple of the cadence. The
    /// very first completed session therefore always earns a short break,
    /// whatever the cadence is set to.
    pub fn next_break_type(&self) -> SessionType {
        if self.completed_sessions == 0 {
            return SessionType::ShortBreak;
        }
        if self.completed_sessions % self.settings.sessions_per_long_break == 0 {
            SessionType::LongBreak
        } else {
            SessionType::ShortBreak
        }
    }

    /// Display text for the current state.
    ///
    /// The idle text is shared by work and break sessions; the other four
    /// states distinguish them.
    pub fn status_line(&self) -> &'static str {
        match (self.state, self.session_type) {
            (TimerState::Idle, _) => "Ready to work.",
            (TimerState::Running, SessionType::Work) => "Working...",
            (TimerState::Running, SessionType::ShortBreak | SessionType::LongBreak) => {
                "On break..."
            }
            (TimerState::Paused, SessionType::Work) => "Work paused",
            (TimerState::Paused, SessionType::ShortBreak | SessionType::LongBreak) => {
                "Break paused"
            }
        }
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            state: self.state,
            session_type: self.session_type,
            status: self.status_line().to_string(),
            time_left_secs: self.time_left_secs,
            total_secs: self.total_secs(),
            completed_sessions: self.completed_sessions,
            at: Local::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Return to the initial state: idle, fresh work session, counter zeroed.
    /// Unconditional.
    pub fn reset(&mut self) -> Event {
        self.state = TimerState::Idle;
        self.session_type = SessionType::Work;
        self.time_left_secs = SessionType::Work.duration_secs(&self.settings);
        self.completed_sessions = 0;
        Event::TimerReset { at: Local::now() }
    }

    /// Begin or resume the countdown. No-op while already running.
    /// Never changes the countdown or the session type.
    pub fn start(&mut self) -> Option<Event> {
        if self.state == TimerState::Running {
            return None;
        }
        self.state = TimerState::Running;
        Some(Event::TimerStarted {
            session_type: self.session_type,
            remaining_secs: self.time_left_secs,
            at: Local::now(),
        })
    }

    /// Pause a running countdown. No-op otherwise, including while idle.
    pub fn pause(&mut self) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        self.state = TimerState::Paused;
        Some(Event::TimerPaused {
            remaining_secs: self.time_left_secs,
            at: Local::now(),
        })
    }

    /// Switch to a new session type.
    ///
    /// Always lands in the idle state with a full countdown for the new type;
    /// partial progress on the previous session is discarded.
    pub fn set_session(&mut self, session_type: SessionType) -> Event {
        self.state = TimerState::Idle;
        self.session_type = session_type;
        self.time_left_secs = session_type.duration_secs(&self.settings);
        Event::SessionChanged {
            session_type,
            duration_secs: self.time_left_secs,
            at: Local::now(),
        }
    }

    /// Advance the countdown by one second.
    ///
    /// Call once per second while driving the timer. Returns `None` unless
    /// this tick brought the countdown to exactly zero, in which case the
    /// engine goes idle and emits the completion event - once. The idle
    /// guard keeps a subsequent call from firing again at zero.
    pub fn tick(&mut self) -> Option<Event> {
        if self.state != TimerState::Running || self.time_left_secs == 0 {
            return None;
        }

        self.time_left_secs -= 1;
        if self.time_left_secs > 0 {
            return None;
        }

        self.state = TimerState::Idle;
        if self.session_type.is_work() {
            self.completed_sessions += 1;
            Some(Event::WorkComplete {
                completed_sessions: self.completed_sessions,
                at: Local::now(),
            })
        } else {
            Some(Event::BreakComplete {
                session_type: self.session_type,
                at: Local::now(),
            })
        }
    }

    /// Replace the settings without disturbing the countdown in progress.
    ///
    /// The new durations take effect the next time a session is set up
    /// (`set_session` or `reset`).
    pub fn update_settings(&mut self, settings: TimerSettings) {
        self.settings = settings;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn engine_with(work_minutes: u32) -> TimerEngine {
        TimerEngine::new(TimerSettings {
            work_duration: work_minutes,
            ..TimerSettings::default()
        })
    }

    /// Tick through one full work session of `minutes`.
    fn complete_work_session(engine: &mut TimerEngine) -> Event {
        engine.set_session(SessionType::Work);
        engine.start();
        let total = engine.time_left_secs();
        for _ in 0..total - 1 {
            assert!(engine.tick().is_none());
        }
        engine.tick().expect("final tick should complete the session")
    }

    #[test]
    fn new_engine_is_idle_work_full_countdown() {
        let engine = TimerEngine::new(TimerSettings::default());
        assert_eq!(engine.state(), TimerState::Idle);
        assert_eq!(engine.session_type(), SessionType::Work);
        assert_eq!(engine.time_left_secs(), 25 * 60);
        assert_eq!(engine.completed_sessions(), 0);
    }

    #[test]
    fn start_is_noop_while_running() {
        let mut engine = engine_with(25);
        assert!(engine.start().is_some());
        assert!(engine.start().is_none());
        assert_eq!(engine.state(), TimerState::Running);
    }

    #[test]
    fn pause_is_noop_while_idle() {
        let mut engine = engine_with(25);
        assert!(engine.pause().is_none());
        assert_eq!(engine.state(), TimerState::Idle);
    }

    #[test]
    fn tick_is_noop_unless_running() {
        let mut engine = engine_with(25);
        assert!(engine.tick().is_none());
        assert_eq!(engine.time_left_secs(), 25 * 60);

        engine.start();
        engine.tick();
        engine.pause();
        let frozen = engine.time_left_secs();
        for _ in 0..100 {
            assert!(engine.tick().is_none());
        }
        assert_eq!(engine.time_left_secs(), frozen);
    }

    #[test]
    fn work_completion_fires_exactly_once() {
        let mut engine = engine_with(1);
        engine.start();
        for _ in 0..59 {
            assert!(engine.tick().is_none());
        }
        match engine.tick() {
            Some(Event::WorkComplete {
                completed_sessions, ..
            }) => assert_eq!(completed_sessions, 1),
            other => panic!("expected WorkComplete, got {other:?}"),
        }
        assert_eq!(engine.state(), TimerState::Idle);
        assert_eq!(engine.completed_sessions(), 1);

        // Idle at zero: no re-fire, even if the driver keeps ticking.
        assert!(engine.tick().is_none());
        // And not after a start either - tick refuses a zero countdown.
        engine.start();
        assert!(engine.tick().is_none());
        assert_eq!(engine.completed_sessions(), 1);
    }

    #[test]
    fn break_completion_does_not_touch_counter() {
        let mut engine = TimerEngine::new(TimerSettings {
            short_break: 1,
            ..TimerSettings::default()
        });
        engine.set_session(SessionType::ShortBreak);
        engine.start();
        for _ in 0..59 {
            assert!(engine.tick().is_none());
        }
        match engine.tick() {
            Some(Event::BreakComplete { session_type, .. }) => {
                assert_eq!(session_type, SessionType::ShortBreak);
            }
            other => panic!("expected BreakComplete, got {other:?}"),
        }
        assert_eq!(engine.completed_sessions(), 0);
    }

    #[test]
    fn set_session_discards_partial_countdown() {
        let mut engine = engine_with(25);
        engine.start();
        for _ in 0..10 {
            engine.tick();
        }
        assert_eq!(engine.time_left_secs(), 25 * 60 - 10);

        engine.set_session(SessionType::ShortBreak);
        assert_eq!(engine.state(), TimerState::Idle);
        assert_eq!(engine.time_left_secs(), 5 * 60);

        engine.set_session(SessionType::Work);
        assert_eq!(engine.time_left_secs(), 25 * 60);
    }

    #[test]
    fn reset_is_unconditional() {
        let mut engine = TimerEngine::new(TimerSettings {
            work_duration: 1,
            ..TimerSettings::default()
        });
        complete_work_session(&mut engine);
        engine.set_session(SessionType::LongBreak);
        engine.start();
        engine.tick();

        engine.reset();
        assert_eq!(engine.state(), TimerState::Idle);
        assert_eq!(engine.session_type(), SessionType::Work);
        assert_eq!(engine.time_left_secs(), 60);
        assert_eq!(engine.completed_sessions(), 0);
    }

    #[test]
    fn break_cadence_with_default_settings() {
        let mut engine = TimerEngine::new(TimerSettings {
            work_duration: 1,
            ..TimerSettings::default()
        });
        assert_eq!(engine.next_break_type(), SessionType::ShortBreak);

        let expected = [
            SessionType::ShortBreak, // 1
            SessionType::ShortBreak, // 2
            SessionType::ShortBreak, // 3
            SessionType::LongBreak,  // 4
            SessionType::ShortBreak, // 5
            SessionType::ShortBreak, // 6
            SessionType::ShortBreak, // 7
            SessionType::LongBreak,  // 8
        ];
        for (i, want) in expected.iter().enumerate() {
            complete_work_session(&mut engine);
            assert_eq!(
                engine.next_break_type(),
                *want,
                "after {} completed sessions",
                i + 1
            );
        }
    }

    #[test]
    fn first_session_break_is_short_even_with_cadence_one() {
        let mut engine = TimerEngine::new(TimerSettings {
            work_duration: 1,
            sessions_per_long_break: 1,
            ..TimerSettings::default()
        });
        // Zero completed sessions: short, regardless of cadence.
        assert_eq!(engine.next_break_type(), SessionType::ShortBreak);
        complete_work_session(&mut engine);
        assert_eq!(engine.next_break_type(), SessionType::LongBreak);
    }

    #[test]
    fn status_line_covers_all_display_states() {
        let mut engine = engine_with(25);
        assert_eq!(engine.status_line(), "Ready to work.");
        engine.start();
        assert_eq!(engine.status_line(), "Working...");
        engine.pause();
        assert_eq!(engine.status_line(), "Work paused");

        engine.set_session(SessionType::LongBreak);
        // Idle text is shared between work and break sessions.
        assert_eq!(engine.status_line(), "Ready to work.");
        engine.start();
        assert_eq!(engine.status_line(), "On break...");
        engine.pause();
        assert_eq!(engine.status_line(), "Break paused");
    }

    #[test]
    fn update_settings_leaves_countdown_until_next_session() {
        let mut engine = engine_with(25);
        engine.start();
        engine.tick();

        let mut settings = engine.settings().clone();
        settings.work_duration = 50;
        engine.update_settings(settings);
        assert_eq!(engine.time_left_secs(), 25 * 60 - 1);

        engine.set_session(SessionType::Work);
        assert_eq!(engine.time_left_secs(), 50 * 60);
    }

    #[test]
    fn engine_state_round_trips_through_json() {
        let mut engine = engine_with(25);
        engine.start();
        engine.tick();
        engine.pause();

        let json = serde_json::to_string(&engine).unwrap();
        let restored: TimerEngine = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.state(), TimerState::Paused);
        assert_eq!(restored.time_left_secs(), engine.time_left_secs());
        assert_eq!(restored.completed_sessions(), engine.completed_sessions());
    }

    proptest! {
        /// After k ticks of a D-minute running session, exactly k seconds
        /// are gone and the timer is still running.
        #[test]
        fn countdown_tracks_tick_count(minutes in 1u32..=5, k in 0u64..299) {
            let total = u64::from(minutes) * 60;
            prop_assume!(k < total);

            let mut engine = engine_with(minutes);
            engine.start();
            for _ in 0..k {
                engine.tick();
            }
            prop_assert_eq!(engine.time_left_secs(), total - k);
            prop_assert_eq!(engine.state(), TimerState::Running);
        }
    }
}
