mod engine;
mod session;

pub use engine::{TimerEngine, TimerState};
pub use session::SessionType;

/// Format a number of seconds as MM:SS.
pub fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
