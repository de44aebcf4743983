use serde::{Deserialize, Serialize};

use crate::settings::TimerSettings;

/// The kind of interval the timer is counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    Work,
    ShortBreak,
    LongBreak,
}

impl SessionType {
    /// Configured length of this session type, in seconds.
    ///
    /// Uses saturating arithmetic so an extreme configured value cannot
    /// overflow.
    pub fn duration_secs(&self, settings: &TimerSettings) -> u64 {
        let minutes = match self {
            SessionType::Work => settings.work_duration,
            SessionType::ShortBreak => settings.short_break,
            SessionType::LongBreak => settings.long_break,
        };
        u64::from(minutes).saturating_mul(60)
    }

    pub fn is_work(&self) -> bool {
        matches!(self, SessionType::Work)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_come_from_settings() {
        let settings = TimerSettings::default();
        assert_eq!(SessionType::Work.duration_secs(&settings), 25 * 60);
        assert_eq!(SessionType::ShortBreak.duration_secs(&settings), 5 * 60);
        assert_eq!(SessionType::LongBreak.duration_secs(&settings), 15 * 60);
    }

    #[test]
    fn extreme_duration_saturates() {
        let settings = TimerSettings {
            work_duration: u32::MAX,
            ..TimerSettings::default()
        };
        assert_eq!(
            SessionType::Work.duration_secs(&settings),
            u64::from(u32::MAX) * 60
        );
    }
}
