//! User-configurable timer settings.
//!
//! Durations are minutes and must be strictly positive; the engine assumes
//! settings have been validated before they reach it. Missing fields
//! deserialize to the defaults, so a partially written document still loads.

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Timer durations, long-break cadence, and auto-start behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSettings {
    /// Work session length in minutes.
    #[serde(default = "default_work_duration")]
    pub work_duration: u32,
    /// Short break length in minutes.
    #[serde(default = "default_short_break")]
    pub short_break: u32,
    /// Long break length in minutes.
    #[serde(default = "default_long_break")]
    pub long_break: u32,
    /// Completed work sessions between long breaks.
    #[serde(default = "default_sessions_per_long_break")]
    pub sessions_per_long_break: u32,
    /// Automatically start the next session when one completes.
    #[serde(default)]
    pub auto_start: bool,
}

fn default_work_duration() -> u32 {
    25
}
fn default_short_break() -> u32 {
    5
}
fn default_long_break() -> u32 {
    15
}
fn default_sessions_per_long_break() -> u32 {
    4
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            work_duration: default_work_duration(),
            short_break: default_short_break(),
            long_break: default_long_break(),
            sessions_per_long_break: default_sessions_per_long_break(),
            auto_start: false,
        }
    }
}

impl TimerSettings {
    /// Check that every duration and the cadence are strictly positive.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let fields: [(&'static str, u32); 4] = [
            ("work_duration", self.work_duration),
            ("short_break", self.short_break),
            ("long_break", self.long_break),
            ("sessions_per_long_break", self.sessions_per_long_break),
        ];
        for (field, value) in fields {
            if value == 0 {
                return Err(SettingsError::NonPositive { field });
            }
        }
        Ok(())
    }

    /// Get a settings value as a string by key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "work_duration" => Some(self.work_duration.to_string()),
            "short_break" => Some(self.short_break.to_string()),
            "long_break" => Some(self.long_break.to_string()),
            "sessions_per_long_break" => Some(self.sessions_per_long_break.to_string()),
            "auto_start" => Some(self.auto_start.to_string()),
            _ => None,
        }
    }

    /// Update one setting from a string value.
    ///
    /// On any error the previous value is left untouched, so the settings
    /// remain valid.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value does not parse, or a
    /// numeric value is zero.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        match key {
            "work_duration" => self.work_duration = parse_positive("work_duration", value)?,
            "short_break" => self.short_break = parse_positive("short_break", value)?,
            "long_break" => self.long_break = parse_positive("long_break", value)?,
            "sessions_per_long_break" => {
                self.sessions_per_long_break = parse_positive("sessions_per_long_break", value)?;
            }
            "auto_start" => {
                self.auto_start = value.parse().map_err(|_| SettingsError::InvalidValue {
                    key: key.to_string(),
                    value: value.to_string(),
                })?;
            }
            _ => return Err(SettingsError::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}

fn parse_positive(field: &'static str, value: &str) -> Result<u32, SettingsError> {
    let parsed: u32 = value.parse().map_err(|_| SettingsError::InvalidValue {
        key: field.to_string(),
        value: value.to_string(),
    })?;
    if parsed == 0 {
        return Err(SettingsError::NonPositive { field });
    }
    Ok(parsed)
}
