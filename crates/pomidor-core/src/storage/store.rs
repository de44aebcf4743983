//! JSON document persistence.
//!
//! The entire persisted state is one document with two top-level fields:
//!
//! ```json
//! { "settings": { ... }, "sessions": [ { "timestamp": "..." } ] }
//! ```
//!
//! Loading never fails: a missing, unreadable, malformed, or invalid file is
//! replaced by the defaults, the file is rewritten, and the fallback reason
//! is reported once so the caller can notify the user.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::data_dir;
use crate::error::StorageError;
use crate::history::SessionHistory;
use crate::settings::TimerSettings;

/// The persisted document: settings plus session history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppData {
    pub settings: TimerSettings,
    pub sessions: SessionHistory,
}

/// Why a load fell back to defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFallback {
    /// No data file yet.
    Missing,
    /// The file exists but could not be read.
    Unreadable,
    /// The file is not a valid data document.
    Malformed,
    /// The document parsed but its settings fail validation.
    Invalid,
}

impl fmt::Display for LoadFallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            LoadFallback::Missing => "no data file was found",
            LoadFallback::Unreadable => "the data file could not be read",
            LoadFallback::Malformed => "the data file is corrupted",
            LoadFallback::Invalid => "the data file contains invalid settings",
        };
        f.write_str(reason)
    }
}

/// Result of a load: the document, plus the fallback reason when the data on
/// disk had to be replaced by defaults.
#[derive(Debug, Clone)]
pub struct LoadedData {
    pub data: AppData,
    pub fallback: Option<LoadFallback>,
}

/// Handle to the data document on disk.
pub struct DataStore {
    path: PathBuf,
}

impl DataStore {
    /// Open the store at `<data_dir>/data.json`.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be created.
    pub fn open() -> Result<Self, StorageError> {
        Ok(Self {
            path: data_dir()?.join("data.json"),
        })
    }

    /// Open the store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document, substituting defaults on any failure.
    ///
    /// Never fails. When the file is missing or damaged, a default document
    /// is written back (best effort) and the fallback reason is returned so
    /// the caller can notify the user exactly once.
    pub fn load(&self) -> LoadedData {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return self.fall_back(LoadFallback::Missing);
            }
            Err(_) => return self.fall_back(LoadFallback::Unreadable),
        };

        let data: AppData = match serde_json::from_str(&content) {
            Ok(data) => data,
            Err(_) => return self.fall_back(LoadFallback::Malformed),
        };

        // Out-of-range values parse fine but must never reach the engine.
        if data.settings.validate().is_err() {
            return self.fall_back(LoadFallback::Invalid);
        }

        LoadedData {
            data,
            fallback: None,
        }
    }

    /// Persist the document.
    ///
    /// # Errors
    /// Returns an error if serialization or the disk write fails. The caller
    /// keeps its in-memory state authoritative and surfaces a non-fatal
    /// notice.
    pub fn save(&self, data: &AppData) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(data)?;
        std::fs::write(&self.path, content).map_err(|source| StorageError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), "data document saved");
        Ok(())
    }

    fn fall_back(&self, reason: LoadFallback) -> LoadedData {
        warn!(path = %self.path.display(), %reason, "starting from default data");
        let data = AppData::default();
        if let Err(e) = self.save(&data) {
            warn!("could not write default data file: {e}");
        }
        LoadedData {
            data,
            fallback: Some(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> DataStore {
        DataStore::at(dir.path().join("data.json"))
    }

    #[test]
    fn missing_file_falls_back_and_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let loaded = store.load();
        assert_eq!(loaded.fallback, Some(LoadFallback::Missing));
        assert_eq!(loaded.data, AppData::default());

        // The defaults were persisted, so the next load is clean.
        let reloaded = store.load();
        assert_eq!(reloaded.fallback, None);
        assert_eq!(reloaded.data, AppData::default());
    }

    #[test]
    fn malformed_file_falls_back() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "{ this is not json").unwrap();

        let loaded = store.load();
        assert_eq!(loaded.fallback, Some(LoadFallback::Malformed));
        assert_eq!(loaded.data, AppData::default());
    }

    #[test]
    fn document_missing_top_level_field_falls_back() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), r#"{"settings": {}}"#).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.fallback, Some(LoadFallback::Malformed));
    }

    #[test]
    fn zero_duration_settings_fall_back() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(
            store.path(),
            r#"{"settings": {"work_duration": 0}, "sessions": []}"#,
        )
        .unwrap();

        let loaded = store.load();
        assert_eq!(loaded.fallback, Some(LoadFallback::Invalid));
        assert_eq!(loaded.data.settings.work_duration, 25);
    }

    #[test]
    fn save_load_round_trip_is_identical() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut data = AppData::default();
        data.settings.work_duration = 45;
        data.settings.auto_start = true;
        data.sessions
            .record_completion(Local.with_ymd_and_hms(2024, 6, 3, 10, 0, 0).unwrap());
        data.sessions
            .record_completion(Local.with_ymd_and_hms(2024, 6, 5, 16, 30, 0).unwrap());

        store.save(&data).unwrap();
        let loaded = store.load();
        assert_eq!(loaded.fallback, None);
        assert_eq!(loaded.data, data);
    }

    #[test]
    fn document_has_exactly_two_top_level_fields() {
        let data = AppData::default();
        let json = serde_json::to_value(&data).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert!(obj.contains_key("settings"));
        assert!(obj.contains_key("sessions"));
    }
}
