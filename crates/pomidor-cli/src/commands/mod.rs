pub mod config;
pub mod quote;
pub mod stats;
pub mod timer;

use pomidor_core::storage::{AppData, DataStore, LoadedData};

/// Load the data document, surfacing a fallback to the user exactly once.
pub(crate) fn load_data(store: &DataStore) -> AppData {
    let LoadedData { data, fallback } = store.load();
    if let Some(reason) = fallback {
        eprintln!("warning: {reason}; continuing with default settings");
    }
    data
}

/// Persist the data document, downgrading failure to a notice. The in-memory
/// state stays authoritative until the next successful save.
pub(crate) fn save_or_warn(store: &DataStore, data: &AppData) {
    if let Err(e) = store.save(data) {
        eprintln!("warning: could not save data file: {e}");
    }
}
