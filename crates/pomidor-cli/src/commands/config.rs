use clap::Subcommand;
use pomidor_core::storage::DataStore;
use pomidor_core::TimerSettings;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print a settings value
    Get {
        /// Settings key (e.g. "work_duration", "auto_start")
        key: String,
    },
    /// Update a settings value
    Set {
        /// Settings key
        key: String,
        /// New value
        value: String,
    },
    /// Print all settings as JSON
    List,
    /// Restore default settings
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = DataStore::open()?;
    let mut data = super::load_data(&store);

    match action {
        ConfigAction::Get { key } => match data.settings.get(&key) {
            Some(value) => println!("{value}"),
            None => {
                eprintln!("unknown key: {key}");
                std::process::exit(1);
            }
        },
        ConfigAction::Set { key, value } => {
            // A failed set leaves the last valid value in place.
            if let Err(e) = data.settings.set(&key, &value) {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
            super::save_or_warn(&store, &data);
            println!("ok");
        }
        ConfigAction::List => {
            println!("{}", serde_json::to_string_pretty(&data.settings)?);
        }
        ConfigAction::Reset => {
            data.settings = TimerSettings::default();
            super::save_or_warn(&store, &data);
            println!("settings reset to defaults");
        }
    }
    Ok(())
}
