use chrono::Local;
use clap::Subcommand;
use pomidor_core::storage::DataStore;

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

#[derive(Subcommand)]
pub enum StatsAction {
    /// Per-day session counts for one Monday-to-Sunday week
    Week {
        /// Week offset: 0 = this week, negative = past, positive = future
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i64,
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Delete all recorded sessions
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = DataStore::open()?;
    let mut data = super::load_data(&store);

    match action {
        StatsAction::Week { offset, json } => {
            let stats = data.sessions.week_stats(Local::now().date_naive(), offset);
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!(
                    "{} - {}",
                    stats.start.format("%B %d"),
                    stats.end.format("%B %d, %Y")
                );
                for (day, count) in WEEKDAYS.iter().zip(stats.per_day) {
                    println!("{day:<10} {count:>3}");
                }
                println!("Weekly total: {} pomodoros", stats.total);
            }
        }
        StatsAction::Clear { yes } => {
            if !yes {
                eprintln!("this deletes all recorded sessions; re-run with --yes to confirm");
                std::process::exit(1);
            }
            data.sessions.clear_all();
            super::save_or_warn(&store, &data);
            println!("session history cleared");
        }
    }
    Ok(())
}
