use std::path::PathBuf;

use clap::Subcommand;
use pomidor_core::storage::{data_dir, AppData, DataStore};
use pomidor_core::timer::{format_clock, SessionType, TimerEngine};
use pomidor_core::Event;

const STATE_FILE: &str = "state.json";

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start or resume the current session
    Start,
    /// Pause the running session
    Pause,
    /// Switch to a work session
    Work,
    /// Switch to the next break (short or long, by cadence)
    Break,
    /// Reset to a fresh work session and zero the counter
    Reset,
    /// Print the current timer state as JSON
    Status,
    /// Drive the timer in the foreground, ticking once per second
    Run,
}

fn state_path() -> Result<PathBuf, pomidor_core::StorageError> {
    Ok(data_dir()?.join(STATE_FILE))
}

/// Restore the engine persisted by the previous invocation, re-synced to the
/// settings in the data document. Falls back to a fresh engine.
fn load_engine(data: &AppData) -> TimerEngine {
    if let Ok(path) = state_path() {
        if let Ok(json) = std::fs::read_to_string(path) {
            if let Ok(mut engine) = serde_json::from_str::<TimerEngine>(&json) {
                engine.update_settings(data.settings.clone());
                return engine;
            }
        }
    }
    TimerEngine::new(data.settings.clone())
}

fn save_engine(engine: &TimerEngine) {
    fn persist(engine: &TimerEngine) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string(engine)?;
        std::fs::write(state_path()?, json)?;
        Ok(())
    }
    if let Err(e) = persist(engine) {
        eprintln!("warning: could not save timer state: {e}");
    }
}

fn print_snapshot(engine: &TimerEngine) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
    Ok(())
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = DataStore::open()?;
    let mut data = super::load_data(&store);
    let mut engine = load_engine(&data);

    match action {
        TimerAction::Start => {
            engine.start();
            print_snapshot(&engine)?;
        }
        TimerAction::Pause => {
            engine.pause();
            print_snapshot(&engine)?;
        }
        TimerAction::Work => {
            if engine.session_type() != SessionType::Work {
                engine.set_session(SessionType::Work);
            }
            print_snapshot(&engine)?;
        }
        TimerAction::Break => {
            if engine.session_type() == SessionType::Work {
                let next = engine.next_break_type();
                engine.set_session(next);
            }
            print_snapshot(&engine)?;
        }
        TimerAction::Reset => {
            engine.reset();
            print_snapshot(&engine)?;
        }
        TimerAction::Status => {
            print_snapshot(&engine)?;
        }
        TimerAction::Run => {
            run_loop(&store, &mut data, &mut engine)?;
        }
    }

    save_engine(&engine);
    Ok(())
}

/// The foreground driver loop: one engine tick per second.
///
/// Completions are announced, work completions recorded and persisted. With
/// `auto_start` the loop advances to the next session by itself; without it,
/// the loop ends at the first completion.
fn run_loop(
    store: &DataStore,
    data: &mut AppData,
    engine: &mut TimerEngine,
) -> Result<(), Box<dyn std::error::Error>> {
    use std::io::Write as _;

    if engine.time_left_secs() == 0 {
        // A zero countdown can never progress; re-arm the current session.
        let current = engine.session_type();
        engine.set_session(current);
    }
    engine.start();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(1));
        // The first interval tick fires immediately; swallow it so every
        // engine tick is a full second apart.
        interval.tick().await;
        loop {
            interval.tick().await;
            match engine.tick() {
                Some(Event::WorkComplete { at, .. }) => {
                    println!("\nWork session complete! Time for a break.");
                    data.sessions.record_completion(at);
                    super::save_or_warn(store, data);
                    if data.settings.auto_start {
                        let next = engine.next_break_type();
                        engine.set_session(next);
                        engine.start();
                    } else {
                        break;
                    }
                }
                Some(Event::BreakComplete { .. }) => {
                    println!("\nBreak over! Back to work.");
                    if data.settings.auto_start {
                        engine.set_session(SessionType::Work);
                        engine.start();
                    } else {
                        break;
                    }
                }
                _ => {}
            }
            print!(
                "\r{}  {:<12}",
                format_clock(engine.time_left_secs()),
                engine.status_line()
            );
            let _ = std::io::stdout().flush();
        }
    });

    Ok(())
}
