//! Progress statistics commands for CLI.

use clap::Subcommand;
use habitly_core::stats::{weekday_breakdown, Dashboard, HabitProgress};
use habitly_core::{AuthSession, Config, HabitStore};

use crate::commands::{runtime, today};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Dashboard overview plus per-habit progress
    Overview,
    /// Completed/missed counts for the trailing week
    Weekly,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let session = AuthSession::require()?;
    let store = HabitStore::for_session(&Config::load()?, &session)?;
    let habits =
        runtime()?.block_on(store.list_habits_by_owner(&session.current_user().email))?;
    let now = today();

    match action {
        StatsAction::Overview => {
            let progress: Vec<_> = habits
                .iter()
                .map(|h| HabitProgress::compute(h, now))
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "dashboard": Dashboard::compute(&habits, now),
                    "habits": progress,
                }))?
            );
        }
        StatsAction::Weekly => {
            println!(
                "{}",
                serde_json::to_string_pretty(&weekday_breakdown(&habits, now))?
            );
        }
    }
    Ok(())
}
