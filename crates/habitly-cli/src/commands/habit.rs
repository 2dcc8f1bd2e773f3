//! Habit management commands for CLI.

use clap::Subcommand;
use habitly_core::stats::HabitProgress;
use habitly_core::streak::parse_completion_date;
use habitly_core::{AuthSession, Config, HabitDraft, HabitPatch, HabitStore};

use crate::commands::{runtime, today};

#[derive(Subcommand)]
pub enum HabitAction {
    /// Create a new habit
    Add {
        /// Habit title
        title: String,
        /// Category (e.g. Morning, Work, Fitness, Evening, Study)
        #[arg(long)]
        category: String,
        /// Habit description
        #[arg(long)]
        description: Option<String>,
        /// Reminder time of day (HH:mm)
        #[arg(long)]
        reminder_time: Option<String>,
        /// Image URL
        #[arg(long)]
        image: Option<String>,
        /// Share the habit on the public feed
        #[arg(long)]
        public: bool,
    },
    /// List your habits with their current streaks
    List,
    /// Show one habit with its full progress
    Show {
        /// Habit ID
        id: String,
    },
    /// Update a habit
    Update {
        /// Habit ID
        id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New category
        #[arg(long)]
        category: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New reminder time (HH:mm)
        #[arg(long)]
        reminder_time: Option<String>,
        /// New image URL
        #[arg(long)]
        image: Option<String>,
        /// Set public visibility
        #[arg(long)]
        public: Option<bool>,
    },
    /// Delete a habit
    Delete {
        /// Habit ID
        id: String,
    },
    /// Mark a habit complete
    Done {
        /// Habit ID
        id: String,
        /// Completion date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        HabitAction::Add {
            title,
            category,
            description,
            reminder_time,
            image,
            public,
        } => {
            let draft = HabitDraft {
                title,
                category,
                description,
                reminder_time,
                image,
                is_public: public,
            };
            draft.validate()?;
            let session = AuthSession::require()?;
            let store = HabitStore::for_session(&Config::load()?, &session)?;
            let habit =
                runtime()?.block_on(store.create_habit(&draft, session.current_user()))?;
            println!("Habit created: {}", habit.id);
            println!("{}", serde_json::to_string_pretty(&habit)?);
        }
        HabitAction::List => {
            let session = AuthSession::require()?;
            let store = HabitStore::for_session(&Config::load()?, &session)?;
            let habits =
                runtime()?.block_on(store.list_habits_by_owner(&session.current_user().email))?;
            let now = today();
            let rows: Vec<_> = habits
                .iter()
                .map(|h| {
                    serde_json::json!({
                        "id": h.id,
                        "title": h.title,
                        "category": h.category,
                        "currentStreak": h.current_streak(now),
                        "completedToday": h.completed_on(now),
                        "createdAt": h.created_at,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        HabitAction::Show { id } => {
            let session = AuthSession::require()?;
            let store = HabitStore::for_session(&Config::load()?, &session)?;
            let habit = runtime()?.block_on(store.get_habit(&id))?;
            let progress = HabitProgress::compute(&habit, today());
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "habit": &habit,
                    "image": habit.image_url(),
                    "progress": progress,
                }))?
            );
        }
        HabitAction::Update {
            id,
            title,
            category,
            description,
            reminder_time,
            image,
            public,
        } => {
            let patch = HabitPatch {
                title,
                category,
                description,
                reminder_time,
                image,
                is_public: public,
            };
            if patch.is_empty() {
                println!("Nothing to update: {id}");
                return Ok(());
            }
            let session = AuthSession::require()?;
            let store = HabitStore::for_session(&Config::load()?, &session)?;
            let rt = runtime()?;
            let mut habit = rt.block_on(store.get_habit(&id))?;
            patch.apply(&mut habit)?;
            let updated = rt.block_on(store.update_habit(&habit))?;
            println!("Habit updated:");
            println!("{}", serde_json::to_string_pretty(&updated)?);
        }
        HabitAction::Delete { id } => {
            let session = AuthSession::require()?;
            let store = HabitStore::for_session(&Config::load()?, &session)?;
            runtime()?.block_on(store.delete_habit(&id))?;
            println!("Habit deleted: {id}");
        }
        HabitAction::Done { id, date } => {
            let date = match date {
                Some(raw) => parse_completion_date(&raw)?,
                None => today(),
            };
            let session = AuthSession::require()?;
            let store = HabitStore::for_session(&Config::load()?, &session)?;
            let rt = runtime()?;
            let habit = rt.block_on(store.get_habit(&id))?;
            if habit.completed_on(date) {
                println!("Already marked complete for {date}");
                return Ok(());
            }
            let updated = rt.block_on(store.record_completion(&id, date))?;
            println!(
                "Marked complete! Current streak: {} day(s)",
                updated.current_streak(today())
            );
        }
    }
    Ok(())
}
