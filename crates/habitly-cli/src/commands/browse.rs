//! Public feed commands for CLI.

use clap::Args;
use habitly_core::{browse, Config, HabitFilter, HabitStore};

use crate::commands::{runtime, today};

#[derive(Args)]
pub struct BrowseArgs {
    /// Search title, description, or creator name
    #[arg(long)]
    pub search: Option<String>,
    /// Only habits in this category
    #[arg(long)]
    pub category: Option<String>,
    /// List available categories instead of habits
    #[arg(long)]
    pub categories: bool,
}

pub fn run(args: BrowseArgs) -> Result<(), Box<dyn std::error::Error>> {
    let store = HabitStore::from_config(&Config::load()?)?;
    let habits = runtime()?.block_on(store.list_public_habits())?;

    if args.categories {
        println!(
            "{}",
            serde_json::to_string_pretty(&browse::categories(&habits))?
        );
        return Ok(());
    }

    let filter = HabitFilter {
        search: args.search,
        category: args.category,
    };
    let now = today();
    let rows: Vec<_> = filter
        .apply(&habits)
        .into_iter()
        .map(|h| {
            serde_json::json!({
                "id": h.id,
                "title": h.title,
                "category": h.category,
                "description": h.description,
                "creator": h.owner_name,
                "currentStreak": h.current_streak(now),
                "image": h.image_url(),
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}
