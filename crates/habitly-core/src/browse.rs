//! Filtering for the public habit feed.
//!
//! Search matches title, description, or creator name case-insensitively;
//! the category filter is an exact match. Both are applied client-side to a
//! fetched feed, so the filter itself never touches the store.

use serde::{Deserialize, Serialize};

use crate::habit::Habit;

/// Search and category criteria for the public feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HabitFilter {
    /// Case-insensitive substring matched against title, description, and
    /// creator name. `None` matches everything.
    pub search: Option<String>,
    /// Exact category. `None` matches all categories.
    pub category: Option<String>,
}

impl HabitFilter {
    pub fn matches(&self, habit: &Habit) -> bool {
        let search_ok = match self.search.as_deref() {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                habit.title.to_lowercase().contains(&term)
                    || habit
                        .description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&term))
                    || habit.owner_name.to_lowercase().contains(&term)
            }
        };
        let category_ok = match self.category.as_deref() {
            None => true,
            Some(cat) => habit.category == cat,
        };
        search_ok && category_ok
    }

    pub fn apply<'a>(&self, habits: &'a [Habit]) -> Vec<&'a Habit> {
        habits.iter().filter(|h| self.matches(h)).collect()
    }
}

/// Distinct categories present in the feed, sorted, for filter menus.
pub fn categories(habits: &[Habit]) -> Vec<String> {
    let mut cats: Vec<String> = habits.iter().map(|h| h.category.clone()).collect();
    cats.sort();
    cats.dedup();
    cats
}
