//! Progress statistics derived from completion histories.
//!
//! Everything here is computed on demand from the habits the caller already
//! holds; nothing is fetched or cached.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::habit::Habit;
use crate::streak::{self, PROGRESS_WINDOW_DAYS};

/// Per-habit progress snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitProgress {
    pub habit_id: String,
    pub title: String,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub completed_today: bool,
    /// Percentage of the trailing window with a completion.
    pub completion_rate: u8,
    pub window_days: u32,
}

impl HabitProgress {
    pub fn compute(habit: &Habit, today: NaiveDate) -> Self {
        let dates = habit.completion_history.dates();
        Self {
            habit_id: habit.id.clone(),
            title: habit.title.clone(),
            current_streak: streak::current_streak(dates, today),
            longest_streak: streak::longest_streak(dates),
            completed_today: habit.completed_on(today),
            completion_rate: streak::completion_rate(dates, today, PROGRESS_WINDOW_DAYS),
            window_days: PROGRESS_WINDOW_DAYS,
        }
    }
}

/// Aggregate overview across all of a user's habits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    pub total_habits: usize,
    pub completed_today: usize,
    pub best_current_streak: u32,
    pub longest_streak: u32,
}

impl Dashboard {
    pub fn compute(habits: &[Habit], today: NaiveDate) -> Self {
        Self {
            total_habits: habits.len(),
            completed_today: habits.iter().filter(|h| h.completed_on(today)).count(),
            best_current_streak: habits
                .iter()
                .map(|h| h.current_streak(today))
                .max()
                .unwrap_or(0),
            longest_streak: habits
                .iter()
                .map(|h| streak::longest_streak(h.completion_history.dates()))
                .max()
                .unwrap_or(0),
        }
    }
}

/// Completed/missed counts for one day of the trailing week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekdayActivity {
    pub date: NaiveDate,
    /// Short weekday label ("Mon", "Tue", ...).
    pub weekday: String,
    pub completed: usize,
    pub missed: usize,
}

/// Per-day activity for the 7 days ending at `today`, oldest first.
///
/// A habit counts as missed on a day only if it already existed then.
pub fn weekday_breakdown(habits: &[Habit], today: NaiveDate) -> Vec<WeekdayActivity> {
    (0..7u64)
        .rev()
        .map(|back| {
            let date = today - chrono::Days::new(back);
            let completed = habits.iter().filter(|h| h.completed_on(date)).count();
            let existing = habits
                .iter()
                .filter(|h| h.created_at.date_naive() <= date)
                .count();
            WeekdayActivity {
                date,
                weekday: date.format("%a").to_string(),
                completed,
                missed: existing.saturating_sub(completed),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habit::CompletionHistory;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn habit(id: &str, created: NaiveDate, completions: &[NaiveDate]) -> Habit {
        Habit {
            id: id.to_string(),
            title: format!("Habit {id}"),
            category: "Fitness".to_string(),
            description: None,
            reminder_time: None,
            image: None,
            owner_email: "user@example.com".to_string(),
            owner_name: "User".to_string(),
            created_at: created.and_hms_opt(8, 0, 0).unwrap().and_utc(),
            completion_history: completions.iter().copied().collect::<CompletionHistory>(),
            is_public: false,
        }
    }

    #[test]
    fn progress_snapshot() {
        let today = day(2025, 6, 15);
        let h = habit(
            "a",
            day(2025, 6, 1),
            &[day(2025, 6, 15), day(2025, 6, 14), day(2025, 6, 10)],
        );
        let progress = HabitProgress::compute(&h, today);
        assert_eq!(progress.current_streak, 2);
        assert_eq!(progress.longest_streak, 2);
        assert!(progress.completed_today);
        assert_eq!(progress.completion_rate, 10); // 3 of 30 days
    }

    #[test]
    fn dashboard_aggregates() {
        let today = day(2025, 6, 15);
        let habits = vec![
            habit("a", day(2025, 6, 1), &[day(2025, 6, 15), day(2025, 6, 14)]),
            habit(
                "b",
                day(2025, 6, 1),
                &[day(2025, 6, 5), day(2025, 6, 4), day(2025, 6, 3)],
            ),
            habit("c", day(2025, 6, 1), &[]),
        ];
        let dash = Dashboard::compute(&habits, today);
        assert_eq!(dash.total_habits, 3);
        assert_eq!(dash.completed_today, 1);
        assert_eq!(dash.best_current_streak, 2);
        assert_eq!(dash.longest_streak, 3);
    }

    #[test]
    fn dashboard_empty() {
        let dash = Dashboard::compute(&[], day(2025, 6, 15));
        assert_eq!(dash.total_habits, 0);
        assert_eq!(dash.best_current_streak, 0);
    }

    #[test]
    fn breakdown_covers_trailing_week() {
        let today = day(2025, 6, 15);
        let habits = vec![
            habit("a", day(2025, 6, 1), &[day(2025, 6, 15), day(2025, 6, 13)]),
            habit("b", day(2025, 6, 14), &[day(2025, 6, 15)]),
        ];
        let breakdown = weekday_breakdown(&habits, today);
        assert_eq!(breakdown.len(), 7);
        assert_eq!(breakdown[0].date, day(2025, 6, 9));
        assert_eq!(breakdown[6].date, today);
        assert_eq!(breakdown[6].completed, 2);
        assert_eq!(breakdown[6].missed, 0);
        // June 13: habit "b" did not exist yet, so only "a" can miss.
        assert_eq!(breakdown[4].completed, 1);
        assert_eq!(breakdown[4].missed, 0);
        // June 12: "a" existed and did not complete.
        assert_eq!(breakdown[3].completed, 0);
        assert_eq!(breakdown[3].missed, 1);
    }

    #[test]
    fn breakdown_weekday_labels() {
        // 2025-06-15 is a Sunday.
        let breakdown = weekday_breakdown(&[], day(2025, 6, 15));
        assert_eq!(breakdown[6].weekday, "Sun");
        assert_eq!(breakdown[0].weekday, "Mon");
    }
}
