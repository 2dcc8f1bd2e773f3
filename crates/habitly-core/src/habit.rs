//! Habit records and their completion history.
//!
//! The wire shape mirrors the remote habit API (camelCase keys, `_id`,
//! `userEmail`/`userName` for the owner). Optional fields stay `Option` in
//! the typed model; display defaults such as the placeholder image are
//! applied at the presentation boundary, never stored.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::de::Deserializer;
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::streak;

/// Shown for habits without an image of their own.
pub const DEFAULT_HABIT_IMAGE: &str =
    "https://images.unsplash.com/photo-1484480974693-6ca0a78fb36b?q=80&w=500";

/// The set of calendar dates on which a habit was marked done.
///
/// Duplicates are unrepresentable: marking the same day twice is a no-op.
/// Wire input is normalized leniently -- timestamps are truncated to their
/// calendar date and malformed entries are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionHistory(BTreeSet<NaiveDate>);

impl CompletionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize raw wire entries (unsorted, duplicated, possibly malformed).
    pub fn from_wire<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(streak::normalize_entries(entries))
    }

    /// Record a completion. Returns `false` if the date was already present.
    pub fn insert(&mut self, date: NaiveDate) -> bool {
        self.0.insert(date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.0.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The underlying date set, for the streak computations.
    pub fn dates(&self) -> &BTreeSet<NaiveDate> {
        &self.0
    }
}

impl FromIterator<NaiveDate> for CompletionHistory {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for CompletionHistory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for date in &self.0 {
            seq.serialize_element(&date.format("%Y-%m-%d").to_string())?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for CompletionHistory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Vec::<String>::deserialize(deserializer)?;
        Ok(Self::from_wire(raw))
    }
}

/// A habit record as stored by the remote API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub reminder_time: Option<String>, // HH:mm
    #[serde(default)]
    pub image: Option<String>,
    #[serde(rename = "userEmail")]
    pub owner_email: String,
    #[serde(rename = "userName")]
    pub owner_name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub completion_history: CompletionHistory,
    #[serde(default)]
    pub is_public: bool,
}

impl Habit {
    /// Record a completion for `date`. Returns `false` if already recorded.
    pub fn mark_completed(&mut self, date: NaiveDate) -> bool {
        self.completion_history.insert(date)
    }

    pub fn completed_on(&self, date: NaiveDate) -> bool {
        self.completion_history.contains(date)
    }

    /// Current streak as of `today` (strict adjacency policy).
    pub fn current_streak(&self, today: NaiveDate) -> u32 {
        streak::current_streak(self.completion_history.dates(), today)
    }

    /// Image to display: the habit's own, or the shared placeholder.
    pub fn image_url(&self) -> &str {
        self.image.as_deref().unwrap_or(DEFAULT_HABIT_IMAGE)
    }
}

/// Fields a user supplies when creating a habit.
///
/// Owner identity and the creation timestamp are attached from the session
/// when the record is sent to the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HabitDraft {
    pub title: String,
    pub category: String,
    pub description: Option<String>,
    pub reminder_time: Option<String>,
    pub image: Option<String>,
    pub is_public: bool,
}

impl HabitDraft {
    /// Check user-supplied fields before sending to the store.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for an empty title or category, or a
    /// reminder that is not `HH:mm`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "title".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "category".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if let Some(ref reminder) = self.reminder_time {
            validate_reminder_time(reminder)?;
        }
        Ok(())
    }
}

/// Optional field edits for an update; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct HabitPatch {
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub reminder_time: Option<String>,
    pub image: Option<String>,
    pub is_public: Option<bool>,
}

impl HabitPatch {
    /// Apply the edits to an existing record.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if an edited reminder is not `HH:mm`.
    pub fn apply(&self, habit: &mut Habit) -> Result<(), ValidationError> {
        if let Some(ref reminder) = self.reminder_time {
            validate_reminder_time(reminder)?;
        }
        if let Some(ref title) = self.title {
            habit.title = title.clone();
        }
        if let Some(ref category) = self.category {
            habit.category = category.clone();
        }
        if let Some(ref description) = self.description {
            habit.description = Some(description.clone());
        }
        if let Some(ref reminder) = self.reminder_time {
            habit.reminder_time = Some(reminder.clone());
        }
        if let Some(ref image) = self.image {
            habit.image = Some(image.clone());
        }
        if let Some(is_public) = self.is_public {
            habit.is_public = is_public;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.reminder_time.is_none()
            && self.image.is_none()
            && self.is_public.is_none()
    }
}

/// Check a reminder is a valid `HH:mm` time of day.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidReminderTime`] otherwise.
pub fn validate_reminder_time(value: &str) -> Result<(), ValidationError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidReminderTime {
            value: value.to_string(),
        })
}
