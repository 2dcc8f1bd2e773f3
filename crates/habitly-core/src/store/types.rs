//! Wire types for the remote habit API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::habit::{CompletionHistory, HabitDraft};
use crate::session::UserProfile;

/// Response envelope used by every route.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub result: Option<T>,
}

/// Creation payload: the draft plus owner identity and creation timestamp,
/// with an empty completion history.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NewHabitRecord<'a> {
    pub title: &'a str,
    pub category: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder_time: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<&'a str>,
    pub user_email: &'a str,
    pub user_name: &'a str,
    pub created_at: DateTime<Utc>,
    pub completion_history: CompletionHistory,
    pub is_public: bool,
}

impl<'a> NewHabitRecord<'a> {
    pub fn new(draft: &'a HabitDraft, owner: &'a UserProfile, created_at: DateTime<Utc>) -> Self {
        Self {
            title: &draft.title,
            category: &draft.category,
            description: draft.description.as_deref(),
            reminder_time: draft.reminder_time.as_deref(),
            image: draft.image.as_deref(),
            user_email: &owner.email,
            user_name: &owner.display_name,
            created_at,
            completion_history: CompletionHistory::new(),
            is_public: draft.is_public,
        }
    }
}

/// Body for the completion-recording route.
#[derive(Debug, Serialize)]
pub(crate) struct CompletionBody {
    pub date: String,
}
