//! Streak computations over a habit's completion history.
//!
//! All functions here are pure: they take the completion-date set and the
//! caller's "today" and return a number. Nothing is read from the clock, so
//! results are reproducible and safe to compute from any rendering context.
//!
//! The streak policy is strict day-over-day adjacency: the most recent
//! completion must be today or yesterday, and every earlier completion must
//! be exactly one day before the previous one. There is no missed-day
//! forgiveness.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate};

use crate::error::ValidationError;

/// Trailing window used by progress displays, in days.
pub const PROGRESS_WINDOW_DAYS: u32 = 30;

/// Parse a completion-date entry.
///
/// Accepts a plain calendar date (`YYYY-MM-DD`) or an RFC 3339 timestamp,
/// whose time-of-day component is discarded.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDate`] for anything else.
pub fn parse_completion_date(value: &str) -> Result<NaiveDate, ValidationError> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.date_naive());
    }
    Err(ValidationError::InvalidDate {
        value: value.to_string(),
    })
}

/// Normalize raw history entries into a calendar-date set.
///
/// Entries may be unsorted and may contain duplicates or full timestamps;
/// malformed entries are skipped. This is the lenient path used at the wire
/// boundary -- one bad row must not poison the whole habit.
pub fn normalize_entries<I, S>(entries: I) -> BTreeSet<NaiveDate>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .filter_map(|e| parse_completion_date(e.as_ref()).ok())
        .collect()
}

/// Current consecutive-day streak as of `today`.
///
/// Returns 0 for an empty history and for a history whose most recent
/// completion is older than yesterday. Completions dated after `today` do
/// not start a streak.
pub fn current_streak(history: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut dates = history.iter().rev();
    let Some(&latest) = dates.next() else {
        return 0;
    };

    // The streak only starts from a completion today or yesterday.
    let lead_gap = (today - latest).num_days();
    if lead_gap != 0 && lead_gap != 1 {
        return 0;
    }

    let mut streak = 1;
    let mut prev = latest;
    for &date in dates {
        if (prev - date).num_days() != 1 {
            break;
        }
        streak += 1;
        prev = date;
    }
    streak
}

/// Longest run of consecutive days anywhere in the history.
pub fn longest_streak(history: &BTreeSet<NaiveDate>) -> u32 {
    let mut longest = 0;
    let mut run = 0;
    let mut prev: Option<NaiveDate> = None;

    for &date in history {
        run = match prev {
            Some(p) if (date - p).num_days() == 1 => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(date);
    }
    longest
}

/// Percentage (0-100, rounded) of the trailing `window_days` ending at
/// `today` that have a completion.
pub fn completion_rate(history: &BTreeSet<NaiveDate>, today: NaiveDate, window_days: u32) -> u8 {
    if window_days == 0 {
        return 0;
    }
    let start = today - chrono::Days::new(u64::from(window_days - 1));
    let completed = history.range(start..=today).count();
    ((completed as f64 / f64::from(window_days)) * 100.0).round() as u8
}

/// Whether the habit was completed on the given date.
pub fn completed_on(history: &BTreeSet<NaiveDate>, date: NaiveDate) -> bool {
    history.contains(&date)
}
