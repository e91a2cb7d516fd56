//! Display formatting and date helpers shared by the section renderers.

use chrono::NaiveDate;

/// Trailing window, in days, within which a release counts as new.
pub const NEW_RELEASE_WINDOW_DAYS: i64 = 30;

/// Pluralize a unit word by count: `1 Color`, `3 Colors`, `0 Colors`.
pub fn pluralize(word: &str, count: u32) -> String {
    if count == 1 {
        format!("1 {}", word)
    } else {
        format!("{} {}s", count, word)
    }
}

/// Whether a release date falls within the trailing freshness window of
/// `today`.
///
/// Dates in the future count as new. The result is monotone in `today`: as
/// time advances a release can only go from new to not-new.
pub fn is_new_release(release_date: NaiveDate, today: NaiveDate) -> bool {
    today.signed_duration_since(release_date).num_days() < NEW_RELEASE_WINDOW_DAYS
}

/// Today's date in UTC, for callers rendering against wall clock.
pub fn today_utc() -> NaiveDate {
    chrono::Utc::now().date_naive()
}
