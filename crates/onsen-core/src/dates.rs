//! Best-effort reconstruction of full dates from the site's `MM/DD` fields.
//!
//! The catalog publishes update and delivery dates without a year component.
//! [`guess_date`] picks the most recent year that does not place the date
//! after a caller-supplied reference instant. The reference is always passed
//! in explicitly; [`jst_now`] is the one place the real clock is read.
//!
//! Known limitation, accepted as-is: when the reference is itself more than a
//! year stale relative to the true publication date, or near year boundaries
//! with irregular update cadence, the guessed year can be wrong.

use std::sync::OnceLock;

use chrono::{DateTime, Datelike, FixedOffset, TimeZone, Utc};
use regex::Regex;

static MONTH_DAY: OnceLock<Regex> = OnceLock::new();

fn month_day_re() -> &'static Regex {
    MONTH_DAY.get_or_init(|| Regex::new("^([0-9]{1,2})/([0-9]{1,2})$").expect("valid regex"))
}

/// The site's publication timezone: a fixed UTC+9 offset.
#[must_use]
pub fn jst() -> FixedOffset {
    FixedOffset::east_opt(9 * 60 * 60).expect("UTC+9 is a valid offset")
}

/// The current instant in the site's publication timezone.
///
/// This is the only real-clock read in the crate; everything downstream takes
/// the reference instant as a parameter so date-dependent behavior stays
/// deterministic under test.
#[must_use]
pub fn jst_now() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&jst())
}

/// Guesses the full calendar date for a `"MM/DD"` string against `reference`.
///
/// The candidate is built at midnight in the reference's timezone using the
/// reference's year. A candidate strictly after the reference rolls back one
/// year; a candidate equal to the reference keeps the current year.
///
/// Returns `None` when the input does not match the `MM/DD` pattern, and
/// also when the matched digits name an impossible calendar date (`"2/30"`,
/// or `"2/29"` against a non-leap reference year) — normalizing those would
/// manufacture a day the source never published.
#[must_use]
pub fn guess_date(guess: &str, reference: DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
    let caps = month_day_re().captures(guess)?;
    let month: u32 = caps[1].parse().ok()?;
    let day: u32 = caps[2].parse().ok()?;

    let candidate = reference
        .timezone()
        .with_ymd_and_hms(reference.year(), month, day, 0, 0, 0)
        .single()?;

    if candidate > reference {
        candidate.with_year(reference.year() - 1)
    } else {
        Some(candidate)
    }
}

#[cfg(test)]
#[path = "dates_test.rs"]
mod tests;
