//! Calendar arithmetic shared by the metrics engine.
//!
//! Completion dates are day-granular and timezone-less; week buckets start
//! on a configurable weekday (Sunday unless configured otherwise).

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::BTreeSet;

use crate::types::Completion;

/// Start of the week bucket containing `day`.
pub fn week_start_of(day: NaiveDate, week_start: Weekday) -> NaiveDate {
    let offset =
        (7 + day.weekday().num_days_from_monday() - week_start.num_days_from_monday()) % 7;
    day - Duration::days(offset as i64)
}

/// Distinct calendar days, ascending. Same-day duplicates collapse here.
pub fn distinct_days(completions: &[Completion]) -> BTreeSet<NaiveDate> {
    completions.iter().map(|c| c.date).collect()
}

/// Distinct week-bucket start days, ascending.
pub fn distinct_weeks(completions: &[Completion], week_start: Weekday) -> BTreeSet<NaiveDate> {
    completions
        .iter()
        .map(|c| week_start_of(c.date, week_start))
        .collect()
}
