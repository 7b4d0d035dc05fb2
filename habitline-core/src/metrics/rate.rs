//! Completion-rate calculator and current-period status.

use chrono::{DateTime, Duration, NaiveDate, Utc, Weekday};

use crate::calendar::{distinct_days, week_start_of};
use crate::types::{Completion, Frequency};

/// Expected periods between the creation day and `as_of`, inclusive.
///
/// Floored at 1 so a habit created on `as_of` expects exactly one period
/// and no rate computation divides by zero.
pub fn elapsed_periods(
    frequency: Frequency,
    created_at: DateTime<Utc>,
    as_of: NaiveDate,
) -> i64 {
    let created = created_at.date_naive();
    let days = as_of.signed_duration_since(created).num_days();
    let periods = match frequency {
        Frequency::Daily => days + 1,
        Frequency::Weekly => days / 7 + 1,
    };
    periods.max(1)
}

/// Percentage of expected periods completed since creation, capped at 100.
///
/// The numerator is the distinct-day count, so same-day duplicates never
/// inflate the rate. Empty history is 0, not an error.
pub fn completion_rate(
    completions: &[Completion],
    frequency: Frequency,
    created_at: DateTime<Utc>,
    as_of: NaiveDate,
) -> f64 {
    let done = distinct_days(completions).len();
    if done == 0 {
        return 0.0;
    }
    let expected = elapsed_periods(frequency, created_at, as_of);
    (done as f64 / expected as f64 * 100.0).min(100.0)
}

/// Whether the period containing `as_of` is already satisfied.
///
/// Daily: a completion dated exactly `as_of`. Weekly: a completion
/// anywhere inside the week bucket containing `as_of`.
pub fn completed_in_current_period(
    completions: &[Completion],
    frequency: Frequency,
    week_start: Weekday,
    as_of: NaiveDate,
) -> bool {
    match frequency {
        Frequency::Daily => completions.iter().any(|c| c.date == as_of),
        Frequency::Weekly => {
            let start = week_start_of(as_of, week_start);
            let end = start + Duration::days(6);
            completions.iter().any(|c| c.date >= start && c.date <= end)
        }
    }
}
