//! Streak calculator.
//!
//! All three entry points walk periods backward (or scan runs forward)
//! over de-duplicated calendar days. Daily habits count consecutive days;
//! weekly habits count consecutive week buckets, where a completion
//! anywhere inside a week satisfies that week.

use chrono::{Duration, NaiveDate, Weekday};

use crate::calendar::{distinct_days, distinct_weeks, week_start_of};
use crate::types::{Completion, Frequency};

/// Consecutive satisfied periods ending at `as_of`.
///
/// Walks the expected period sequence backward from `as_of` and counts
/// hits until the first gap. A completion dated after `as_of`, or any day
/// off the expected sequence, ends the walk without contributing.
pub fn current_streak(
    completions: &[Completion],
    frequency: Frequency,
    week_start: Weekday,
    as_of: NaiveDate,
) -> i64 {
    let (buckets, anchor, step) = match frequency {
        Frequency::Daily => (distinct_days(completions), as_of, 1),
        Frequency::Weekly => (
            distinct_weeks(completions, week_start),
            week_start_of(as_of, week_start),
            7,
        ),
    };

    let mut streak = 0i64;
    for (i, bucket) in buckets.iter().rev().enumerate() {
        let expected = anchor - Duration::days(step * i as i64);
        if *bucket == expected {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}

/// Longest run of consecutive periods anywhere in the history.
///
/// Minimum 1 if any completion exists, 0 if none.
pub fn longest_streak(
    completions: &[Completion],
    frequency: Frequency,
    week_start: Weekday,
) -> i64 {
    let (buckets, step) = match frequency {
        Frequency::Daily => (distinct_days(completions), 1),
        Frequency::Weekly => (distinct_weeks(completions, week_start), 7),
    };

    let mut longest = 0i64;
    let mut run = 0i64;
    let mut prev: Option<NaiveDate> = None;
    for bucket in buckets {
        run = match prev {
            Some(p) if bucket.signed_duration_since(p) == Duration::days(step) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(bucket);
    }
    longest
}

/// [`current_streak`] anchored at an arbitrary historical date.
///
/// Completions dated strictly after `date` are invisible to the walk, so
/// the result is "what the streak was at the time".
pub fn streak_as_of(
    completions: &[Completion],
    frequency: Frequency,
    week_start: Weekday,
    date: NaiveDate,
) -> i64 {
    let visible: Vec<Completion> = completions
        .iter()
        .filter(|c| c.date <= date)
        .cloned()
        .collect();
    current_streak(&visible, frequency, week_start, date)
}
