//! Trailing-window daily completion grid.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::types::Habit;

/// One day of the completion grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridDay {
    pub date: NaiveDate,
    /// Habits with a completion dated exactly this day
    pub completed_habits: i64,
    /// Active habit count the percentage is taken against
    pub total_habits: i64,
    /// `completed_habits` as a percentage of `total_habits`, 0 when the
    /// user has no habits
    pub completion_rate: f64,
}

/// Per-day completion counts for the `window_days` ending at `as_of`,
/// oldest first.
///
/// This is a same-day presence check regardless of each habit's own
/// frequency: a weekly habit contributes only on the days it was actually
/// marked.
pub fn completion_grid(habits: &[Habit], window_days: u32, as_of: NaiveDate) -> Vec<GridDay> {
    let active: Vec<&Habit> = habits.iter().filter(|h| h.is_active).collect();
    let total = active.len() as i64;

    (0..window_days as i64)
        .rev()
        .map(|back| {
            let date = as_of - Duration::days(back);
            let completed = active.iter().filter(|h| h.completion_on(date)).count() as i64;
            let completion_rate = if total > 0 {
                completed as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            GridDay {
                date,
                completed_habits: completed,
                total_habits: total,
                completion_rate,
            }
        })
        .collect()
}
