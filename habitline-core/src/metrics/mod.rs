//! Per-habit metrics engine.
//!
//! The one authoritative implementation of streak and completion-rate
//! math. Every caller (API route, UI, future services) goes through this
//! module so the numbers never drift between surfaces.
//!
//! All functions are pure projections of
//! (frequency, created_at, completions, anchor): no clock reads, no
//! stored state, no I/O. Same-day duplicate completions are tolerated and
//! de-duplicated everywhere except the activity feed, which deliberately
//! keeps one event per logged record.
//!
//! - [`streak`] — current / longest / as-of-date streak walks
//! - [`rate`] — completion rate and current-period status

pub mod rate;
pub mod streak;

pub use rate::{completed_in_current_period, completion_rate, elapsed_periods};
pub use streak::{current_streak, longest_streak, streak_as_of};

use chrono::{DateTime, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::calendar::distinct_days;
use crate::types::{Completion, Habit};

/// Derived metrics for a single habit.
///
/// Never stored; recomputed from the habit snapshot at query time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HabitMetrics {
    /// Consecutive satisfied periods ending at the anchor
    pub current_streak: i64,
    /// Longest run of consecutive periods anywhere in the history
    pub longest_streak: i64,
    /// Distinct completed days over expected periods, percent in [0, 100]
    pub completion_rate: f64,
    /// Whether the period containing the anchor is already satisfied
    pub completed_in_period: bool,
    /// Distinct completed days
    pub total_completions: i64,
}

impl HabitMetrics {
    /// Compute the full bundle for one habit as of `now`.
    pub fn evaluate(habit: &Habit, now: DateTime<Utc>, week_start: Weekday) -> Self {
        let as_of = now.date_naive();
        Self {
            current_streak: streak::current_streak(
                &habit.completions,
                habit.frequency,
                week_start,
                as_of,
            ),
            longest_streak: streak::longest_streak(
                &habit.completions,
                habit.frequency,
                week_start,
            ),
            completion_rate: rate::completion_rate(
                &habit.completions,
                habit.frequency,
                habit.created_at,
                as_of,
            ),
            completed_in_period: rate::completed_in_current_period(
                &habit.completions,
                habit.frequency,
                week_start,
                as_of,
            ),
            total_completions: distinct_days(&habit.completions).len() as i64,
        }
    }
}

/// Detailed stats for a single-habit view: metrics plus recent history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitDetail {
    #[serde(flatten)]
    pub metrics: HabitMetrics,
    /// Most recent completion records, calendar date descending
    pub recent_completions: Vec<Completion>,
}

/// Compute [`HabitDetail`] with at most `recent_cap` history entries.
pub fn habit_detail(
    habit: &Habit,
    now: DateTime<Utc>,
    week_start: Weekday,
    recent_cap: usize,
) -> HabitDetail {
    let mut recent = habit.completions.clone();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(recent_cap);
    HabitDetail {
        metrics: HabitMetrics::evaluate(habit, now, week_start),
        recent_completions: recent,
    }
}

/// What toggling a habit for a given day would do.
///
/// Toggling is add-or-remove, never duplicate-insert; the persistence
/// layer executes the returned action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleAction {
    /// No completion on that day yet: add one
    Add,
    /// Already completed that day: remove it (duplicates included)
    Remove,
}

/// Decide the toggle action for `day` against the current completion set.
pub fn plan_toggle(completions: &[Completion], day: NaiveDate) -> ToggleAction {
    if completions.iter().any(|c| c.date == day) {
        ToggleAction::Remove
    } else {
        ToggleAction::Add
    }
}

impl Habit {
    /// Apply a toggle for `day` to this snapshot and report what happened.
    ///
    /// Mutates only the in-memory snapshot; callers persist the result.
    pub fn toggle(&mut self, day: NaiveDate, logged_at: DateTime<Utc>) -> ToggleAction {
        let action = plan_toggle(&self.completions, day);
        match action {
            ToggleAction::Add => self.log_completion(day, logged_at),
            ToggleAction::Remove => {
                self.remove_completions_on(day);
            }
        }
        action
    }
}
