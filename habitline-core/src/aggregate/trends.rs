//! Per-habit trend rows for the analytics view.

use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::metrics::HabitMetrics;
use crate::types::{Category, Color, Frequency, Habit};

/// One row of the trends table: habit identity plus its current numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitTrend {
    pub name: String,
    pub color: Color,
    /// Distinct completed days
    pub completions: i64,
    pub streak: i64,
    pub completion_rate: f64,
    pub category: Category,
    pub frequency: Frequency,
    pub created_at: DateTime<Utc>,
}

/// One trend row per active habit, newest habit first.
pub fn habit_trends(habits: &[Habit], now: DateTime<Utc>, week_start: Weekday) -> Vec<HabitTrend> {
    let mut rows: Vec<HabitTrend> = habits
        .iter()
        .filter(|h| h.is_active)
        .map(|habit| {
            let metrics = HabitMetrics::evaluate(habit, now, week_start);
            HabitTrend {
                name: habit.name.clone(),
                color: habit.color.clone(),
                completions: metrics.total_completions,
                streak: metrics.current_streak,
                completion_rate: metrics.completion_rate,
                category: habit.category,
                frequency: habit.frequency,
                created_at: habit.created_at,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    rows
}
