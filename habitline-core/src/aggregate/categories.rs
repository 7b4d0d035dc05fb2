//! Per-category partitions of a user's habit set.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::metrics::HabitMetrics;
use crate::types::{Category, Habit};

/// Per-habit row inside a category summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryHabit {
    pub name: String,
    /// Distinct completed days
    pub completions: i64,
    pub completion_rate: f64,
    pub streak: i64,
}

/// Aggregate statistics for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub category: Category,
    pub total_habits: i64,
    pub total_completions: i64,
    /// Mean completion rate across the category, rounded to the nearest
    /// integer (same rounding rule as the account overview)
    pub avg_completion_rate: i64,
    /// Per-habit breakdown within the category
    pub habits: Vec<CategoryHabit>,
}

/// Partition active habits by category and summarize each partition.
///
/// Output follows [`Category`] declaration order; empty categories are
/// omitted.
pub fn category_stats(
    habits: &[Habit],
    now: DateTime<Utc>,
    week_start: Weekday,
) -> Vec<CategoryStats> {
    let mut partitions: BTreeMap<Category, Vec<CategoryHabit>> = BTreeMap::new();

    for habit in habits.iter().filter(|h| h.is_active) {
        let metrics = HabitMetrics::evaluate(habit, now, week_start);
        partitions.entry(habit.category).or_default().push(CategoryHabit {
            name: habit.name.clone(),
            completions: metrics.total_completions,
            completion_rate: metrics.completion_rate,
            streak: metrics.current_streak,
        });
    }

    partitions
        .into_iter()
        .map(|(category, rows)| {
            let count = rows.len() as f64;
            let mean_rate = rows.iter().map(|r| r.completion_rate).sum::<f64>() / count;
            CategoryStats {
                category,
                total_habits: rows.len() as i64,
                total_completions: rows.iter().map(|r| r.completions).sum(),
                avg_completion_rate: mean_rate.round() as i64,
                habits: rows,
            }
        })
        .collect()
}
