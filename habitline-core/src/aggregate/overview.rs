//! Whole-account statistics for the dashboard header.

use serde::{Deserialize, Serialize};

use crate::metrics::HabitMetrics;

/// Aggregate statistics across a user's active habits.
///
/// Streak and rate fields are round-half-up means across habits;
/// `longest_streak` is the single maximum.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    /// Number of active habits
    pub total_habits: i64,
    /// Habits whose current period is already satisfied
    pub completed_in_period: i64,
    /// Mean current streak, rounded to the nearest integer
    pub current_streak: i64,
    /// Maximum longest streak across all habits
    pub longest_streak: i64,
    /// Mean completion rate, rounded to the nearest integer
    pub completion_rate: i64,
    /// Sum of distinct completed days across all habits
    pub total_completions: i64,
}

/// Reduce per-habit metric bundles into account-level stats.
///
/// An empty habit set returns the fixed zero record rather than reducing
/// over empty input.
pub fn user_stats(metrics: &[HabitMetrics]) -> UserStats {
    if metrics.is_empty() {
        return UserStats::default();
    }

    let count = metrics.len() as f64;
    let mean_streak = metrics.iter().map(|m| m.current_streak as f64).sum::<f64>() / count;
    let mean_rate = metrics.iter().map(|m| m.completion_rate).sum::<f64>() / count;

    UserStats {
        total_habits: metrics.len() as i64,
        completed_in_period: metrics.iter().filter(|m| m.completed_in_period).count() as i64,
        // Means are non-negative, so round() is round-half-up here.
        current_streak: mean_streak.round() as i64,
        longest_streak: metrics.iter().map(|m| m.longest_streak).max().unwrap_or(0),
        completion_rate: mean_rate.round() as i64,
        total_completions: metrics.iter().map(|m| m.total_completions).sum(),
    }
}
