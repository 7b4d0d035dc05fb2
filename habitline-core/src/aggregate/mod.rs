//! Aggregation layer: combines per-habit metrics across a user's habit
//! set.
//!
//! - [`overview`] — whole-account stats for the dashboard header
//! - [`categories`] — per-category partitions with per-habit breakdowns
//! - [`grid`] — trailing-window daily completion grid
//! - [`trends`] — per-habit trend rows for the analytics view
//!
//! Everything here reduces already-computed [`crate::HabitMetrics`] or
//! re-evaluates habits through the same engine; no aggregation carries
//! its own streak or rate math.

pub mod categories;
pub mod grid;
pub mod overview;
pub mod trends;

pub use categories::{category_stats, CategoryHabit, CategoryStats};
pub use grid::{completion_grid, GridDay};
pub use overview::{user_stats, UserStats};
pub use trends::{habit_trends, HabitTrend};
