//! # habitline-core
//!
//! Core metrics library for habitline - a social habit tracker.
//!
//! This library provides:
//! - Domain types for habits, completions, and followed users
//! - The streak / completion-rate metrics engine
//! - Per-user aggregation views and the social activity feed
//! - Configuration management
//! - Logging infrastructure
//!
//! ## Architecture
//!
//! Raw completion records flow in, derived metrics flow out:
//! - **Completion store (external):** per habit, an unordered collection of
//!   day-granular completion events
//! - **Metrics engine:** streaks, completion rates, and period status per
//!   habit ([`metrics`])
//! - **Aggregation layer:** account overviews, category grouping, daily
//!   grids, and the followed-users activity feed ([`aggregate`], [`feed`])
//!
//! Every computation takes an explicit `now`/`as_of` anchor. Nothing here
//! reads the system clock during metric evaluation, holds state between
//! calls, or performs I/O, so results are deterministic and safe to
//! compute concurrently over any snapshot.
//!
//! ## Example
//!
//! ```rust
//! use chrono::{Utc, Weekday};
//! use habitline_core::{Category, Color, Frequency, Habit, HabitMetrics};
//!
//! let mut habit = Habit::new(
//!     "user-1",
//!     "Morning run",
//!     "",
//!     Category::HealthFitness,
//!     Frequency::Daily,
//!     Color::default(),
//! )
//! .expect("valid habit");
//!
//! let now = Utc::now();
//! habit.log_completion(now.date_naive(), now);
//!
//! let metrics = HabitMetrics::evaluate(&habit, now, Weekday::Sun);
//! assert_eq!(metrics.current_streak, 1);
//! assert!(metrics.completed_in_period);
//! ```

// Re-export commonly used items at the crate root
pub use aggregate::{CategoryStats, GridDay, HabitTrend, UserStats};
pub use config::{Config, EngineConfig, LoggingConfig};
pub use error::{Error, Result};
pub use feed::{build_activity_feed, ActivityEvent, FeedSource};
pub use metrics::{habit_detail, plan_toggle, HabitDetail, HabitMetrics, ToggleAction};
pub use types::*;

// Public modules
pub mod aggregate;
pub mod calendar;
pub mod config;
pub mod error;
pub mod feed;
pub mod logging;
pub mod metrics;
pub mod types;
