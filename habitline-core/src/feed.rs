//! Social activity feed.
//!
//! Aggregates recent completions from followed users into a feed ordered
//! by logging instant. Two caps bound the work:
//!
//! 1. A coarse source cap keeps at most `source_habit_cap` habits,
//!    freshest logged activity first, before the window filter runs.
//! 2. The final feed keeps `activity_feed_cap` events after sorting.
//!
//! The coarse cap is a cost control and can silently drop legitimate
//! recent activity from prolific followees once the feed is popular.
//!
//! Unlike the metrics engine, the feed does NOT merge same-day duplicate
//! completions: each logged record is its own event, ordered by when it
//! was logged.

use std::collections::HashSet;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::metrics::streak_as_of;
use crate::types::{Color, Habit, UserRef};

/// One habit snapshot from a followed user, as materialized by the caller.
#[derive(Debug, Clone)]
pub struct FeedSource {
    pub user: UserRef,
    pub habit: Habit,
}

/// A single completion event in the activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEvent {
    /// Synthetic id, stable per logged record
    pub id: String,
    /// Acting user
    pub user: UserRef,
    pub habit_name: String,
    pub habit_color: Color,
    /// Calendar day the completion marks
    pub completed_on: NaiveDate,
    /// Instant the completion was logged; the feed sort key
    pub logged_at: DateTime<Utc>,
    /// Streak the habit had as of the completion's calendar day
    pub streak: i64,
}

/// Build the activity feed for a follower.
///
/// `sources` holds followee habit snapshots; habits whose owner is not in
/// `following`, inactive habits, and habits with no completions are
/// skipped. Events are completions whose calendar day falls in the
/// trailing `activity_window_days` ending at `now`'s day (future-dated
/// completions are excluded), each carrying the streak as of that day
/// over the habit's full history.
pub fn build_activity_feed(
    sources: &[FeedSource],
    following: &HashSet<String>,
    now: DateTime<Utc>,
    config: &EngineConfig,
) -> Vec<ActivityEvent> {
    let as_of = now.date_naive();
    let window_start = as_of - Duration::days(config.activity_window_days as i64 - 1);

    let mut pool: Vec<&FeedSource> = sources
        .iter()
        .filter(|s| following.contains(&s.habit.user_id))
        .filter(|s| s.habit.is_active && !s.habit.completions.is_empty())
        .collect();

    // Freshest logged activity first, so the coarse cap drops the stalest
    // habits rather than arbitrary ones.
    pool.sort_by_key(|s| std::cmp::Reverse(s.habit.latest_logged_at()));
    pool.truncate(config.source_habit_cap);

    let mut events = Vec::new();
    for source in &pool {
        let habit = &source.habit;
        for completion in habit
            .completions
            .iter()
            .filter(|c| c.date >= window_start && c.date <= as_of)
        {
            events.push(ActivityEvent {
                id: format!("{}:{}", habit.id, completion.logged_at.timestamp_millis()),
                user: source.user.clone(),
                habit_name: habit.name.clone(),
                habit_color: habit.color.clone(),
                completed_on: completion.date,
                logged_at: completion.logged_at,
                streak: streak_as_of(
                    &habit.completions,
                    habit.frequency,
                    config.week_start,
                    completion.date,
                ),
            });
        }
    }

    events.sort_by(|a, b| b.logged_at.cmp(&a.logged_at));
    events.truncate(config.activity_feed_cap);

    tracing::debug!(
        sources = pool.len(),
        events = events.len(),
        "Built activity feed"
    );

    events
}
