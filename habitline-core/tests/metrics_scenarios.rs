//! End-to-end scenarios for the habitline metrics engine
//!
//! These tests exercise whole flows the way callers do: build habit
//! snapshots, evaluate metrics, and aggregate them into overview, grid,
//! category, and feed views.

use std::collections::HashSet;

use chrono::{DateTime, Duration, NaiveDate, Utc, Weekday};
use habitline_core::aggregate::{category_stats, completion_grid, user_stats};
use habitline_core::metrics::{current_streak, streak_as_of};
use habitline_core::{
    build_activity_feed, Category, Color, Completion, EngineConfig, FeedSource, Frequency, Habit,
    HabitMetrics, UserRef, UserStats,
};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(d: NaiveDate, hour: u32) -> DateTime<Utc> {
    d.and_hms_opt(hour, 0, 0).unwrap().and_utc()
}

fn habit_with(
    name: &str,
    category: Category,
    frequency: Frequency,
    created: NaiveDate,
    completed: &[NaiveDate],
) -> Habit {
    let mut habit = Habit::new(
        "user-1",
        name,
        "",
        category,
        frequency,
        Color::default(),
    )
    .expect("valid habit");
    habit.created_at = at(created, 8);
    for d in completed {
        habit.log_completion(*d, at(*d, 9));
    }
    habit
}

// ============================================
// Streak + rate scenarios
// ============================================

#[test]
fn test_daily_scenario_with_missed_day() {
    // Created on D, completed D, D+1, D+3; evaluated as of D+3.
    let d = day(2024, 3, 4);
    let habit = habit_with(
        "Morning run",
        Category::HealthFitness,
        Frequency::Daily,
        d,
        &[d, day(2024, 3, 5), day(2024, 3, 7)],
    );

    let metrics = HabitMetrics::evaluate(&habit, at(day(2024, 3, 7), 20), Weekday::Sun);

    // The D+2 hole breaks the backward walk immediately after D+3.
    assert_eq!(metrics.current_streak, 1);
    assert_eq!(metrics.longest_streak, 2);
    assert_eq!(metrics.completion_rate, 75.0);
    assert!(metrics.completed_in_period);
    assert_eq!(metrics.total_completions, 3);
}

#[test]
fn test_weekly_scenario_with_gap_week() {
    // One completion per week for 3 consecutive weeks, a gap week, then
    // one more completion in the most recent week.
    let habit = habit_with(
        "Meal prep",
        Category::HealthFitness,
        Frequency::Weekly,
        day(2024, 3, 3),
        &[
            day(2024, 3, 5),
            day(2024, 3, 13),
            day(2024, 3, 21),
            day(2024, 4, 2),
        ],
    );

    let metrics = HabitMetrics::evaluate(&habit, at(day(2024, 4, 3), 20), Weekday::Sun);

    assert_eq!(metrics.longest_streak, 3);
    assert_eq!(metrics.current_streak, 1);
    assert!(metrics.completed_in_period);
}

#[test]
fn test_boundary_today_and_yesterday() {
    let today = day(2024, 3, 6);
    let now = at(today, 20);

    let done_today = habit_with(
        "Read",
        Category::Learning,
        Frequency::Daily,
        day(2024, 3, 1),
        &[today],
    );
    assert_eq!(
        HabitMetrics::evaluate(&done_today, now, Weekday::Sun).current_streak,
        1
    );

    let done_yesterday = habit_with(
        "Read",
        Category::Learning,
        Frequency::Daily,
        day(2024, 3, 1),
        &[day(2024, 3, 5)],
    );
    assert_eq!(
        HabitMetrics::evaluate(&done_yesterday, now, Weekday::Sun).current_streak,
        0
    );
}

#[test]
fn test_duplicate_completions_change_nothing() {
    let created = day(2024, 3, 4);
    let days = [day(2024, 3, 4), day(2024, 3, 5), day(2024, 3, 6)];

    let clean = habit_with("Read", Category::Learning, Frequency::Daily, created, &days);
    let mut duplicated = clean.clone();
    for d in &days {
        duplicated.log_completion(*d, at(*d, 23));
    }

    let now = at(day(2024, 3, 6), 20);
    assert_eq!(
        HabitMetrics::evaluate(&clean, now, Weekday::Sun),
        HabitMetrics::evaluate(&duplicated, now, Weekday::Sun)
    );
}

#[test]
fn test_adding_consecutive_days_never_decreases_streak() {
    let as_of = day(2024, 3, 20);
    let mut completions = Vec::new();
    let mut previous = 0;

    for back in 0..10 {
        let d = as_of - Duration::days(back);
        completions.push(Completion::new(d, at(d, 9)));
        let streak = current_streak(&completions, Frequency::Daily, Weekday::Sun, as_of);
        assert!(streak >= previous);
        previous = streak;
    }
    assert_eq!(previous, 10);
}

#[test]
fn test_rate_never_exceeds_100() {
    // History reaching well before the creation day: the ratio would be
    // far above 100 without the cap.
    let days: Vec<NaiveDate> = (1..=20).map(|d| day(2024, 3, d)).collect();
    let habit = habit_with(
        "Read",
        Category::Learning,
        Frequency::Daily,
        day(2024, 3, 18),
        &days,
    );

    let metrics = HabitMetrics::evaluate(&habit, at(day(2024, 3, 20), 20), Weekday::Sun);
    assert_eq!(metrics.completion_rate, 100.0);
}

// ============================================
// Aggregation scenarios
// ============================================

#[test]
fn test_user_stats_over_no_habits_is_the_zero_record() {
    assert_eq!(user_stats(&[]), UserStats::default());
}

#[test]
fn test_overview_from_evaluated_habits() {
    let now = at(day(2024, 3, 6), 20);
    let habits = vec![
        habit_with(
            "Run",
            Category::HealthFitness,
            Frequency::Daily,
            day(2024, 3, 3),
            &[day(2024, 3, 5), day(2024, 3, 6)],
        ),
        habit_with(
            "Read",
            Category::Learning,
            Frequency::Daily,
            day(2024, 3, 3),
            &[day(2024, 3, 3)],
        ),
    ];

    let metrics: Vec<HabitMetrics> = habits
        .iter()
        .map(|h| HabitMetrics::evaluate(h, now, Weekday::Sun))
        .collect();
    let stats = user_stats(&metrics);

    assert_eq!(stats.total_habits, 2);
    assert_eq!(stats.completed_in_period, 1);
    // streaks 2 and 0 -> mean 1; rates 50 and 25 -> mean 37.5 -> 38
    assert_eq!(stats.current_streak, 1);
    assert_eq!(stats.completion_rate, 38);
    assert_eq!(stats.longest_streak, 2);
    assert_eq!(stats.total_completions, 3);
}

#[test]
fn test_grid_matches_daily_period_status() {
    // For daily habits, today's grid cell equals the completed-in-period
    // count: both are a same-day presence check.
    let today = day(2024, 3, 6);
    let now = at(today, 20);
    let habits = vec![
        habit_with(
            "Run",
            Category::HealthFitness,
            Frequency::Daily,
            day(2024, 3, 1),
            &[today],
        ),
        habit_with(
            "Read",
            Category::Learning,
            Frequency::Daily,
            day(2024, 3, 1),
            &[day(2024, 3, 5)],
        ),
    ];

    let grid = completion_grid(&habits, 7, today);
    assert_eq!(grid.len(), 7);
    let today_cell = grid.last().unwrap();
    assert_eq!(today_cell.date, today);

    let completed_today = habits
        .iter()
        .map(|h| HabitMetrics::evaluate(h, now, Weekday::Sun))
        .filter(|m| m.completed_in_period)
        .count() as i64;
    assert_eq!(today_cell.completed_habits, completed_today);
}

#[test]
fn test_categories_cover_all_active_habits() {
    let now = at(day(2024, 3, 6), 20);
    let habits = vec![
        habit_with(
            "Run",
            Category::HealthFitness,
            Frequency::Daily,
            day(2024, 3, 1),
            &[day(2024, 3, 6)],
        ),
        habit_with(
            "Read",
            Category::Learning,
            Frequency::Daily,
            day(2024, 3, 1),
            &[],
        ),
        habit_with(
            "Stretch",
            Category::HealthFitness,
            Frequency::Daily,
            day(2024, 3, 1),
            &[],
        ),
    ];

    let stats = category_stats(&habits, now, Weekday::Sun);
    let total: i64 = stats.iter().map(|c| c.total_habits).sum();
    assert_eq!(total, 3);
    assert_eq!(stats[0].category, Category::HealthFitness);
    assert_eq!(stats[0].habits.len(), 2);
}

// ============================================
// Activity feed scenarios
// ============================================

#[test]
fn test_feed_orders_same_day_events_by_logging_time() {
    let today = day(2024, 3, 6);
    let mut habit = habit_with(
        "Pushups",
        Category::HealthFitness,
        Frequency::Daily,
        day(2024, 3, 1),
        &[],
    );
    // Two completions for the same calendar day, logged 3 hours apart.
    habit.log_completion(today, at(today, 9));
    habit.log_completion(today, at(today, 12));

    let source = FeedSource {
        user: UserRef {
            id: "user-1".to_string(),
            username: "alice".to_string(),
            display_name: "Alice".to_string(),
            avatar: None,
        },
        habit,
    };
    let following: HashSet<String> = ["user-1".to_string()].into();

    let events = build_activity_feed(
        &[source],
        &following,
        at(today, 20),
        &EngineConfig::default(),
    );

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].logged_at, at(today, 12));
    assert_eq!(events[1].logged_at, at(today, 9));
    assert_eq!(events[0].completed_on, events[1].completed_on);
}

#[test]
fn test_feed_streaks_match_streak_as_of() {
    let days = [day(2024, 3, 4), day(2024, 3, 5), day(2024, 3, 6)];
    let habit = habit_with(
        "Run",
        Category::HealthFitness,
        Frequency::Daily,
        day(2024, 3, 1),
        &days,
    );
    let completions = habit.completions.clone();

    let source = FeedSource {
        user: UserRef {
            id: "user-1".to_string(),
            username: "alice".to_string(),
            display_name: "Alice".to_string(),
            avatar: None,
        },
        habit,
    };
    let following: HashSet<String> = ["user-1".to_string()].into();

    let events = build_activity_feed(
        &[source],
        &following,
        at(day(2024, 3, 6), 20),
        &EngineConfig::default(),
    );

    for event in &events {
        let expected = streak_as_of(
            &completions,
            Frequency::Daily,
            Weekday::Sun,
            event.completed_on,
        );
        assert_eq!(event.streak, expected);
    }
}

#[test]
fn test_feed_two_stage_caps() {
    let today = day(2024, 3, 6);
    let following: HashSet<String> = ["user-1".to_string()].into();

    // Three source habits, each with two in-window completions.
    let sources: Vec<FeedSource> = (0..3)
        .map(|i| {
            let mut habit = habit_with(
                &format!("Habit {i}"),
                Category::Other,
                Frequency::Daily,
                day(2024, 3, 1),
                &[],
            );
            habit.log_completion(today, at(today, i));
            habit.log_completion(day(2024, 3, 5), at(day(2024, 3, 5), i));
            FeedSource {
                user: UserRef {
                    id: "user-1".to_string(),
                    username: "alice".to_string(),
                    display_name: "Alice".to_string(),
                    avatar: None,
                },
                habit,
            }
        })
        .collect();

    let config = EngineConfig {
        source_habit_cap: 2,
        activity_feed_cap: 3,
        ..EngineConfig::default()
    };
    let events = build_activity_feed(&sources, &following, at(today, 20), &config);

    // Source cap keeps 2 habits (4 candidate events); feed cap keeps 3.
    assert_eq!(events.len(), 3);
    let names: HashSet<&str> = events.iter().map(|e| e.habit_name.as_str()).collect();
    assert!(!names.contains("Habit 0"));
}
