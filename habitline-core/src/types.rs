//! Core domain types for habitline
//!
//! These types are the canonical data model the metrics engine computes
//! over. Callers (the HTTP and persistence layers) materialize snapshots of
//! these values before invoking any engine function; the engine itself
//! never reads a store or a clock.
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Habit** | A recurring practice a user tracks, with a daily or weekly cadence |
//! | **Completion** | One day-granular "did it" event for a habit; same-day duplicates are one logical event |
//! | **Period** | A calendar day (daily habits) or a week bucket (weekly habits) |
//! | **UserRef** | Display identity of a followed user, echoed back in the activity feed |
//!
//! ### Calendar date vs logging instant
//!
//! A [`Completion`] carries two different times and they are never
//! interchangeable:
//! - `date` is the calendar day being marked complete. All streak and rate
//!   math runs on it.
//! - `logged_at` is the instant the record was created. Only the activity
//!   feed ordering uses it.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const MAX_NAME_LEN: usize = 100;
const MAX_DESCRIPTION_LEN: usize = 500;

// ============================================
// Frequency
// ============================================

/// Cadence of a habit: the period unit its streaks count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Daily,
    Weekly,
}

impl Frequency {
    /// Returns the identifier used in stored documents
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Frequency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            _ => Err(Error::UnknownFrequency(s.to_string())),
        }
    }
}

// ============================================
// Category
// ============================================

/// Closed set of habit categories.
///
/// The variant order is the display order aggregation output follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Health & Fitness")]
    HealthFitness,
    #[serde(rename = "Learning")]
    Learning,
    #[serde(rename = "Productivity")]
    Productivity,
    #[serde(rename = "Mindfulness")]
    Mindfulness,
    #[serde(rename = "Relationships")]
    Relationships,
    #[serde(rename = "Hobbies")]
    Hobbies,
    #[serde(rename = "Finance")]
    Finance,
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    /// Returns the display label, which is also the stored identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::HealthFitness => "Health & Fitness",
            Category::Learning => "Learning",
            Category::Productivity => "Productivity",
            Category::Mindfulness => "Mindfulness",
            Category::Relationships => "Relationships",
            Category::Hobbies => "Hobbies",
            Category::Finance => "Finance",
            Category::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Health & Fitness" => Ok(Category::HealthFitness),
            "Learning" => Ok(Category::Learning),
            "Productivity" => Ok(Category::Productivity),
            "Mindfulness" => Ok(Category::Mindfulness),
            "Relationships" => Ok(Category::Relationships),
            "Hobbies" => Ok(Category::Hobbies),
            "Finance" => Ok(Category::Finance),
            "Other" => Ok(Category::Other),
            _ => Err(Error::UnknownCategory(s.to_string())),
        }
    }
}

// ============================================
// Color
// ============================================

/// Habit display color in `#RRGGBB` form, case preserved as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Validate and wrap a `#RRGGBB` string (hex digits, either case).
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        let bytes = value.as_bytes();
        let valid =
            bytes.len() == 7 && bytes[0] == b'#' && bytes[1..].iter().all(u8::is_ascii_hexdigit);
        if valid {
            Ok(Color(value))
        } else {
            Err(Error::InvalidColor(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Color("#8B5CF6".to_string())
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Color::new(value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> String {
        color.0
    }
}

// ============================================
// Completions
// ============================================

/// One completion event for a habit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    /// Calendar day being marked complete (no time-of-day semantics)
    pub date: NaiveDate,
    /// Instant the record was created; feed ordering only, never streak math
    pub logged_at: DateTime<Utc>,
}

impl Completion {
    pub fn new(date: NaiveDate, logged_at: DateTime<Utc>) -> Self {
        Self { date, logged_at }
    }
}

// ============================================
// Habits
// ============================================

/// A habit and its completion history.
///
/// The store enforces (user, name) uniqueness across active habits;
/// [`Habit::new`] only validates field shape. Same-day duplicate
/// completions are not rejected by the store, so every engine function
/// de-duplicates defensively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    /// Unique identifier (uuid v4 when created through [`Habit::new`])
    pub id: String,
    /// Owning user id
    pub user_id: String,
    /// Display name, trimmed, unique per active user
    pub name: String,
    /// Optional free-form description
    #[serde(default)]
    pub description: String,
    /// Category from the closed set
    pub category: Category,
    /// Daily or weekly cadence
    pub frequency: Frequency,
    /// Display color
    pub color: Color,
    /// Completion history, unordered, possibly with same-day duplicates
    #[serde(default)]
    pub completions: Vec<Completion>,
    /// Soft-delete marker; inactive habits drop out of every aggregation
    pub is_active: bool,
    /// When the habit was created; anchors completion-rate expectations
    pub created_at: DateTime<Utc>,
    /// Unrecognized document-store fields, carried losslessly
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl Habit {
    /// Create a new active habit with a generated id.
    pub fn new(
        user_id: impl Into<String>,
        name: &str,
        description: &str,
        category: Category,
        frequency: Frequency,
        color: Color,
    ) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Validation("habit name is required".to_string()));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(Error::Validation(format!(
                "habit name must be at most {} characters",
                MAX_NAME_LEN
            )));
        }
        let description = description.trim();
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(Error::Validation(format!(
                "description must be at most {} characters",
                MAX_DESCRIPTION_LEN
            )));
        }

        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            name: name.to_string(),
            description: description.to_string(),
            category,
            frequency,
            color,
            completions: Vec::new(),
            is_active: true,
            created_at: Utc::now(),
            metadata: serde_json::Value::Null,
        })
    }

    /// Whether any completion is dated exactly `day`.
    pub fn completion_on(&self, day: NaiveDate) -> bool {
        self.completions.iter().any(|c| c.date == day)
    }

    /// Most recent logging instant across all completions.
    pub fn latest_logged_at(&self) -> Option<DateTime<Utc>> {
        self.completions.iter().map(|c| c.logged_at).max()
    }

    /// Append a completion record for `day` to this snapshot.
    pub fn log_completion(&mut self, day: NaiveDate, logged_at: DateTime<Utc>) {
        self.completions.push(Completion::new(day, logged_at));
    }

    /// Remove every completion record dated `day` from this snapshot.
    ///
    /// Returns true if anything was removed. Clears duplicates too, so a
    /// toggle-off always leaves the day empty.
    pub fn remove_completions_on(&mut self, day: NaiveDate) -> bool {
        let before = self.completions.len();
        self.completions.retain(|c| c.date != day);
        self.completions.len() != before
    }
}

// ============================================
// Followed users
// ============================================

/// Display identity of a followed user.
///
/// The social graph itself lives outside the core; the feed only needs
/// enough identity to attribute events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub avatar: Option<String>,
}
