//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/habitline/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/habitline/` (~/.config/habitline/)
//! - State/Logs: `$XDG_STATE_HOME/habitline/` (~/.local/state/habitline/)

use crate::error::{Error, Result};
use chrono::Weekday;
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Metrics engine conventions and caps
    #[serde(default)]
    pub engine: EngineConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Metrics engine conventions and cost-control caps.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// First day of the week bucket ("sunday", "monday", ...)
    #[serde(default = "default_week_start", deserialize_with = "de_weekday")]
    pub week_start: Weekday,

    /// Trailing window for the activity feed, in days
    #[serde(default = "default_activity_window_days")]
    pub activity_window_days: u32,

    /// Final activity feed cap, applied after sorting
    #[serde(default = "default_activity_feed_cap")]
    pub activity_feed_cap: usize,

    /// Coarse cap on source habits considered for the feed
    #[serde(default = "default_source_habit_cap")]
    pub source_habit_cap: usize,

    /// Trailing window for the completion grid, in days
    #[serde(default = "default_grid_window_days")]
    pub grid_window_days: u32,

    /// Maximum recent completions returned in habit detail
    #[serde(default = "default_recent_completions_cap")]
    pub recent_completions_cap: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            week_start: default_week_start(),
            activity_window_days: default_activity_window_days(),
            activity_feed_cap: default_activity_feed_cap(),
            source_habit_cap: default_source_habit_cap(),
            grid_window_days: default_grid_window_days(),
            recent_completions_cap: default_recent_completions_cap(),
        }
    }
}

impl EngineConfig {
    /// Validate configuration, returning error message if invalid
    pub fn validate(&self) -> Result<()> {
        if self.activity_window_days == 0 {
            return Err(Error::Config(
                "engine.activity_window_days must be at least 1".to_string(),
            ));
        }
        if self.grid_window_days == 0 {
            return Err(Error::Config(
                "engine.grid_window_days must be at least 1".to_string(),
            ));
        }
        if self.activity_feed_cap == 0 {
            return Err(Error::Config(
                "engine.activity_feed_cap must be at least 1".to_string(),
            ));
        }
        if self.source_habit_cap == 0 {
            return Err(Error::Config(
                "engine.source_habit_cap must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_week_start() -> Weekday {
    Weekday::Sun
}

fn default_activity_window_days() -> u32 {
    7
}

fn default_activity_feed_cap() -> usize {
    20
}

fn default_source_habit_cap() -> usize {
    50
}

fn default_grid_window_days() -> u32 {
    7
}

fn default_recent_completions_cap() -> usize {
    30
}

fn de_weekday<'de, D>(deserializer: D) -> std::result::Result<Weekday, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Weekday::from_str(&raw)
        .map_err(|_| serde::de::Error::custom(format!("unknown weekday: {}", raw)))
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Maximum number of log files to keep
    #[serde(default = "default_max_log_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            max_files: default_max_log_files(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_log_files() -> usize {
    5
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        config.engine.validate()?;

        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/habitline/config.toml` (~/.config/habitline/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("habitline").join("config.toml")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/habitline/` (~/.local/state/habitline/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("habitline")
    }

    /// Returns the log file path
    ///
    /// `$XDG_STATE_HOME/habitline/habitline.log` (~/.local/state/habitline/habitline.log)
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("habitline.log")
    }
}
