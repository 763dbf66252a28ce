// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! hand-edited `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[quiz]` - Trigger window, answer policy, results summary
//! - `[playback]` - Autoplay and time update cadence
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with explicit path
//! 2. Set `ICED_QUIZ_CONFIG_DIR` environment variable (or `--config-dir`)
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_quiz::config;
//!
//! let (config, warning) = config::load_with_override(None);
//! if let Some(key) = warning {
//!     eprintln!("settings.toml ignored: {key}");
//! }
//! println!("{:?}", config.quiz.answer_policy);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::quiz::AnswerPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// How questions are triggered and answered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuizConfig {
    /// Trigger window width in seconds.
    #[serde(
        default = "default_trigger_window_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub trigger_window_secs: Option<f64>,

    /// Whether an answered question can be answered again before closing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_policy: Option<AnswerPolicy>,

    /// Show the results summary when the video ends.
    #[serde(
        default = "default_show_results",
        skip_serializing_if = "Option::is_none"
    )]
    pub show_results: Option<bool>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            trigger_window_secs: default_trigger_window_secs(),
            answer_policy: Some(AnswerPolicy::default()),
            show_results: default_show_results(),
        }
    }
}

/// Playback clock settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaybackConfig {
    /// Start playing as soon as the video is probed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,

    /// Milliseconds between two time updates while playing.
    #[serde(
        default = "default_time_update_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_update_interval_ms: Option<u64>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            autoplay: Some(false),
            time_update_interval_ms: default_time_update_interval_ms(),
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub quiz: QuizConfig,

    #[serde(default)]
    pub playback: PlaybackConfig,
}

fn default_trigger_window_secs() -> Option<f64> {
    Some(DEFAULT_TRIGGER_WINDOW_SECS)
}

fn default_show_results() -> Option<bool> {
    Some(true)
}

fn default_time_update_interval_ms() -> Option<u64> {
    Some(DEFAULT_TIME_UPDATE_INTERVAL_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Falling back to default settings: {err}");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}
