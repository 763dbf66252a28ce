// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Quiz**: Trigger window used to match time updates to questions
//! - **Playback**: Time update cadence of the playback clock

// ==========================================================================
// Quiz Defaults
// ==========================================================================

/// Width of the window after a question's trigger time during which a time
/// update opens the question (in seconds).
pub const DEFAULT_TRIGGER_WINDOW_SECS: f64 = 1.0;

/// Smallest accepted trigger window.
pub const MIN_TRIGGER_WINDOW_SECS: f64 = 0.1;

/// Largest accepted trigger window.
pub const MAX_TRIGGER_WINDOW_SECS: f64 = 10.0;

// ==========================================================================
// Playback Defaults
// ==========================================================================

/// Interval between two time updates while playing (in milliseconds).
/// Browsers fire `timeupdate` every 250ms or so.
pub const DEFAULT_TIME_UPDATE_INTERVAL_MS: u64 = 250;

/// Fastest accepted time update interval.
pub const MIN_TIME_UPDATE_INTERVAL_MS: u64 = 50;

/// Slowest accepted time update interval.
pub const MAX_TIME_UPDATE_INTERVAL_MS: u64 = 1000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_TRIGGER_WINDOW_SECS > 0.0);
    assert!(MAX_TRIGGER_WINDOW_SECS >= MIN_TRIGGER_WINDOW_SECS);
    assert!(DEFAULT_TRIGGER_WINDOW_SECS >= MIN_TRIGGER_WINDOW_SECS);
    assert!(DEFAULT_TRIGGER_WINDOW_SECS <= MAX_TRIGGER_WINDOW_SECS);

    assert!(MIN_TIME_UPDATE_INTERVAL_MS > 0);
    assert!(MAX_TIME_UPDATE_INTERVAL_MS >= MIN_TIME_UPDATE_INTERVAL_MS);
    assert!(DEFAULT_TIME_UPDATE_INTERVAL_MS >= MIN_TIME_UPDATE_INTERVAL_MS);
    assert!(DEFAULT_TIME_UPDATE_INTERVAL_MS <= MAX_TIME_UPDATE_INTERVAL_MS);

    // A question must not slip between two updates at the default cadence
    assert!((DEFAULT_TIME_UPDATE_INTERVAL_MS as f64) / 1000.0 < DEFAULT_TRIGGER_WINDOW_SECS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_window_defaults_are_valid() {
        assert_eq!(DEFAULT_TRIGGER_WINDOW_SECS, 1.0);
        assert!(DEFAULT_TRIGGER_WINDOW_SECS >= MIN_TRIGGER_WINDOW_SECS);
        assert!(DEFAULT_TRIGGER_WINDOW_SECS <= MAX_TRIGGER_WINDOW_SECS);
    }

    #[test]
    fn time_update_defaults_are_valid() {
        assert_eq!(DEFAULT_TIME_UPDATE_INTERVAL_MS, 250);
        assert!(DEFAULT_TIME_UPDATE_INTERVAL_MS >= MIN_TIME_UPDATE_INTERVAL_MS);
        assert!(DEFAULT_TIME_UPDATE_INTERVAL_MS <= MAX_TIME_UPDATE_INTERVAL_MS);
    }
}
