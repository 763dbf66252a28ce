// SPDX-License-Identifier: MPL-2.0
//! Time conversions and display formatting for the player.

use std::time::Duration;

/// Converts a seconds value coming from a slider or quiz file to a
/// `Duration`. Negative and non-finite values become zero, values too large
/// for a `Duration` saturate.
///
/// # Examples
///
/// ```
/// use iced_quiz::playback::time_units::secs_to_duration;
/// use std::time::Duration;
///
/// assert_eq!(secs_to_duration(1.5), Duration::from_millis(1500));
/// assert_eq!(secs_to_duration(-3.0), Duration::ZERO);
/// ```
#[must_use]
pub fn secs_to_duration(secs: f64) -> Duration {
    if secs.is_finite() && secs > 0.0 {
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
    } else {
        Duration::ZERO
    }
}

/// Formats a position as `m:ss`, or `h:mm:ss` past the hour.
///
/// # Examples
///
/// ```
/// use iced_quiz::playback::time_units::format_timestamp;
/// use std::time::Duration;
///
/// assert_eq!(format_timestamp(Duration::from_secs(65)), "1:05");
/// ```
#[must_use]
pub fn format_timestamp(position: Duration) -> String {
    let total = position.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}
