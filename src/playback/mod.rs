// SPDX-License-Identifier: MPL-2.0
//! Playback control for the quiz player.
//!
//! The quiz never decodes frames. It only needs a media source that reports
//! its position and obeys play/pause/seek, which is what [`MediaSource`]
//! describes. [`clock::PlaybackClock`] implements it against wall-clock time.

pub mod clock;
pub mod time_units;

pub use clock::PlaybackClock;

use std::time::Duration;

/// Playback state of a media source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Nothing played yet, position is zero.
    #[default]
    Stopped,
    Playing,
    Paused,
    /// Position reached the duration.
    Ended,
}

impl PlaybackState {
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }
}

/// Port for anything that plays media and reports its position.
///
/// Methods are synchronous; they are called from the UI update loop.
pub trait MediaSource {
    /// Starts or resumes playback. Restarts from zero when ended.
    fn play(&mut self);

    /// Pauses at the current position.
    fn pause(&mut self);

    /// Moves to `position`, clamped to the duration. Keeps playing if playing.
    fn seek(&mut self, position: Duration);

    /// Current playback position.
    fn current_time(&mut self) -> Duration;

    /// Total duration of the media.
    fn duration(&self) -> Duration;

    /// Current state, updated lazily when the position is read.
    fn state(&self) -> PlaybackState;
}

#[cfg(test)]
mod tests {
    use super::*;

    // The port must stay usable behind a trait object
    fn _assert_object_safe(_: &dyn MediaSource) {}

    #[test]
    fn default_is_stopped() {
        assert_eq!(PlaybackState::default(), PlaybackState::Stopped);
    }

    #[test]
    fn state_checks() {
        assert!(PlaybackState::Playing.is_playing());
        assert!(!PlaybackState::Paused.is_playing());
        assert!(!PlaybackState::Ended.is_playing());
    }
}
