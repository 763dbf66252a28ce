// SPDX-License-Identifier: MPL-2.0
//! Wall-clock media source.
//!
//! While playing, the position is the position at the last start plus the
//! time elapsed since. Every `_at` method takes the current instant
//! explicitly so transitions can be tested without sleeping.

use super::{MediaSource, PlaybackState};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Anchor {
    /// Playing since `started_at`, which corresponded to `from`.
    Running { started_at: Instant, from: Duration },
    /// Not advancing.
    Halted { at: Duration },
}

/// A media source whose position follows the system clock.
#[derive(Debug, Clone)]
pub struct PlaybackClock {
    duration: Duration,
    anchor: Anchor,
    state: PlaybackState,
}

impl PlaybackClock {
    /// Creates a stopped clock for media of the given duration.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            anchor: Anchor::Halted { at: Duration::ZERO },
            state: PlaybackState::Stopped,
        }
    }

    pub fn play_at(&mut self, now: Instant) {
        let from = match self.state {
            PlaybackState::Playing => return,
            PlaybackState::Ended => Duration::ZERO,
            PlaybackState::Stopped | PlaybackState::Paused => self.position_at(now),
        };
        if from >= self.duration {
            // Nothing left to play
            self.anchor = Anchor::Halted { at: self.duration };
            self.state = PlaybackState::Ended;
            return;
        }
        self.anchor = Anchor::Running {
            started_at: now,
            from,
        };
        self.state = PlaybackState::Playing;
    }

    pub fn pause_at(&mut self, now: Instant) {
        if !self.state.is_playing() {
            return;
        }
        let at = self.position_at(now);
        self.anchor = Anchor::Halted { at };
        self.state = if at >= self.duration {
            PlaybackState::Ended
        } else {
            PlaybackState::Paused
        };
    }

    pub fn seek_at(&mut self, position: Duration, now: Instant) {
        let target = position.min(self.duration);
        if self.state.is_playing() && target < self.duration {
            self.anchor = Anchor::Running {
                started_at: now,
                from: target,
            };
            return;
        }
        self.anchor = Anchor::Halted { at: target };
        self.state = if target >= self.duration {
            PlaybackState::Ended
        } else if self.state == PlaybackState::Stopped && target.is_zero() {
            PlaybackState::Stopped
        } else {
            PlaybackState::Paused
        };
    }

    /// Position at `now`, clamped to the duration. Does not change state.
    #[must_use]
    pub fn position_at(&self, now: Instant) -> Duration {
        match self.anchor {
            Anchor::Running { started_at, from } => {
                from
                    .saturating_add(now.saturating_duration_since(started_at))
                    .min(self.duration)
            }
            Anchor::Halted { at } => at,
        }
    }

    /// Reads the position at `now` and switches to `Ended` once the
    /// duration is reached.
    pub fn tick_at(&mut self, now: Instant) -> Duration {
        let position = self.position_at(now);
        if self.state.is_playing() && position >= self.duration {
            self.anchor = Anchor::Halted { at: self.duration };
            self.state = PlaybackState::Ended;
        }
        position
    }
}

impl MediaSource for PlaybackClock {
    fn play(&mut self) {
        self.play_at(Instant::now());
    }

    fn pause(&mut self) {
        self.pause_at(Instant::now());
    }

    fn seek(&mut self, position: Duration) {
        self.seek_at(position, Instant::now());
    }

    fn current_time(&mut self) -> Duration {
        self.tick_at(Instant::now())
    }

    fn duration(&self) -> Duration {
        self.duration
    }

    fn state(&self) -> PlaybackState {
        self.state
    }
}
