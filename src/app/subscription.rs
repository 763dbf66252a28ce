// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::player;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Space toggles playback unless a widget already handled the key.
pub fn create_keyboard_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match (event, status) {
        (
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: Key::Named(Named::Space),
                ..
            }),
            event::Status::Ignored,
        ) => Some(Message::Player(player::Message::TogglePlayback)),
        _ => None,
    })
}

/// Time updates at `interval`, only while the media source is playing.
pub fn create_time_update_subscription(is_playing: bool, interval: Duration) -> Subscription<Message> {
    if is_playing {
        time::every(interval).map(Message::TimeUpdate)
    } else {
        Subscription::none()
    }
}
