// SPDX-License-Identifier: MPL-2.0
//! `iced_quiz` is a video player that pauses at set timestamps to ask
//! multiple-choice questions, built with the Iced GUI framework.
//!
//! The quiz logic lives in [`quiz`] and is driven by time updates from a
//! [`playback::MediaSource`]. Settings come from a TOML file and the
//! interface is localized with Fluent.

#![doc(html_root_url = "https://docs.rs/iced_quiz/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod playback;
pub mod quiz;
pub mod ui;
