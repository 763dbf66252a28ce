// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::{VideoMetadata, VideoSource};
use crate::ui::{player, question_dialog, results_dialog};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. Component messages are
/// forwarded through their own variants.
#[derive(Debug, Clone)]
pub enum Message {
    Player(player::Message),
    Question(question_dialog::Message),
    Results(results_dialog::Message),
    /// Periodic playback time update while playing.
    TimeUpdate(Instant),
    /// Probing of a video source finished.
    VideoProbed(VideoSource, Result<VideoMetadata, Error>),
    OpenVideoDialogResult(Option<PathBuf>),
    OpenQuizDialogResult(Option<PathBuf>),
    DismissError,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Video path or URL to play.
    pub video: Option<String>,
    /// Quiz file replacing the built-in questions.
    pub quiz_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_QUIZ_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
