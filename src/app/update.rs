// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Handlers receive the whole `App` and return the follow-up task. Every
//! change of playback position goes through [`handle_time_update`] so the
//! quiz session sees seeks exactly like periodic updates.

use super::{App, Message};
use crate::error::Result;
use crate::media::{VideoMetadata, VideoSource};
use crate::playback::time_units::secs_to_duration;
use crate::quiz::PlayerCommand;
use crate::ui::{player, question_dialog, results_dialog};
use iced::Task;
use std::path::PathBuf;

const VIDEO_EXTENSIONS: [&str; 6] = ["mp4", "mkv", "webm", "mov", "avi", "m4v"];
const QUIZ_EXTENSIONS: [&str; 1] = ["toml"];

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Player(message) => handle_player_message(app, message),
        Message::Question(message) => {
            handle_question_message(app, message);
            Task::none()
        }
        Message::Results(results_dialog::Message::Close) => {
            app.session.dismiss_results();
            Task::none()
        }
        Message::TimeUpdate(_) => {
            handle_time_update(app);
            Task::none()
        }
        Message::VideoProbed(source, result) => {
            handle_video_probed(app, source, result);
            Task::none()
        }
        Message::OpenVideoDialogResult(Some(path)) => app.load_video(VideoSource::File(path)),
        Message::OpenQuizDialogResult(Some(path)) => handle_quiz_selected(app, path),
        Message::OpenVideoDialogResult(None) | Message::OpenQuizDialogResult(None) => Task::none(),
        Message::DismissError => {
            app.error_key = None;
            Task::none()
        }
    }
}

fn handle_player_message(app: &mut App, message: player::Message) -> Task<Message> {
    match message {
        player::Message::TogglePlayback => {
            handle_toggle_playback(app);
            Task::none()
        }
        player::Message::SeekPreview(secs) => {
            app.player.seek_preview = Some(secs);
            Task::none()
        }
        player::Message::SeekCommit => {
            handle_seek_commit(app);
            Task::none()
        }
        player::Message::OpenVideo => open_file_dialog(
            "Video",
            &VIDEO_EXTENSIONS,
            Message::OpenVideoDialogResult,
        ),
        player::Message::OpenQuiz => {
            open_file_dialog("Quiz", &QUIZ_EXTENSIONS, Message::OpenQuizDialogResult)
        }
    }
}

fn handle_question_message(app: &mut App, message: question_dialog::Message) {
    match message {
        question_dialog::Message::Answer(option) => {
            // Ignored when the popup is closed or the answer is locked
            let _ = app.session.submit_answer(&option);
        }
        question_dialog::Message::Close => {
            if let Some(command) = app.session.close_question() {
                log::debug!("Resuming playback after question");
                apply_command(app, command);
            }
        }
    }
}

/// Reads the media position and lets the session react to it.
///
/// Does nothing while no media is loaded.
fn handle_time_update(app: &mut App) {
    let Some(media) = app.player.media.as_mut() else {
        return;
    };
    let position = media.current_time();
    let duration = media.duration();
    app.player.position = position;

    if let Some(command) = app
        .session
        .on_time_update(position.as_secs_f64(), duration.as_secs_f64())
    {
        apply_command(app, command);
    }
}

fn apply_command(app: &mut App, command: PlayerCommand) {
    let Some(media) = app.player.media.as_mut() else {
        return;
    };
    match command {
        PlayerCommand::Pause => media.pause(),
        PlayerCommand::Play => media.play(),
    }
}

fn handle_toggle_playback(app: &mut App) {
    if app.session.is_paused_for_question() {
        return;
    }
    let Some(media) = app.player.media.as_mut() else {
        return;
    };
    if media.state().is_playing() {
        media.pause();
    } else {
        media.play();
        handle_time_update(app);
    }
}

fn handle_seek_commit(app: &mut App) {
    let Some(secs) = app.player.seek_preview.take() else {
        return;
    };
    let Some(media) = app.player.media.as_mut() else {
        return;
    };
    media.seek(secs_to_duration(secs));
    handle_time_update(app);
}

fn handle_video_probed(app: &mut App, source: VideoSource, result: Result<VideoMetadata>) {
    if app.player.source.as_ref() != Some(&source) {
        log::debug!("Ignoring probe result for {source}, another video was opened");
        return;
    }
    app.player.loading = false;

    match result {
        Ok(meta) => {
            log::info!(
                "Probed {source}: {}x{}, {:.2}s",
                meta.width,
                meta.height,
                meta.duration.as_secs_f64()
            );
            app.player.probed = Some(meta);
        }
        Err(err) => app.show_error(&err),
    }

    app.player.rebuild_media();
    if app.player.autoplay {
        if let Some(media) = app.player.media.as_mut() {
            media.play();
        }
    }
}

fn handle_quiz_selected(app: &mut App, path: PathBuf) -> Task<Message> {
    match app.apply_quiz_file(&path) {
        Ok(Some(video)) => app.load_video(video),
        Ok(None) => {
            // Same video, new questions: start over
            if !app.player.loading {
                app.player.rebuild_media();
            }
            Task::none()
        }
        Err(err) => {
            app.show_error(&err);
            Task::none()
        }
    }
}

fn open_file_dialog(
    filter_name: &'static str,
    extensions: &'static [&'static str],
    on_result: fn(Option<PathBuf>) -> Message,
) -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter(filter_name, extensions)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        on_result,
    )
}
