// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between playback and the quiz.
//!
//! The `App` struct wires the quiz session to a media source and translates
//! messages into side effects like probing a video or opening a file dialog.
//! Every time update from the media source is fed to the session, and the
//! pause/play commands it answers with are applied back to the source.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{
    self, MAX_TIME_UPDATE_INTERVAL_MS, MAX_TRIGGER_WINDOW_SECS, MIN_TIME_UPDATE_INTERVAL_MS,
    MIN_TRIGGER_WINDOW_SECS,
};
use crate::error::{Error, Result};
use crate::i18n::fluent::I18n;
use crate::media::{self, VideoMetadata, VideoSource};
use crate::playback::time_units::secs_to_duration;
use crate::playback::{MediaSource, PlaybackClock};
use crate::quiz::session::SessionOptions;
use crate::quiz::{self, QuizFile, QuizSession};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Playback-side state: the loaded source and the clock standing in for it.
pub(crate) struct PlayerState {
    media: Option<Box<dyn MediaSource>>,
    source: Option<VideoSource>,
    probed: Option<VideoMetadata>,
    /// Duration from the quiz file, preferred over the probed one.
    duration_override: Option<Duration>,
    loading: bool,
    /// Last position reported by the media source.
    position: Duration,
    /// Slider value while dragging, in seconds.
    seek_preview: Option<f64>,
    autoplay: bool,
    time_update_interval: Duration,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            media: None,
            source: None,
            probed: None,
            duration_override: None,
            loading: false,
            position: Duration::ZERO,
            seek_preview: None,
            autoplay: false,
            time_update_interval: Duration::from_millis(config::DEFAULT_TIME_UPDATE_INTERVAL_MS),
        }
    }
}

impl PlayerState {
    /// Duration from the quiz file, else from probing.
    fn effective_duration(&self) -> Option<Duration> {
        self.duration_override
            .or_else(|| self.probed.as_ref().map(|meta| meta.duration))
    }

    fn is_playing(&self) -> bool {
        self.media
            .as_ref()
            .is_some_and(|media| media.state().is_playing())
    }

    /// Replaces the media source with a fresh stopped clock, or drops it
    /// when no duration is known.
    fn rebuild_media(&mut self) {
        self.position = Duration::ZERO;
        self.seek_preview = None;
        self.media = self
            .effective_duration()
            .map(|duration| Box::new(PlaybackClock::new(duration)) as Box<dyn MediaSource>);
    }
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    session: QuizSession,
    player: PlayerState,
    /// i18n key of the error shown in the banner.
    error_key: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("source", &self.player.source)
            .field("position", &self.player.position)
            .field("loading", &self.player.loading)
            .field("questions", &self.session.questions().len())
            .field("error_key", &self.error_key)
            .finish()
    }
}

fn clamp_trigger_window(value: f64) -> f64 {
    if value.is_nan() {
        return config::DEFAULT_TRIGGER_WINDOW_SECS;
    }
    value.clamp(MIN_TRIGGER_WINDOW_SECS, MAX_TRIGGER_WINDOW_SECS)
}

fn clamp_time_update_interval(value: u64) -> u64 {
    value.clamp(MIN_TIME_UPDATE_INTERVAL_MS, MAX_TIME_UPDATE_INTERVAL_MS)
}

/// Time update cadence from the `[playback]` section, clamped to its bounds.
fn time_update_interval(config: &config::Config) -> Duration {
    Duration::from_millis(clamp_time_update_interval(
        config
            .playback
            .time_update_interval_ms
            .unwrap_or(config::DEFAULT_TIME_UPDATE_INTERVAL_MS),
    ))
}

/// Session tunables from the `[quiz]` section, clamped to their bounds.
///
/// The trigger window is never shorter than `interval`, or a
/// question could fall between two updates and never open.
fn session_options(config: &config::Config, interval: Duration) -> SessionOptions {
    let defaults = SessionOptions::default();
    let mut trigger_window_secs = clamp_trigger_window(
        config
            .quiz
            .trigger_window_secs
            .unwrap_or(defaults.trigger_window_secs),
    );
    let interval_secs = interval.as_secs_f64();
    if trigger_window_secs < interval_secs {
        log::warn!(
            "Trigger window of {trigger_window_secs:.2}s is shorter than the \
             {interval_secs:.2}s time update interval, widening it to {interval_secs:.2}s"
        );
        trigger_window_secs = interval_secs;
    }

    SessionOptions {
        trigger_window_secs,
        answer_policy: config.quiz.answer_policy.unwrap_or(defaults.answer_policy),
        show_results: config.quiz.show_results.unwrap_or(defaults.show_results),
    }
}

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(960.0, 640.0),
        min_size: Some(iced::Size::new(640.0, 420.0)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants a `Fn` boot closure while the flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            session: QuizSession::new(quiz::default_questions(), SessionOptions::default()),
            player: PlayerState::default(),
            error_key: None,
        }
    }
}

impl App {
    /// Loads settings and the quiz, then starts probing the video.
    ///
    /// The video comes from the command line, else from the quiz file, else
    /// the built-in sample URL.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = match flags.config_dir.as_deref() {
            Some(dir) => config::load_with_override(Some(PathBuf::from(dir))),
            None => config::load(),
        };
        let i18n = I18n::new(flags.lang.clone(), &config);

        let interval = time_update_interval(&config);
        let mut app = App {
            i18n,
            session: QuizSession::new(
                quiz::default_questions(),
                session_options(&config, interval),
            ),
            error_key: config_warning,
            ..Self::default()
        };
        app.player.autoplay = config.playback.autoplay.unwrap_or(false);
        app.player.time_update_interval = interval;

        let mut quiz_video = None;
        if let Some(quiz_path) = flags.quiz_path.as_deref() {
            match app.apply_quiz_file(Path::new(quiz_path)) {
                Ok(video) => quiz_video = video,
                Err(err) => app.show_error(&err),
            }
        }

        let source = flags
            .video
            .as_deref()
            .map(VideoSource::from_arg)
            .or(quiz_video)
            .unwrap_or_else(|| VideoSource::from_arg(quiz::DEFAULT_VIDEO_URL));

        let task = app.load_video(source);
        (app, task)
    }

    /// Replaces the question bank with the quiz at `path`.
    ///
    /// Returns the video the quiz names, resolved against the quiz file's
    /// directory. On failure the current bank stays untouched.
    fn apply_quiz_file(&mut self, path: &Path) -> Result<Option<VideoSource>> {
        let file = QuizFile::load(path)?;
        let questions = file.questions();
        log::info!(
            "Loaded {} questions from {}",
            questions.len(),
            path.display()
        );
        self.session = QuizSession::new(questions, self.session.options());
        self.player.duration_override = file
            .duration_secs
            .filter(|secs| secs.is_finite() && *secs > 0.0)
            .map(secs_to_duration);

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(file
            .video
            .as_deref()
            .map(|video| VideoSource::from_arg(video).relative_to(base)))
    }

    /// Logs `err` and shows its localized message in the error banner.
    fn show_error(&mut self, err: &Error) {
        log::error!("{err}");
        self.error_key = Some(err.i18n_key().to_string());
    }

    /// Resets the session and probes `source` on a blocking thread.
    fn load_video(&mut self, source: VideoSource) -> Task<Message> {
        log::info!("Loading video {source}");
        self.session.reset();
        self.player.media = None;
        self.player.probed = None;
        self.player.position = Duration::ZERO;
        self.player.seek_preview = None;
        self.player.loading = true;
        self.player.source = Some(source.clone());

        Task::perform(
            async move {
                let probe_source = source.clone();
                let result = tokio::task::spawn_blocking(move || media::probe(&probe_source))
                    .await
                    .map_err(|e| Error::Io(e.to_string()))
                    .and_then(|result| result);
                (source, result)
            },
            |(source, result)| Message::VideoProbed(source, result),
        )
    }

    fn title(&self) -> String {
        match &self.player.source {
            Some(source) if !self.player.loading => {
                let name = source.display_name();
                self.i18n
                    .tr_with_args("window-title-with-video", &[("name", name.as_str())])
            }
            _ => self.i18n.tr("app-title"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_keyboard_subscription(),
            subscription::create_time_update_subscription(
                self.player.is_playing(),
                self.player.time_update_interval,
            ),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::PlaybackState;
    use crate::quiz::Feedback;
    use crate::ui::{player, question_dialog, results_dialog};
    use approx::assert_abs_diff_eq;
    use std::cell::Cell;
    use std::io::Write;
    use std::rc::Rc;
    use std::time::Instant;

    /// Media source whose position is set by the test.
    #[derive(Clone)]
    struct FakeMedia {
        position: Rc<Cell<Duration>>,
        state: Rc<Cell<PlaybackState>>,
        duration: Duration,
    }

    impl FakeMedia {
        fn new(duration_secs: u64) -> Self {
            Self {
                position: Rc::new(Cell::new(Duration::ZERO)),
                state: Rc::new(Cell::new(PlaybackState::Stopped)),
                duration: Duration::from_secs(duration_secs),
            }
        }

        fn set_position(&self, secs: f64) {
            self.position.set(secs_to_duration(secs));
        }
    }

    impl MediaSource for FakeMedia {
        fn play(&mut self) {
            self.state.set(PlaybackState::Playing);
        }

        fn pause(&mut self) {
            self.state.set(PlaybackState::Paused);
        }

        fn seek(&mut self, position: Duration) {
            self.position.set(position.min(self.duration));
        }

        fn current_time(&mut self) -> Duration {
            self.position.get()
        }

        fn duration(&self) -> Duration {
            self.duration
        }

        fn state(&self) -> PlaybackState {
            self.state.get()
        }
    }

    fn app_with_fake_media(duration_secs: u64) -> (App, FakeMedia) {
        let media = FakeMedia::new(duration_secs);
        let mut app = App::default();
        app.player.source = Some(VideoSource::from_arg("lecture.mp4"));
        app.player.duration_override = Some(Duration::from_secs(duration_secs));
        app.player.media = Some(Box::new(media.clone()));
        (app, media)
    }

    fn tick(app: &mut App, media: &FakeMedia, secs: f64) {
        media.set_position(secs);
        let _ = app.update(Message::TimeUpdate(Instant::now()));
    }

    #[test]
    fn default_app_has_builtin_questions_and_no_media() {
        let app = App::default();
        assert_eq!(app.session.questions().len(), 2);
        assert!(app.player.media.is_none());
        assert!(!app.player.is_playing());
    }

    #[test]
    fn time_update_without_media_is_ignored() {
        let mut app = App::default();
        let _ = app.update(Message::TimeUpdate(Instant::now()));
        assert!(!app.session.is_question_visible());
        assert_eq!(app.player.position, Duration::ZERO);
    }

    #[test]
    fn question_pauses_media_and_answer_resumes_it() {
        let (mut app, media) = app_with_fake_media(20);
        let _ = app.update(Message::Player(player::Message::TogglePlayback));
        assert_eq!(media.state(), PlaybackState::Playing);

        tick(&mut app, &media, 5.2);
        assert!(app.session.is_question_visible());
        assert_eq!(media.state(), PlaybackState::Paused);

        let _ = app.update(Message::Question(question_dialog::Message::Answer(
            "Paris".into(),
        )));
        assert_eq!(app.session.feedback(), Some(Feedback::Correct));
        assert_eq!(media.state(), PlaybackState::Paused);

        let _ = app.update(Message::Question(question_dialog::Message::Close));
        assert!(!app.session.is_question_visible());
        assert_eq!(media.state(), PlaybackState::Playing);
    }

    #[test]
    fn toggle_is_ignored_while_paused_for_question() {
        let (mut app, media) = app_with_fake_media(20);
        let _ = app.update(Message::Player(player::Message::TogglePlayback));
        tick(&mut app, &media, 5.0);
        assert_eq!(media.state(), PlaybackState::Paused);

        let _ = app.update(Message::Player(player::Message::TogglePlayback));
        assert_eq!(media.state(), PlaybackState::Paused);
    }

    #[test]
    fn closing_without_answer_keeps_media_paused() {
        let (mut app, media) = app_with_fake_media(20);
        let _ = app.update(Message::Player(player::Message::TogglePlayback));
        tick(&mut app, &media, 10.5);

        let _ = app.update(Message::Question(question_dialog::Message::Close));
        assert!(app.session.is_question_visible());
        assert_eq!(media.state(), PlaybackState::Paused);
    }

    #[test]
    fn seek_commit_runs_an_immediate_time_update() {
        let (mut app, media) = app_with_fake_media(20);
        let _ = app.update(Message::Player(player::Message::SeekPreview(10.2)));
        let _ = app.update(Message::Player(player::Message::SeekCommit));

        assert_abs_diff_eq!(app.player.position.as_secs_f64(), 10.2, epsilon = 1e-6);
        assert!(app.player.seek_preview.is_none());
        assert_eq!(app.session.current_question().map(|q| q.correct()), Some("4"));
        assert_eq!(media.state(), PlaybackState::Paused);
    }

    #[test]
    fn reaching_the_end_shows_results_and_close_dismisses_them() {
        let (mut app, media) = app_with_fake_media(20);
        tick(&mut app, &media, 20.0);
        assert!(app.session.has_ended());
        assert!(app.session.is_results_visible());

        let _ = app.update(Message::Results(results_dialog::Message::Close));
        assert!(!app.session.has_ended());
        assert!(!app.session.is_results_visible());
    }

    #[test]
    fn probe_failure_sets_error_and_falls_back_to_quiz_duration() {
        let mut app = App::default();
        app.player.duration_override = Some(Duration::from_secs(30));
        let source = VideoSource::from_arg("missing.mp4");
        app.player.source = Some(source.clone());
        app.player.loading = true;

        let error = Error::Video(crate::error::VideoError::NoVideoStream);
        let _ = app.update(Message::VideoProbed(source, Err(error)));

        assert!(!app.player.loading);
        assert_eq!(app.error_key.as_deref(), Some("error-load-video-no-video-stream"));
        assert_eq!(
            app.player.media.as_ref().map(|m| m.duration()),
            Some(Duration::from_secs(30))
        );

        let _ = app.update(Message::DismissError);
        assert!(app.error_key.is_none());
    }

    #[test]
    fn probe_success_builds_clock_and_autoplays() {
        let mut app = App::default();
        app.player.autoplay = true;
        let source = VideoSource::from_arg("clip.mp4");
        app.player.source = Some(source.clone());
        app.player.loading = true;

        let meta = VideoMetadata {
            width: 640,
            height: 360,
            duration: Duration::from_secs(12),
        };
        let _ = app.update(Message::VideoProbed(source, Ok(meta)));

        assert!(!app.player.loading);
        assert!(app.player.is_playing());
        assert_eq!(app.player.effective_duration(), Some(Duration::from_secs(12)));
    }

    #[test]
    fn stale_probe_result_is_ignored() {
        let mut app = App::default();
        app.player.source = Some(VideoSource::from_arg("current.mp4"));
        app.player.loading = true;

        let meta = VideoMetadata {
            width: 1,
            height: 1,
            duration: Duration::from_secs(5),
        };
        let _ = app.update(Message::VideoProbed(VideoSource::from_arg("old.mp4"), Ok(meta)));
        assert!(app.player.loading);
        assert!(app.player.media.is_none());
    }

    #[test]
    fn quiz_file_replaces_questions_and_resolves_video() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("quiz.toml");
        let mut file = std::fs::File::create(&path).expect("create quiz");
        writeln!(
            file,
            r#"video = "clip.mp4"
duration_secs = 30.0

[[questions]]
time = 3.0
question = "Largest planet?"
options = ["Mars", "Jupiter"]
correct = "Jupiter"
"#
        )
        .expect("write quiz");

        let mut app = App::default();
        let video = app.apply_quiz_file(&path).expect("quiz should load");

        assert_eq!(video, Some(VideoSource::File(dir.path().join("clip.mp4"))));
        assert_eq!(app.session.questions().len(), 1);
        assert_eq!(app.player.duration_override, Some(Duration::from_secs(30)));
    }

    #[test]
    fn broken_quiz_file_keeps_questions_and_sets_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("quiz.toml");
        std::fs::write(&path, "questions = 3").expect("write quiz");

        let mut app = App::default();
        let err = app.apply_quiz_file(&path).expect_err("quiz should be rejected");
        app.show_error(&err);

        assert_eq!(app.session.questions().len(), 2);
        assert_eq!(app.error_key.as_deref(), Some("error-load-quiz-parse"));
    }

    #[test]
    fn title_shows_app_name_without_source() {
        let app = App::default();
        assert_eq!(app.title(), app.i18n.tr("app-title"));
    }

    #[test]
    fn title_shows_source_name_once_loaded() {
        let (app, _media) = app_with_fake_media(10);
        assert!(app.title().contains("lecture.mp4"));
    }

    #[test]
    fn short_trigger_window_is_widened_to_update_interval() {
        let mut config = config::Config::default();
        config.quiz.trigger_window_secs = Some(MIN_TRIGGER_WINDOW_SECS);
        let interval = time_update_interval(&config);

        let options = session_options(&config, interval);
        assert_abs_diff_eq!(options.trigger_window_secs, 0.25);

        // Updates at the default cadence, offset so none lands on a trigger time
        let media = FakeMedia::new(20);
        let mut app = App {
            session: QuizSession::new(quiz::default_questions(), options),
            ..App::default()
        };
        app.player.media = Some(Box::new(media.clone()));
        app.player.time_update_interval = interval;

        let mut opened = Vec::new();
        for step in 0..80 {
            tick(&mut app, &media, 0.15 + 0.25 * f64::from(step));
            let open = app
                .session
                .current_question()
                .filter(|_| app.session.is_question_visible())
                .map(|q| (q.time_secs(), q.correct().to_string()));
            if let Some((time, answer)) = open {
                opened.push(time);
                let _ = app.update(Message::Question(question_dialog::Message::Answer(answer)));
                let _ = app.update(Message::Question(question_dialog::Message::Close));
            }
        }
        assert_eq!(opened, vec![5.0, 10.0]);
    }

    #[test]
    fn trigger_window_longer_than_interval_is_kept() {
        let mut config = config::Config::default();
        config.quiz.trigger_window_secs = Some(2.0);
        config.playback.time_update_interval_ms = Some(500);

        let options = session_options(&config, time_update_interval(&config));
        assert_abs_diff_eq!(options.trigger_window_secs, 2.0);
    }

    #[test]
    fn clamp_helpers_respect_bounds() {
        assert_abs_diff_eq!(clamp_trigger_window(0.0), MIN_TRIGGER_WINDOW_SECS);
        assert_abs_diff_eq!(clamp_trigger_window(99.0), MAX_TRIGGER_WINDOW_SECS);
        assert_abs_diff_eq!(
            clamp_trigger_window(f64::NAN),
            config::DEFAULT_TRIGGER_WINDOW_SECS
        );
        assert_eq!(clamp_time_update_interval(1), MIN_TIME_UPDATE_INTERVAL_MS);
        assert_eq!(clamp_time_update_interval(5_000), MAX_TIME_UPDATE_INTERVAL_MS);
        assert_eq!(clamp_time_update_interval(250), 250);
    }
}
