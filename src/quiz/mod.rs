// SPDX-License-Identifier: MPL-2.0
//! Multiple-choice questions attached to points in a video.
//!
//! - [`Question`]: one MCQ with its trigger time and the user's answer
//! - [`session::QuizSession`]: state machine driven by time updates and clicks
//! - [`results`]: end-of-video summary
//! - [`file`]: loading a question bank from a TOML quiz file

pub mod file;
pub mod results;
pub mod session;

pub use file::QuizFile;
pub use results::{OptionMark, QuestionSummary};
pub use session::{AnswerPolicy, Feedback, PlayerCommand, QuizSession};

/// Sample clip played when no video is given on the command line.
pub const DEFAULT_VIDEO_URL: &str =
    "https://videos.pexels.com/video-files/1536315/1536315-hd_1920_1080_30fps.mp4";

/// A multiple-choice question shown when playback reaches `time_secs`.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct: String,
    time_secs: f64,
    attempted: bool,
    answer: Option<String>,
}

impl Question {
    /// Creates an unattempted question.
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        correct: impl Into<String>,
        time_secs: f64,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            options,
            correct: correct.into(),
            time_secs,
            attempted: false,
            answer: None,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct(&self) -> &str {
        &self.correct
    }

    pub fn time_secs(&self) -> f64 {
        self.time_secs
    }

    pub fn is_attempted(&self) -> bool {
        self.attempted
    }

    /// The option the user picked last, if any.
    pub fn answer(&self) -> Option<&str> {
        self.answer.as_deref()
    }

    /// Whether `option` is the correct one.
    pub fn is_correct(&self, option: &str) -> bool {
        self.correct == option
    }

    /// `None` until attempted, then whether the recorded answer was right.
    pub fn answered_correctly(&self) -> Option<bool> {
        self.answer.as_deref().map(|answer| self.is_correct(answer))
    }

    /// Whether a time update at `current_secs` falls in
    /// `[time_secs, time_secs + window_secs)`.
    pub fn in_trigger_window(&self, current_secs: f64, window_secs: f64) -> bool {
        current_secs >= self.time_secs && current_secs < self.time_secs + window_secs
    }

    /// Marks the question attempted and stores `option` as the answer.
    pub(crate) fn record_answer(&mut self, option: &str) -> Feedback {
        self.attempted = true;
        self.answer = Some(option.to_string());
        Feedback::from_correctness(self.is_correct(option))
    }

    pub(crate) fn reset(&mut self) {
        self.attempted = false;
        self.answer = None;
    }
}

/// The question set seeded when no quiz file is given.
#[must_use]
pub fn default_questions() -> Vec<Question> {
    vec![
        Question::new(
            "What is the capital of France?",
            vec!["Paris".into(), "London".into(), "Berlin".into()],
            "Paris",
            5.0,
        ),
        Question::new(
            "What is 2 + 2?",
            vec!["3".into(), "4".into(), "5".into()],
            "4",
            10.0,
        ),
    ]
}
