// SPDX-License-Identifier: MPL-2.0
//! Quiz state machine.
//!
//! The session owns the question bank and the popup flags. It is driven by two
//! kinds of input:
//! - time updates from the media source ([`QuizSession::on_time_update`])
//! - user clicks on options, close buttons and the results dialog
//!
//! Handlers never touch the media source. They return a [`PlayerCommand`]
//! that the caller applies.

use super::results::{summarize, QuestionSummary};
use super::Question;
use crate::config::DEFAULT_TRIGGER_WINDOW_SECS;
use serde::{Deserialize, Serialize};

/// Whether a question can be answered again while its popup is still open.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AnswerPolicy {
    /// The first answer sticks; option buttons are disabled afterwards.
    #[default]
    LockAfterFirst,
    /// Every click replaces the recorded answer.
    AllowRetry,
}

/// Immediate feedback for the last submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect,
}

impl Feedback {
    pub fn from_correctness(correct: bool) -> Self {
        if correct {
            Self::Correct
        } else {
            Self::Incorrect
        }
    }

    pub fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Incorrect => "incorrect",
        }
    }
}

/// Playback side effect requested by a session transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    Pause,
    Play,
}

/// Tunables applied to a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionOptions {
    pub trigger_window_secs: f64,
    pub answer_policy: AnswerPolicy,
    pub show_results: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            trigger_window_secs: DEFAULT_TRIGGER_WINDOW_SECS,
            answer_policy: AnswerPolicy::default(),
            show_results: true,
        }
    }
}

/// Interactive quiz state for one video.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    options: SessionOptions,
    /// Index into `questions` of the question last triggered.
    current: Option<usize>,
    question_visible: bool,
    paused_for_question: bool,
    ended: bool,
    results_visible: bool,
    feedback: Option<Feedback>,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>, options: SessionOptions) -> Self {
        Self {
            questions,
            options,
            current: None,
            question_visible: false,
            paused_for_question: false,
            ended: false,
            results_visible: false,
            feedback: None,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn options(&self) -> SessionOptions {
        self.options
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current.and_then(|index| self.questions.get(index))
    }

    pub fn is_question_visible(&self) -> bool {
        self.question_visible
    }

    pub fn is_paused_for_question(&self) -> bool {
        self.paused_for_question
    }

    pub fn has_ended(&self) -> bool {
        self.ended
    }

    pub fn is_results_visible(&self) -> bool {
        self.results_visible
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    /// Whether option buttons of the open question accept clicks.
    pub fn can_answer(&self) -> bool {
        match self.current_question() {
            Some(question) if self.question_visible => match self.options.answer_policy {
                AnswerPolicy::LockAfterFirst => !question.is_attempted(),
                AnswerPolicy::AllowRetry => true,
            },
            _ => false,
        }
    }

    /// Handles a playback time update.
    ///
    /// Opens the first unattempted question whose trigger window contains
    /// `current_secs` unless a question is already showing, and tracks the
    /// end of the video. A `NaN` duration (unknown) never counts as ended.
    pub fn on_time_update(&mut self, current_secs: f64, duration_secs: f64) -> Option<PlayerCommand> {
        let mut command = None;

        if !self.question_visible {
            let window = self.options.trigger_window_secs;
            let triggered = self
                .questions
                .iter()
                .position(|q| !q.is_attempted() && q.in_trigger_window(current_secs, window));

            if let Some(index) = triggered {
                log::debug!(
                    "Question {} triggered at {:.2}s",
                    index,
                    current_secs
                );
                self.current = Some(index);
                self.question_visible = true;
                self.paused_for_question = true;
                command = Some(PlayerCommand::Pause);
            }
        }

        if current_secs >= duration_secs {
            if !self.ended {
                log::debug!("Playback reached the end at {:.2}s", current_secs);
            }
            self.ended = true;
            if self.options.show_results {
                self.results_visible = true;
            }
        } else {
            self.ended = false;
            self.results_visible = false;
        }

        command
    }

    /// Records `option` as the answer to the open question.
    ///
    /// Returns the feedback, or `None` when no question is open or the
    /// policy locks further answers.
    pub fn submit_answer(&mut self, option: &str) -> Option<Feedback> {
        if !self.can_answer() {
            return None;
        }
        let question = self.current.and_then(|index| self.questions.get_mut(index))?;
        let feedback = question.record_answer(option);
        log::debug!("Answered {:?}: {}", question.prompt(), feedback.as_str());
        self.feedback = Some(feedback);
        Some(feedback)
    }

    /// Requests closing the question popup.
    ///
    /// Without an answer this is a no-op and the popup stays open. After an
    /// answer the popup closes and playback resumes.
    pub fn close_question(&mut self) -> Option<PlayerCommand> {
        if !self.question_visible || self.feedback.is_none() {
            return None;
        }
        self.feedback = None;
        self.paused_for_question = false;
        self.question_visible = false;
        Some(PlayerCommand::Play)
    }

    /// Closes the results summary and returns to the idle baseline.
    pub fn dismiss_results(&mut self) {
        self.ended = false;
        self.results_visible = false;
        self.current = None;
    }

    /// One summary entry per question, in trigger order of the bank.
    pub fn results(&self) -> Vec<QuestionSummary> {
        summarize(&self.questions)
    }

    /// Number of correct answers and number of questions.
    pub fn score(&self) -> (usize, usize) {
        let correct = self
            .questions
            .iter()
            .filter(|q| q.answered_correctly() == Some(true))
            .count();
        (correct, self.questions.len())
    }

    /// Forgets every answer and popup, as on a fresh load of the same quiz.
    pub fn reset(&mut self) {
        for question in &mut self.questions {
            question.reset();
        }
        self.current = None;
        self.question_visible = false;
        self.paused_for_question = false;
        self.ended = false;
        self.results_visible = false;
        self.feedback = None;
    }
}
