// SPDX-License-Identifier: MPL-2.0
//! TOML quiz files.
//!
//! ```toml
//! video = "lecture.mp4"
//! duration_secs = 42.0
//!
//! [[questions]]
//! time = 5.0
//! question = "What is the capital of France?"
//! options = ["Paris", "London", "Berlin"]
//! correct = "Paris"
//! ```
//!
//! Question content is taken as written. Only the TOML layout is checked.

use super::Question;
use crate::error::{QuizError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, PartialEq)]
struct QuestionEntry {
    time: f64,
    question: String,
    options: Vec<String>,
    correct: String,
}

/// A parsed quiz file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct QuizFile {
    /// Video path or URL to play with these questions.
    #[serde(default)]
    pub video: Option<String>,

    /// Duration to use instead of the probed one.
    #[serde(default)]
    pub duration_secs: Option<f64>,

    #[serde(default)]
    questions: Vec<QuestionEntry>,
}

impl QuizFile {
    /// Parses a quiz file from its TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        let file: QuizFile =
            toml::from_str(content).map_err(|e| QuizError::Parse(e.message().to_string()))?;
        if file.questions.is_empty() {
            log::warn!("Quiz file has no questions, the video plays without stops");
        }
        file.warn_duplicate_times();
        Ok(file)
    }

    /// Reads and parses a quiz file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Builds fresh, unattempted questions in file order.
    pub fn questions(&self) -> Vec<Question> {
        self.questions
            .iter()
            .map(|entry| {
                Question::new(
                    entry.question.clone(),
                    entry.options.clone(),
                    entry.correct.clone(),
                    entry.time,
                )
            })
            .collect()
    }

    fn warn_duplicate_times(&self) {
        for (index, entry) in self.questions.iter().enumerate() {
            if self.questions[..index].iter().any(|prev| prev.time == entry.time) {
                log::warn!(
                    "Quiz file has several questions at {}s, they open one after another",
                    entry.time
                );
            }
        }
    }
}
