// SPDX-License-Identifier: MPL-2.0
//! End-of-video results summary.

use super::Question;

/// How an option is highlighted in the results summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    /// The correct option, always highlighted.
    Correct,
    /// The wrong option the user picked.
    WrongChoice,
    Neutral,
}

/// One option line of the summary.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionSummary {
    /// 1-based position in the question's option list.
    pub number: usize,
    pub text: String,
    pub mark: OptionMark,
}

/// One question of the summary.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionSummary {
    pub prompt: String,
    pub options: Vec<OptionSummary>,
    pub attempted: bool,
    /// `None` when the question was never answered.
    pub answered_correctly: Option<bool>,
}

fn mark_option(question: &Question, option: &str) -> OptionMark {
    if question.is_correct(option) {
        OptionMark::Correct
    } else if question.is_attempted() && question.answer() == Some(option) {
        OptionMark::WrongChoice
    } else {
        OptionMark::Neutral
    }
}

/// Builds the summary for every question, attempted or not.
pub fn summarize(questions: &[Question]) -> Vec<QuestionSummary> {
    questions
        .iter()
        .map(|question| QuestionSummary {
            prompt: question.prompt().to_string(),
            options: question
                .options()
                .iter()
                .enumerate()
                .map(|(index, option)| OptionSummary {
                    number: index + 1,
                    text: option.clone(),
                    mark: mark_option(question, option),
                })
                .collect(),
            attempted: question.is_attempted(),
            answered_correctly: question.answered_correctly(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::default_questions;

    fn marks(summary: &QuestionSummary) -> Vec<OptionMark> {
        summary.options.iter().map(|o| o.mark).collect()
    }

    #[test]
    fn unattempted_question_highlights_only_correct_option() {
        let summary = summarize(&default_questions());
        assert_eq!(
            marks(&summary[0]),
            vec![OptionMark::Correct, OptionMark::Neutral, OptionMark::Neutral]
        );
        assert!(!summary[0].attempted);
        assert_eq!(summary[0].answered_correctly, None);
    }

    #[test]
    fn correct_answer_highlights_only_correct_option() {
        let mut questions = default_questions();
        questions[1].record_answer("4");

        let summary = summarize(&questions);
        assert_eq!(
            marks(&summary[1]),
            vec![OptionMark::Neutral, OptionMark::Correct, OptionMark::Neutral]
        );
        assert_eq!(summary[1].answered_correctly, Some(true));
    }

    #[test]
    fn wrong_answer_marks_user_choice() {
        let mut questions = default_questions();
        questions[0].record_answer("Berlin");

        let summary = summarize(&questions);
        assert_eq!(
            marks(&summary[0]),
            vec![OptionMark::Correct, OptionMark::Neutral, OptionMark::WrongChoice]
        );
        assert_eq!(summary[0].answered_correctly, Some(false));
    }

    #[test]
    fn options_are_numbered_from_one() {
        let summary = summarize(&default_questions());
        let numbers: Vec<usize> = summary[0].options.iter().map(|o| o.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(summary[0].options[0].text, "Paris");
    }
}
