// SPDX-License-Identifier: MPL-2.0
//! Popup asking the current question.
//!
//! Options are buttons. Once an answer is recorded the feedback line appears
//! and the continue button becomes active. Whether options stay clickable
//! after the first answer depends on the session's answer policy.

use crate::i18n::fluent::I18n;
use crate::quiz::{Feedback, Question};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, text, Column};
use iced::{alignment::Horizontal, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub question: &'a Question,
    pub feedback: Option<Feedback>,
    pub can_answer: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// An option button was clicked.
    Answer(String),
    /// The continue button or the backdrop was clicked.
    Close,
}

/// Localized feedback line for an answer.
pub fn feedback_text(i18n: &I18n, feedback: Feedback) -> String {
    match feedback {
        Feedback::Correct => i18n.tr("feedback-correct"),
        Feedback::Incorrect => i18n.tr("feedback-incorrect"),
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let options = ctx
        .question
        .options()
        .iter()
        .fold(Column::new().spacing(spacing::XS), |col, option| {
            let label = text(option.as_str()).size(typography::BODY_LG);
            let option_button = button(label)
                .width(Length::Fill)
                .height(sizing::BUTTON_HEIGHT)
                .style(styles::button::primary)
                .on_press_maybe(
                    ctx.can_answer
                        .then(|| Message::Answer(option.clone())),
                );
            col.push(option_button)
        });

    let footer: Element<'_, Message> = match ctx.feedback {
        Some(feedback) => {
            let color = if feedback.is_correct() {
                palette::SUCCESS_500
            } else {
                palette::ERROR_500
            };
            column![
                text(feedback_text(ctx.i18n, feedback))
                    .size(typography::TITLE_SM)
                    .color(color)
                    .width(Length::Fill)
                    .align_x(Horizontal::Center),
                button(text(ctx.i18n.tr("question-close")))
                    .style(styles::button::primary)
                    .on_press(Message::Close),
            ]
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .into()
        }
        None => text(ctx.i18n.tr("question-close-hint"))
            .size(typography::CAPTION)
            .color(palette::GRAY_400)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .into(),
    };

    let content = column![
        text(ctx.question.prompt()).size(typography::TITLE_MD),
        options,
        footer,
    ]
    .spacing(spacing::MD);

    container(content)
        .width(sizing::DIALOG_WIDTH)
        .padding(spacing::XL)
        .style(styles::container::dialog)
        .into()
}
