// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The player is always drawn. The question popup and the results summary
//! are modal layers on top of it, and the error banner sits above both.

use super::{App, Message};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::modal::modal;
use crate::ui::{player, question_dialog, results_dialog, styles};
use iced::widget::{button, column, container, row, text, Space};
use iced::{alignment::Vertical, Element, Length};

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let player_view = player::view(player::ViewContext {
        i18n: &app.i18n,
        title: app
            .player
            .source
            .as_ref()
            .map(|source| source.display_name()),
        loading: app.player.loading,
        position_secs: app.player.position.as_secs_f64(),
        duration_secs: app
            .player
            .media
            .as_ref()
            .map(|media| media.duration().as_secs_f64()),
        seek_preview: app.player.seek_preview,
        is_playing: app.player.is_playing(),
        paused_for_question: app.session.is_paused_for_question(),
        question_count: app.session.questions().len(),
    })
    .map(Message::Player);

    let mut content = player_view;

    if app.session.is_question_visible() {
        if let Some(question) = app.session.current_question() {
            let dialog = question_dialog::view(question_dialog::ViewContext {
                i18n: &app.i18n,
                question,
                feedback: app.session.feedback(),
                can_answer: app.session.can_answer(),
            })
            .map(Message::Question);
            content = modal(
                content,
                dialog,
                Message::Question(question_dialog::Message::Close),
            );
        }
    } else if app.session.is_results_visible() {
        let dialog = results_dialog::view(results_dialog::ViewContext {
            i18n: &app.i18n,
            summaries: app.session.results(),
            score: app.session.score(),
        })
        .map(Message::Results);
        content = modal(
            content,
            dialog,
            Message::Results(results_dialog::Message::Close),
        );
    }

    match &app.error_key {
        Some(key) => column![error_banner(app.i18n.tr(key), app.i18n.tr("error-dismiss")), content]
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => content,
    }
}

fn error_banner<'a>(message: String, dismiss: String) -> Element<'a, Message> {
    container(
        row![
            text(message).size(typography::BODY).color(palette::WHITE),
            Space::new().width(Length::Fill),
            button(text(dismiss).size(typography::BODY)).on_press(Message::DismissError),
        ]
        .spacing(spacing::SM)
        .align_y(Vertical::Center),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::container::error_banner)
    .into()
}
