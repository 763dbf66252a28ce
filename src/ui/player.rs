// SPDX-License-Identifier: MPL-2.0
//! Video stage and playback controls.
//!
//! The stage shows the source name and, while a question is open, the
//! "paused until you answer" notice. Below it sit the play/pause toggle, the
//! timeline scrubber and the open buttons.

use crate::i18n::fluent::I18n;
use crate::playback::time_units::{format_timestamp, secs_to_duration};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, center, column, container, row, slider, stack, text};
use iced::{alignment::Vertical, Element, Length};

/// Slider step in seconds.
const SLIDER_STEP_SECS: f64 = 0.01;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Name of the loaded source, if any.
    pub title: Option<String>,
    pub loading: bool,
    pub position_secs: f64,
    /// `None` until the source has been probed.
    pub duration_secs: Option<f64>,
    /// Slider value while the user drags it.
    pub seek_preview: Option<f64>,
    pub is_playing: bool,
    pub paused_for_question: bool,
    pub question_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    TogglePlayback,
    /// Slider dragged to this position (seconds), not applied yet.
    SeekPreview(f64),
    /// Slider released, seek to the previewed position.
    SeekCommit,
    OpenVideo,
    OpenQuiz,
}

fn stage<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let headline = if ctx.loading {
        ctx.i18n.tr("player-loading")
    } else {
        ctx.title
            .clone()
            .unwrap_or_else(|| ctx.i18n.tr("player-no-video"))
    };
    let count = ctx.question_count.to_string();
    let subtitle = ctx
        .i18n
        .tr_with_args("player-question-count", &[("count", count.as_str())]);

    let picture = container(center(
        column![
            text(headline).size(typography::TITLE_MD),
            text(subtitle)
                .size(typography::CAPTION)
                .color(palette::GRAY_200),
        ]
        .spacing(spacing::XS)
        .align_x(iced::Alignment::Center),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::stage);

    if ctx.paused_for_question {
        stack![
            picture,
            center(
                text(ctx.i18n.tr("player-paused-for-question"))
                    .size(typography::TITLE_SM)
                    .color(palette::WHITE)
            )
        ]
        .into()
    } else {
        picture.into()
    }
}

fn controls<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let can_control = ctx.duration_secs.is_some() && !ctx.paused_for_question;
    let toggle_label = if ctx.is_playing {
        ctx.i18n.tr("player-pause")
    } else {
        ctx.i18n.tr("player-play")
    };
    let toggle = button(text(toggle_label))
        .style(styles::button::primary)
        .on_press_maybe(can_control.then_some(Message::TogglePlayback));

    let duration = ctx.duration_secs.unwrap_or(0.0);
    let shown = ctx.seek_preview.unwrap_or(ctx.position_secs).min(duration);
    let mut timeline = slider(0.0..=duration.max(SLIDER_STEP_SECS), shown, Message::SeekPreview)
        .step(SLIDER_STEP_SECS)
        .width(Length::Fill);
    if ctx.duration_secs.is_some() {
        timeline = timeline.on_release(Message::SeekCommit);
    }

    let clock = text(format!(
        "{} / {}",
        format_timestamp(secs_to_duration(shown)),
        format_timestamp(secs_to_duration(duration))
    ))
    .size(typography::CAPTION)
    .width(sizing::TIME_LABEL_WIDTH * 2.0);

    let open_video = button(text(ctx.i18n.tr("player-open-video")).size(typography::BODY))
        .on_press_maybe((!ctx.loading).then_some(Message::OpenVideo));
    let open_quiz = button(text(ctx.i18n.tr("player-open-quiz")).size(typography::BODY))
        .on_press(Message::OpenQuiz);

    row![toggle, timeline, clock, open_video, open_quiz]
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .into()
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    column![stage(&ctx), controls(&ctx)]
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
