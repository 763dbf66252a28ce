// SPDX-License-Identifier: MPL-2.0
//! End-of-video summary listing every question and its options.

use crate::i18n::fluent::I18n;
use crate::quiz::{OptionMark, QuestionSummary};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, row, rule, scrollable, text, Column, Space};
use iced::{alignment::Horizontal, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub summaries: Vec<QuestionSummary>,
    pub score: (usize, usize),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Close,
}

fn question_block<'a>(i18n: &I18n, summary: QuestionSummary) -> Element<'a, Message> {
    let mut block = Column::new()
        .spacing(spacing::XS)
        .push(text(summary.prompt).size(typography::BODY_LG));

    if !summary.attempted {
        block = block.push(
            text(i18n.tr("results-not-attempted"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }

    for option in summary.options {
        let mark = option.mark;
        let line = row![
            text(format!("{}. {}", option.number, option.text)).size(typography::BODY),
            Space::new().width(Length::Fill),
            text(match mark {
                OptionMark::Correct => "✓",
                OptionMark::WrongChoice => "✗",
                OptionMark::Neutral => "",
            }),
        ];
        block = block.push(
            container(line)
                .width(Length::Fill)
                .padding(spacing::XS)
                .style(styles::container::result_row(mark)),
        );
    }

    block.into()
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let (correct, total) = ctx.score;
    let score = ctx.i18n.tr_with_args(
        "results-score",
        &[
            ("correct", correct.to_string().as_str()),
            ("total", total.to_string().as_str()),
        ],
    );

    let list = ctx
        .summaries
        .into_iter()
        .fold(Column::new().spacing(spacing::SM), |col, summary| {
            col.push(question_block(ctx.i18n, summary))
                .push(rule::horizontal(1))
        });

    let content = column![
        text(ctx.i18n.tr("results-title")).size(typography::TITLE_MD),
        text(score).size(typography::BODY),
        scrollable(list).height(Length::Shrink),
        button(text(ctx.i18n.tr("results-close")))
            .style(styles::button::primary)
            .on_press(Message::Close),
    ]
    .spacing(spacing::MD)
    .align_x(Horizontal::Center);

    container(content)
        .width(sizing::DIALOG_WIDTH)
        .max_height(sizing::RESULTS_MAX_HEIGHT + 2.0 * spacing::XL)
        .padding(spacing::XL)
        .style(styles::container::dialog)
        .into()
}
