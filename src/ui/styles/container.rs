// SPDX-License-Identifier: MPL-2.0
//! Container styles for dialogs, the video stage and result rows.

use crate::quiz::OptionMark;
use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Dimmed backdrop behind a modal dialog.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        ..container::Style::default()
    }
}

/// Dialog card.
pub fn dialog(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        text_color: Some(palette::GRAY_900),
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        shadow: shadow::LG,
        ..container::Style::default()
    }
}

/// Black surface standing in for the video picture.
pub fn stage(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BLACK)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow: shadow::LG,
        ..container::Style::default()
    }
}

/// Error banner above the player.
pub fn error_banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::ERROR_500)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Background color of a results row for the given mark.
pub fn mark_color(mark: OptionMark) -> Color {
    match mark {
        OptionMark::Correct => palette::SUCCESS_100,
        OptionMark::WrongChoice => palette::ERROR_100,
        OptionMark::Neutral => palette::WHITE,
    }
}

/// One option row in the results summary.
pub fn result_row(mark: OptionMark) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(mark_color(mark))),
        text_color: Some(palette::GRAY_900),
        border: Border {
            color: palette::GRAY_200,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_have_distinct_colors() {
        let correct = mark_color(OptionMark::Correct);
        let wrong = mark_color(OptionMark::WrongChoice);
        let neutral = mark_color(OptionMark::Neutral);
        assert_ne!(correct, wrong);
        assert_ne!(correct, neutral);
        assert_ne!(wrong, neutral);
    }
}
