// SPDX-License-Identifier: MPL-2.0
//! Modal overlay: a dialog centered over a dimmed, click-blocking backdrop.

use crate::ui::styles;
use iced::widget::{center, mouse_area, opaque, stack};
use iced::Element;

/// Layers `dialog` above `base`. Clicking the backdrop emits `on_backdrop`.
pub fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    dialog: impl Into<Element<'a, Message>>,
    on_backdrop: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(dialog)).style(styles::container::backdrop))
                .on_press(on_backdrop)
        )
    ]
    .into()
}
