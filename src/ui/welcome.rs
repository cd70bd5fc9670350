// SPDX-License-Identifier: MPL-2.0
//! Welcome view displayed when no picture panel is open.
//!
//! This view provides:
//! - A short explanation of what the application does
//! - A button to fetch the first random picture
//! - A hint for the keyboard shortcut

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Color, Element, Length};

/// Messages emitted by the welcome view.
#[derive(Debug, Clone)]
pub enum Message {
    OpenRandomPicture,
}

/// Renders the welcome view.
///
/// Shown when the application starts and whenever the picture panel has
/// been closed.
pub fn view() -> Element<'static, Message> {
    let icon = Text::new("✦")
        .size(sizing::ICON_XL)
        .color(palette::PRIMARY_400);

    let title = Text::new("AstroLens")
        .size(typography::TITLE_LG)
        .color(palette::GRAY_400);

    let subtitle = Text::new("Fetch a random picture from the NASA astronomy archive")
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let open_button = button(Text::new("Random Astronomy Picture"))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::OpenRandomPicture);

    let shortcut_hint = Text::new("Press R for a new picture at any time")
        .size(typography::CAPTION)
        .color(Color {
            a: 0.5,
            ..palette::GRAY_400
        });

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(icon)
        .push(title)
        .push(subtitle)
        .push(open_button)
        .push(shortcut_hint);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
