// SPDX-License-Identifier: MPL-2.0
//! Top toolbar with the application command.
//!
//! The toolbar stays visible on every screen so a new random picture is
//! always one click away.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, tooltip, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

/// Contextual data needed to render the toolbar.
pub struct ViewContext {
    /// Whether a picture panel is currently open.
    pub picture_open: bool,
}

/// Messages emitted by the toolbar.
#[derive(Debug, Clone)]
pub enum Message {
    OpenRandomPicture,
}

/// Render the toolbar.
pub fn view(ctx: ViewContext) -> Element<'static, Message> {
    let brand = Text::new("AstroLens").size(typography::TITLE_MD);

    let tip = if ctx.picture_open {
        "Fetch another random picture (R)"
    } else {
        "Fetch a random astronomy picture (R)"
    };

    let command_button = button(Text::new("Random Astronomy Picture"))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::primary)
        .on_press(Message::OpenRandomPicture);

    let command = styles::tooltip::styled(command_button, tip, tooltip::Position::Bottom);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(brand)
        .push(command);

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(styles::container::toolbar)
        .into()
}
