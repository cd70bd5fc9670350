// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the toolbar
//! plus either the picture panel or the welcome screen.

use super::Message;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::picture;
use crate::ui::welcome;
use iced::{widget::Column, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub picture: Option<&'a picture::State>,
}

/// Renders the current application view.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        picture_open: ctx.picture.is_some(),
    })
    .map(Message::Navbar);

    let content: Element<'_, Message> = match ctx.picture {
        Some(panel) => panel.view().map(Message::Picture),
        None => welcome::view().map(Message::Welcome),
    };

    Column::new()
        .push(navbar_view)
        .push(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
