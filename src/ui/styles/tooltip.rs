// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles with improved visibility.
//!
//! Used for the hover title on the displayed picture and for toolbar hints.

use crate::ui::design_tokens::{radius, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Shadow, Theme, Vector};

/// Style for the tooltip container with good contrast and shadow.
///
/// Adapts to light/dark theme by checking the background luminance.
pub fn tooltip_container(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    let bg = palette.background.base.color;
    let is_dark = (bg.r + bg.g + bg.b) / 3.0 < 0.5;

    let (bg_color, text_color, border_color) = if is_dark {
        // Dark theme: light tooltip for contrast
        (
            Color::from_rgba(0.95, 0.95, 0.95, 0.98),
            Color::from_rgb(0.1, 0.1, 0.1),
            Color::from_rgba(0.7, 0.7, 0.7, 0.3),
        )
    } else {
        // Light theme: dark tooltip for contrast
        (
            Color::from_rgba(0.15, 0.15, 0.15, 0.98),
            Color::from_rgb(0.95, 0.95, 0.95),
            Color::from_rgba(0.3, 0.3, 0.3, 0.3),
        )
    };

    container::Style {
        background: Some(Background::Color(bg_color)),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: border_color,
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        text_color: Some(text_color),
        ..Default::default()
    }
}

/// Creates a styled tooltip with improved visibility.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::BODY_SM))
        .padding(spacing::XS)
        .style(tooltip_container);

    tooltip(content, tip_container, position).gap(spacing::XS)
}
