// SPDX-License-Identifier: MPL-2.0
//! Orbit spinner widget using Canvas for smooth rotation.

use crate::ui::design_tokens::{opacity, sizing};
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

/// Loading indicator drawn as a small body orbiting a faint track.
pub struct OrbitSpinner {
    cache: Cache,
    rotation: f32, // Orbit angle in radians
    color: Color,
    size: f32,
}

impl OrbitSpinner {
    /// Creates a new spinner with the given color and orbit angle.
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::ICON_XL,
        }
    }

    /// Creates a Canvas widget from this spinner.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for OrbitSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - 4.0;

                // Faint orbit track
                let track = Path::circle(center, radius);
                frame.stroke(
                    &track,
                    Stroke::default().with_width(2.0).with_color(Color {
                        a: opacity::BACKDROP,
                        ..self.color
                    }),
                );

                // Trailing arc behind the orbiting body
                let head_angle = self.rotation - PI / 2.0; // -90° offset to start at top
                let tail_angle = head_angle - PI / 3.0; // 60° trail

                let mut trail = canvas::path::Builder::new();
                trail.move_to(Point::new(
                    center.x + radius * tail_angle.cos(),
                    center.y + radius * tail_angle.sin(),
                ));

                // Approximate the arc with small line segments
                let segments = 12;
                #[allow(clippy::cast_precision_loss)]
                for i in 1..=segments {
                    let t = i as f32 / segments as f32;
                    let angle = tail_angle + (head_angle - tail_angle) * t;
                    trail.line_to(Point::new(
                        center.x + radius * angle.cos(),
                        center.y + radius * angle.sin(),
                    ));
                }

                frame.stroke(
                    &trail.build(),
                    Stroke::default()
                        .with_width(2.0)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );

                // Orbiting body
                let body = Path::circle(
                    Point::new(
                        center.x + radius * head_angle.cos(),
                        center.y + radius * head_angle.sin(),
                    ),
                    3.5,
                );
                frame.fill(&body, self.color);
            });

        vec![geometry]
    }
}
