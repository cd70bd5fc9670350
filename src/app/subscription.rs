// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module handles routing of native keyboard events to application
//! actions based on whether the picture panel is open.

use super::Message;
use crate::ui::picture;
use iced::{event, keyboard, Subscription};

/// Creates the keyboard subscription.
///
/// `R` requests a random picture on every screen; `Escape` closes the
/// panel while one is open. Only events no widget captured are translated.
pub fn create_event_subscription(picture_open: bool) -> Subscription<Message> {
    if picture_open {
        event::listen_with(|event, status, _window_id| {
            if status == event::Status::Captured {
                return None;
            }

            match event {
                event::Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Character(ref c),
                    modifiers,
                    ..
                }) if (c.as_str() == "r" || c.as_str() == "R")
                    && !modifiers.command()
                    && !modifiers.alt() =>
                {
                    Some(Message::OpenRandomPicture)
                }
                event::Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::Escape),
                    ..
                }) => Some(Message::Picture(picture::Message::CloseRequested)),
                _ => None,
            }
        })
    } else {
        event::listen_with(|event, status, _window_id| {
            if status == event::Status::Captured {
                return None;
            }

            match event {
                event::Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Character(ref c),
                    modifiers,
                    ..
                }) if (c.as_str() == "r" || c.as_str() == "R")
                    && !modifiers.command()
                    && !modifiers.alt() =>
                {
                    Some(Message::OpenRandomPicture)
                }
                _ => None,
            }
        })
    }
}
