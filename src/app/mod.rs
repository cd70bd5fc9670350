// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the picture panel.
//!
//! The `App` struct owns the panel holder and translates messages into
//! side effects like fetch tasks. This file keeps policy decisions
//! (window sizing, the panel holder lifecycle) close to the main update
//! loop so it is easy to audit user-facing behavior.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::apod;
use crate::ui::{navbar, picture, welcome};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state that bridges the toolbar, the welcome
/// screen, and the picture panel.
pub struct App {
    api_key: String,
    /// Panel holder. `None` until a picture is first requested and again
    /// after the panel is closed; reopening creates a fresh panel.
    picture: Option<picture::State>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("picture_open", &self.picture.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            api_key: apod::DEMO_KEY.to_string(),
            picture: None,
        }
    }
}

impl App {
    /// Initializes application state from `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let app = App {
            api_key: flags.api_key.unwrap_or_else(|| apod::DEMO_KEY.to_string()),
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.picture.as_ref().and_then(picture::State::picture_title) {
            Some(title) => format!("{title} - AstroLens"),
            None => String::from("AstroLens"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.picture.is_some());
        let panel_sub = match self.picture.as_ref() {
            Some(panel) => panel.subscription().map(Message::Picture),
            None => Subscription::none(),
        };

        Subscription::batch([event_sub, panel_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenRandomPicture
            | Message::Navbar(navbar::Message::OpenRandomPicture)
            | Message::Welcome(welcome::Message::OpenRandomPicture) => self.open_random_picture(),
            Message::Picture(picture_message) => self.handle_picture_message(picture_message),
        }
    }

    /// Creates the panel on first use and starts a refresh on it.
    ///
    /// An existing panel is reused so its surfaces are mutated in place
    /// rather than replaced.
    fn open_random_picture(&mut self) -> Task<Message> {
        let api_key = self.api_key.clone();
        let panel = self
            .picture
            .get_or_insert_with(|| picture::State::new(api_key));
        let (_effect, task) = panel.handle_message(picture::Message::Refresh);
        task.map(Message::Picture)
    }

    fn handle_picture_message(&mut self, message: picture::Message) -> Task<Message> {
        // Replies can outlive the panel; without one they are dropped and
        // the closed surfaces stay inert.
        let Some(panel) = self.picture.as_mut() else {
            return Task::none();
        };

        let (effect, task) = panel.handle_message(message);
        match effect {
            picture::Effect::CloseRequested => {
                self.picture = None;
                Task::none()
            }
            picture::Effect::None => task.map(Message::Picture),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            picture: self.picture.as_ref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apod::{MediaType, PictureRecord, RefreshOutcome};

    fn image_record(url: &str, title: &str) -> picture::Message {
        picture::Message::RecordFetched(Ok(RefreshOutcome::Picture(PictureRecord {
            date: "2014-10-05".to_string(),
            title: title.to_string(),
            url: url.to_string(),
            media_type: MediaType::Image,
            copyright: None,
        })))
    }

    #[test]
    fn new_starts_without_panel() {
        let (app, _task) = App::new(Flags::default());
        assert!(app.picture.is_none());
        assert_eq!(app.api_key, "DEMO_KEY");
    }

    #[test]
    fn flags_override_api_key() {
        let (app, _task) = App::new(Flags {
            api_key: Some("my-key".to_string()),
        });
        assert_eq!(app.api_key, "my-key");
    }

    #[test]
    fn open_creates_panel_and_starts_fetch() {
        let mut app = App::default();
        let _ = app.update(Message::OpenRandomPicture);

        let panel = app.picture.as_ref().expect("panel should exist");
        assert!(panel.is_fetching());
    }

    #[test]
    fn open_reuses_existing_panel() {
        let mut app = App::default();
        let _ = app.update(Message::OpenRandomPicture);
        let _ = app.update(Message::Picture(image_record(
            "https://example.org/a.jpg",
            "Trifid",
        )));

        let _ = app.update(Message::Navbar(navbar::Message::OpenRandomPicture));

        let panel = app.picture.as_ref().expect("panel should exist");
        // The previous caption stays until the new reply lands.
        assert_eq!(panel.caption(), "Trifid");
        assert!(panel.is_fetching());
    }

    #[test]
    fn close_clears_the_panel_holder() {
        let mut app = App::default();
        let _ = app.update(Message::OpenRandomPicture);

        let _ = app.update(Message::Picture(picture::Message::CloseRequested));

        assert!(app.picture.is_none());
    }

    #[test]
    fn late_reply_after_close_is_dropped() {
        let mut app = App::default();
        let _ = app.update(Message::OpenRandomPicture);
        let _ = app.update(Message::Picture(picture::Message::CloseRequested));

        // The fetch spawned before closing resolves afterwards.
        let _ = app.update(Message::Picture(image_record(
            "https://example.org/late.jpg",
            "Late",
        )));

        assert!(app.picture.is_none());
    }

    #[test]
    fn reopening_after_close_starts_from_scratch() {
        let mut app = App::default();
        let _ = app.update(Message::OpenRandomPicture);
        let _ = app.update(Message::Picture(image_record(
            "https://example.org/a.jpg",
            "Trifid",
        )));
        let _ = app.update(Message::Picture(picture::Message::CloseRequested));

        let _ = app.update(Message::Welcome(welcome::Message::OpenRandomPicture));

        let panel = app.picture.as_ref().expect("panel should exist");
        assert_eq!(panel.caption(), "");
        assert_eq!(panel.picture_title(), None);
    }

    #[test]
    fn title_includes_picture_name() {
        let mut app = App::default();
        assert_eq!(app.title(), "AstroLens");

        let _ = app.update(Message::OpenRandomPicture);
        assert_eq!(app.title(), "AstroLens");

        let _ = app.update(Message::Picture(image_record(
            "https://example.org/a.jpg",
            "Trifid Nebula",
        )));
        assert_eq!(app.title(), "Trifid Nebula - AstroLens");
    }

    #[test]
    fn view_renders_welcome_and_panel() {
        let mut app = App::default();
        let _welcome = app.view();
        drop(_welcome);

        let _ = app.update(Message::OpenRandomPicture);
        let _panel = app.view();
    }
}
