// SPDX-License-Identifier: MPL-2.0
//! Astronomy picture panel component.
//!
//! Owns the image and caption surfaces of one panel. The surfaces are
//! created with the panel and mutated in place by every refresh. Replies
//! are applied in arrival order, so with overlapping refreshes the
//! slower reply determines what stays on screen.

use crate::apod::{self, MediaType, RefreshOutcome};
use crate::error::Error;
use crate::media::{self, ImageData};
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::OrbitSpinner;
use iced::widget::{button, tooltip, Column, Container, Image, Row, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Background, Border, Color, Element, Length, Subscription, Task, Theme,
};

/// Caption shown when the drawn archive entry is not a picture.
pub const NOT_AN_IMAGE_CAPTION: &str = "Random APOD was not a image.";

/// Image surface of the panel, mutated in place across refreshes.
#[derive(Debug, Clone, Default)]
pub struct ImageSurface {
    /// URL the current picture was requested from.
    pub source: Option<String>,
    /// Hover title of the picture.
    pub title: String,
    /// Decoded pixels, present once a download has completed.
    pub data: Option<ImageData>,
}

/// Caption surface under the image.
#[derive(Debug, Clone, Default)]
pub struct CaptionSurface {
    pub text: String,
}

/// Messages handled by the panel.
#[derive(Debug, Clone)]
pub enum Message {
    /// Fetch a new random picture into the existing surfaces.
    Refresh,
    /// A service round trip finished, or failed in transport.
    RecordFetched(Result<RefreshOutcome, Error>),
    /// An image download finished for the given source URL.
    ImageLoaded {
        url: String,
        result: Result<ImageData, Error>,
    },
    SpinnerTick,
    /// The panel close button was pressed.
    CloseRequested,
}

/// Effects propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    CloseRequested,
}

/// State of one picture panel.
#[derive(Debug)]
pub struct State {
    api_key: String,
    image: ImageSurface,
    caption: CaptionSurface,
    /// Number of refreshes still in flight. Refreshes are not cancelled
    /// or serialized; replies land in arrival order.
    in_flight: u32,
    spinner_rotation: f32,
}

impl State {
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            image: ImageSurface::default(),
            caption: CaptionSurface::default(),
            in_flight: 0,
            spinner_rotation: 0.0,
        }
    }

    /// Caption currently shown under the picture.
    pub fn caption(&self) -> &str {
        &self.caption.text
    }

    /// Image surface of the panel.
    pub fn image(&self) -> &ImageSurface {
        &self.image
    }

    /// Title of the picture on display, if any entry has arrived yet.
    pub fn picture_title(&self) -> Option<&str> {
        if self.image.title.is_empty() {
            None
        } else {
            Some(&self.image.title)
        }
    }

    /// Whether at least one refresh is still in flight.
    pub fn is_fetching(&self) -> bool {
        self.in_flight > 0
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.in_flight > 0 {
            // Animate spinner at 60 FPS while fetching
            iced::time::every(std::time::Duration::from_millis(16)).map(|_| Message::SpinnerTick)
        } else {
            Subscription::none()
        }
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::Refresh => {
                self.in_flight += 1;

                let api_key = self.api_key.clone();
                let date = apod::format_request_date(apod::random_archive_date());
                let task = Task::perform(
                    async move {
                        apod::fetch_picture(&api_key, &date)
                            .await
                            .map(|response| apod::interpret(&response))
                    },
                    Message::RecordFetched,
                );

                (Effect::None, task)
            }
            Message::RecordFetched(Ok(RefreshOutcome::Picture(record))) => {
                if record.media_type != MediaType::Image {
                    self.in_flight = self.in_flight.saturating_sub(1);
                    self.caption.text = NOT_AN_IMAGE_CAPTION.to_string();
                    return (Effect::None, Task::none());
                }

                // The surfaces take the new entry before its pixels arrive,
                // the same way a browser applies img.src immediately.
                self.caption.text = record.caption();
                self.image.title = record.title;
                self.image.source = Some(record.url.clone());

                let fetch_url = record.url.clone();
                let mapper_url = record.url;
                let task = Task::perform(
                    async move {
                        let bytes = apod::fetch_image_bytes(&fetch_url).await?;
                        media::load_from_bytes(&bytes)
                    },
                    move |result| Message::ImageLoaded {
                        url: mapper_url.clone(),
                        result,
                    },
                );

                (Effect::None, task)
            }
            Message::RecordFetched(Ok(RefreshOutcome::ServiceError(message))) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                self.caption.text = message;
                (Effect::None, Task::none())
            }
            Message::RecordFetched(Err(error)) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                eprintln!("Failed to fetch picture record: {}", error);
                (Effect::None, Task::none())
            }
            Message::ImageLoaded { url, result } => {
                self.in_flight = self.in_flight.saturating_sub(1);
                match result {
                    // Pixels only apply while their URL is still the current
                    // source; a newer refresh supersedes them.
                    Ok(data) if self.image.source.as_deref() == Some(url.as_str()) => {
                        self.image.data = Some(data);
                    }
                    Ok(_) => {}
                    Err(error) => {
                        eprintln!("Failed to load picture from {}: {}", url, error);
                    }
                }
                (Effect::None, Task::none())
            }
            Message::SpinnerTick => {
                // 180° per second at 60 FPS
                const ROTATION_SPEED: f32 = std::f32::consts::PI / 60.0;
                self.spinner_rotation =
                    (self.spinner_rotation + ROTATION_SPEED) % (2.0 * std::f32::consts::PI);
                (Effect::None, Task::none())
            }
            Message::CloseRequested => (Effect::CloseRequested, Task::none()),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let title = Text::new("Astronomy Picture")
            .size(typography::TITLE_SM)
            .width(Length::Fill);

        let close_button = button(Text::new("✕").size(typography::BODY))
            .padding(spacing::XS)
            .style(close_button_style)
            .on_press(Message::CloseRequested);

        let header = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(title)
            .push(close_button);

        let picture: Element<'_, Message> = match &self.image.data {
            Some(data) => {
                let image = Image::new(data.handle.clone())
                    .width(Length::Fill)
                    .height(Length::Fill);

                styles::tooltip::styled(
                    image,
                    self.image.title.clone(),
                    tooltip::Position::FollowCursor,
                )
                .into()
            }
            None => Container::new(Text::new("✦").size(sizing::ICON_XL).color(Color {
                a: 0.5,
                ..palette::GRAY_400
            }))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into(),
        };

        let body: Element<'_, Message> = if self.in_flight > 0 {
            let spinner =
                OrbitSpinner::new(palette::PRIMARY_400, self.spinner_rotation).into_element();

            let loading_content = Column::new()
                .spacing(spacing::SM)
                .align_x(Horizontal::Center)
                .push(spinner)
                .push(Text::new("Fetching picture...").size(typography::BODY_SM));

            let loading_overlay = Container::new(loading_content)
                .padding(spacing::MD)
                .style(|_theme: &Theme| iced::widget::container::Style {
                    background: Some(Background::Color(Color {
                        r: 0.0,
                        g: 0.0,
                        b: 0.0,
                        a: opacity::OVERLAY_MEDIUM,
                    })),
                    border: Border {
                        radius: radius::MD.into(),
                        ..Default::default()
                    },
                    text_color: Some(palette::WHITE),
                    ..Default::default()
                });

            Stack::new()
                .width(Length::Fill)
                .height(Length::Fill)
                .push(picture)
                .push(
                    Container::new(loading_overlay)
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .align_x(Horizontal::Center)
                        .align_y(Vertical::Center),
                )
                .into()
        } else {
            picture
        };

        let caption = Text::new(self.caption.text.as_str()).size(typography::BODY);

        let content = Column::new()
            .spacing(spacing::SM)
            .padding(spacing::MD)
            .width(Length::Fill)
            .height(Length::Fill)
            .push(header)
            .push(body)
            .push(caption);

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::panel)
            .into()
    }
}

/// Style function for the header close button.
fn close_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let colors = theme.extended_palette();

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(colors.background.strong.color.into()),
            text_color: colors.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        _ => button::Style {
            background: None,
            text_color: colors.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apod::PictureRecord;

    fn sample_image_data() -> ImageData {
        ImageData::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    fn image_record(url: &str, title: &str) -> RefreshOutcome {
        RefreshOutcome::Picture(PictureRecord {
            date: "2015-06-13".to_string(),
            title: title.to_string(),
            url: url.to_string(),
            media_type: MediaType::Image,
            copyright: None,
        })
    }

    fn video_record() -> RefreshOutcome {
        RefreshOutcome::Picture(PictureRecord {
            date: "2019-03-17".to_string(),
            title: "Rotating Moon".to_string(),
            url: "https://example.org/moon.mp4".to_string(),
            media_type: MediaType::Video,
            copyright: None,
        })
    }

    #[test]
    fn refresh_marks_fetch_in_flight() {
        let mut state = State::new("DEMO_KEY".to_string());
        assert!(!state.is_fetching());

        let (effect, _task) = state.handle_message(Message::Refresh);

        assert_eq!(effect, Effect::None);
        assert!(state.is_fetching());
    }

    #[test]
    fn image_record_updates_surfaces_before_pixels() {
        let mut state = State::new("DEMO_KEY".to_string());
        state.handle_message(Message::Refresh);

        state.handle_message(Message::RecordFetched(Ok(image_record(
            "https://example.org/m64.jpg",
            "M64",
        ))));

        assert_eq!(state.caption(), "M64");
        assert_eq!(state.image().title, "M64");
        assert_eq!(
            state.image().source.as_deref(),
            Some("https://example.org/m64.jpg")
        );
        assert!(state.image().data.is_none());
        // The byte download is still outstanding.
        assert!(state.is_fetching());
    }

    #[test]
    fn copyright_is_appended_to_caption() {
        let mut state = State::new("DEMO_KEY".to_string());
        state.handle_message(Message::Refresh);

        state.handle_message(Message::RecordFetched(Ok(RefreshOutcome::Picture(
            PictureRecord {
                date: "2015-06-13".to_string(),
                title: "M64".to_string(),
                url: "https://example.org/m64.jpg".to_string(),
                media_type: MediaType::Image,
                copyright: Some("Martin Pugh".to_string()),
            },
        ))));

        assert_eq!(state.caption(), "M64 (Copyright Martin Pugh)");
    }

    #[test]
    fn non_image_record_sets_exact_caption() {
        let mut state = State::new("DEMO_KEY".to_string());
        state.handle_message(Message::Refresh);

        state.handle_message(Message::RecordFetched(Ok(video_record())));

        assert_eq!(state.caption(), "Random APOD was not a image.");
        assert!(state.image().source.is_none());
        assert!(!state.is_fetching());
    }

    #[test]
    fn video_record_keeps_current_picture() {
        let mut state = State::new("DEMO_KEY".to_string());
        state.handle_message(Message::Refresh);
        state.handle_message(Message::RecordFetched(Ok(image_record(
            "https://example.org/m64.jpg",
            "M64",
        ))));
        state.handle_message(Message::ImageLoaded {
            url: "https://example.org/m64.jpg".to_string(),
            result: Ok(sample_image_data()),
        });

        state.handle_message(Message::Refresh);
        state.handle_message(Message::RecordFetched(Ok(video_record())));

        assert_eq!(state.caption(), "Random APOD was not a image.");
        assert!(state.image().data.is_some());
        assert_eq!(
            state.image().source.as_deref(),
            Some("https://example.org/m64.jpg")
        );
    }

    #[test]
    fn service_error_replaces_caption_only() {
        let mut state = State::new("DEMO_KEY".to_string());
        state.handle_message(Message::Refresh);
        state.handle_message(Message::RecordFetched(Ok(image_record(
            "https://example.org/m64.jpg",
            "M64",
        ))));
        state.handle_message(Message::ImageLoaded {
            url: "https://example.org/m64.jpg".to_string(),
            result: Ok(sample_image_data()),
        });

        state.handle_message(Message::Refresh);
        state.handle_message(Message::RecordFetched(Ok(RefreshOutcome::ServiceError(
            "Bad api_key provided.".to_string(),
        ))));

        assert_eq!(state.caption(), "Bad api_key provided.");
        assert!(state.image().data.is_some());
        assert!(!state.is_fetching());
    }

    #[test]
    fn transport_failure_leaves_surfaces_untouched() {
        let mut state = State::new("DEMO_KEY".to_string());
        state.handle_message(Message::Refresh);
        state.handle_message(Message::RecordFetched(Ok(image_record(
            "https://example.org/m64.jpg",
            "M64",
        ))));

        state.handle_message(Message::Refresh);
        state.handle_message(Message::RecordFetched(Err(Error::Http(
            "dns failure".to_string(),
        ))));

        assert_eq!(state.caption(), "M64");
        assert_eq!(
            state.image().source.as_deref(),
            Some("https://example.org/m64.jpg")
        );
    }

    #[test]
    fn pixels_apply_for_current_source() {
        let mut state = State::new("DEMO_KEY".to_string());
        state.handle_message(Message::Refresh);
        state.handle_message(Message::RecordFetched(Ok(image_record(
            "https://example.org/m64.jpg",
            "M64",
        ))));

        state.handle_message(Message::ImageLoaded {
            url: "https://example.org/m64.jpg".to_string(),
            result: Ok(sample_image_data()),
        });

        assert!(state.image().data.is_some());
        assert!(!state.is_fetching());
    }

    #[test]
    fn stale_pixels_are_dropped() {
        let mut state = State::new("DEMO_KEY".to_string());
        state.handle_message(Message::Refresh);
        state.handle_message(Message::Refresh);
        state.handle_message(Message::RecordFetched(Ok(image_record(
            "https://example.org/first.jpg",
            "First",
        ))));
        state.handle_message(Message::RecordFetched(Ok(image_record(
            "https://example.org/second.jpg",
            "Second",
        ))));

        // The first download completes after its entry was superseded.
        state.handle_message(Message::ImageLoaded {
            url: "https://example.org/first.jpg".to_string(),
            result: Ok(sample_image_data()),
        });
        assert!(state.image().data.is_none());

        state.handle_message(Message::ImageLoaded {
            url: "https://example.org/second.jpg".to_string(),
            result: Ok(sample_image_data()),
        });
        assert!(state.image().data.is_some());
        assert!(!state.is_fetching());
    }

    #[test]
    fn slower_reply_wins_with_overlapping_refreshes() {
        let mut state = State::new("DEMO_KEY".to_string());
        state.handle_message(Message::Refresh);
        state.handle_message(Message::Refresh);

        state.handle_message(Message::RecordFetched(Ok(image_record(
            "https://example.org/fast.jpg",
            "Fast",
        ))));
        state.handle_message(Message::RecordFetched(Ok(image_record(
            "https://example.org/slow.jpg",
            "Slow",
        ))));

        assert_eq!(state.caption(), "Slow");
        assert_eq!(
            state.image().source.as_deref(),
            Some("https://example.org/slow.jpg")
        );
    }

    #[test]
    fn failed_download_keeps_previous_pixels() {
        let mut state = State::new("DEMO_KEY".to_string());
        state.handle_message(Message::Refresh);
        state.handle_message(Message::RecordFetched(Ok(image_record(
            "https://example.org/first.jpg",
            "First",
        ))));
        state.handle_message(Message::ImageLoaded {
            url: "https://example.org/first.jpg".to_string(),
            result: Ok(sample_image_data()),
        });

        state.handle_message(Message::Refresh);
        state.handle_message(Message::RecordFetched(Ok(image_record(
            "https://example.org/second.jpg",
            "Second",
        ))));
        state.handle_message(Message::ImageLoaded {
            url: "https://example.org/second.jpg".to_string(),
            result: Err(Error::Http("HTTP status: 404 Not Found".to_string())),
        });

        assert!(state.image().data.is_some());
        assert_eq!(state.caption(), "Second");
        assert!(!state.is_fetching());
    }

    #[test]
    fn close_emits_close_effect() {
        let mut state = State::new("DEMO_KEY".to_string());
        let (effect, _task) = state.handle_message(Message::CloseRequested);
        assert_eq!(effect, Effect::CloseRequested);
    }

    #[test]
    fn spinner_tick_advances_rotation() {
        let mut state = State::new("DEMO_KEY".to_string());
        state.handle_message(Message::SpinnerTick);
        state.handle_message(Message::SpinnerTick);
        assert!(state.spinner_rotation > 0.0);
    }

    #[test]
    fn not_an_image_caption_matches_service_wording() {
        assert_eq!(NOT_AN_IMAGE_CAPTION, "Random APOD was not a image.");
    }

    #[test]
    fn picture_title_reported_once_entry_arrives() {
        let mut state = State::new("DEMO_KEY".to_string());
        assert_eq!(state.picture_title(), None);

        state.handle_message(Message::Refresh);
        state.handle_message(Message::RecordFetched(Ok(image_record(
            "https://example.org/m64.jpg",
            "M64",
        ))));

        assert_eq!(state.picture_title(), Some("M64"));
    }

    #[test]
    fn panel_view_renders() {
        let state = State::new("DEMO_KEY".to_string());
        let _element = state.view();
    }

    #[test]
    fn panel_view_renders_with_picture_and_overlay() {
        let mut state = State::new("DEMO_KEY".to_string());
        state.handle_message(Message::Refresh);
        state.handle_message(Message::RecordFetched(Ok(image_record(
            "https://example.org/m64.jpg",
            "M64",
        ))));
        state.handle_message(Message::ImageLoaded {
            url: "https://example.org/m64.jpg".to_string(),
            result: Ok(sample_image_data()),
        });
        state.handle_message(Message::Refresh);

        assert!(state.is_fetching());
        let _element = state.view();
    }
}
