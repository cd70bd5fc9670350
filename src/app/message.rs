// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::navbar;
use crate::ui::picture;
use crate::ui::welcome;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Picture(picture::Message),
    Navbar(navbar::Message),
    Welcome(welcome::Message),
    /// Open the picture panel if needed and fetch a random picture.
    OpenRandomPicture,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional NASA API key; requests fall back to `DEMO_KEY` without one.
    pub api_key: Option<String>,
}
