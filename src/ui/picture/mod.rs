// SPDX-License-Identifier: MPL-2.0
//! Picture panel showing a random entry from the astronomy archive.

pub mod component;

pub use component::{Effect, Message, State, NOT_AN_IMAGE_CAPTION};
