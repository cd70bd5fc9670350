// SPDX-License-Identifier: MPL-2.0
//! Decoding support for downloaded pictures.

pub mod image;

pub use image::{load_from_bytes, ImageData};
