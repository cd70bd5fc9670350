// SPDX-License-Identifier: MPL-2.0
//! Image decoding from downloaded bytes (PNG, JPEG, GIF, etc.).

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::{GenericImageView, ImageError};

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }
}

/// Decode an image from encoded bytes and return its data.
///
/// Supports common raster formats (PNG, JPEG, GIF, etc.). The format is
/// sniffed from the byte content, not from any file name.
///
/// # Errors
///
/// Returns [`Error::Image`] if the bytes are not a decodable image.
pub fn load_from_bytes(bytes: &[u8]) -> Result<ImageData> {
    let img = image_rs::load_from_memory(bytes).map_err(|e| Error::Image(e.to_string()))?;

    let (width, height) = img.dimensions();

    let rgba_img = img.to_rgba8();
    let pixels = rgba_img.into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}

impl From<ImageError> for Error {
    fn from(err: ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Image(s)
    }
}
