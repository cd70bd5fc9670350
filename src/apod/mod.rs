// SPDX-License-Identifier: MPL-2.0
//! Client for the NASA Astronomy Picture of the Day service.
//!
//! The round trip is split into three small pieces: picking a random
//! archive date, performing the HTTP request, and interpreting the reply
//! into a typed outcome.

pub mod client;
pub mod random_date;
pub mod record;

// Re-export commonly used types
pub use client::{fetch_image_bytes, fetch_picture, ApiResponse, DEMO_KEY};
pub use random_date::{format_request_date, random_archive_date};
pub use record::{interpret, MediaType, PictureRecord, RefreshOutcome};
