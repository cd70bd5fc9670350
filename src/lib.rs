// SPDX-License-Identifier: MPL-2.0
//! `astro_lens` is a random astronomy picture viewer built with the Iced GUI framework.
//!
//! It draws a random date from NASA's Astronomy Picture of the Day archive,
//! fetches the entry for that date, and renders the picture with its caption.

#![doc(html_root_url = "https://docs.rs/astro_lens/0.1.0")]

pub mod apod;
pub mod app;
pub mod error;
pub mod media;
pub mod ui;
