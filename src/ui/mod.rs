// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`picture`] - Panel showing a random picture from the astronomy archive
//! - [`welcome`] - Landing screen shown before any picture is open
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (orbit spinner)
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`navbar`] - Top toolbar with the refresh action

pub mod design_tokens;
pub mod navbar;
pub mod picture;
pub mod styles;
pub mod welcome;
pub mod widgets;
