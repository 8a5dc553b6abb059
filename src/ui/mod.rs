// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! - [`rooms`] - Rooms screen with the availability buttons
//! - [`dialog`] - Modal presenter for alerts and custom dialogs
//! - [`notifications`] - Toast notification system
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod dialog;
pub mod notifications;
pub mod rooms;
pub mod styles;
