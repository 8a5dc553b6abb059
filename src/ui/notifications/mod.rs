// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Toasts appear temporarily without blocking interaction. Each one carries
//! its own icon, anchor and duration, and hovering a toast pauses its
//! countdown.
//!
//! # Components
//!
//! - [`notification`] - `Notification` and its pausable [`DismissTimer`]
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::Manager;
//! use crate::prompt::ToastOptions;
//!
//! let mut manager = Manager::new();
//! manager.push(ToastOptions::new("Saved"), Instant::now());
//!
//! // In your view function, render toasts
//! let toast_overlay = Toast::view_overlay(&manager).map(Message::Notification);
//! ```
//!
//! At most three toasts are visible; the rest wait in a queue and their
//! timers start once they reach the screen.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{accent_color, glyph, DismissTimer, Notification, NotificationId};
pub use toast::Toast;
