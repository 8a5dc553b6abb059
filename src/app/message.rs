// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::availability::{FlowOutcome, RoomId};
use crate::prompt::Command;
use crate::ui::dialog;
use crate::ui::notifications;
use crate::ui::rooms;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

/// Moves a non-`Clone` value through a `Clone` message.
///
/// The first [`take`](Self::take) gets the value; clones share the slot.
#[derive(Debug)]
pub struct Handoff<T>(Arc<Mutex<Option<T>>>);

impl<T> Handoff<T> {
    pub fn new(value: T) -> Self {
        Self(Arc::new(Mutex::new(Some(value))))
    }

    pub fn take(&self) -> Option<T> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).take()
    }
}

impl<T> Clone for Handoff<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// A request from a [`Prompt`](crate::prompt::Prompt) handle.
    Presenter(Handoff<Command>),
    Notification(notifications::NotificationMessage),
    Dialog(dialog::Message),
    Rooms(rooms::Message),
    /// An availability flow finished.
    AvailabilityChecked(RoomId, FlowOutcome),
    Tick(Instant), // Periodic tick for toast auto-dismiss
    EscapePressed,
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional booking server base URL, overriding `[server] base_url`.
    pub server: Option<String>,
    /// Anti-forgery token echoed with every availability request.
    pub csrf_token: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `BOOKING_PROMPT_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
