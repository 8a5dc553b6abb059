// SPDX-License-Identifier: MPL-2.0
//! Per-operation option types for [`Prompt`](super::Prompt).
//!
//! Every field has a documented default; callers build options fresh for
//! each call and hand them over by value.

use super::outcome::{Captured, ModalOutcome};
use crate::config::DEFAULT_TOAST_DURATION_MS;
use crate::markup::Markup;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Icon shown at the top of a dialog or at the start of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    #[default]
    Success,
    Error,
    Warning,
    Info,
    Question,
}

/// Screen anchor for toasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    Top,
    TopStart,
    #[default]
    TopEnd,
    Center,
    CenterStart,
    CenterEnd,
    Bottom,
    BottomStart,
    BottomEnd,
}

/// Options for [`Prompt::toast`](super::Prompt::toast).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastOptions {
    /// Text of the toast. Default: empty.
    pub message: String,
    /// Default: [`Icon::Success`].
    pub icon: Icon,
    /// Default: [`Position::TopEnd`].
    pub position: Position,
    /// Visible time before auto-dismiss, not counting time spent hovered.
    /// Default: 3 seconds.
    pub duration: Duration,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            message: String::new(),
            icon: Icon::default(),
            position: Position::default(),
            duration: Duration::from_millis(DEFAULT_TOAST_DURATION_MS),
        }
    }
}

impl ToastOptions {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = icon;
        self
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// Options for [`Prompt::success`](super::Prompt::success) and
/// [`Prompt::error`](super::Prompt::error).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertOptions {
    /// Default: empty.
    pub title: String,
    /// Plain text body. Default: empty.
    pub message: String,
    /// Small print under the body. Default: none.
    pub footer: Option<String>,
}

impl AlertOptions {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }
}

/// No-argument lifecycle hook.
pub type Hook = Box<dyn FnOnce() + Send>;

/// Receives the outcome of a custom dialog.
pub type ResultCallback<T> = Box<dyn FnOnce(ModalOutcome<T>) + Send>;

/// Extracts the captured value when the user confirms.
pub type CaptureFn<T> = Box<dyn FnOnce() -> T + Send>;

/// Options for [`Prompt::custom`](super::Prompt::custom).
pub struct CustomOptions<T> {
    /// Default: none.
    pub(crate) icon: Option<Icon>,
    /// Default: empty.
    pub(crate) title: String,
    /// Inserted live and unescaped.
    pub(crate) message: Markup,
    /// Default: `true`. Cancel is always offered.
    pub(crate) show_confirm_button: bool,
    /// Runs right before the content is inserted. Default: none.
    pub(crate) before_insert: Option<Hook>,
    /// Runs right after the content is inserted. Default: none.
    pub(crate) after_insert: Option<Hook>,
    pub(crate) capture: CaptureFn<T>,
    /// Default: none, in which case resolution only reaches the awaiting caller.
    pub(crate) on_result: Option<ResultCallback<T>>,
}

impl CustomOptions<()> {
    /// A dialog whose confirm is a plain acknowledgement.
    pub fn new(message: impl Into<Markup>) -> Self {
        Self {
            icon: None,
            title: String::new(),
            message: message.into(),
            show_confirm_button: true,
            before_insert: None,
            after_insert: None,
            capture: Box::new(|| ()),
            on_result: None,
        }
    }
}

impl<T: Captured> CustomOptions<T> {
    #[must_use]
    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn show_confirm_button(mut self, show: bool) -> Self {
        self.show_confirm_button = show;
        self
    }

    #[must_use]
    pub fn before_insert(mut self, hook: impl FnOnce() + Send + 'static) -> Self {
        self.before_insert = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn after_insert(mut self, hook: impl FnOnce() + Send + 'static) -> Self {
        self.after_insert = Some(Box::new(hook));
        self
    }

    /// Sets the confirm-time extraction hook. Its return value becomes the
    /// captured value.
    ///
    /// Changing the captured type drops any `on_result` set so far, so call
    /// this first.
    #[must_use]
    pub fn capture<U: Captured>(self, capture: impl FnOnce() -> U + Send + 'static) -> CustomOptions<U> {
        CustomOptions {
            icon: self.icon,
            title: self.title,
            message: self.message,
            show_confirm_button: self.show_confirm_button,
            before_insert: self.before_insert,
            after_insert: self.after_insert,
            capture: Box::new(capture),
            on_result: None,
        }
    }

    #[must_use]
    pub fn on_result(mut self, callback: impl FnOnce(ModalOutcome<T>) + Send + 'static) -> Self {
        self.on_result = Some(Box::new(callback));
        self
    }

    pub fn message(&self) -> &Markup {
        &self.message
    }
}

impl<T> fmt::Debug for CustomOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomOptions")
            .field("icon", &self.icon)
            .field("title", &self.title)
            .field("show_confirm_button", &self.show_confirm_button)
            .field("before_insert", &self.before_insert.is_some())
            .field("after_insert", &self.after_insert.is_some())
            .field("on_result", &self.on_result.is_some())
            .finish_non_exhaustive()
    }
}
