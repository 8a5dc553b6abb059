// SPDX-License-Identifier: MPL-2.0
//! Commands travelling from [`Prompt`](super::Prompt) to the presenter.

use super::options::{AlertOptions, Hook, Icon, ToastOptions};
use super::outcome::DialogAction;
use crate::markup::Markup;
use std::fmt;

/// Unique identifier for an open dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DialogId(u64);

impl DialogId {
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for DialogId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DialogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dialog-{}", self.0)
    }
}

/// A dismiss-only informational dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertRequest {
    pub icon: Icon,
    pub title: String,
    pub message: String,
    pub footer: Option<String>,
}

impl AlertRequest {
    pub(crate) fn from_options(icon: Icon, options: AlertOptions) -> Self {
        Self {
            icon,
            title: options.title,
            message: options.message,
            footer: options.footer,
        }
    }
}

type Resolver = Box<dyn FnOnce(DialogAction) + Send>;

/// A decision-requiring dialog waiting for the user.
///
/// The presenter calls [`run_before_insert`](Self::run_before_insert),
/// shows the content, calls [`run_after_insert`](Self::run_after_insert),
/// and finally [`resolve`](Self::resolve)s it exactly once. Dropping an
/// unresolved request tells the waiting caller the presenter went away.
pub struct DialogRequest {
    id: DialogId,
    icon: Option<Icon>,
    title: String,
    message: Markup,
    show_confirm_button: bool,
    before_insert: Option<Hook>,
    after_insert: Option<Hook>,
    resolver: Resolver,
}

impl DialogRequest {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        icon: Option<Icon>,
        title: String,
        message: Markup,
        show_confirm_button: bool,
        before_insert: Option<Hook>,
        after_insert: Option<Hook>,
        resolver: Resolver,
    ) -> Self {
        Self {
            id: DialogId::new(),
            icon,
            title,
            message,
            show_confirm_button,
            before_insert,
            after_insert,
            resolver,
        }
    }

    #[must_use]
    pub fn id(&self) -> DialogId {
        self.id
    }

    #[must_use]
    pub fn icon(&self) -> Option<Icon> {
        self.icon
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &Markup {
        &self.message
    }

    #[must_use]
    pub fn show_confirm_button(&self) -> bool {
        self.show_confirm_button
    }

    /// Cancel is always offered.
    #[must_use]
    pub fn show_cancel_button(&self) -> bool {
        true
    }

    /// Runs the pre-insertion hook. Later calls do nothing.
    pub fn run_before_insert(&mut self) {
        if let Some(hook) = self.before_insert.take() {
            hook();
        }
    }

    /// Runs the post-insertion hook. Later calls do nothing.
    pub fn run_after_insert(&mut self) {
        if let Some(hook) = self.after_insert.take() {
            hook();
        }
    }

    /// Reports the user's action and hands control back to the caller.
    pub fn resolve(self, action: DialogAction) {
        tracing::debug!(dialog = %self.id, ?action, "dialog resolved");
        (self.resolver)(action);
    }
}

impl fmt::Debug for DialogRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogRequest")
            .field("id", &self.id)
            .field("icon", &self.icon)
            .field("title", &self.title)
            .field("show_confirm_button", &self.show_confirm_button)
            .finish_non_exhaustive()
    }
}

/// Everything the presenter can be asked to show.
#[derive(Debug)]
pub enum Command {
    Toast(ToastOptions),
    Alert(AlertRequest),
    Dialog(DialogRequest),
}

impl Command {
    pub fn kind(&self) -> &'static str {
        match self {
            Command::Toast(_) => "toast",
            Command::Alert(_) => "alert",
            Command::Dialog(_) => "dialog",
        }
    }
}
