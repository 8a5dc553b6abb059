// SPDX-License-Identifier: MPL-2.0
//! Notification and dialog service.
//!
//! [`Prompt`] is the caller-facing half: four presentation modes that
//! forward [`Command`]s to whatever presenter drains the paired [`Inbox`]
//! (the Iced overlay layer in the application, a scripted fake in tests).
//!
//! - [`Prompt::toast`] - transient, auto-dismissing, fire-and-forget
//! - [`Prompt::success`] / [`Prompt::error`] - blocking, dismiss-only alerts
//! - [`Prompt::custom`] - decision dialog that suspends the caller until the
//!   user confirms, cancels or dismisses
//!
//! # Usage
//!
//! ```ignore
//! let (prompt, inbox) = Prompt::channel();
//! // hand `inbox` to the presenter, then:
//! let outcome = prompt
//!     .custom(CustomOptions::new("Proceed?").title("Confirm"))
//!     .await;
//! ```

mod options;
mod outcome;
mod request;

pub use options::{
    AlertOptions, CaptureFn, CustomOptions, Hook, Icon, Position, ResultCallback, ToastOptions,
};
pub use outcome::{AbortReason, Captured, DialogAction, DismissReason, ModalOutcome};
pub use request::{AlertRequest, Command, DialogId, DialogRequest};

use futures_util::stream::{self, Stream};
use tokio::sync::{mpsc, oneshot};

/// Caller-facing handle. Cheap to clone; every clone feeds the same presenter.
#[derive(Debug, Clone)]
pub struct Prompt {
    commands: mpsc::UnboundedSender<Command>,
}

/// Presenter-facing end of a [`Prompt`].
#[derive(Debug)]
pub struct Inbox {
    commands: mpsc::UnboundedReceiver<Command>,
}

impl Prompt {
    /// Creates a connected prompt/inbox pair.
    #[must_use]
    pub fn channel() -> (Prompt, Inbox) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Prompt { commands: tx }, Inbox { commands: rx })
    }

    /// Shows a transient toast.
    pub fn toast(&self, options: ToastOptions) {
        self.send(Command::Toast(options));
    }

    /// Shows a dismiss-only success alert.
    pub fn success(&self, options: AlertOptions) {
        self.send(Command::Alert(AlertRequest::from_options(Icon::Success, options)));
    }

    /// Shows a dismiss-only error alert.
    pub fn error(&self, options: AlertOptions) {
        self.send(Command::Alert(AlertRequest::from_options(Icon::Error, options)));
    }

    /// Opens a decision dialog and waits for the user.
    ///
    /// Resolves exactly once. `on_result`, when set, receives the same
    /// outcome before this returns. If the presenter is gone the dialog
    /// resolves as [`DismissReason::PresenterClosed`].
    pub async fn custom<T: Captured>(&self, options: CustomOptions<T>) -> ModalOutcome<T> {
        let CustomOptions {
            icon,
            title,
            message,
            show_confirm_button,
            before_insert,
            after_insert,
            capture,
            on_result,
        } = options;

        let (tx, rx) = oneshot::channel();
        let resolver = Box::new(move |action: DialogAction| {
            let _ = tx.send(outcome::resolve(action, capture));
        });

        tracing::debug!(%title, show_confirm_button, "opening custom dialog");
        let request = DialogRequest::new(
            icon,
            title,
            message,
            show_confirm_button,
            before_insert,
            after_insert,
            resolver,
        );
        self.send(Command::Dialog(request));

        let outcome = rx.await.unwrap_or(ModalOutcome::Aborted(AbortReason::Dismissed(
            DismissReason::PresenterClosed,
        )));

        if let Some(callback) = on_result {
            callback(outcome.clone());
        }
        outcome
    }

    /// Whether a presenter is still listening.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        !self.commands.is_closed()
    }

    fn send(&self, command: Command) {
        let kind = command.kind();
        if self.commands.send(command).is_err() {
            tracing::warn!(kind, "presenter is gone, dropping command");
        } else {
            tracing::trace!(kind, "command sent to presenter");
        }
    }
}

impl Inbox {
    /// Waits for the next command. `None` once every [`Prompt`] is dropped.
    pub async fn recv(&mut self) -> Option<Command> {
        self.commands.recv().await
    }

    /// Returns a queued command without waiting.
    pub fn try_recv(&mut self) -> Option<Command> {
        self.commands.try_recv().ok()
    }

    /// Turns the inbox into a stream, for presenters driven by an event loop.
    pub fn into_stream(self) -> impl Stream<Item = Command> + Send + 'static {
        stream::unfold(self, |mut inbox| async move {
            inbox.recv().await.map(|command| (command, inbox))
        })
    }
}
