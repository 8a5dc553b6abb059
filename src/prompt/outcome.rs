// SPDX-License-Identifier: MPL-2.0
//! Resolution of a decision-requiring dialog.
//!
//! A custom dialog always ends in exactly one [`ModalOutcome`]. Confirmation
//! with a blank captured value is reported as an abort so callers never see a
//! `Confirmed` carrying nothing.

/// Why a dialog was dismissed without an explicit confirm or cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// Click on the backdrop outside the dialog card.
    Backdrop,
    /// Escape key.
    Escape,
    /// The close (×) control in the dialog header.
    CloseButton,
    /// Another dialog was opened on top of this one.
    Replaced,
    /// A link inside the dialog was followed.
    Navigated,
    /// The presenter stopped listening before the user answered.
    PresenterClosed,
}

/// Why a dialog produced no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// The cancel button was pressed.
    Cancelled,
    /// The dialog went away without confirm or cancel.
    Dismissed(DismissReason),
    /// Confirm was pressed but the captured value was blank.
    Empty,
}

/// Outcome of [`Prompt::custom`](super::Prompt::custom).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalOutcome<T> {
    Confirmed(T),
    Aborted(AbortReason),
}

impl<T> ModalOutcome<T> {
    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        matches!(self, ModalOutcome::Confirmed(_))
    }

    /// Returns the captured value, if the user confirmed.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            ModalOutcome::Confirmed(value) => Some(value),
            ModalOutcome::Aborted(_) => None,
        }
    }

    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            ModalOutcome::Confirmed(value) => Some(value),
            ModalOutcome::Aborted(_) => None,
        }
    }

    #[must_use]
    pub fn abort_reason(&self) -> Option<AbortReason> {
        match self {
            ModalOutcome::Confirmed(_) => None,
            ModalOutcome::Aborted(reason) => Some(*reason),
        }
    }
}

/// A value extracted from dialog content at confirm time.
///
/// `is_blank` decides whether a confirm counts as a real answer.
pub trait Captured: Clone + Send + 'static {
    fn is_blank(&self) -> bool;
}

/// Plain acknowledgement: confirming a dialog that captures nothing.
impl Captured for () {
    fn is_blank(&self) -> bool {
        false
    }
}

/// Only the empty string is blank; whitespace is an answer.
impl Captured for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Captured> Captured for Vec<T> {
    fn is_blank(&self) -> bool {
        self.iter().all(Captured::is_blank)
    }
}

impl<T: Captured> Captured for Option<T> {
    fn is_blank(&self) -> bool {
        self.as_ref().is_none_or(Captured::is_blank)
    }
}

/// User action reported by the presenter, before capture is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    Confirm,
    Cancel,
    Dismiss(DismissReason),
}

/// Turns a presenter action into an outcome, running `capture` only on confirm.
pub(crate) fn resolve<T, F>(action: DialogAction, capture: F) -> ModalOutcome<T>
where
    T: Captured,
    F: FnOnce() -> T,
{
    match action {
        DialogAction::Confirm => {
            let value = capture();
            if value.is_blank() {
                ModalOutcome::Aborted(AbortReason::Empty)
            } else {
                ModalOutcome::Confirmed(value)
            }
        }
        DialogAction::Cancel => ModalOutcome::Aborted(AbortReason::Cancelled),
        DialogAction::Dismiss(reason) => ModalOutcome::Aborted(AbortReason::Dismissed(reason)),
    }
}
