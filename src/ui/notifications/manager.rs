// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of notifications.
//! It limits the number of visible toasts and drives their pausable timers.

use super::notification::{Notification, NotificationId};
use crate::config::MAX_VISIBLE_TOASTS;
use crate::prompt::ToastOptions;
use std::collections::VecDeque;
use std::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Pointer entered the toast: freeze its timer.
    Hover(NotificationId),
    /// Pointer left the toast: restart its timer.
    Unhover(NotificationId),
}

/// Manages the notification queue and visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
    /// Toasts waiting for a free slot. Their timers start once shown.
    queue: VecDeque<ToastOptions>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a toast now, or queues it when the screen already holds
    /// [`MAX_VISIBLE_TOASTS`].
    pub fn push(&mut self, options: ToastOptions, now: Instant) -> Option<NotificationId> {
        if self.visible.len() < MAX_VISIBLE_TOASTS {
            let notification = Notification::new(options, now);
            let id = notification.id();
            tracing::debug!(?id, message = notification.message(), "toast shown");
            self.visible.push_front(notification);
            Some(id)
        } else {
            tracing::debug!(queued = self.queue.len() + 1, "toast queued");
            self.queue.push_back(options);
            None
        }
    }

    /// Dismisses a visible notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId, now: Instant) -> bool {
        let Some(pos) = self.visible.iter().position(|n| n.id() == id) else {
            return false;
        };
        self.visible.remove(pos);
        self.promote_from_queue(now);
        true
    }

    pub fn hover(&mut self, id: NotificationId, now: Instant) {
        if let Some(notification) = self.get_mut(id) {
            notification.timer_mut().pause(now);
        }
    }

    pub fn unhover(&mut self, id: NotificationId, now: Instant) {
        if let Some(notification) = self.get_mut(id) {
            notification.timer_mut().resume(now);
        }
    }

    /// Dismisses every expired notification.
    ///
    /// Should be called periodically (e.g., every 100-500ms) while toasts are shown.
    pub fn tick(&mut self, now: Instant) {
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.should_auto_dismiss(now))
            .map(Notification::id)
            .collect();

        for id in expired {
            self.dismiss(id, now);
        }
    }

    pub fn handle_message(&mut self, message: &Message, now: Instant) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id, now);
            }
            Message::Hover(id) => self.hover(*id, now),
            Message::Unhover(id) => self.unhover(*id, now),
        }
    }

    /// Returns the currently visible notifications.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether there are any notifications (visible or queued).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn get_mut(&mut self, id: NotificationId) -> Option<&mut Notification> {
        self.visible.iter_mut().find(|n| n.id() == id)
    }

    fn promote_from_queue(&mut self, now: Instant) {
        while self.visible.len() < MAX_VISIBLE_TOASTS {
            let Some(options) = self.queue.pop_front() else {
                break;
            };
            self.visible.push_back(Notification::new(options, now));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const SECOND: Duration = Duration::from_secs(1);

    fn toast(message: &str) -> ToastOptions {
        ToastOptions::new(message).duration(3 * SECOND)
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_queues_when_visible_is_full() {
        let now = Instant::now();
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE_TOASTS {
            assert!(manager.push(toast(&format!("toast-{i}")), now).is_some());
        }
        assert!(manager.push(toast("queued"), now).is_none());
        assert_eq!(manager.visible_count(), MAX_VISIBLE_TOASTS);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let now = Instant::now();
        let mut manager = Manager::new();
        let first = manager.push(toast("first"), now).unwrap();
        for i in 1..MAX_VISIBLE_TOASTS {
            manager.push(toast(&format!("toast-{i}")), now);
        }
        manager.push(toast("queued"), now);

        assert!(manager.dismiss(first, now));
        assert_eq!(manager.visible_count(), MAX_VISIBLE_TOASTS);
        assert_eq!(manager.queued_count(), 0);
        assert!(manager.visible().any(|n| n.message() == "queued"));
    }

    #[test]
    fn dismiss_unknown_returns_false() {
        let now = Instant::now();
        let mut manager = Manager::new();
        let id = manager.push(toast("gone"), now).unwrap();
        manager.dismiss(id, now);
        assert!(!manager.dismiss(id, now));
    }

    #[test]
    fn tick_removes_expired_toasts() {
        let t0 = Instant::now();
        let mut manager = Manager::new();
        manager.push(toast("short"), t0);
        manager.push(ToastOptions::new("long").duration(10 * SECOND), t0);

        manager.tick(t0 + 2 * SECOND);
        assert_eq!(manager.visible_count(), 2);

        manager.tick(t0 + 3 * SECOND);
        let remaining: Vec<&str> = manager.visible().map(Notification::message).collect();
        assert_eq!(remaining, vec!["long"]);
    }

    #[test]
    fn hovered_toast_stays_until_pointer_leaves() {
        let t0 = Instant::now();
        let mut manager = Manager::new();
        let id = manager.push(toast("hover me"), t0).unwrap();

        manager.handle_message(&Message::Hover(id), t0 + SECOND);
        manager.tick(t0 + 30 * SECOND);
        assert_eq!(manager.visible_count(), 1);

        manager.handle_message(&Message::Unhover(id), t0 + 30 * SECOND);
        manager.tick(t0 + 31 * SECOND);
        assert_eq!(manager.visible_count(), 1, "only 2s of unhovered time so far");

        manager.tick(t0 + 32 * SECOND);
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn queued_toast_timer_starts_when_shown() {
        let t0 = Instant::now();
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE_TOASTS {
            manager.push(toast(&format!("toast-{i}")), t0);
        }
        manager.push(toast("late"), t0);

        manager.tick(t0 + 3 * SECOND);
        assert_eq!(manager.visible_count(), 1);
        let late = manager.visible().next().unwrap();
        assert_eq!(late.message(), "late");
        assert_eq!(late.timer().remaining(t0 + 3 * SECOND), 3 * SECOND);
    }
}
