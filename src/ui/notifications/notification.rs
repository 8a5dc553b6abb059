// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! A `Notification` is the on-screen form of a toast request. Its lifetime is
//! driven by a [`DismissTimer`] that only advances while the pointer is away.

use crate::prompt::{Icon, Position, ToastOptions};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Accent color of a toast or dialog icon.
#[must_use]
pub fn accent_color(icon: Icon) -> Color {
    match icon {
        Icon::Success => palette::SUCCESS_500,
        Icon::Error => palette::ERROR_500,
        Icon::Warning => palette::WARNING_500,
        Icon::Info => palette::INFO_500,
        Icon::Question => palette::PRIMARY_500,
    }
}

/// Text glyph drawn in the icon slot.
#[must_use]
pub fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Success => "✓",
        Icon::Error => "✕",
        Icon::Warning => "!",
        Icon::Info => "i",
        Icon::Question => "?",
    }
}

/// Auto-dismiss countdown that can be paused.
///
/// Time only accumulates while running, so a toast hovered for a while still
/// stays on screen for its full duration in total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissTimer {
    duration: Duration,
    elapsed: Duration,
    running_since: Option<Instant>,
}

impl DismissTimer {
    /// Starts a running timer at `now`.
    #[must_use]
    pub fn start(duration: Duration, now: Instant) -> Self {
        Self {
            duration,
            elapsed: Duration::ZERO,
            running_since: Some(now),
        }
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.running_since.is_none()
    }

    /// Freezes the countdown. No-op when already paused.
    pub fn pause(&mut self, now: Instant) {
        if let Some(since) = self.running_since.take() {
            self.elapsed += now.saturating_duration_since(since);
        }
    }

    /// Restarts the countdown. No-op when already running.
    pub fn resume(&mut self, now: Instant) {
        if self.running_since.is_none() {
            self.running_since = Some(now);
        }
    }

    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        match self.running_since {
            Some(since) => self.elapsed + now.saturating_duration_since(since),
            None => self.elapsed,
        }
    }

    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.duration.saturating_sub(self.elapsed(now))
    }

    /// A paused timer never expires.
    #[must_use]
    pub fn expired(&self, now: Instant) -> bool {
        !self.is_paused() && self.elapsed(now) >= self.duration
    }
}

/// A toast to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    icon: Icon,
    message: String,
    position: Position,
    timer: DismissTimer,
}

impl Notification {
    /// Builds the on-screen toast for `options`, its countdown starting at `now`.
    pub fn new(options: ToastOptions, now: Instant) -> Self {
        Self {
            id: NotificationId::new(),
            icon: options.icon,
            message: options.message,
            position: options.position,
            timer: DismissTimer::start(options.duration, now),
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn icon(&self) -> Icon {
        self.icon
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn timer(&self) -> &DismissTimer {
        &self.timer
    }

    pub(crate) fn timer_mut(&mut self) -> &mut DismissTimer {
        &mut self.timer
    }

    #[must_use]
    pub fn should_auto_dismiss(&self, now: Instant) -> bool {
        self.timer.expired(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn notification_ids_are_unique() {
        let now = Instant::now();
        let n1 = Notification::new(ToastOptions::new("a"), now);
        let n2 = Notification::new(ToastOptions::new("a"), now);
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn icon_colors_are_distinct() {
        let colors = [
            accent_color(Icon::Success),
            accent_color(Icon::Error),
            accent_color(Icon::Warning),
            accent_color(Icon::Info),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn timer_expires_after_duration() {
        let t0 = Instant::now();
        let timer = DismissTimer::start(3 * SECOND, t0);
        assert!(!timer.expired(t0 + 2 * SECOND));
        assert!(timer.expired(t0 + 3 * SECOND));
    }

    #[test]
    fn paused_timer_never_expires() {
        let t0 = Instant::now();
        let mut timer = DismissTimer::start(3 * SECOND, t0);
        timer.pause(t0 + SECOND);
        assert!(!timer.expired(t0 + 60 * SECOND));
        assert_eq!(timer.elapsed(t0 + 60 * SECOND), SECOND);
    }

    #[test]
    fn hover_time_does_not_count() {
        let t0 = Instant::now();
        let mut timer = DismissTimer::start(3 * SECOND, t0);
        timer.pause(t0 + 2 * SECOND);
        timer.resume(t0 + 10 * SECOND);
        assert!(!timer.expired(t0 + 10 * SECOND + SECOND / 2));
        assert_eq!(timer.remaining(t0 + 10 * SECOND), SECOND);
        assert!(timer.expired(t0 + 11 * SECOND));
    }

    #[test]
    fn pause_and_resume_are_idempotent() {
        let t0 = Instant::now();
        let mut timer = DismissTimer::start(3 * SECOND, t0);
        timer.pause(t0 + SECOND);
        timer.pause(t0 + 2 * SECOND);
        timer.resume(t0 + 2 * SECOND);
        timer.resume(t0 + 5 * SECOND);
        assert_eq!(timer.elapsed(t0 + 3 * SECOND), 2 * SECOND);
    }

    #[test]
    fn notification_keeps_toast_options() {
        let options = ToastOptions::new("Saved")
            .icon(Icon::Info)
            .position(Position::BottomStart);
        let notification = Notification::new(options, Instant::now());
        assert_eq!(notification.message(), "Saved");
        assert_eq!(notification.icon(), Icon::Info);
        assert_eq!(notification.position(), Position::BottomStart);
    }
}
