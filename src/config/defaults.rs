// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Server**: Booking site location and request limits
//! - **Notifications**: Toast timing and placement

// ==========================================================================
// Server Defaults
// ==========================================================================

/// Base URL of the bookings site when neither config nor CLI set one.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8081";

/// Default timeout for availability requests (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Minimum request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Visible time of a toast before auto-dismiss (in milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

/// Minimum toast duration (in milliseconds).
pub const MIN_TOAST_DURATION_MS: u64 = 500;

/// Maximum toast duration (in milliseconds).
pub const MAX_TOAST_DURATION_MS: u64 = 30_000;

/// Maximum number of toasts visible at once; extra toasts wait in a queue.
pub const MAX_VISIBLE_TOASTS: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_timeout_default_is_in_range() {
        assert!(DEFAULT_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
        assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn toast_duration_default_is_in_range() {
        assert!(DEFAULT_TOAST_DURATION_MS >= MIN_TOAST_DURATION_MS);
        assert!(DEFAULT_TOAST_DURATION_MS <= MAX_TOAST_DURATION_MS);
    }
}
