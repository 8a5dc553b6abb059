// SPDX-License-Identifier: MPL-2.0
//! Localization of every user-visible string.
//!
//! Translations are Fluent `.ftl` files embedded at build time. The active
//! locale is picked from the CLI flag, then the config file, then the OS
//! locale, and finally falls back to `en-US`.

pub mod fluent;
