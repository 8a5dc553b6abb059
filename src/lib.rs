// SPDX-License-Identifier: MPL-2.0
//! `booking_prompt` is the notification and dialog layer of a hotel booking
//! client, built with the Iced GUI framework.
//!
//! Code anywhere in the client asks for toasts, alerts and modal prompts
//! through a cloneable [`prompt::Prompt`] handle; the [`app`] shows them and
//! reports the user's answer back as a [`prompt::ModalOutcome`]. On top of
//! that, [`availability`] implements the "check a room, then offer booking"
//! flow against the bookings server.

pub mod app;
pub mod availability;
pub mod config;
pub mod error;
pub mod i18n;
pub mod markup;
pub mod prompt;
pub mod ui;
