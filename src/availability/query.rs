// SPDX-License-Identifier: MPL-2.0
//! Availability request and response types.
//!
//! Field names on the wire are fixed by the bookings server: the request is
//! form-encoded `start`, `end`, `csrf_token`, `room_id`; the response is
//! `{ ok, message, room_id, start_date, end_date }`.

use crate::error::TransportError;
use crate::markup::FormHandle;
use crate::prompt::Captured;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// Path of the booking page a successful check links to.
pub const BOOK_ROOM_PATH: &str = "/book-room";

/// Identifier of a bookable room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId(u32);

impl RoomId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for RoomId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl FromStr for RoomId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Anti-forgery token handed to the client by its environment.
///
/// Opaque: it is echoed back verbatim and never printed.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct CsrfToken(String);

impl CsrfToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CsrfToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CsrfToken(***)")
    }
}

/// Arrival and departure as typed or picked, captured at confirm time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DateSelection {
    pub start: String,
    pub end: String,
}

impl DateSelection {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Reads the `start` and `end` fields of a live form.
    pub fn from_form(form: &FormHandle) -> Self {
        form.with(|form| Self {
            start: form.value("start"),
            end: form.value("end"),
        })
    }
}

/// Both dates are required, so a half-filled selection counts as empty.
impl Captured for DateSelection {
    fn is_blank(&self) -> bool {
        self.start.is_blank() || self.end.is_blank()
    }
}

/// What gets asked of the server.
///
/// `start_date <= end_date` is left to the picker and the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityQuery {
    pub start_date: String,
    pub end_date: String,
    pub room_id: RoomId,
}

impl AvailabilityQuery {
    pub fn new(room_id: RoomId, selection: DateSelection) -> Self {
        Self {
            start_date: selection.start.trim().to_string(),
            end_date: selection.end.trim().to_string(),
            room_id,
        }
    }

    /// Form-encoded body fields, in submission order.
    pub fn form_fields(&self, csrf_token: &CsrfToken) -> Vec<(&'static str, String)> {
        vec![
            ("start", self.start_date.clone()),
            ("end", self.end_date.clone()),
            ("csrf_token", csrf_token.as_str().to_string()),
            ("room_id", self.room_id.to_string()),
        ]
    }
}

/// Server answer to an availability check.
///
/// When `ok` is false nothing else in it is trusted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AvailabilityResult {
    pub ok: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub room_id: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

impl AvailabilityResult {
    /// Interprets the answer. A positive answer missing any booking field
    /// is treated as malformed.
    pub fn into_availability(self) -> Result<Availability, TransportError> {
        if !self.ok {
            return Ok(Availability::Unavailable);
        }

        let missing = |name: &str| TransportError::Decode(format!("missing `{name}` in ok response"));
        Ok(Availability::Available(BookingOffer {
            room_id: non_empty(self.room_id).ok_or_else(|| missing("room_id"))?,
            start_date: non_empty(self.start_date).ok_or_else(|| missing("start_date"))?,
            end_date: non_empty(self.end_date).ok_or_else(|| missing("end_date"))?,
        }))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// The bookings server sends `room_id` as a string; accept numbers too.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    }))
}

/// Interpreted server answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    Available(BookingOffer),
    Unavailable,
}

/// A bookable room/date combination confirmed by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingOffer {
    pub room_id: String,
    pub start_date: String,
    pub end_date: String,
}

impl BookingOffer {
    /// Relative booking link: `/book-room?id=<room_id>&s=<start>&e=<end>`.
    #[must_use]
    pub fn link(&self) -> String {
        format!(
            "{BOOK_ROOM_PATH}?id={}&s={}&e={}",
            self.room_id, self.start_date, self.end_date
        )
    }
}
