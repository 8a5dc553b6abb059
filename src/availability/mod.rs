// SPDX-License-Identifier: MPL-2.0
//! "Check then offer booking" flow for a single room.
//!
//! The flow asks for a date range in a custom dialog, submits it once to the
//! bookings server and reports the answer in a follow-up dialog:
//!
//! 1. Date dialog, picker attached once the form is on screen
//! 2. Cancel, dismiss or empty confirm: stop silently, nothing is sent
//! 3. Otherwise one `POST` to [`AVAILABILITY_ENDPOINT`]
//! 4. Available: dismiss-only dialog with a booking link.
//!    Unavailable: error alert. Transport failure: generic error alert.

mod client;
mod query;

pub use client::{resolve_url, AvailabilityApi, HttpAvailabilityApi, AVAILABILITY_ENDPOINT};
pub use query::{
    Availability, AvailabilityQuery, AvailabilityResult, BookingOffer, CsrfToken, DateSelection,
    RoomId, BOOK_ROOM_PATH,
};

use crate::error::TransportError;
use crate::i18n::fluent::I18n;
use crate::markup::{DateRangePicker, Field, Form, FormHandle, Markup, PickerOptions};
use crate::prompt::{AbortReason, AlertOptions, CustomOptions, Icon, ModalOutcome, Prompt};

/// Id of the date form inside the dialog.
pub const FORM_ID: &str = "check-availability-form";
/// Id of the row holding both date inputs.
pub const DATES_GROUP_ID: &str = "reservation-dates-modal";

/// User-visible strings of the flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowText {
    pub title: String,
    pub arrival: String,
    pub departure: String,
    pub available: String,
    pub book_now: String,
    pub unavailable: String,
    pub failure: String,
    /// Footer lines for transport failures, one per [`TransportError`] kind.
    pub unreachable: String,
    pub timed_out: String,
    /// `{code}` is replaced by the HTTP status.
    pub bad_status: String,
    pub bad_reply: String,
}

/// Placeholder for the status code in [`FlowText::bad_status`].
const STATUS_CODE: &str = "{code}";

impl Default for FlowText {
    fn default() -> Self {
        Self {
            title: "Choose your dates".to_string(),
            arrival: "Arrival".to_string(),
            departure: "Departure".to_string(),
            available: "Room is available !".to_string(),
            book_now: "Book now !".to_string(),
            unavailable: "No availability".to_string(),
            failure: "Could not check availability, please try again later.".to_string(),
            unreachable: "The booking server could not be reached.".to_string(),
            timed_out: "The booking server took too long to answer.".to_string(),
            bad_status: "The booking server answered with status {code}.".to_string(),
            bad_reply: "The booking server sent an unexpected answer.".to_string(),
        }
    }
}

impl FlowText {
    /// Resolves every string through the active locale.
    pub fn from_i18n(i18n: &I18n) -> Self {
        Self {
            title: i18n.tr("availability-title"),
            arrival: i18n.tr("availability-arrival"),
            departure: i18n.tr("availability-departure"),
            available: i18n.tr("availability-available"),
            book_now: i18n.tr("availability-book-now"),
            unavailable: i18n.tr("availability-none"),
            failure: i18n.tr("availability-failure"),
            unreachable: i18n.tr(TransportError::Request(String::new()).i18n_key()),
            timed_out: i18n.tr(TransportError::Timeout.i18n_key()),
            bad_status: i18n
                .tr_with_args(TransportError::Status(0).i18n_key(), &[("code", STATUS_CODE)]),
            bad_reply: i18n.tr(TransportError::Decode(String::new()).i18n_key()),
        }
    }

    /// Localised footer for a failed check. The raw error is only logged.
    pub fn failure_detail(&self, err: &TransportError) -> String {
        match err {
            TransportError::Request(_) => self.unreachable.clone(),
            TransportError::Timeout => self.timed_out.clone(),
            TransportError::Status(code) => self.bad_status.replace(STATUS_CODE, &code.to_string()),
            TransportError::Decode(_) => self.bad_reply.clone(),
        }
    }
}

/// How one run of the flow ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    /// The user backed out; nothing was sent.
    Aborted(AbortReason),
    Available(BookingOffer),
    Unavailable,
    Failed(TransportError),
}

/// Availability check for rooms of one site.
#[derive(Debug)]
pub struct AvailabilityFlow<A> {
    prompt: Prompt,
    api: A,
    csrf_token: CsrfToken,
    text: FlowText,
    picker_options: Option<PickerOptions>,
}

impl<A: AvailabilityApi> AvailabilityFlow<A> {
    pub fn new(prompt: Prompt, api: A, csrf_token: CsrfToken) -> Self {
        Self {
            prompt,
            api,
            csrf_token,
            text: FlowText::default(),
            picker_options: None,
        }
    }

    #[must_use]
    pub fn with_text(mut self, text: FlowText) -> Self {
        self.text = text;
        self
    }

    /// Fixes the picker options instead of computing "from today" each time
    /// the dialog opens.
    #[must_use]
    pub fn with_picker_options(mut self, options: PickerOptions) -> Self {
        self.picker_options = Some(options);
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Runs the whole interaction for `room_id`.
    pub async fn search(&self, room_id: RoomId) -> FlowOutcome {
        let form = date_form(&self.text);
        let picker_form = form.clone();
        let live_form = form.clone();
        let picker_options = self.picker_options;

        let options = CustomOptions::new(Markup::new().form(form))
            .title(self.text.title.clone())
            .after_insert(move || {
                let options = picker_options.unwrap_or_else(PickerOptions::from_today);
                if let Err(err) =
                    DateRangePicker::attach_to(&picker_form, "start", "end", options)
                {
                    tracing::warn!(%err, "date picker not attached");
                }
            })
            .capture(move || DateSelection::from_form(&live_form));

        let outcome = self.prompt.custom(options).await;
        self.on_dates_chosen(room_id, outcome).await
    }

    /// Result handling for the date dialog.
    async fn on_dates_chosen(
        &self,
        room_id: RoomId,
        outcome: ModalOutcome<DateSelection>,
    ) -> FlowOutcome {
        let selection = match outcome {
            ModalOutcome::Confirmed(selection) => selection,
            ModalOutcome::Aborted(reason) => {
                tracing::debug!(%room_id, ?reason, "date selection aborted");
                return FlowOutcome::Aborted(reason);
            }
        };

        let query = AvailabilityQuery::new(room_id, selection);
        tracing::info!(
            %room_id,
            start = %query.start_date,
            end = %query.end_date,
            "checking availability"
        );

        match self.submit(&query).await {
            Ok(Availability::Available(offer)) => {
                tracing::info!(%room_id, link = %offer.link(), "room is available");
                self.show_offer(&offer).await;
                FlowOutcome::Available(offer)
            }
            Ok(Availability::Unavailable) => {
                tracing::info!(%room_id, "no availability");
                self.prompt
                    .error(AlertOptions::new(self.text.unavailable.clone()));
                FlowOutcome::Unavailable
            }
            Err(err) => {
                tracing::error!(%room_id, %err, "availability check failed");
                self.prompt.error(
                    AlertOptions::new(self.text.failure.clone())
                        .footer(self.text.failure_detail(&err)),
                );
                FlowOutcome::Failed(err)
            }
        }
    }

    async fn submit(&self, query: &AvailabilityQuery) -> Result<Availability, TransportError> {
        self.api
            .search(query, &self.csrf_token)
            .await?
            .into_availability()
    }

    async fn show_offer(&self, offer: &BookingOffer) {
        let message = Markup::new()
            .paragraph(self.text.available.clone())
            .button_link(offer.link(), self.text.book_now.clone());
        let options = CustomOptions::new(message)
            .icon(Icon::Success)
            .show_confirm_button(false);
        let outcome = self.prompt.custom(options).await;
        tracing::debug!(?outcome, "booking offer closed");
    }
}

/// The two-field date form shown in the dialog.
pub fn date_form(text: &FlowText) -> FormHandle {
    FormHandle::new(
        Form::new(FORM_ID)
            .group(DATES_GROUP_ID)
            .field(
                Field::new("start")
                    .placeholder(text.arrival.clone())
                    .required(),
            )
            .field(
                Field::new("end")
                    .placeholder(text.departure.clone())
                    .required(),
            ),
    )
}
