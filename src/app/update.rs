// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{Flow, Handoff};
use crate::availability::{resolve_url, FlowOutcome, RoomId};
use crate::config::Config;
use crate::i18n::fluent::I18n;
use crate::markup::{PickerError, DATE_FORMAT};
use crate::prompt::{AlertOptions, Command, Icon, Prompt, ToastOptions};
use crate::ui::dialog::{self, Presenter};
use crate::ui::notifications::{Manager, NotificationMessage};
use crate::ui::rooms;
use iced::Task;
use std::sync::Arc;
use std::time::Instant;

use super::Message;

/// Mutable view of the application state handed to handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a Config,
    pub base_url: &'a str,
    pub prompt: &'a Prompt,
    pub flow: Option<&'a Arc<Flow>>,
    pub notifications: &'a mut Manager,
    pub dialog: &'a mut Presenter,
    pub busy: &'a mut Option<RoomId>,
}

impl UpdateContext<'_> {
    /// Toast raised by the application itself, placed and timed per config.
    pub fn notify(&mut self, icon: Icon, message: String) {
        let mut options = ToastOptions::new(message)
            .icon(icon)
            .duration(self.config.notifications.toast_duration());
        if let Some(position) = self.config.notifications.toast_position {
            options = options.position(position);
        }
        self.notifications.push(options, Instant::now());
    }
}

/// Shows what a [`Prompt`] asked for.
pub fn handle_presenter_command(ctx: &mut UpdateContext<'_>, handoff: &Handoff<Command>) {
    let Some(command) = handoff.take() else {
        return;
    };
    tracing::debug!(kind = command.kind(), "presenter command");
    match command {
        Command::Toast(options) => {
            ctx.notifications.push(options, Instant::now());
        }
        Command::Alert(alert) => ctx.dialog.open_alert(alert),
        Command::Dialog(request) => ctx.dialog.open_custom(request),
    }
}

pub fn handle_notification_message(ctx: &mut UpdateContext<'_>, message: &NotificationMessage) {
    ctx.notifications.handle_message(message, Instant::now());
}

pub fn handle_dialog_message(ctx: &mut UpdateContext<'_>, message: dialog::Message) {
    match ctx.dialog.update(message) {
        dialog::Event::None => {}
        dialog::Event::Navigate(href) => {
            let url = resolve_url(ctx.base_url, &href);
            tracing::info!(%url, "navigating");
            let text = ctx.i18n.tr_with_args("navigation-opened", &[("link", url.as_str())]);
            ctx.notify(Icon::Info, text);
        }
        dialog::Event::InputRejected(err) => {
            let text = match &err {
                PickerError::BeforeMinimum { min, .. } => {
                    let min = min.format(DATE_FORMAT).to_string();
                    ctx.i18n.tr_with_args("picker-before-minimum", &[("min", min.as_str())])
                }
                PickerError::EndBeforeStart => ctx.i18n.tr("picker-end-before-start"),
                PickerError::MissingField(field) => {
                    tracing::warn!(%field, "input for unknown form field");
                    return;
                }
            };
            ctx.notify(Icon::Warning, text);
        }
    }
}

/// Starts the availability flow for a room. One check runs at a time.
pub fn handle_rooms_message(ctx: &mut UpdateContext<'_>, message: &rooms::Message) -> Task<Message> {
    let rooms::Event::CheckAvailability(room_id) = rooms::update(message);

    if ctx.busy.is_some() {
        tracing::debug!(%room_id, "availability check already running");
        return Task::none();
    }

    let Some(flow) = ctx.flow.cloned() else {
        ctx.prompt.error(AlertOptions::new(ctx.i18n.tr("availability-failure")));
        return Task::none();
    };

    *ctx.busy = Some(room_id);
    Task::perform(async move { flow.search(room_id).await }, move |outcome| {
        Message::AvailabilityChecked(room_id, outcome)
    })
}

pub fn handle_availability_checked(
    ctx: &mut UpdateContext<'_>,
    room_id: RoomId,
    outcome: &FlowOutcome,
) {
    *ctx.busy = None;
    match outcome {
        FlowOutcome::Aborted(reason) => tracing::debug!(%room_id, ?reason, "check aborted"),
        FlowOutcome::Available(offer) => tracing::info!(%room_id, link = %offer.link(), "check done"),
        FlowOutcome::Unavailable => tracing::info!(%room_id, "check done: no availability"),
        FlowOutcome::Failed(err) => tracing::warn!(%room_id, %err, "check failed"),
    }
}
