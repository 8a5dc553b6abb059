// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: rooms screen, open dialog, toasts.

use super::Message;
use crate::availability::RoomId;
use crate::i18n::fluent::I18n;
use crate::ui::dialog::{self, Presenter};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::rooms;
use iced::{
    widget::{Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub busy: Option<RoomId>,
    pub dialog: &'a Presenter,
    pub notifications: &'a Manager,
}

/// Renders the rooms screen with the dialog and toast overlays.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let screen = rooms::view(rooms::ViewContext {
        i18n: ctx.i18n,
        busy: ctx.busy,
    })
    .map(Message::Rooms);

    let mut layers = Stack::new().push(
        Container::new(screen)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    if let Some(modal) = ctx.dialog.view(dialog::ViewContext { i18n: ctx.i18n }) {
        layers = layers.push(modal.map(Message::Dialog));
    }

    if ctx.notifications.visible_count() > 0 {
        layers = layers.push(Toast::view_overlay(ctx.notifications).map(Message::Notification));
    }

    layers.width(Length::Fill).height(Length::Fill).into()
}
