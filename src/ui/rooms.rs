// SPDX-License-Identifier: MPL-2.0
//! Rooms screen: one card per room with a "Check availability" button.

use crate::availability::RoomId;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, scrollable, Column, Container, Row, Text},
    Element, Length,
};

/// A room offered on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    /// i18n key of the room name; the description uses `<key>-description`.
    pub name_key: &'static str,
}

/// Rooms listed by the site.
pub const ROOMS: [Room; 2] = [
    Room {
        id: RoomId::new(1),
        name_key: "room-generals-quarters",
    },
    Room {
        id: RoomId::new(2),
        name_key: "room-majors-suite",
    },
];

/// Contextual data needed to render the rooms screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Room whose availability check is running, if any.
    pub busy: Option<RoomId>,
}

/// Messages emitted by the rooms screen.
#[derive(Debug, Clone)]
pub enum Message {
    CheckAvailability(RoomId),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    CheckAvailability(RoomId),
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::CheckAvailability(room_id) => Event::CheckAvailability(*room_id),
    }
}

/// Render the rooms screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("rooms-title")).size(typography::TITLE_LG);

    let cards = ROOMS.iter().map(|room| room_card(room, &ctx));

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .push(title)
        .push(Row::with_children(cards).spacing(spacing::LG).wrap());

    scrollable(content).into()
}

fn room_card<'a>(room: &Room, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let name = Text::new(ctx.i18n.tr(room.name_key)).size(typography::TITLE_MD);
    let description = Text::new(ctx.i18n.tr(&format!("{}-description", room.name_key)))
        .size(typography::BODY);

    let label = if ctx.busy == Some(room.id) {
        ctx.i18n.tr("availability-checking")
    } else {
        ctx.i18n.tr("check-availability")
    };
    let check = button(Text::new(label))
        .on_press_maybe(ctx.busy.is_none().then_some(Message::CheckAvailability(room.id)))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(name)
            .push(description)
            .push(check),
    )
    .width(Length::Fixed(sizing::ROOM_CARD_WIDTH))
    .padding(spacing::MD)
    .style(styles::container::panel)
    .into()
}
