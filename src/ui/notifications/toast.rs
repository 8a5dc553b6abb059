// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are small cards with an icon-colored accent and a dismiss button.
//! Each one is wrapped in a mouse area so hovering pauses its timer.

use super::manager::{Manager, Message};
use super::notification::{accent_color, glyph, Notification};
use crate::prompt::Position;
use crate::ui::design_tokens::{border, radius, shadow, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Stack, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view(notification: &Notification) -> Element<'_, Message> {
        let accent = accent_color(notification.icon());
        let id = notification.id();

        let icon_widget = Text::new(glyph(notification.icon()))
            .size(typography::TITLE_SM)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent),
            });

        let message_widget = Text::new(notification.message())
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let dismiss_button = button(Text::new("×").size(typography::BODY_LG))
            .on_press(Message::Dismiss(id))
            .padding(spacing::XXS)
            .style(styles::button::dismiss);

        // Layout: [icon] [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(icon_widget)
                    .width(Length::Fixed(sizing::ICON_MD))
                    .align_x(alignment::Horizontal::Center),
            )
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        let card = Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent));

        mouse_area(card)
            .on_enter(Message::Hover(id))
            .on_exit(Message::Unhover(id))
            .into()
    }

    /// Renders every visible toast, one column per screen anchor.
    pub fn view_overlay(manager: &Manager) -> Element<'_, Message> {
        let mut anchors: Vec<Position> = Vec::new();
        for notification in manager.visible() {
            if !anchors.contains(&notification.position()) {
                anchors.push(notification.position());
            }
        }

        let layers = anchors.into_iter().map(|position| {
            let toasts = manager
                .visible()
                .filter(|n| n.position() == position)
                .map(Self::view);
            let (align_x, align_y) = anchor(position);

            Container::new(
                Column::with_children(toasts)
                    .spacing(spacing::XS)
                    .align_x(align_x),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(align_x)
            .align_y(align_y)
            .padding(spacing::MD)
            .into()
        });

        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Screen alignment of a toast anchor.
fn anchor(position: Position) -> (alignment::Horizontal, alignment::Vertical) {
    use alignment::{Horizontal as H, Vertical as V};
    match position {
        Position::Top => (H::Center, V::Top),
        Position::TopStart => (H::Left, V::Top),
        Position::TopEnd => (H::Right, V::Top),
        Position::Center => (H::Center, V::Center),
        Position::CenterStart => (H::Left, V::Center),
        Position::CenterEnd => (H::Right, V::Center),
        Position::Bottom => (H::Center, V::Bottom),
        Position::BottomStart => (H::Left, V::Bottom),
        Position::BottomEnd => (H::Right, V::Bottom),
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}
