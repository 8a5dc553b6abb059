// SPDX-License-Identifier: MPL-2.0
//! Modal dialog presenter.
//!
//! Shows at most one dialog at a time on top of the current screen:
//! either an [`AlertRequest`] (dismiss-only) or a [`DialogRequest`] whose
//! waiting caller is resolved exactly once, whatever closes it.

use crate::i18n::fluent::I18n;
use crate::markup::{Block, FormHandle, PickerError};
use crate::prompt::{AlertRequest, DialogAction, DialogId, DialogRequest, DismissReason, Icon};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{accent_color, glyph};
use crate::ui::styles;
use iced::widget::{
    button, center, mouse_area, opaque, text, text_input, Column, Container, Row, Text,
};
use iced::{alignment::Vertical, Element, Length, Theme};

/// Contextual data needed to render the dialog.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the dialog.
#[derive(Debug, Clone)]
pub enum Message {
    Confirm,
    Cancel,
    Dismiss(DismissReason),
    Input {
        form_id: String,
        field: String,
        value: String,
    },
    LinkPressed(String),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// A link was followed; the dialog is already closed.
    Navigate(String),
    /// Typed date rejected by the picker attached to the form.
    InputRejected(PickerError),
}

/// What is currently on screen.
#[derive(Debug)]
enum Active {
    Alert(AlertRequest),
    Custom(DialogRequest),
}

#[derive(Debug, Default)]
pub struct Presenter {
    active: Option<Active>,
}

impl Presenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Id of the pending custom dialog, if any.
    #[must_use]
    pub fn current_dialog(&self) -> Option<DialogId> {
        match &self.active {
            Some(Active::Custom(request)) => Some(request.id()),
            _ => None,
        }
    }

    #[must_use]
    pub fn current_alert(&self) -> Option<&AlertRequest> {
        match &self.active {
            Some(Active::Alert(alert)) => Some(alert),
            _ => None,
        }
    }

    pub fn open_alert(&mut self, alert: AlertRequest) {
        self.close(DialogAction::Dismiss(DismissReason::Replaced));
        tracing::debug!(icon = ?alert.icon, "alert opened");
        self.active = Some(Active::Alert(alert));
    }

    /// Shows `request`, running its insertion hooks around the swap.
    pub fn open_custom(&mut self, mut request: DialogRequest) {
        self.close(DialogAction::Dismiss(DismissReason::Replaced));
        tracing::debug!(dialog = %request.id(), "dialog opened");
        request.run_before_insert();
        let slot = self.active.insert(Active::Custom(request));
        if let Active::Custom(request) = slot {
            request.run_after_insert();
        }
    }

    /// Closes whatever is open, resolving a pending custom dialog with `action`.
    pub fn close(&mut self, action: DialogAction) {
        match self.active.take() {
            Some(Active::Custom(request)) => request.resolve(action),
            Some(Active::Alert(_)) => tracing::debug!(?action, "alert closed"),
            None => {}
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        if self.active.is_none() {
            return Event::None;
        }
        match message {
            Message::Confirm => {
                if self.confirm_allowed() {
                    self.close(DialogAction::Confirm);
                }
                Event::None
            }
            Message::Cancel => {
                self.close(DialogAction::Cancel);
                Event::None
            }
            Message::Dismiss(reason) => {
                self.close(DialogAction::Dismiss(reason));
                Event::None
            }
            Message::Input {
                form_id,
                field,
                value,
            } => match self.form(&form_id).map(|form| form.input(&field, &value)) {
                Some(Err(err)) => Event::InputRejected(err),
                _ => Event::None,
            },
            Message::LinkPressed(href) => {
                tracing::info!(%href, "dialog link followed");
                self.close(DialogAction::Dismiss(DismissReason::Navigated));
                Event::Navigate(href)
            }
        }
    }

    fn confirm_allowed(&self) -> bool {
        match &self.active {
            Some(Active::Custom(request)) => request.show_confirm_button(),
            Some(Active::Alert(_)) => true,
            None => false,
        }
    }

    fn form(&self, form_id: &str) -> Option<FormHandle> {
        let Some(Active::Custom(request)) = &self.active else {
            return None;
        };
        request.message().blocks().iter().find_map(|block| match block {
            Block::Form(form) if form.id() == form_id => Some(form.clone()),
            _ => None,
        })
    }

    /// Renders the open dialog over a dimmed backdrop, or nothing.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
        let card = match self.active.as_ref()? {
            Active::Alert(alert) => alert_card(alert, &ctx),
            Active::Custom(request) => custom_card(request, &ctx),
        };

        let card = Container::new(card)
            .width(Length::Fixed(sizing::DIALOG_WIDTH))
            .padding(spacing::LG)
            .style(styles::container::dialog);

        let backdrop = mouse_area(center(opaque(card)).style(styles::container::backdrop))
            .on_press(Message::Dismiss(DismissReason::Backdrop));

        Some(opaque(backdrop))
    }
}

fn header<'a>(icon: Option<Icon>, title: &str) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::SM).align_y(Vertical::Center);
    if let Some(icon) = icon {
        let accent = accent_color(icon);
        row = row.push(
            Text::new(glyph(icon))
                .size(typography::TITLE_LG)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(accent),
                }),
        );
    }
    row = row.push(
        Container::new(Text::new(title.to_string()).size(typography::TITLE_MD)).width(Length::Fill),
    );
    row.push(
        button(Text::new("×").size(typography::TITLE_SM))
            .on_press(Message::Dismiss(DismissReason::CloseButton))
            .padding(spacing::XXS)
            .style(styles::button::dismiss),
    )
    .into()
}

fn alert_card<'a>(alert: &'a AlertRequest, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::MD)
        .push(header(Some(alert.icon), &alert.title))
        .push(Text::new(alert.message.as_str()).size(typography::BODY_LG));

    if let Some(footer) = &alert.footer {
        column = column.push(Text::new(footer.as_str()).size(typography::CAPTION));
    }

    column
        .push(
            button(Text::new(ctx.i18n.tr("dialog-confirm")))
                .on_press(Message::Confirm)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        )
        .into()
}

fn custom_card<'a>(request: &'a DialogRequest, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::MD)
        .push(header(request.icon(), request.title()));

    for block in request.message().blocks() {
        column = column.push(block_view(block));
    }

    let mut actions = Row::new().spacing(spacing::SM);
    if request.show_confirm_button() {
        actions = actions.push(
            button(Text::new(ctx.i18n.tr("dialog-confirm")))
                .on_press(Message::Confirm)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        );
    }
    if request.show_cancel_button() {
        actions = actions.push(
            button(Text::new(ctx.i18n.tr("dialog-cancel")))
                .on_press(Message::Cancel)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::secondary),
        );
    }

    column.push(actions).into()
}

fn block_view(block: &Block) -> Element<'_, Message> {
    match block {
        Block::Paragraph(content) => Text::new(content.as_str()).size(typography::BODY_LG).into(),
        Block::Link {
            href,
            label,
            primary,
        } => {
            let style = if *primary {
                styles::button::primary
            } else {
                styles::button::link
            };
            button(Text::new(label.as_str()))
                .on_press(Message::LinkPressed(href.clone()))
                .padding([spacing::XS, spacing::MD])
                .style(style)
                .into()
        }
        Block::Form(form) => form_view(form),
    }
}

fn form_view<'a>(handle: &FormHandle) -> Element<'a, Message> {
    let form = handle.snapshot();
    let form_id = form.id().to_string();

    let inputs = form.fields().iter().map(|field| {
        let form_id = form_id.clone();
        let name = field.name().to_string();
        text_input(field.placeholder_text(), field.value())
            .on_input(move |value| Message::Input {
                form_id: form_id.clone(),
                field: name.clone(),
                value,
            })
            .padding(spacing::XS)
            .size(typography::BODY)
            .width(Length::Fill)
            .into()
    });

    let row = Row::with_children(inputs).spacing(spacing::SM);
    match form.picker().and_then(|picker| picker.options().min_date) {
        Some(min) => Column::new()
            .spacing(spacing::XXS)
            .push(row)
            .push(Text::new(format!("≥ {}", min.format(crate::markup::DATE_FORMAT))).size(typography::CAPTION))
            .into(),
        None => row.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{Field, Form, Markup};
    use crate::prompt::{
        AbortReason, AlertOptions, Command, CustomOptions, Inbox, ModalOutcome, Prompt,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    async fn next_dialog(inbox: &mut Inbox) -> DialogRequest {
        match inbox.recv().await {
            Some(Command::Dialog(request)) => request,
            other => panic!("expected a dialog, got {other:?}"),
        }
    }

    fn name_form() -> FormHandle {
        FormHandle::new(Form::new("guest").field(Field::new("name")))
    }

    #[tokio::test]
    async fn typed_value_is_captured_on_confirm() {
        let (prompt, mut inbox) = Prompt::channel();
        let form = name_form();
        let live = form.clone();
        let pending = tokio::spawn(async move {
            prompt
                .custom(
                    CustomOptions::new(Markup::new().form(form))
                        .capture(move || live.value("name")),
                )
                .await
        });

        let mut presenter = Presenter::new();
        presenter.open_custom(next_dialog(&mut inbox).await);
        let event = presenter.update(Message::Input {
            form_id: "guest".to_string(),
            field: "name".to_string(),
            value: "Ada".to_string(),
        });
        assert_eq!(event, Event::None);
        presenter.update(Message::Confirm);

        assert!(!presenter.is_open());
        assert_eq!(
            pending.await.unwrap(),
            ModalOutcome::Confirmed("Ada".to_string())
        );
    }

    #[tokio::test]
    async fn escape_and_backdrop_dismiss() {
        for reason in [DismissReason::Escape, DismissReason::Backdrop, DismissReason::CloseButton] {
            let (prompt, mut inbox) = Prompt::channel();
            let pending =
                tokio::spawn(async move { prompt.custom(CustomOptions::new("Sure?")).await });

            let mut presenter = Presenter::new();
            presenter.open_custom(next_dialog(&mut inbox).await);
            presenter.update(Message::Dismiss(reason));

            assert_eq!(
                pending.await.unwrap(),
                ModalOutcome::Aborted(AbortReason::Dismissed(reason))
            );
        }
    }

    #[tokio::test]
    async fn opening_a_second_dialog_replaces_the_first() {
        let (prompt, mut inbox) = Prompt::channel();
        let first_prompt = prompt.clone();
        let first =
            tokio::spawn(async move { first_prompt.custom(CustomOptions::new("first")).await });
        let mut presenter = Presenter::new();
        presenter.open_custom(next_dialog(&mut inbox).await);

        let second = tokio::spawn(async move { prompt.custom(CustomOptions::new("second")).await });
        let request = next_dialog(&mut inbox).await;
        let second_id = request.id();
        presenter.open_custom(request);

        assert_eq!(
            first.await.unwrap(),
            ModalOutcome::Aborted(AbortReason::Dismissed(DismissReason::Replaced))
        );
        assert_eq!(presenter.current_dialog(), Some(second_id));

        presenter.update(Message::Cancel);
        assert_eq!(
            second.await.unwrap(),
            ModalOutcome::Aborted(AbortReason::Cancelled)
        );
    }

    #[tokio::test]
    async fn hidden_confirm_ignores_confirm_message() {
        let (prompt, mut inbox) = Prompt::channel();
        let pending = tokio::spawn(async move {
            prompt
                .custom(CustomOptions::new("Info").show_confirm_button(false))
                .await
        });

        let mut presenter = Presenter::new();
        presenter.open_custom(next_dialog(&mut inbox).await);
        presenter.update(Message::Confirm);
        assert!(presenter.is_open());

        presenter.update(Message::Dismiss(DismissReason::Escape));
        assert!(pending.await.unwrap().abort_reason().is_some());
    }

    #[tokio::test]
    async fn link_navigates_and_closes() {
        let (prompt, mut inbox) = Prompt::channel();
        let pending = tokio::spawn(async move {
            prompt
                .custom(CustomOptions::new(
                    Markup::new().button_link("/book-room?id=1&s=a&e=b", "Book now !"),
                ))
                .await
        });

        let mut presenter = Presenter::new();
        presenter.open_custom(next_dialog(&mut inbox).await);
        let event = presenter.update(Message::LinkPressed("/book-room?id=1&s=a&e=b".to_string()));

        assert_eq!(event, Event::Navigate("/book-room?id=1&s=a&e=b".to_string()));
        assert!(!presenter.is_open());
        assert_eq!(
            pending.await.unwrap(),
            ModalOutcome::Aborted(AbortReason::Dismissed(DismissReason::Navigated))
        );
    }

    #[tokio::test]
    async fn hooks_run_once_around_insertion() {
        let (prompt, mut inbox) = Prompt::channel();
        let calls = Arc::new(AtomicUsize::new(0));
        let before = Arc::clone(&calls);
        let after = Arc::clone(&calls);
        let _pending = tokio::spawn(async move {
            prompt
                .custom(
                    CustomOptions::new("hooks")
                        .before_insert(move || {
                            before.fetch_add(1, Ordering::SeqCst);
                        })
                        .after_insert(move || {
                            after.fetch_add(10, Ordering::SeqCst);
                        }),
                )
                .await
        });

        let mut presenter = Presenter::new();
        presenter.open_custom(next_dialog(&mut inbox).await);
        assert_eq!(calls.load(Ordering::SeqCst), 11);
        presenter.close(DialogAction::Cancel);
    }

    #[tokio::test]
    async fn alert_closes_on_ok() {
        let (prompt, mut inbox) = Prompt::channel();
        prompt.error(AlertOptions::new("No availability"));
        let Some(Command::Alert(alert)) = inbox.recv().await else {
            panic!("expected an alert");
        };

        let mut presenter = Presenter::new();
        presenter.open_alert(alert);
        assert_eq!(
            presenter.current_alert().map(|a| a.message.as_str()),
            Some("No availability")
        );
        assert_eq!(presenter.current_alert().map(|a| a.icon), Some(Icon::Error));

        presenter.update(Message::Confirm);
        assert!(!presenter.is_open());
    }

    #[test]
    fn messages_without_dialog_are_ignored() {
        let mut presenter = Presenter::new();
        assert_eq!(
            presenter.update(Message::LinkPressed("/x".to_string())),
            Event::None
        );
        assert!(presenter.view(ViewContext { i18n: &I18n::default() }).is_none());
    }
}
