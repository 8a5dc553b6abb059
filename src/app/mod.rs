// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` owns the presenter side of the prompt channel: every toast,
//! alert and dialog requested through a [`Prompt`] arrives here as a
//! [`Message::Presenter`] and is shown by the notification manager or the
//! dialog presenter. The rooms screen starts availability checks, which run
//! as Iced tasks and talk back through the same channel.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Handoff, Message};

use crate::availability::{AvailabilityFlow, CsrfToken, FlowText, HttpAvailabilityApi, RoomId};
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::prompt::{DialogAction, DismissReason, Icon, Inbox, Prompt};
use crate::ui::dialog::{self, Presenter};
use crate::ui::notifications;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Availability flow wired to the real bookings server.
pub type Flow = AvailabilityFlow<HttpAvailabilityApi>;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// Base URL booking links are resolved against.
    base_url: String,
    prompt: Prompt,
    flow: Option<Arc<Flow>>,
    /// Room whose availability check is running.
    busy: Option<RoomId>,
    dialog: Presenter,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("base_url", &self.base_url)
            .field("busy", &self.busy)
            .field("dialog_open", &self.dialog.is_open())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 560;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        // Pending dialogs are resolved before the window goes away.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(Config::default(), I18n::default(), &Flags::default()).0
    }
}

impl App {
    /// Loads config and locale, then starts draining the prompt channel.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let (mut app, inbox) = Self::with_config(config, i18n, &flags);

        if let Some(key) = config_warning {
            let text = app.i18n.tr(&key);
            app.update_context().notify(Icon::Warning, text);
        }

        let presenter = Task::run(inbox.into_stream(), |command| {
            Message::Presenter(Handoff::new(command))
        });
        (app, presenter)
    }

    /// Builds the state and returns the inbox its prompt sends to.
    fn with_config(config: Config, i18n: I18n, flags: &Flags) -> (Self, Inbox) {
        let (prompt, inbox) = Prompt::channel();
        let base_url = flags
            .server
            .clone()
            .unwrap_or_else(|| config.server.base_url.clone());
        let csrf_token = CsrfToken::new(flags.csrf_token.clone().unwrap_or_default());

        let flow = match HttpAvailabilityApi::new(base_url.clone(), config.server.request_timeout())
        {
            Ok(api) => Some(Arc::new(
                AvailabilityFlow::new(prompt.clone(), api, csrf_token)
                    .with_text(FlowText::from_i18n(&i18n)),
            )),
            Err(err) => {
                tracing::error!(%err, "HTTP client unavailable, availability checks disabled");
                None
            }
        };
        tracing::info!(%base_url, "booking server");

        let app = App {
            i18n,
            config,
            base_url,
            prompt,
            flow,
            busy: None,
            dialog: Presenter::new(),
            notifications: notifications::Manager::new(),
        };
        (app, inbox)
    }

    /// A handle for requesting toasts and dialogs from outside the update loop.
    pub fn prompt(&self) -> Prompt {
        self.prompt.clone()
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &self.i18n,
            config: &self.config,
            base_url: &self.base_url,
            prompt: &self.prompt,
            flow: self.flow.as_ref(),
            notifications: &mut self.notifications,
            dialog: &mut self.dialog,
            busy: &mut self.busy,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::Presenter(handoff) => {
                update::handle_presenter_command(&mut ctx, &handoff);
                Task::none()
            }
            Message::Notification(message) => {
                update::handle_notification_message(&mut ctx, &message);
                Task::none()
            }
            Message::Dialog(message) => {
                update::handle_dialog_message(&mut ctx, message);
                Task::none()
            }
            Message::Rooms(message) => update::handle_rooms_message(&mut ctx, &message),
            Message::AvailabilityChecked(room_id, outcome) => {
                update::handle_availability_checked(&mut ctx, room_id, &outcome);
                Task::none()
            }
            Message::Tick(now) => {
                ctx.notifications.tick(now);
                Task::none()
            }
            Message::EscapePressed => {
                update::handle_dialog_message(
                    &mut ctx,
                    dialog::Message::Dismiss(DismissReason::Escape),
                );
                Task::none()
            }
            Message::WindowCloseRequested(id) => {
                ctx.dialog
                    .close(DialogAction::Dismiss(DismissReason::PresenterClosed));
                window::close(id)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            busy: self.busy,
            dialog: &self.dialog,
            notifications: &self.notifications,
        })
    }
}
