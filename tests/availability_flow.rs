// SPDX-License-Identifier: MPL-2.0
//! End-to-end runs of the availability flow against a scripted presenter
//! and an in-memory bookings server.

use booking_prompt::availability::{
    AvailabilityApi, AvailabilityFlow, AvailabilityQuery, AvailabilityResult, BookingOffer,
    CsrfToken, FlowOutcome, RoomId,
};
use booking_prompt::error::TransportError;
use booking_prompt::markup::{Block, PickerOptions};
use booking_prompt::prompt::{
    AbortReason, AlertRequest, Command, DialogAction, DismissReason, Icon, Inbox, Prompt,
};
use chrono::NaiveDate;
use std::sync::{Arc, Mutex};

/// What the scripted user does with the date dialog.
#[derive(Clone)]
enum DateStep {
    Enter { start: &'static str, end: &'static str },
    EnterNothing,
    Cancel,
}

#[derive(Debug, Default)]
struct Transcript {
    date_dialogs: usize,
    /// Links of dialogs without a form, and whether they offered confirm.
    offers: Vec<(Option<Icon>, Vec<String>, bool)>,
    alerts: Vec<AlertRequest>,
}

/// Plays the user: answers the date dialog per `step`, closes every other
/// dialog with Escape, and records what was shown.
async fn scripted_presenter(mut inbox: Inbox, step: DateStep) -> Transcript {
    let mut transcript = Transcript::default();
    while let Some(command) = inbox.recv().await {
        match command {
            Command::Dialog(mut request) => {
                request.run_before_insert();
                request.run_after_insert();
                let form = request.message().first_form().cloned();
                match form {
                    Some(form) => {
                        transcript.date_dialogs += 1;
                        let action = match &step {
                            DateStep::Enter { start, end } => {
                                form.input("start", start).expect("arrival accepted");
                                form.input("end", end).expect("departure accepted");
                                DialogAction::Confirm
                            }
                            DateStep::EnterNothing => DialogAction::Confirm,
                            DateStep::Cancel => DialogAction::Cancel,
                        };
                        request.resolve(action);
                    }
                    None => {
                        let links = request
                            .message()
                            .blocks()
                            .iter()
                            .filter_map(|block| match block {
                                Block::Link { href, .. } => Some(href.clone()),
                                _ => None,
                            })
                            .collect();
                        transcript.offers.push((
                            request.icon(),
                            links,
                            request.show_confirm_button(),
                        ));
                        request.resolve(DialogAction::Dismiss(DismissReason::Escape));
                    }
                }
            }
            Command::Alert(alert) => transcript.alerts.push(alert),
            Command::Toast(_) => {}
        }
    }
    transcript
}

/// In-memory bookings server that records every request.
#[derive(Clone)]
struct FakeServer {
    reply: Result<&'static str, TransportError>,
    calls: Arc<Mutex<Vec<(AvailabilityQuery, String)>>>,
}

impl FakeServer {
    fn answering(json: &'static str) -> Self {
        Self {
            reply: Ok(json),
            calls: Arc::default(),
        }
    }

    fn failing(err: TransportError) -> Self {
        Self {
            reply: Err(err),
            calls: Arc::default(),
        }
    }

    fn calls(&self) -> Vec<(AvailabilityQuery, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl AvailabilityApi for FakeServer {
    async fn search(
        &self,
        query: &AvailabilityQuery,
        csrf_token: &CsrfToken,
    ) -> Result<AvailabilityResult, TransportError> {
        self.calls
            .lock()
            .unwrap()
            .push((query.clone(), csrf_token.as_str().to_string()));
        let body = self.reply.clone()?;
        Ok(serde_json::from_str(body)?)
    }
}

fn picker_from_2024() -> PickerOptions {
    PickerOptions {
        min_date: NaiveDate::from_ymd_opt(2024, 1, 1),
        show_on_focus: true,
    }
}

async fn run_flow(server: FakeServer, step: DateStep, room: u32) -> (FlowOutcome, Transcript) {
    let (prompt, inbox) = Prompt::channel();
    let presenter = tokio::spawn(scripted_presenter(inbox, step));

    let flow = AvailabilityFlow::new(prompt, server, CsrfToken::new("tok-123"))
        .with_picker_options(picker_from_2024());
    let outcome = flow.search(RoomId::new(room)).await;
    drop(flow);

    (outcome, presenter.await.expect("presenter task"))
}

#[tokio::test]
async fn available_room_offers_booking_link() {
    let server = FakeServer::answering(
        r#"{"ok":true,"room_id":"5","start_date":"2024-06-01","end_date":"2024-06-03"}"#,
    );
    let step = DateStep::Enter {
        start: "2024-06-01",
        end: "2024-06-03",
    };
    let (outcome, transcript) = run_flow(server.clone(), step, 5).await;

    assert_eq!(
        outcome,
        FlowOutcome::Available(BookingOffer {
            room_id: "5".to_string(),
            start_date: "2024-06-01".to_string(),
            end_date: "2024-06-03".to_string(),
        })
    );

    let calls = server.calls();
    assert_eq!(calls.len(), 1);
    let (query, token) = &calls[0];
    assert_eq!(query.room_id, RoomId::new(5));
    assert_eq!(query.start_date, "2024-06-01");
    assert_eq!(query.end_date, "2024-06-03");
    assert_eq!(token, "tok-123");

    assert_eq!(transcript.date_dialogs, 1);
    assert_eq!(
        transcript.offers,
        vec![(
            Some(Icon::Success),
            vec!["/book-room?id=5&s=2024-06-01&e=2024-06-03".to_string()],
            false
        )]
    );
    assert!(transcript.alerts.is_empty());
}

#[tokio::test]
async fn numeric_room_id_in_reply_is_accepted() {
    let server = FakeServer::answering(
        r#"{"ok":true,"room_id":2,"start_date":"2024-07-10","end_date":"2024-07-12"}"#,
    );
    let step = DateStep::Enter {
        start: "2024-07-10",
        end: "2024-07-12",
    };
    let (outcome, transcript) = run_flow(server, step, 2).await;

    assert!(matches!(outcome, FlowOutcome::Available(_)));
    assert_eq!(
        transcript.offers[0].1,
        vec!["/book-room?id=2&s=2024-07-10&e=2024-07-12".to_string()]
    );
}

#[tokio::test]
async fn unavailable_room_shows_error_without_link() {
    let server = FakeServer::answering(r#"{"ok":false,"message":""}"#);
    let step = DateStep::Enter {
        start: "2024-06-01",
        end: "2024-06-03",
    };
    let (outcome, transcript) = run_flow(server.clone(), step, 1).await;

    assert_eq!(outcome, FlowOutcome::Unavailable);
    assert_eq!(server.calls().len(), 1);
    assert!(transcript.offers.is_empty());
    assert_eq!(transcript.alerts.len(), 1);
    assert_eq!(transcript.alerts[0].icon, Icon::Error);
    assert_eq!(transcript.alerts[0].message, "No availability");
}

#[tokio::test]
async fn cancel_sends_nothing() {
    let server = FakeServer::answering(r#"{"ok":false}"#);
    let (outcome, transcript) = run_flow(server.clone(), DateStep::Cancel, 1).await;

    assert_eq!(outcome, FlowOutcome::Aborted(AbortReason::Cancelled));
    assert!(server.calls().is_empty());
    assert!(transcript.alerts.is_empty());
    assert!(transcript.offers.is_empty());
}

#[tokio::test]
async fn empty_dates_abort_without_request() {
    let server = FakeServer::answering(r#"{"ok":false}"#);
    let (outcome, transcript) = run_flow(server.clone(), DateStep::EnterNothing, 1).await;

    assert_eq!(outcome, FlowOutcome::Aborted(AbortReason::Empty));
    assert!(server.calls().is_empty());
    assert_eq!(transcript.date_dialogs, 1);
    assert!(transcript.alerts.is_empty());
}

#[tokio::test]
async fn transport_failure_shows_generic_error() {
    let server = FakeServer::failing(TransportError::Status(500));
    let step = DateStep::Enter {
        start: "2024-06-01",
        end: "2024-06-03",
    };
    let (outcome, transcript) = run_flow(server, step, 1).await;

    assert_eq!(outcome, FlowOutcome::Failed(TransportError::Status(500)));
    assert!(transcript.offers.is_empty());
    assert_eq!(transcript.alerts.len(), 1);
    let alert = &transcript.alerts[0];
    assert_eq!(alert.icon, Icon::Error);
    assert_ne!(alert.message, "No availability");
    assert_eq!(
        alert.footer.as_deref(),
        Some("The booking server answered with status 500.")
    );
}

#[tokio::test]
async fn malformed_reply_is_a_failure() {
    let server = FakeServer::answering("<html>oops</html>");
    let step = DateStep::Enter {
        start: "2024-06-01",
        end: "2024-06-03",
    };
    let (outcome, transcript) = run_flow(server, step, 1).await;

    assert!(matches!(
        outcome,
        FlowOutcome::Failed(TransportError::Decode(_))
    ));
    assert_eq!(transcript.alerts.len(), 1);
    assert_eq!(
        transcript.alerts[0].footer.as_deref(),
        Some("The booking server sent an unexpected answer.")
    );
}

#[tokio::test]
async fn closed_presenter_aborts_quietly() {
    let (prompt, inbox) = Prompt::channel();
    drop(inbox);
    let server = FakeServer::answering(r#"{"ok":true}"#);
    let flow = AvailabilityFlow::new(prompt, server.clone(), CsrfToken::default());

    let outcome = flow.search(RoomId::new(1)).await;

    assert_eq!(
        outcome,
        FlowOutcome::Aborted(AbortReason::Dismissed(DismissReason::PresenterClosed))
    );
    assert!(server.calls().is_empty());
}
