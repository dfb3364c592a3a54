use std::future::Future;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::api::{ApiClient, ApiError, ErrorInfo};
use crate::fetch::Waker;
use crate::ui::events::{AppEvent, WriteAction, WriteOutcome};
use crate::ui::input::handle_key;
use crate::ui::send_coin::SendCoinIntent;
use crate::ui::toast::{Notification, ToastHandle, ToastProvider};
use crate::ui::views::{Screen, View};

pub const SEND_COINS_SUCCESS: &str = "Sent coins successfully";
pub const SEND_COINS_FAILURE: &str = "Failed to send coins";
pub const UPDATE_BLOCKCHAIN_SUCCESS: &str = "Updated blockchain successfully";
pub const UPDATE_BLOCKCHAIN_FAILURE: &str = "Failed to update blockchain";
pub const GENERATE_BLOCK_SUCCESS: &str = "Requested a new block";
pub const GENERATE_BLOCK_FAILURE: &str = "Failed to generate block";

pub struct App {
    should_quit: bool,
    client: ApiClient,
    toast: ToastProvider,
    view: View,
    /// Bumped whenever a view is mounted.
    mount: u64,
    events: Sender<AppEvent>,
}

impl App {
    /// Build the app and mount the home screen.
    ///
    /// `events` receives fetch wake-ups and write completions. Must be
    /// called from within a tokio runtime.
    pub fn new(client: ApiClient, toast_duration: Duration, events: Sender<AppEvent>) -> Self {
        let waker = fetch_waker(&events);
        let view = View::mount(Screen::Home, client.clone(), waker);
        Self {
            should_quit: false,
            client,
            toast: ToastProvider::new(toast_duration),
            view,
            mount: 0,
            events,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    pub fn screen(&self) -> Screen {
        self.view.screen()
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }

    /// Capability for code that wants to notify the user.
    pub fn toast_handle(&self) -> ToastHandle {
        self.toast.handle()
    }

    pub fn current_toast(&self) -> Option<Notification> {
        self.toast.current()
    }

    pub fn close_toast(&mut self) {
        self.toast.close();
    }

    /// Switch screens. Re-selecting the active screen keeps its view.
    pub fn navigate(&mut self, screen: Screen) {
        if self.view.screen() == screen {
            return;
        }
        tracing::info!(from = ?self.view.screen(), to = ?screen, "Switching screen");
        let waker = fetch_waker(&self.events);
        self.view = View::mount(screen, self.client.clone(), waker);
        self.mount += 1;
    }

    pub fn refresh(&mut self) {
        self.view.refresh();
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => handle_key(self, key),
            AppEvent::WriteFinished(outcome) => self.on_write_finished(outcome),
            AppEvent::Tick | AppEvent::Resize(..) | AppEvent::FetchSettled => {}
        }
        self.on_fetch_settled();
        self.on_tick(Instant::now());
    }

    pub fn on_fetch_settled(&mut self) -> bool {
        self.view.poll()
    }

    pub fn on_tick(&mut self, now: Instant) {
        if self.toast.tick(now) {
            tracing::trace!("Toast expired");
        }
    }

    /// How long the event loop may sleep: the tick rate, or less if a
    /// toast expires sooner.
    pub fn next_wakeup(&self, tick_rate: Duration, now: Instant) -> Duration {
        match self.toast.deadline() {
            Some(deadline) => deadline.saturating_duration_since(now).min(tick_rate),
            None => tick_rate,
        }
    }

    /// Validate the form and post the transaction.
    pub fn submit_send_coins(&mut self) {
        let View::Home(home) = &mut self.view else {
            return;
        };
        if home.form().submitting {
            tracing::debug!("Send already in flight; ignoring submit");
            return;
        }

        let request = match home.form().to_request() {
            Ok(request) => request,
            Err(err) => {
                tracing::debug!("Send form rejected: {}", err);
                self.toast.handle().failure(err.to_string());
                return;
            }
        };

        home.dispatch_form(SendCoinIntent::Submitted);
        let client = self.client.clone();
        self.spawn_write(WriteAction::SendCoins, async move {
            client.send_coins(&request).await
        });
    }

    /// Start the action selected on the Update Blockchain screen.
    pub fn run_selected_sync_action(&mut self) {
        let View::UpdateBlockchain(view) = &mut self.view else {
            return;
        };
        if view.in_flight().is_some() {
            return;
        }
        let action = view.selected();
        view.set_in_flight(Some(action));

        let client = self.client.clone();
        match action {
            WriteAction::GenerateBlock => {
                self.spawn_write(action, async move { client.generate_block().await })
            }
            _ => self.spawn_write(WriteAction::UpdateBlockchain, async move {
                client.update_blockchain().await
            }),
        }
    }

    /// Report a finished write: exactly one toast, then form bookkeeping.
    ///
    /// The toast is always shown. The view is only touched if it is the
    /// same mount that started the request.
    pub fn on_write_finished(&mut self, outcome: WriteOutcome) {
        let (success, failure) = match outcome.action {
            WriteAction::SendCoins => (SEND_COINS_SUCCESS, SEND_COINS_FAILURE),
            WriteAction::UpdateBlockchain => (UPDATE_BLOCKCHAIN_SUCCESS, UPDATE_BLOCKCHAIN_FAILURE),
            WriteAction::GenerateBlock => (GENERATE_BLOCK_SUCCESS, GENERATE_BLOCK_FAILURE),
        };
        let toast = self.toast.handle();

        match &outcome.result {
            Ok(()) => toast.success(success),
            Err(_) => toast.failure(failure),
        }

        if outcome.mount != self.mount {
            tracing::debug!(
                action = ?outcome.action,
                started = outcome.mount,
                current = self.mount,
                "Write finished after its view was unmounted"
            );
            return;
        }

        match (&mut self.view, outcome.action) {
            (View::Home(home), WriteAction::SendCoins) => {
                let intent = if outcome.result.is_ok() {
                    SendCoinIntent::SubmitSucceeded
                } else {
                    SendCoinIntent::SubmitFailed
                };
                home.dispatch_form(intent);
            }
            (
                View::UpdateBlockchain(view),
                WriteAction::UpdateBlockchain | WriteAction::GenerateBlock,
            ) => view.set_in_flight(None),
            _ => {}
        }
    }

    fn spawn_write<F>(&self, action: WriteAction, request: F)
    where
        F: Future<Output = Result<(), ApiError>> + Send + 'static,
    {
        let events = self.events.clone();
        let mount = self.mount;
        tracing::info!(?action, mount, "Starting write request");
        tokio::spawn(async move {
            let result = request.await.map_err(|err| {
                tracing::warn!(
                    ?action,
                    error_type = err.error_type(),
                    "Write request failed: {}",
                    err
                );
                ErrorInfo::from(err)
            });
            if events
                .send(AppEvent::WriteFinished(WriteOutcome {
                    action,
                    mount,
                    result,
                }))
                .is_err()
            {
                tracing::trace!(?action, "Write result dropped (UI gone)");
            }
        });
    }
}

fn fetch_waker(events: &Sender<AppEvent>) -> Waker {
    let events = events.clone();
    Arc::new(move || {
        if events.send(AppEvent::FetchSettled).is_err() {
            tracing::trace!("Fetch wake-up dropped (UI gone)");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::ui::toast::Severity;
    use std::sync::mpsc;

    fn make_app() -> (App, mpsc::Receiver<AppEvent>) {
        // Nothing listens on port 9; fetches fail without side effects.
        let config = ApiConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            ..ApiConfig::default()
        };
        let client = ApiClient::new(&config).unwrap();
        let (tx, rx) = mpsc::channel();
        (App::new(client, Duration::from_millis(3000), tx), rx)
    }

    fn failed(action: WriteAction) -> WriteOutcome {
        WriteOutcome {
            action,
            mount: 1,
            result: Err(ErrorInfo::new(crate::api::ErrorKind::Connection, "refused")),
        }
    }

    #[tokio::test]
    async fn starts_on_home() {
        let (app, _rx) = make_app();
        assert_eq!(app.screen(), Screen::Home);
        assert!(app.current_toast().is_none());
    }

    #[tokio::test]
    async fn navigate_to_same_screen_keeps_view() {
        let (mut app, _rx) = make_app();
        app.navigate(Screen::UpdateBlockchain);
        if let View::UpdateBlockchain(view) = app.view_mut() {
            view.move_selection(1);
        }
        app.navigate(Screen::UpdateBlockchain);
        match app.view() {
            View::UpdateBlockchain(view) => {
                assert_eq!(view.selected(), WriteAction::GenerateBlock)
            }
            _ => panic!("Expected UpdateBlockchain view"),
        }
    }

    #[tokio::test]
    async fn invalid_form_shows_failure_without_request() {
        let (mut app, _rx) = make_app();
        app.submit_send_coins();
        let toast = app.current_toast().unwrap();
        assert_eq!(toast.severity, Severity::Failure);
        assert_eq!(toast.text, "Recipient address is required");
        match app.view() {
            View::Home(home) => assert!(!home.form().submitting),
            _ => panic!("Expected Home view"),
        }
    }

    #[tokio::test]
    async fn sync_failure_clears_in_flight() {
        let (mut app, _rx) = make_app();
        app.navigate(Screen::UpdateBlockchain);
        app.run_selected_sync_action();
        app.on_write_finished(failed(WriteAction::UpdateBlockchain));

        assert_eq!(
            app.current_toast().map(|t| t.text),
            Some(UPDATE_BLOCKCHAIN_FAILURE.to_string())
        );
        match app.view() {
            View::UpdateBlockchain(view) => assert!(view.in_flight().is_none()),
            _ => panic!("Expected UpdateBlockchain view"),
        }
    }

    #[tokio::test]
    async fn sync_result_for_previous_mount_leaves_new_view_alone() {
        let (mut app, _rx) = make_app();
        app.navigate(Screen::UpdateBlockchain);
        app.run_selected_sync_action();
        app.navigate(Screen::Home);
        app.navigate(Screen::UpdateBlockchain);
        app.run_selected_sync_action();

        app.on_write_finished(failed(WriteAction::UpdateBlockchain));

        assert_eq!(
            app.current_toast().map(|t| t.text),
            Some(UPDATE_BLOCKCHAIN_FAILURE.to_string())
        );
        match app.view() {
            View::UpdateBlockchain(view) => {
                assert_eq!(view.in_flight(), Some(WriteAction::UpdateBlockchain))
            }
            _ => panic!("Expected UpdateBlockchain view"),
        }
    }

    #[test]
    fn fetch_waker_tolerates_closed_channel() {
        let (tx, rx) = mpsc::channel();
        let waker = fetch_waker(&tx);
        waker();
        assert!(matches!(rx.try_recv(), Ok(AppEvent::FetchSettled)));

        drop(rx);
        waker();
    }

    #[tokio::test]
    async fn next_wakeup_tracks_toast_deadline() {
        let (app, _rx) = make_app();
        let tick = Duration::from_millis(250);
        let now = Instant::now();
        assert_eq!(app.next_wakeup(tick, now), tick);

        app.toast_handle().show_at(Notification::success("x"), now);
        assert_eq!(
            app.next_wakeup(tick, now + Duration::from_millis(2900)),
            Duration::from_millis(100)
        );
    }
}
