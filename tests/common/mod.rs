//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use sbwallet::api::ApiClient;
use sbwallet::config::ApiConfig;
use sbwallet::fetch::Fetcher;
use sbwallet::ui::app::App;
use sbwallet::ui::events::{AppEvent, WriteOutcome};
use serde::de::DeserializeOwned;
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};
use tempfile::TempDir;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Base URL where nothing is listening.
pub fn dead_base_url() -> String {
    format!("http://127.0.0.1:{}", free_port())
}

/// Create a temporary config file with the given TOML contents.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        update_blockchain_url: format!("{}/update-balance", base_url),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    }
}

pub fn client_for(base_url: &str) -> ApiClient {
    ApiClient::new(&api_config(base_url)).expect("Failed to build client")
}

/// Poll `fetcher` until its result stops loading.
pub async fn settle<T>(fetcher: &mut Fetcher<T>, timeout: Duration) -> bool
where
    T: DeserializeOwned + Clone + PartialEq + Send + 'static,
{
    let start = Instant::now();
    while start.elapsed() < timeout {
        fetcher.poll();
        if !fetcher.result().is_loading {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    false
}

// -- App helpers --------------------------------------------------------------

pub fn make_app(client: ApiClient) -> (App, Receiver<AppEvent>) {
    let (tx, rx) = mpsc::channel();
    (App::new(client, Duration::from_millis(3000), tx), rx)
}

/// Feed queued events into `app` until `done` holds or `timeout` passes.
pub async fn drive_until<F>(
    app: &mut App,
    rx: &Receiver<AppEvent>,
    timeout: Duration,
    mut done: F,
) -> bool
where
    F: FnMut(&App) -> bool,
{
    let start = Instant::now();
    while start.elapsed() < timeout {
        while let Ok(event) = rx.try_recv() {
            app.handle_event(event);
        }
        if done(app) {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    false
}

/// Wait for the next write completion, applying other events on the way.
pub async fn next_write_outcome(
    app: &mut App,
    rx: &Receiver<AppEvent>,
    timeout: Duration,
) -> Option<WriteOutcome> {
    let start = Instant::now();
    while start.elapsed() < timeout {
        while let Ok(event) = rx.try_recv() {
            if let AppEvent::WriteFinished(outcome) = event {
                app.handle_event(AppEvent::WriteFinished(outcome.clone()));
                return Some(outcome);
            }
            app.handle_event(event);
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    None
}
