use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::sync::mpsc;

use crate::api::{ApiClient, ErrorInfo};
use crate::ui::mvi::Reducer;

use super::intent::FetchIntent;
use super::reducer::FetchReducer;
use super::state::FetchResult;

/// Callback run on the network task after a request settles.
pub type Waker = Arc<dyn Fn() + Send + Sync>;

struct Completion<T> {
    seq: u64,
    outcome: Result<T, ErrorInfo>,
}

/// Reads one resource path and keeps its tri-state result.
///
/// Each view owns its own instance; nothing is shared or cached between
/// instances. Requests run on the tokio runtime and report back over a
/// channel that only the owning view drains (see [`Fetcher::poll`]), so
/// all state changes happen on the UI thread.
///
/// Every request is tagged with a sequence number and only the latest one
/// may update the result. Dropping the fetcher closes the channel; requests
/// still in flight run to completion and their results are discarded.
pub struct Fetcher<T> {
    client: ApiClient,
    path: Option<String>,
    latest_seq: u64,
    result: FetchResult<T>,
    tx: mpsc::UnboundedSender<Completion<T>>,
    rx: mpsc::UnboundedReceiver<Completion<T>>,
    waker: Option<Waker>,
}

impl<T> Fetcher<T>
where
    T: DeserializeOwned + Clone + PartialEq + Send + 'static,
{
    pub fn new(client: ApiClient) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            client,
            path: None,
            latest_seq: 0,
            result: FetchResult::default(),
            tx,
            rx,
            waker: None,
        }
    }

    /// Run `waker` after each request settles, e.g. to wake the event loop.
    pub fn with_waker(mut self, waker: Waker) -> Self {
        self.waker = Some(waker);
        self
    }

    pub fn result(&self) -> &FetchResult<T> {
        &self.result
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Fetch `path` unless it is already the current path.
    ///
    /// On a change the result is reset to loading before this returns.
    /// Must be called from within a tokio runtime.
    pub fn use_path(&mut self, path: &str) {
        if self.path.as_deref() == Some(path) {
            return;
        }
        self.path = Some(path.to_string());
        self.dispatch(FetchIntent::Started { path_changed: true });
        self.issue(path.to_string());
    }

    /// Fetch the current path again, keeping the displayed result until
    /// the new one arrives. No-op before the first `use_path`.
    pub fn refresh(&mut self) {
        let Some(path) = self.path.clone() else {
            return;
        };
        self.dispatch(FetchIntent::Started {
            path_changed: false,
        });
        self.issue(path);
    }

    /// Apply every completion received so far. Returns true if the result
    /// changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(completion) = self.rx.try_recv() {
            if completion.seq != self.latest_seq {
                tracing::trace!(
                    seq = completion.seq,
                    latest = self.latest_seq,
                    "Discarding stale fetch result"
                );
                continue;
            }
            let intent = match completion.outcome {
                Ok(data) => FetchIntent::Succeeded(data),
                Err(error) => FetchIntent::Failed(error),
            };
            self.dispatch(intent);
            changed = true;
        }
        changed
    }

    fn dispatch(&mut self, intent: FetchIntent<T>) {
        self.result = FetchReducer::<T>::reduce(std::mem::take(&mut self.result), intent);
    }

    fn issue(&mut self, path: String) {
        self.latest_seq += 1;
        let seq = self.latest_seq;
        let client = self.client.clone();
        let tx = self.tx.clone();
        let waker = self.waker.clone();

        tracing::debug!(%path, seq, "Fetching resource");
        tokio::spawn(async move {
            let outcome = client.get_json::<T>(&path).await.map_err(|err| {
                tracing::warn!(
                    %path,
                    error_type = err.error_type(),
                    "Fetch failed: {}",
                    err
                );
                ErrorInfo::from(err)
            });

            if tx.send(Completion { seq, outcome }).is_err() {
                tracing::trace!(%path, seq, "Fetch result dropped (view unmounted)");
                return;
            }
            if let Some(waker) = waker {
                waker();
            }
        });
    }
}
