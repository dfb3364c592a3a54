use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use std::time::{Duration, Instant};

use crate::ui::mvi::Reducer;

use super::intent::ToastIntent;
use super::reducer::ToastReducer;
use super::state::{Notification, ToastState};

/// Default time a notification stays visible.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Owner of the one active notification.
///
/// Mounted once by the app shell. Everything else only receives a
/// [`ToastHandle`], which can request a notification but never read or
/// edit the state directly.
pub struct ToastProvider {
    state: Arc<Mutex<ToastState>>,
    duration: Duration,
}

impl ToastProvider {
    pub fn new(duration: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(ToastState::None)),
            duration,
        }
    }

    /// Capability handed to views and background tasks.
    pub fn handle(&self) -> ToastHandle {
        ToastHandle {
            target: Some(Arc::downgrade(&self.state)),
            duration: self.duration,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Dismiss the current notification early.
    pub fn close(&self) {
        apply(&self.state, ToastIntent::Close);
    }

    /// Expire the notification if its deadline has passed. Returns true if
    /// it was hidden by this call.
    pub fn tick(&self, now: Instant) -> bool {
        let mut guard = self.state.lock();
        let was_visible = guard.is_visible();
        *guard = ToastReducer::reduce(std::mem::take(&mut *guard), ToastIntent::Tick { now });
        was_visible && !guard.is_visible()
    }

    pub fn current(&self) -> Option<Notification> {
        self.state.lock().notification().cloned()
    }

    /// When the active notification will expire.
    pub fn deadline(&self) -> Option<Instant> {
        self.state.lock().expires_at()
    }

    pub fn state(&self) -> ToastState {
        self.state.lock().clone()
    }
}

impl Default for ToastProvider {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}

/// Capability to show a notification.
///
/// The default handle is not attached to any provider and ignores every
/// request, as does a handle that outlives its provider.
#[derive(Clone, Default)]
pub struct ToastHandle {
    target: Option<Weak<Mutex<ToastState>>>,
    duration: Duration,
}

impl ToastHandle {
    /// Show `notification`, replacing any notification on screen.
    pub fn show(&self, notification: Notification) {
        self.show_at(notification, Instant::now());
    }

    /// Like [`ToastHandle::show`] with an explicit start time.
    pub fn show_at(&self, notification: Notification, now: Instant) {
        let Some(state) = self.target.as_ref().and_then(Weak::upgrade) else {
            tracing::trace!(text = %notification.text, "No toast provider; notification dropped");
            return;
        };
        tracing::debug!(severity = ?notification.severity, text = %notification.text, "Showing toast");
        apply(
            &state,
            ToastIntent::Show {
                notification,
                now,
                duration: self.duration,
            },
        );
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(Notification::success(text));
    }

    pub fn failure(&self, text: impl Into<String>) {
        self.show(Notification::failure(text));
    }
}

/// Serialized entry point for toast state changes outside `tick`.
fn apply(state: &Mutex<ToastState>, intent: ToastIntent) {
    let mut guard = state.lock();
    *guard = ToastReducer::reduce(std::mem::take(&mut *guard), intent);
}
