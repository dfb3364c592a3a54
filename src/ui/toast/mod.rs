//! Notification-Broadcast primitive.
//!
//! One [`ToastProvider`] owns the active notification; any number of
//! [`ToastHandle`]s request new ones. The newest request always replaces
//! the current notification, and it disappears after the configured
//! duration or when closed.

mod intent;
mod provider;
mod reducer;
mod state;
mod widget;

pub use intent::ToastIntent;
pub use provider::{ToastHandle, ToastProvider, DEFAULT_TOAST_DURATION};
pub use reducer::ToastReducer;
pub use state::{Notification, Severity, ToastState};
pub use widget::{render_toast, toast_rect};
