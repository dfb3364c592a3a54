use crate::ui::mvi::Intent;
use std::time::{Duration, Instant};

use super::state::Notification;

#[derive(Debug, Clone)]
pub enum ToastIntent {
    /// Replace whatever is showing and start a fresh display timer.
    Show {
        notification: Notification,
        now: Instant,
        duration: Duration,
    },
    /// Dismissed by the user or by code.
    Close,
    /// Clock advanced; hides the toast once its deadline has passed.
    Tick { now: Instant },
}

impl Intent for ToastIntent {}
