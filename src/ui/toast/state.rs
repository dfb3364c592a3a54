use crate::ui::mvi::UiState;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Failure,
}

/// A transient message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub text: String,
    pub severity: Severity,
}

impl Notification {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Success,
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Failure,
        }
    }
}

/// The single active notification, if any.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ToastState {
    #[default]
    None,
    Showing {
        notification: Notification,
        /// Tick at or after this instant hides the toast.
        expires_at: Instant,
    },
}

impl UiState for ToastState {}

impl ToastState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::None)
    }

    pub fn notification(&self) -> Option<&Notification> {
        match self {
            Self::None => None,
            Self::Showing { notification, .. } => Some(notification),
        }
    }

    pub fn expires_at(&self) -> Option<Instant> {
        match self {
            Self::None => None,
            Self::Showing { expires_at, .. } => Some(*expires_at),
        }
    }
}
