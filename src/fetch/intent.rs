use crate::api::ErrorInfo;
use crate::ui::mvi::Intent;

#[derive(Debug)]
pub enum FetchIntent<T> {
    /// A request was issued. `path_changed` is false for a refresh of the
    /// path already on display.
    Started { path_changed: bool },
    /// The latest request returned a decoded payload.
    Succeeded(T),
    /// The latest request failed.
    Failed(ErrorInfo),
}

impl<T: Send + 'static> Intent for FetchIntent<T> {}
