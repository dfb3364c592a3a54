use crate::ui::mvi::Reducer;

use super::intent::ToastIntent;
use super::state::ToastState;

pub struct ToastReducer;

impl Reducer for ToastReducer {
    type State = ToastState;
    type Intent = ToastIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ToastIntent::Show {
                notification,
                now,
                duration,
            } => ToastState::Showing {
                notification,
                expires_at: now + duration,
            },
            ToastIntent::Close => ToastState::None,
            ToastIntent::Tick { now } => match state {
                ToastState::Showing { expires_at, .. } if now >= expires_at => ToastState::None,
                other => other,
            },
        }
    }
}
