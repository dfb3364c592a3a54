use crate::ui::mvi::Reducer;

use super::intent::SendCoinIntent;
use super::state::SendCoinFormState;

pub struct SendCoinReducer;

impl Reducer for SendCoinReducer {
    type State = SendCoinFormState;
    type Intent = SendCoinIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SendCoinIntent::Input(ch) => {
                let mut state = state;
                let focused = state.focused;
                if !ch.is_control() {
                    state.field_mut(focused).push(ch);
                }
                state
            }
            SendCoinIntent::Backspace => {
                let mut state = state;
                let focused = state.focused;
                state.field_mut(focused).pop();
                state
            }
            SendCoinIntent::FocusNext => SendCoinFormState {
                focused: state.focused.next(),
                ..state
            },
            SendCoinIntent::FocusPrev => SendCoinFormState {
                focused: state.focused.prev(),
                ..state
            },
            SendCoinIntent::Submitted => SendCoinFormState {
                submitting: true,
                ..state
            },
            SendCoinIntent::SubmitSucceeded => SendCoinFormState::default(),
            SendCoinIntent::SubmitFailed => SendCoinFormState {
                submitting: false,
                ..state
            },
        }
    }
}
