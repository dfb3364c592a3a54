use super::intent::Intent;
use super::state::UiState;

/// The only place where a state transition happens: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Must stay pure. Time is passed in through the intent, never read here.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
