use std::marker::PhantomData;

use crate::ui::mvi::Reducer;

use super::intent::FetchIntent;
use super::state::FetchResult;

/// State transitions of a single fetcher instance.
///
/// Stale completions never reach this reducer; `Fetcher` drops them by
/// sequence number before dispatching.
pub struct FetchReducer<T>(PhantomData<T>);

impl<T: Clone + PartialEq + Send + 'static> Reducer for FetchReducer<T> {
    type State = FetchResult<T>;
    type Intent = FetchIntent<T>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Data from another path must never stay on screen.
            FetchIntent::Started { path_changed: true } => FetchResult::loading(),
            FetchIntent::Started {
                path_changed: false,
            } => FetchResult {
                is_loading: true,
                ..state
            },
            FetchIntent::Succeeded(data) => FetchResult {
                data: Some(data),
                error: None,
                is_loading: false,
            },
            FetchIntent::Failed(error) => FetchResult {
                data: None,
                error: Some(error),
                is_loading: false,
            },
        }
    }
}
