use crate::api::ErrorInfo;
use crate::ui::mvi::UiState;

/// Tri-state result of a resource read.
///
/// Once a request has settled exactly one of `data` / `error` is set. The
/// only state with neither and `is_loading == false` is the initial one,
/// before the first request is issued.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResult<T> {
    pub data: Option<T>,
    pub error: Option<ErrorInfo>,
    pub is_loading: bool,
}

impl<T> Default for FetchResult<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            is_loading: false,
        }
    }
}

impl<T: Clone + PartialEq + Send + 'static> UiState for FetchResult<T> {}

impl<T> FetchResult<T> {
    /// Fresh loading state with nothing displayed.
    pub fn loading() -> Self {
        Self {
            data: None,
            error: None,
            is_loading: true,
        }
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&ErrorInfo> {
        self.error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle_and_empty() {
        let result = FetchResult::<u64>::default();
        assert!(!result.is_loading);
        assert!(result.data.is_none());
        assert!(result.error.is_none());
    }

    #[test]
    fn loading_shows_nothing() {
        let result = FetchResult::<u64>::loading();
        assert!(result.is_loading);
        assert!(result.data().is_none());
        assert!(result.error().is_none());
    }
}
