/// Marker trait for UI state: cloneable snapshots holding everything a view
/// needs to render.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
