/// Marker trait for intents: key presses, request completions, timer ticks.
pub trait Intent: Send + 'static {}
