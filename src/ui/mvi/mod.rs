//! Model-View-Intent (MVI) primitives shared by the UI state machines.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Network completions, timer ticks and key presses all enter as intents;
//! side effects (spawning requests, showing toasts) happen around the
//! reducer call, never inside it.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
