//! Fetch-Resource primitive.
//!
//! A [`Fetcher`] turns "show the resource at this path" into a request on
//! the async runtime and a [`FetchResult`] the view renders from.
//!
//! - `state.rs` - Tri-state result (loading / data / error)
//! - `intent.rs` - Request lifecycle events
//! - `reducer.rs` - Pure transitions over the result
//! - `fetcher.rs` - Request issuing, sequencing and completion delivery

mod fetcher;
mod intent;
mod reducer;
mod state;

pub use fetcher::{Fetcher, Waker};
pub use intent::FetchIntent;
pub use reducer::FetchReducer;
pub use state::FetchResult;
