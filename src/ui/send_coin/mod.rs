//! Send-coin form: recipient, value and fee entry plus submit lifecycle.

mod intent;
mod reducer;
mod state;

pub use intent::SendCoinIntent;
pub use reducer::SendCoinReducer;
pub use state::{FormError, FormField, SendCoinFormState};
