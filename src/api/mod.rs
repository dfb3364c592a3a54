//! Typed client for the wallet backend HTTP API.

mod client;
mod error;
mod types;

pub use client::ApiClient;
pub use error::{ApiError, ErrorInfo, ErrorKind};
pub use types::{
    AddressResponse, BalanceResponse, TransactionRequest, ADDRESS_PATH, BALANCE_PATH,
    GENERATE_BLOCK_PATH, TRANSACTION_PATH,
};
