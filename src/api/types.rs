use serde::{Deserialize, Serialize};

/// Resource path of the balance endpoint.
pub const BALANCE_PATH: &str = "/balance";
/// Resource path of the wallet address endpoint.
pub const ADDRESS_PATH: &str = "/address/me";
/// Resource path for submitting a transaction.
pub const TRANSACTION_PATH: &str = "/transaction";
/// Resource path asking the node to mine a block paying this wallet.
pub const GENERATE_BLOCK_PATH: &str = "/generate-block";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub balance: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressResponse {
    pub address: String,
}

/// Body of `POST /transaction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub recipient: String,
    pub value: u64,
    pub fee: u64,
}
