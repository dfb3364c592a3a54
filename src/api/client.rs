use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::api::error::ApiError;
use crate::api::types::{
    AddressResponse, BalanceResponse, TransactionRequest, ADDRESS_PATH, BALANCE_PATH,
    GENERATE_BLOCK_PATH, TRANSACTION_PATH,
};
use crate::config::ApiConfig;

/// Longest backend error body echoed into an error message.
const MAX_ERROR_BODY: usize = 200;

/// HTTP client for the wallet backend.
///
/// Cheap to clone: the underlying connection pool is shared.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    update_blockchain_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|source| ApiError::ClientBuild { source })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            update_blockchain_url: config.update_blockchain_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full request URL for a resource path.
    pub fn resource_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.resource_url(path);
        tracing::debug!(%url, "GET");
        let response = self.execute(self.client.get(&url), &url).await?;
        response
            .json::<T>()
            .await
            .map_err(|source| ApiError::Decode { url, source })
    }

    pub async fn balance(&self) -> Result<BalanceResponse, ApiError> {
        self.get_json(BALANCE_PATH).await
    }

    pub async fn address(&self) -> Result<AddressResponse, ApiError> {
        self.get_json(ADDRESS_PATH).await
    }

    pub async fn send_coins(&self, request: &TransactionRequest) -> Result<(), ApiError> {
        let url = self.resource_url(TRANSACTION_PATH);
        tracing::debug!(%url, recipient = %request.recipient, value = request.value, fee = request.fee, "POST");
        self.execute(self.client.post(&url).json(request), &url)
            .await
            .map(|_| ())
    }

    /// Ask the node to fetch the full chain and recompute the balance.
    pub async fn update_blockchain(&self) -> Result<(), ApiError> {
        let url = self.update_blockchain_url.clone();
        tracing::debug!(%url, "POST");
        self.execute(self.client.post(&url), &url).await.map(|_| ())
    }

    pub async fn generate_block(&self) -> Result<(), ApiError> {
        let url = self.resource_url(GENERATE_BLOCK_PATH);
        tracing::debug!(%url, "POST");
        self.execute(self.client.post(&url), &url).await.map(|_| ())
    }

    /// Send the request and turn any non-2xx status into `ApiError::Status`.
    async fn execute(
        &self,
        builder: RequestBuilder,
        url: &str,
    ) -> Result<reqwest::Response, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::from_transport(url, e))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            url: url.to_string(),
            status: status.as_u16(),
            message: error_message(&body, status),
        })
    }
}

/// Pull a readable message out of an error body.
///
/// The backend answers failures with `{"error": "..."}`; anything else is
/// echoed verbatim (truncated), and an empty body falls back to the reason
/// phrase.
fn error_message(body: &str, status: reqwest::StatusCode) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("error").and_then(|v| v.as_str()) {
            return message.to_string();
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string();
    }
    trimmed.chars().take(MAX_ERROR_BODY).collect()
}
