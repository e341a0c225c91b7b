//! Talking to the mock API.

use dioxus_logger::tracing::debug;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::records::Loan;
use crate::records::LoanDraft;
use crate::records::User;

/// Anything that can serve the dashboard's records.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// `GET /users`.
    async fn users(&self) -> Result<Vec<User>, ApiError>;

    /// `GET /loan`.
    async fn loans(&self) -> Result<Vec<Loan>, ApiError>;

    /// `POST /loan`. Returns the record as stored, with `id` and `createdAt`
    /// filled in by the server.
    async fn create_loan(&self, draft: &LoanDraft) -> Result<Loan, ApiError>;
}

/// The hosted mock API, reached over HTTP.
#[derive(Debug, Clone)]
pub struct MockApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl MockApi {
    /// Builds a client for the API described by `config`.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = match config.timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };
        let client = builder.build().map_err(ApiError::Network)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.config.endpoint(path);
        debug!("GET {url}");
        let response = self.client.get(&url).send().await?;
        decode(response).await
    }
}

impl PartialEq for MockApi {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

impl Backend for MockApi {
    async fn users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json("users").await
    }

    async fn loans(&self) -> Result<Vec<Loan>, ApiError> {
        self.get_json("loan").await
    }

    async fn create_loan(&self, draft: &LoanDraft) -> Result<Loan, ApiError> {
        let url = self.config.endpoint("loan");
        debug!("POST {url}");
        let response = self.client.post(&url).json(draft).send().await?;
        decode(response).await
    }
}
