use std::time::Duration;

use once_cell::sync::OnceCell;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use crate::data::model::{FitRequest, HealthStatus, SimulationParameters, SimulationResult};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Unexpected response code {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Shared reqwest client so every request reuses the same connection pool.
fn shared_client(timeout: Duration) -> &'static reqwest::Client {
    static CLIENT: OnceCell<reqwest::Client> = OnceCell::new();
    CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!("failed to build HTTP client with {timeout:?} timeout, using defaults: {e}");
                reqwest::Client::new()
            })
    })
}

/// Thin JSON client for the engine's REST endpoints.
#[derive(Debug, Clone)]
pub struct EngineClient {
    base_url: String,
    client: reqwest::Client,
}

impl EngineClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: shared_client(timeout).clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path such as `/api/calculate`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        let response = self.client.get(self.endpoint("/health")).send().await?;
        decode(response).await
    }

    /// `GET /api/parameters/defaults`
    pub async fn default_parameters(&self) -> Result<SimulationParameters, ApiError> {
        let response = self
            .client
            .get(self.endpoint("/api/parameters/defaults"))
            .send()
            .await?;
        decode(response).await
    }

    /// `POST /api/calculate`
    pub async fn calculate(
        &self,
        params: &SimulationParameters,
    ) -> Result<SimulationResult, ApiError> {
        let response = self
            .client
            .post(self.endpoint("/api/calculate"))
            .json(params)
            .send()
            .await?;
        decode(response).await
    }

    /// `POST /api/fit-polynomial`
    pub async fn fit_polynomial(&self, request: &FitRequest) -> Result<SimulationResult, ApiError> {
        let response = self
            .client
            .post(self.endpoint("/api/fit-polynomial"))
            .json(request)
            .send()
            .await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        debug!(%status, "engine returned an error status");
        return Err(ApiError::UnexpectedStatus { status, body });
    }
    Ok(serde_json::from_str(&body)?)
}
