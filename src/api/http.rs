//! HTTP implementation of the event backend
//!
//! Thin reqwest wrapper: one request per call, JSON in and out, non-2xx
//! responses mapped to `ApiError::Status`.

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use super::{ApiError, EventBackend, FactResponse, FactsResponse, HealthResponse, SummarizeRequest, SummarizeResponse};
use crate::config::BackendConfig;
use crate::domain::Fact;

/// Event backend reached over HTTP
#[derive(Clone)]
pub struct HttpBackend {
    base_url: String,
    base: Url,
    http: Client,
}

impl HttpBackend {
    /// Create a new client from configuration
    pub fn from_config(config: &BackendConfig) -> Result<Self, ApiError> {
        debug!(?config, "from_config: called");
        let base_url = config.base_url.trim_end_matches('/').to_string();
        let base = Url::parse(&base_url)
            .map_err(|e| ApiError::InvalidRequest(format!("backend URL {}: {}", base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidRequest(format!("backend URL {} cannot take a path", base_url)));
        }

        let timeout = Duration::from_millis(config.timeout_ms);
        let http = Client::builder().timeout(timeout).build().map_err(ApiError::Network)?;

        Ok(Self { base_url, base, http })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `/facts/{id}/{action}` with the id as a single encoded path segment
    fn fact_url(&self, fact_id: &str, action: &str) -> Result<Url, ApiError> {
        if matches!(fact_id.trim(), "" | "." | "..") {
            return Err(ApiError::InvalidRequest(format!("invalid fact id {:?}", fact_id)));
        }

        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidRequest(format!("backend URL {} cannot take a path", self.base_url)))?
            .pop_if_empty()
            .extend(["facts", fact_id, action]);
        Ok(url)
    }

    /// Decode a JSON body, or turn a non-success status into an error
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = %status.as_u16(), "decode: non-success status");
            return Err(ApiError::from_status(status, &body));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl EventBackend for HttpBackend {
    async fn summarize(&self, markdown: &str) -> Result<SummarizeResponse, ApiError> {
        debug!(markdown_len = %markdown.len(), "summarize: called");
        let body = SummarizeRequest {
            markdown: markdown.to_string(),
        };
        let response = self.http.post(self.url("/summarize")).json(&body).send().await?;
        Self::decode(response).await
    }

    async fn list_facts(&self) -> Result<Vec<Fact>, ApiError> {
        debug!("list_facts: called");
        let response = self.http.get(self.url("/facts")).send().await?;
        let envelope: FactsResponse = Self::decode(response).await?;
        Ok(envelope.facts)
    }

    async fn save_fact(&self, fact_id: &str) -> Result<Fact, ApiError> {
        debug!(%fact_id, "save_fact: called");
        let url = self.fact_url(fact_id, "save")?;
        let response = self.http.post(url).send().await?;
        let envelope: FactResponse = Self::decode(response).await?;
        Ok(envelope.fact)
    }

    async fn discard_fact(&self, fact_id: &str) -> Result<Fact, ApiError> {
        debug!(%fact_id, "discard_fact: called");
        let url = self.fact_url(fact_id, "discard")?;
        let response = self.http.post(url).send().await?;
        let envelope: FactResponse = Self::decode(response).await?;
        Ok(envelope.fact)
    }

    async fn health(&self) -> Result<HealthResponse, ApiError> {
        debug!("health: called");
        let response = self.http.get(self.url("/health")).send().await?;
        Self::decode(response).await
    }
}
