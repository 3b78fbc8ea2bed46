//! Wire types for the event backend
//!
//! Field names follow the backend's JSON exactly (snake_case).

use serde::{Deserialize, Serialize};

use crate::domain::{EventSummary, Fact};

/// Body of `POST /summarize`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub markdown: String,
}

/// Successful response of `POST /summarize`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,

    #[serde(default)]
    pub poster_url: Option<String>,

    #[serde(default)]
    pub event_name: Option<String>,

    #[serde(default)]
    pub hackathon_rules: Option<String>,
}

/// Treat empty or whitespace-only optional strings as absent
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<SummarizeResponse> for EventSummary {
    fn from(resp: SummarizeResponse) -> Self {
        Self {
            summary: resp.summary,
            poster_url: non_empty(resp.poster_url),
            event_name: non_empty(resp.event_name),
            rules: non_empty(resp.hackathon_rules),
        }
    }
}

/// Response of `GET /facts`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FactsResponse {
    #[serde(default)]
    pub facts: Vec<Fact>,
}

/// Response of `POST /facts/{id}/save` and `POST /facts/{id}/discard`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactResponse {
    pub fact: Fact,
}

/// Response of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
