//! Backend API error types

use thiserror::Error;

/// Errors that can occur while talking to the event backend
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API error {status} {status_text}{}", detail_suffix(.detail))]
    Status {
        status: u16,
        status_text: String,
        detail: Option<String>,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_ref().map(|d| format!(": {}", d)).unwrap_or_default()
}

impl ApiError {
    /// Build a status error from a response code and optional body
    ///
    /// FastAPI error bodies look like `{"detail": "..."}`; anything else is
    /// dropped rather than echoed back to the user.
    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let status_text = status.canonical_reason().unwrap_or("Unknown Status").to_string();
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| match v.get("detail") {
                Some(serde_json::Value::String(s)) => Some(s.clone()),
                Some(serde_json::Value::Null) | None => None,
                Some(other) => Some(other.to_string()),
            })
            .filter(|d| !d.trim().is_empty());

        ApiError::Status {
            status: status.as_u16(),
            status_text,
            detail,
        }
    }

    /// Check if the backend reported a missing resource
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }

    /// Short text suitable for showing to the user
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status {
                status_text,
                detail: Some(detail),
                ..
            } => format!("{} ({})", status_text, detail),
            ApiError::Status { status_text, .. } => status_text.clone(),
            ApiError::Network(e) if e.is_timeout() => "the backend did not respond in time".to_string(),
            ApiError::Network(e) if e.is_connect() => "could not reach the backend".to_string(),
            ApiError::Network(e) => e.to_string(),
            ApiError::InvalidResponse(msg) => format!("invalid response from backend: {}", msg),
            ApiError::InvalidRequest(msg) => msg.clone(),
        }
    }
}
