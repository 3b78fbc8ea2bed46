//! Event backend client
//!
//! The `EventBackend` trait is the seam between the UI-side core and the
//! assistant's REST API; `HttpBackend` is the production implementation.

mod backend;
mod error;
mod http;
mod types;

#[cfg(test)]
pub use backend::mock;
pub use backend::EventBackend;
pub use error::ApiError;
pub use http::HttpBackend;
pub use types::{FactResponse, FactsResponse, HealthResponse, SummarizeRequest, SummarizeResponse};
