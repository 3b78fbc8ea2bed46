//! EventBackend trait definition

use async_trait::async_trait;

use super::{ApiError, HealthResponse, SummarizeResponse};
use crate::domain::Fact;

/// The assistant backend as seen from the client
///
/// Each call is a single request; nothing is retried here. Callers decide
/// whether a failure is worth surfacing or re-triggering.
#[async_trait]
pub trait EventBackend: Send + Sync {
    /// Summarize a markdown event description (`POST /summarize`)
    async fn summarize(&self, markdown: &str) -> Result<SummarizeResponse, ApiError>;

    /// Fetch the saved facts in display order (`GET /facts`)
    async fn list_facts(&self) -> Result<Vec<Fact>, ApiError>;

    /// Mark a pending fact as saved (`POST /facts/{id}/save`)
    async fn save_fact(&self, fact_id: &str) -> Result<Fact, ApiError>;

    /// Discard a fact (`POST /facts/{id}/discard`)
    async fn discard_fact(&self, fact_id: &str) -> Result<Fact, ApiError>;

    /// Liveness probe (`GET /health`)
    async fn health(&self) -> Result<HealthResponse, ApiError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Duration;
    use tracing::debug;

    /// Mock backend for unit tests
    ///
    /// Summarize results are consumed in order; facts live in memory.
    pub struct MockBackend {
        summaries: Mutex<VecDeque<Result<SummarizeResponse, ApiError>>>,
        facts: Mutex<Vec<Fact>>,
        markdowns: Mutex<Vec<String>>,
        summarize_calls: AtomicUsize,
        list_calls: AtomicUsize,
        fail_list: AtomicBool,
        latency: Duration,
    }

    impl MockBackend {
        pub fn new(summaries: Vec<Result<SummarizeResponse, ApiError>>) -> Self {
            debug!(response_count = %summaries.len(), "MockBackend::new: called");
            Self {
                summaries: Mutex::new(summaries.into()),
                facts: Mutex::new(Vec::new()),
                markdowns: Mutex::new(Vec::new()),
                summarize_calls: AtomicUsize::new(0),
                list_calls: AtomicUsize::new(0),
                fail_list: AtomicBool::new(false),
                latency: Duration::ZERO,
            }
        }

        pub fn with_facts(self, facts: Vec<Fact>) -> Self {
            *self.facts.lock().unwrap() = facts;
            self
        }

        pub fn with_latency(mut self, latency: Duration) -> Self {
            self.latency = latency;
            self
        }

        pub fn set_facts(&self, facts: Vec<Fact>) {
            *self.facts.lock().unwrap() = facts;
        }

        /// Make `list_facts` answer 503 until switched back
        pub fn fail_list_facts(&self, fail: bool) {
            self.fail_list.store(fail, Ordering::SeqCst);
        }

        pub fn summarize_calls(&self) -> usize {
            self.summarize_calls.load(Ordering::SeqCst)
        }

        pub fn list_calls(&self) -> usize {
            self.list_calls.load(Ordering::SeqCst)
        }

        pub fn markdowns(&self) -> Vec<String> {
            self.markdowns.lock().unwrap().clone()
        }

        fn status_error(status: u16) -> ApiError {
            let code = reqwest::StatusCode::from_u16(status).unwrap();
            ApiError::from_status(code, "")
        }
    }

    #[async_trait]
    impl EventBackend for MockBackend {
        async fn summarize(&self, markdown: &str) -> Result<SummarizeResponse, ApiError> {
            debug!("MockBackend::summarize: called");
            self.summarize_calls.fetch_add(1, Ordering::SeqCst);
            self.markdowns.lock().unwrap().push(markdown.to_string());
            if !self.latency.is_zero() {
                tokio::time::sleep(self.latency).await;
            }
            let next = self.summaries.lock().unwrap().pop_front();
            next.unwrap_or_else(|| Err(ApiError::InvalidResponse("No more mock responses".to_string())))
        }

        async fn list_facts(&self) -> Result<Vec<Fact>, ApiError> {
            debug!("MockBackend::list_facts: called");
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_list.load(Ordering::SeqCst) {
                return Err(Self::status_error(503));
            }
            Ok(self.facts.lock().unwrap().clone())
        }

        async fn save_fact(&self, fact_id: &str) -> Result<Fact, ApiError> {
            debug!(%fact_id, "MockBackend::save_fact: called");
            let facts = self.facts.lock().unwrap();
            facts
                .iter()
                .find(|f| f.id == fact_id)
                .cloned()
                .ok_or_else(|| Self::status_error(404))
        }

        async fn discard_fact(&self, fact_id: &str) -> Result<Fact, ApiError> {
            debug!(%fact_id, "MockBackend::discard_fact: called");
            let mut facts = self.facts.lock().unwrap();
            let idx = facts
                .iter()
                .position(|f| f.id == fact_id)
                .ok_or_else(|| Self::status_error(404))?;
            Ok(facts.remove(idx))
        }

        async fn health(&self) -> Result<HealthResponse, ApiError> {
            Ok(HealthResponse {
                status: "healthy".to_string(),
            })
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_returns_summaries_in_order() {
            let backend = MockBackend::new(vec![
                Ok(SummarizeResponse {
                    summary: "first".to_string(),
                    ..Default::default()
                }),
                Err(MockBackend::status_error(500)),
            ]);

            assert_eq!(backend.summarize("a").await.unwrap().summary, "first");
            assert!(backend.summarize("b").await.is_err());
            assert!(backend.summarize("c").await.is_err());
            assert_eq!(backend.summarize_calls(), 3);
            assert_eq!(backend.markdowns(), vec!["a", "b", "c"]);
        }

        #[tokio::test]
        async fn test_mock_discard_removes_fact() {
            let backend = MockBackend::new(vec![]).with_facts(vec![Fact::new("1", "x"), Fact::new("2", "y")]);

            let removed = backend.discard_fact("1").await.unwrap();
            assert_eq!(removed.id, "1");
            assert_eq!(backend.list_facts().await.unwrap(), vec![Fact::new("2", "y")]);
            assert!(backend.discard_fact("1").await.unwrap_err().is_not_found());
        }
    }
}
