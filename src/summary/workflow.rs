//! SummaryWorkflow - staged summary generation
//!
//! One run is strictly sequential: reset, venue delay, one summarize request,
//! apply the result. Every state change is published on a watch channel so a
//! view can render the checklist as it advances.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::{WorkflowError, WorkflowState, format_markdown};
use crate::api::EventBackend;
use crate::config::WorkflowConfig;
use crate::domain::{EventSummary, Fact};

/// How a run ended when it did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// No facts to summarize; state left untouched
    Skipped,
    /// Response applied to the state
    Completed(EventSummary),
}

/// Marks a run as in flight until dropped
///
/// Dropping the run future also drops the guard, so an abandoned run never
/// leaves the workflow locked.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Owns the summary state and the single code path that mutates it
pub struct SummaryWorkflow {
    backend: Arc<dyn EventBackend>,
    venue_delay: Duration,
    state: watch::Sender<WorkflowState>,
    closed: watch::Sender<bool>,
    in_flight: AtomicBool,
}

impl SummaryWorkflow {
    pub fn new(backend: Arc<dyn EventBackend>, venue_delay: Duration) -> Self {
        debug!(?venue_delay, "SummaryWorkflow::new: called");
        let (state, _) = watch::channel(WorkflowState::default());
        let (closed, _) = watch::channel(false);
        Self {
            backend,
            venue_delay,
            state,
            closed,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn from_config(backend: Arc<dyn EventBackend>, config: &WorkflowConfig) -> Self {
        Self::new(backend, config.venue_delay())
    }

    /// Receive every state change from now on
    pub fn subscribe(&self) -> watch::Receiver<WorkflowState> {
        self.state.subscribe()
    }

    /// Current state snapshot
    pub fn state(&self) -> WorkflowState {
        self.state.borrow().clone()
    }

    pub fn venue_delay(&self) -> Duration {
        self.venue_delay
    }

    /// True while a run holds the in-flight flag
    pub fn is_running(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn is_closed(&self) -> bool {
        *self.closed.borrow()
    }

    /// Detach from the owning view
    ///
    /// A run in progress stops at its current suspension point and applies
    /// nothing further; later runs are rejected.
    pub fn close(&self) {
        debug!("SummaryWorkflow::close: called");
        self.closed.send_replace(true);
    }

    /// Return to the empty mount-time state
    pub fn reset(&self) -> Result<(), WorkflowError> {
        debug!("SummaryWorkflow::reset: called");
        let _guard = InFlightGuard::acquire(&self.in_flight).ok_or(WorkflowError::AlreadyRunning)?;
        self.apply(WorkflowState::clear)
    }

    /// Generate a summary for `facts`
    ///
    /// Empty input is a no-op. Otherwise the state is reset, the venue delay
    /// elapses, and one summarize request is made. Failures are stored in the
    /// state as a user-facing message and also returned.
    pub async fn run(&self, facts: &[Fact]) -> Result<RunOutcome, WorkflowError> {
        debug!(fact_count = %facts.len(), "run: called");
        if facts.is_empty() {
            debug!("run: no facts, skipping");
            return Ok(RunOutcome::Skipped);
        }

        let _guard = InFlightGuard::acquire(&self.in_flight).ok_or_else(|| {
            warn!("run: rejected, a run is already in flight");
            WorkflowError::AlreadyRunning
        })?;

        let markdown = format_markdown(facts);
        self.apply(WorkflowState::begin)?;

        info!(delay_ms = %self.venue_delay.as_millis(), "run: contacting venues");
        tokio::select! {
            _ = tokio::time::sleep(self.venue_delay) => {}
            _ = self.closed_signal() => {
                debug!("run: closed during venue delay");
                return Err(WorkflowError::Closed);
            }
        }
        self.apply(WorkflowState::venues_contacted)?;

        info!(markdown_len = %markdown.len(), "run: requesting summary");
        let result = tokio::select! {
            result = self.backend.summarize(&markdown) => result,
            _ = self.closed_signal() => {
                debug!("run: closed during summarize request");
                return Err(WorkflowError::Closed);
            }
        };

        match result {
            Ok(response) => {
                let summary = EventSummary::from(response);
                info!(
                    event_name = ?summary.event_name,
                    has_poster = %summary.has_poster(),
                    has_rules = %summary.has_rules(),
                    "run: summary received"
                );
                let applied = summary.clone();
                self.apply(move |state| state.complete(applied))?;
                Ok(RunOutcome::Completed(summary))
            }
            Err(e) => {
                let err = WorkflowError::Api(e);
                let message = err.to_string();
                warn!(error = %message, "run: summarize failed");
                self.apply(move |state| state.fail(message))?;
                Err(err)
            }
        }
    }

    /// Publish a state change unless the view is gone
    fn apply(&self, change: impl FnOnce(&mut WorkflowState)) -> Result<(), WorkflowError> {
        if self.is_closed() {
            debug!("apply: workflow closed, dropping update");
            return Err(WorkflowError::Closed);
        }
        self.state.send_modify(change);
        Ok(())
    }

    /// Resolves once `close` has been called
    async fn closed_signal(&self) {
        let mut rx = self.closed.subscribe();
        let observed = rx.wait_for(|closed| *closed).await.is_ok();
        if !observed {
            // Sender lives as long as self; never resolve spuriously
            std::future::pending::<()>().await;
        }
    }
}
