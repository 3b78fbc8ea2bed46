//! eventdesk - event planning assistant client
//!
//! The client half of a conversational event planner. A chat panel records
//! facts about the event; eventdesk keeps the fact list in sync with the
//! backend and runs the staged summary workflow that turns those facts into a
//! summary, a poster and a rules document.
//!
//! # Modules
//!
//! - [`api`] - backend trait, HTTP client and wire types
//! - [`summary`] - fact formatter, workflow state and the summary workflow
//! - [`facts`] - fact list kept in sync with the backend
//! - [`chat`] - chat panel observer, widget actions and theme
//! - [`panel`] - view controller composing the above
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod api;
pub mod chat;
pub mod cli;
pub mod config;
pub mod domain;
pub mod facts;
pub mod panel;
pub mod summary;

// Re-export commonly used types
pub use api::{ApiError, EventBackend, HttpBackend, SummarizeResponse};
pub use chat::{ChatObserver, ColorScheme, WidgetAction};
pub use config::{BackendConfig, Config, WorkflowConfig};
pub use domain::{EventSummary, Fact};
pub use facts::FactStore;
pub use panel::EventPanel;
pub use summary::{Checklist, Phase, RunOutcome, SummaryWorkflow, WorkflowError, WorkflowState, format_markdown};
