//! Summary generation
//!
//! Turns the recorded facts into a markdown document, sends it to the
//! backend, and tracks the three-step progress checklist while it runs.
//!
//! - [`format_markdown`] - pure fact formatter
//! - [`WorkflowState`] - phase plus results, checklist derived from both
//! - [`SummaryWorkflow`] - the async run with overlap and close guards

mod error;
mod markdown;
mod state;
mod workflow;

pub use error::WorkflowError;
pub use markdown::{EMPTY_PLACEHOLDER, format_markdown};
pub use state::{Checklist, Phase, WorkflowState};
pub use workflow::{RunOutcome, SummaryWorkflow};
