//! Summary workflow error types

use thiserror::Error;

use crate::api::ApiError;

/// Errors returned by `SummaryWorkflow::run`
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("A summary is already being generated")]
    AlreadyRunning,

    #[error("The summary view was closed")]
    Closed,

    #[error("Failed to generate summary: {}", .0.user_message())]
    Api(#[from] ApiError),
}

impl WorkflowError {
    /// True if the user can simply trigger the workflow again
    pub fn is_retryable(&self) -> bool {
        matches!(self, WorkflowError::Api(_))
    }
}
