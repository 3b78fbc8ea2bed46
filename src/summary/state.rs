//! Summary workflow state
//!
//! Pure data. The workflow is the only writer; views read snapshots through
//! a watch channel. Transition methods encode the allowed moves so that the
//! checklist can be derived instead of stored.

use serde::Serialize;

use crate::domain::EventSummary;

/// Where the summary workflow currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    /// Nothing requested yet, or explicitly reset
    #[default]
    Idle,
    /// Waiting out the venue delay (step 1 in progress)
    ContactingVenues,
    /// Summarize request in flight (steps 2 and 3 in progress)
    Summarizing,
    /// Response applied
    Done,
    /// Request failed; see `WorkflowState::error`
    Failed,
}

impl Phase {
    /// True while a run is between reset and its terminal phase
    pub fn is_running(&self) -> bool {
        matches!(self, Self::ContactingVenues | Self::Summarizing)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::ContactingVenues => write!(f, "contacting-venues"),
            Self::Summarizing => write!(f, "summarizing"),
            Self::Done => write!(f, "done"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// The three progress steps shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Checklist {
    /// Step 1: venue delay elapsed
    pub venues_contacted: bool,
    /// Step 2: summary and poster fields received
    pub poster_generated: bool,
    /// Step 3: a non-empty rules document received
    pub rules_generated: bool,
}

impl Checklist {
    pub fn all_done(&self) -> bool {
        self.venues_contacted && self.poster_generated && self.rules_generated
    }
}

/// Snapshot of the summary workflow
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorkflowState {
    pub phase: Phase,
    pub summary: Option<EventSummary>,
    pub error: Option<String>,
}

impl WorkflowState {
    /// Derive the checklist from phase and data
    pub fn checklist(&self) -> Checklist {
        // Failure is only possible after the delay, so step 1 holds there too
        let venues_contacted = matches!(self.phase, Phase::Summarizing | Phase::Done | Phase::Failed);
        Checklist {
            venues_contacted,
            poster_generated: self.summary.is_some(),
            rules_generated: self.summary.as_ref().is_some_and(EventSummary::has_rules),
        }
    }

    pub fn poster_url(&self) -> Option<&str> {
        self.summary.as_ref().and_then(|s| s.poster_url.as_deref())
    }

    pub fn event_name(&self) -> Option<&str> {
        self.summary.as_ref().and_then(|s| s.event_name.as_deref())
    }

    pub fn rules(&self) -> Option<&str> {
        self.summary.as_ref().and_then(|s| s.rules.as_deref())
    }

    /// Start a new run: clear all results and the previous error
    pub(crate) fn begin(&mut self) {
        self.phase = Phase::ContactingVenues;
        self.summary = None;
        self.error = None;
    }

    /// The venue delay has elapsed
    pub(crate) fn venues_contacted(&mut self) {
        self.phase = Phase::Summarizing;
    }

    /// Apply a successful response in one step
    pub(crate) fn complete(&mut self, summary: EventSummary) {
        self.phase = Phase::Done;
        self.summary = Some(summary);
        self.error = None;
    }

    /// Record a failure without touching existing data
    pub(crate) fn fail(&mut self, message: String) {
        self.phase = Phase::Failed;
        self.error = Some(message);
    }

    /// Back to the mount-time state
    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(rules: Option<&str>) -> EventSummary {
        EventSummary {
            summary: "Paris AI Hackathon, 120 people".to_string(),
            poster_url: None,
            event_name: Some("Paris AI Hackathon".to_string()),
            rules: rules.map(str::to_string),
        }
    }

    #[test]
    fn test_initial_state_is_empty() {
        let state = WorkflowState::default();

        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.checklist(), Checklist::default());
        assert!(state.summary.is_none());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_checklist_follows_phases() {
        let mut state = WorkflowState::default();

        state.begin();
        assert_eq!(state.checklist(), Checklist::default());
        assert!(state.phase.is_running());

        state.venues_contacted();
        let checklist = state.checklist();
        assert!(checklist.venues_contacted);
        assert!(!checklist.poster_generated);

        state.complete(summary(Some("Rule A")));
        assert!(state.checklist().all_done());
        assert!(state.phase.is_terminal());
    }

    #[test]
    fn test_rules_step_requires_rules() {
        let mut state = WorkflowState::default();
        state.begin();
        state.venues_contacted();
        state.complete(summary(None));

        let checklist = state.checklist();
        assert!(checklist.venues_contacted);
        assert!(checklist.poster_generated);
        assert!(!checklist.rules_generated);
    }

    #[test]
    fn test_failure_keeps_step_one_only() {
        let mut state = WorkflowState::default();
        state.begin();
        state.venues_contacted();
        state.fail("Failed to generate summary: Internal Server Error".to_string());

        let checklist = state.checklist();
        assert!(checklist.venues_contacted);
        assert!(!checklist.poster_generated);
        assert!(!checklist.rules_generated);
        assert_eq!(state.phase, Phase::Failed);
    }

    #[test]
    fn test_begin_clears_previous_results() {
        let mut state = WorkflowState::default();
        state.begin();
        state.venues_contacted();
        state.complete(summary(Some("Rule A")));
        state.fail("late failure".to_string());
        assert!(state.summary.is_some(), "failure must not clear data");

        state.begin();
        assert!(state.summary.is_none());
        assert!(state.error.is_none());
        assert_eq!(state.phase, Phase::ContactingVenues);
    }

    #[test]
    fn test_accessors() {
        let mut state = WorkflowState::default();
        state.complete(summary(Some("Rule A")));

        assert_eq!(state.event_name(), Some("Paris AI Hackathon"));
        assert_eq!(state.rules(), Some("Rule A"));
        assert_eq!(state.poster_url(), None);

        state.clear();
        assert_eq!(state, WorkflowState::default());
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::ContactingVenues.to_string(), "contacting-venues");
        assert_eq!(Phase::Failed.to_string(), "failed");
    }
}
