//! The generated event summary

use serde::{Deserialize, Serialize};

/// Result of one successful summarization
///
/// The four fields always come from the same backend response, so they are
/// stored together and replaced together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSummary {
    pub summary: String,
    pub poster_url: Option<String>,
    pub event_name: Option<String>,
    pub rules: Option<String>,
}

impl EventSummary {
    /// True when a non-empty rules document was generated
    pub fn has_rules(&self) -> bool {
        self.rules.as_deref().is_some_and(|r| !r.trim().is_empty())
    }

    /// True when a poster image URL was returned
    pub fn has_poster(&self) -> bool {
        self.poster_url.is_some()
    }
}
