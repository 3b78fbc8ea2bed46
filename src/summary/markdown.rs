//! Fact list to markdown

use crate::domain::Fact;

const HEADING: &str = "# Event Details";

/// Document sent when no facts have been recorded
pub const EMPTY_PLACEHOLDER: &str = "# Event Details\n\nNo event details recorded yet.";

/// Render facts as a numbered markdown list, 1-indexed, in input order
///
/// No trailing newline. An empty slice yields [`EMPTY_PLACEHOLDER`].
pub fn format_markdown(facts: &[Fact]) -> String {
    if facts.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }

    let items = facts
        .iter()
        .enumerate()
        .map(|(i, fact)| format!("{}. {}", i + 1, fact.text))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}\n\n{}", HEADING, items)
}
