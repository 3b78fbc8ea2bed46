//! Recorded event facts

use serde::{Deserialize, Serialize};

/// A single piece of event information captured from the conversation
///
/// Facts are owned by the backend; this crate only reads them and asks the
/// backend to save or discard them. Extra fields on the wire are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub id: String,
    pub text: String,
}

impl Fact {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

impl std::fmt::Display for Fact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fact_ignores_unknown_fields() {
        let json = r#"{"id": "fact_1", "text": "Venue: Station F", "status": "saved", "createdAt": "2025-11-15"}"#;
        let fact: Fact = serde_json::from_str(json).unwrap();

        assert_eq!(fact, Fact::new("fact_1", "Venue: Station F"));
    }

    #[test]
    fn test_fact_display_is_text() {
        let fact = Fact::new("1", "Team size: 4");
        assert_eq!(fact.to_string(), "Team size: 4");
    }
}
