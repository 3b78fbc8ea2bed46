//! Facts read from a local JSON file

use eyre::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::domain::Fact;

#[derive(Deserialize)]
#[serde(untagged)]
enum FactsFile {
    List(Vec<Fact>),
    Envelope { facts: Vec<Fact> },
}

/// Load facts from a JSON array or a `{"facts": [...]}` document
pub fn load_facts_file<P: AsRef<Path>>(path: P) -> Result<Vec<Fact>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).context(format!("Failed to read facts file {}", path.display()))?;
    let parsed: FactsFile =
        serde_json::from_str(&content).context(format!("Failed to parse facts file {}", path.display()))?;

    let facts = match parsed {
        FactsFile::List(facts) | FactsFile::Envelope { facts } => facts,
    };
    tracing::debug!(count = %facts.len(), path = %path.display(), "load_facts_file: loaded");
    Ok(facts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_plain_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": "1", "text": "Team size: 4"}}]"#).unwrap();

        let facts = load_facts_file(file.path()).unwrap();
        assert_eq!(facts, vec![Fact::new("1", "Team size: 4")]);
    }

    #[test]
    fn test_load_envelope() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"facts": [{{"id": "1", "text": "a"}}, {{"id": "2", "text": "b"}}]}}"#).unwrap();

        let facts = load_facts_file(file.path()).unwrap();
        assert_eq!(facts.len(), 2);
    }

    #[test]
    fn test_load_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(load_facts_file(file.path()).is_err());
        assert!(load_facts_file("/nonexistent/facts.json").is_err());
    }
}
