//! Chat panel color scheme

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Light or dark theme handed to the chat panel
///
/// Deserialization goes through `FromStr`, so config files and tool payloads
/// accept the same loose spellings as the parser ("Dark", " light ", "dark mode").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Theme must be either 'light' or 'dark'.")]
pub struct ThemeError;

impl std::fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl std::str::FromStr for ColorScheme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            // Assistants phrase it loosely ("dark mode", "Light theme please")
            other if other.contains("dark") => Ok(Self::Dark),
            other if other.contains("light") => Ok(Self::Light),
            _ => Err(ThemeError),
        }
    }
}

impl TryFrom<String> for ColorScheme {
    type Error = ThemeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
