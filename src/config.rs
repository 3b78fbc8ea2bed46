//! eventdesk configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::chat::ColorScheme;

/// Environment variable that overrides `backend.base-url`
pub const BACKEND_URL_ENV: &str = "EVENTDESK_BACKEND_URL";

/// Main eventdesk configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend connection settings
    pub backend: BackendConfig,

    /// Summary workflow pacing
    pub workflow: WorkflowConfig,

    /// Chat panel settings
    pub chat: ChatConfig,
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        let mut config = Self::load_file_chain(config_path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    fn load_file_chain(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .eventdesk.yml
        let local_config = PathBuf::from(".eventdesk.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/eventdesk/eventdesk.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("eventdesk").join("eventdesk.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(BACKEND_URL_ENV)
            && !url.trim().is_empty()
        {
            tracing::info!("Backend URL overridden by {}: {}", BACKEND_URL_ENV, url);
            self.backend.base_url = url;
        }
    }
}

/// Backend connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the assistant backend
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            // Summarization chains three model calls and a poster render
            timeout_ms: 120_000,
        }
    }
}

/// Summary workflow configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    /// Pause before the summarize request, shown as "contacting venues"
    #[serde(rename = "venue-delay-ms")]
    pub venue_delay_ms: u64,
}

impl WorkflowConfig {
    pub fn venue_delay(&self) -> Duration {
        Duration::from_millis(self.venue_delay_ms)
    }
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self { venue_delay_ms: 5_000 }
    }
}

/// Chat panel configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Initial color scheme handed to the chat panel
    pub theme: ColorScheme,
}
