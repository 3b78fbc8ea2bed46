//! Actions emitted by chat panel widgets and client tools

use serde::{Deserialize, Serialize};

use super::ColorScheme;

/// An action raised by the chat panel
///
/// Serialized as `{"type": "...", "payload": {...}}`, matching what the
/// panel forwards from widget buttons and client tool calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum WidgetAction {
    /// User confirmed a pending fact
    SaveFact { fact_id: String },

    /// User rejected a fact
    DiscardFact { fact_id: String },

    /// The assistant already saved a fact and reports it to the client
    RecordFact { fact_id: String, fact_text: String },

    /// The assistant asked the client to change theme
    SwitchTheme { theme: ColorScheme },
}

impl WidgetAction {
    /// The fact this action refers to, if any
    pub fn fact_id(&self) -> Option<&str> {
        match self {
            Self::SaveFact { fact_id } | Self::DiscardFact { fact_id } | Self::RecordFact { fact_id, .. } => {
                Some(fact_id)
            }
            Self::SwitchTheme { .. } => None,
        }
    }
}
