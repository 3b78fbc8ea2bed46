//! FactStore - the client's view of recorded facts

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::api::{ApiError, EventBackend};
use crate::chat::WidgetAction;
use crate::domain::Fact;

/// Current fact list, refreshed from the backend on demand
pub struct FactStore {
    backend: Arc<dyn EventBackend>,
    facts: RwLock<Vec<Fact>>,
}

impl FactStore {
    pub fn new(backend: Arc<dyn EventBackend>) -> Self {
        debug!("FactStore::new: called");
        Self {
            backend,
            facts: RwLock::new(Vec::new()),
        }
    }

    /// Snapshot of the facts in display order
    pub async fn facts(&self) -> Vec<Fact> {
        self.facts.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.facts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.facts.read().await.is_empty()
    }

    /// Replace the list with the backend's
    ///
    /// On error the previous list is kept.
    pub async fn refresh(&self) -> Result<usize, ApiError> {
        debug!("refresh: called");
        let fresh = self.backend.list_facts().await?;
        let count = fresh.len();
        *self.facts.write().await = fresh;
        debug!(%count, "refresh: updated");
        Ok(count)
    }

    /// The backend change already happened; a stale list is not an error
    async fn refresh_after_change(&self) {
        if let Err(e) = self.refresh().await {
            warn!(error = %e, "refresh_after_change: list not refreshed");
        }
    }

    /// Apply a widget-originated action
    ///
    /// Returns true if the fact list changed. Theme switches are not fact
    /// actions and are ignored here.
    pub async fn perform_action(&self, action: &WidgetAction) -> Result<bool, ApiError> {
        debug!(?action, "perform_action: called");
        match action {
            WidgetAction::SaveFact { fact_id } => {
                let fact = self.backend.save_fact(fact_id).await?;
                info!(fact_id = %fact.id, "perform_action: fact saved");
                self.refresh_after_change().await;
                Ok(true)
            }
            WidgetAction::DiscardFact { fact_id } => {
                let fact = self.backend.discard_fact(fact_id).await?;
                info!(fact_id = %fact.id, "perform_action: fact discarded");
                self.refresh_after_change().await;
                Ok(true)
            }
            WidgetAction::RecordFact { fact_id, fact_text } => {
                // Already persisted by the assistant; mirror it locally
                let mut facts = self.facts.write().await;
                match facts.iter().position(|f| f.id == *fact_id) {
                    Some(idx) if facts[idx].text == *fact_text => Ok(false),
                    Some(idx) => {
                        facts[idx].text = fact_text.clone();
                        Ok(true)
                    }
                    None => {
                        facts.push(Fact::new(fact_id.clone(), fact_text.clone()));
                        Ok(true)
                    }
                }
            }
            WidgetAction::SwitchTheme { .. } => {
                debug!("perform_action: not a fact action");
                Ok(false)
            }
        }
    }
}
