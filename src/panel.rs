//! EventPanel - view controller for the planning screen
//!
//! Composes the fact list, the summary workflow and the chat theme, and is
//! the observer the chat panel calls back into.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::api::EventBackend;
use crate::chat::{ChatObserver, ColorScheme, WidgetAction};
use crate::config::Config;
use crate::facts::FactStore;
use crate::summary::{RunOutcome, SummaryWorkflow, WorkflowError, WorkflowState};

pub struct EventPanel {
    facts: FactStore,
    workflow: SummaryWorkflow,
    theme: watch::Sender<ColorScheme>,
}

impl EventPanel {
    pub fn new(backend: Arc<dyn EventBackend>, config: &Config) -> Self {
        debug!("EventPanel::new: called");
        let (theme, _) = watch::channel(config.chat.theme);
        Self {
            facts: FactStore::new(backend.clone()),
            workflow: SummaryWorkflow::from_config(backend, &config.workflow),
            theme,
        }
    }

    pub fn facts(&self) -> &FactStore {
        &self.facts
    }

    pub fn summary_state(&self) -> WorkflowState {
        self.workflow.state()
    }

    pub fn subscribe_summary(&self) -> watch::Receiver<WorkflowState> {
        self.workflow.subscribe()
    }

    pub fn theme(&self) -> ColorScheme {
        *self.theme.borrow()
    }

    pub fn subscribe_theme(&self) -> watch::Receiver<ColorScheme> {
        self.theme.subscribe()
    }

    pub fn set_theme(&self, scheme: ColorScheme) {
        let previous = self.theme.send_replace(scheme);
        if previous != scheme {
            info!(%previous, %scheme, "set_theme: theme changed");
        }
    }

    /// Run the summary workflow on the facts currently shown
    pub async fn generate_summary(&self) -> Result<RunOutcome, WorkflowError> {
        let facts = self.facts.facts().await;
        debug!(fact_count = %facts.len(), "generate_summary: called");
        self.workflow.run(&facts).await
    }

    /// The view is going away; stop applying workflow updates
    pub fn close(&self) {
        if self.workflow.state().phase.is_running() {
            info!("close: detaching from a summary in progress");
        }
        self.workflow.close();
    }
}

impl Drop for EventPanel {
    fn drop(&mut self) {
        self.close();
    }
}

#[async_trait]
impl ChatObserver for EventPanel {
    async fn on_action(&self, action: WidgetAction) {
        debug!(?action, "on_action: called");
        if let WidgetAction::SwitchTheme { theme } = &action {
            self.set_theme(*theme);
            return;
        }
        if let Err(e) = self.facts.perform_action(&action).await {
            warn!(error = %e, fact_id = ?action.fact_id(), "on_action: fact action failed");
        }
    }

    async fn on_response_end(&self) {
        debug!("on_response_end: called");
        if let Err(e) = self.facts.refresh().await {
            warn!(error = %e, "on_response_end: failed to refresh facts");
        }
    }
}
