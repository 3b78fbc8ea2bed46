//! ChatObserver trait definition

use async_trait::async_trait;

use super::WidgetAction;

/// Hooks the chat panel calls back into
///
/// The panel itself is an external widget; this is the only surface it sees.
#[async_trait]
pub trait ChatObserver: Send + Sync {
    /// A widget or client tool emitted an action
    async fn on_action(&self, action: WidgetAction);

    /// The assistant finished streaming a response
    async fn on_response_end(&self);
}
