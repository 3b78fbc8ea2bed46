//! Domain types for eventdesk
//!
//! Facts come from the backend's fact store; an `EventSummary` is what one
//! successful summarization produces.

mod fact;
mod summary;

pub use fact::Fact;
pub use summary::EventSummary;
