//! Chat panel boundary
//!
//! The conversational widget is third-party. It hands us a theme and calls
//! us back through [`ChatObserver`] when a widget action fires or a
//! response finishes.

mod action;
mod observer;
mod theme;

pub use action::WidgetAction;
pub use observer::ChatObserver;
pub use theme::{ColorScheme, ThemeError};
