//! UI layer for the desktop app: app shell and card widgets.

pub mod app;
pub mod widgets;

pub use app::CardListApp;
