//! UI layer for the checklist window: app shell and the rendered list state.

pub mod app;
pub mod list_view;

pub use app::ChecklistApp;
