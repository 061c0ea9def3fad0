//! Terminal UI: event loop, layout, theme and views.

pub mod app;
pub mod events;
pub mod layout;
pub mod theme;
pub mod views;
pub mod widgets;
