//! UI modules for panel rendering and input handling.

pub mod details_panel;
pub mod header;
pub mod input;
pub mod legend;
pub mod map_panel;
pub mod nav_panel;
pub mod panel_manager;
pub mod status_bar;
pub mod timeline_panel;

pub use panel_manager::{PanelInteraction, PanelManager};
