//! Input handling subsystem for UI interactions.
//!
//! Map hit-testing and click classification live here; the timeline and
//! mini-nav use egui's own response types directly in their panels.

pub mod map_input_handler;
