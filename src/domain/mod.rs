//! Core view logic for the viewer, free of any rendering concerns:
//! coordinate projection, timeline placement, and highlight resolution.

pub mod highlight;
pub mod projection;
