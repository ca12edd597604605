//! Visual styling and color mapping, separated from view logic.

pub mod color_mapping;
