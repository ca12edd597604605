//! Utility modules for the viewer.

pub mod formatting;

pub use formatting::{
    format_coord, format_kilotons, format_memory_mb, format_yield_desc, get_current_memory_mb,
    text_or_na,
};
