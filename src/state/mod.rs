//! State management modules for the viewer (no UI concerns):
//! - Dataset state (events, groups, boundary data)
//! - Selection state (hover, clicks, highlighted year)
//! - Scroll state (timeline offset, settle debounce)
//! - Scene state (projected positions, dot locations)
//! - Theme state

mod dataset_state;
mod scene;
mod scroll;
mod selection;
mod theme_state;

pub use dataset_state::DatasetState;
pub use scene::SceneState;
pub use scroll::{ScrollDebounce, ScrollState, SCROLL_DEBOUNCE};
pub use selection::SelectionState;
pub use theme_state::ThemeState;
