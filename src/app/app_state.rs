//! Centralized application state for the viewer.
//!
//! Composes focused state components so each aspect of the application keeps
//! its invariants local and the borrow checker can hand out disjoint
//! mutable access per component.

use crate::state::{DatasetState, SceneState, ScrollState, SelectionState, ThemeState};

/// Main application state composed of focused state components.
pub struct AppState {
    /// Loaded dataset, groups, and boundary data
    pub data: DatasetState,

    /// Selection and hover state across map, legend, and timeline
    pub selection: SelectionState,

    /// Timeline scroll offset plus the settle debounce
    pub scroll: ScrollState,

    /// Screen-space positions derived from data and layout
    pub scene: SceneState,

    /// Theme and styling state
    pub theme: ThemeState,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            data: DatasetState::new(),
            selection: SelectionState::new(),
            scroll: ScrollState::new(),
            scene: SceneState::new(),
            theme: ThemeState::new(),
            error_message: None,
        }
    }

    /// Creates a new AppState with a specific theme loaded from storage.
    pub fn with_theme(theme_name: String) -> Self {
        Self {
            theme: ThemeState::with_theme(theme_name),
            ..Self::new()
        }
    }

    /// Drops all loaded data and per-dataset state, keeping the theme.
    pub fn reset_data(&mut self) {
        self.data.clear();
        self.selection.clear();
        self.scroll.reset();
        self.scene.clear();
        self.error_message = None;
    }
}
