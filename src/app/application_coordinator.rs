//! Application-level coordination and workflow management.
//!
//! Handles file loading workflows, applies load results to the state, and
//! translates panel interactions into selection/scroll transitions.

use crate::app::AppState;
use crate::io::{AsyncLoader, LoadResult, LoadedData};
use egui::Rect;
use nukeline::{EventId, GroupKey};
use std::path::PathBuf;
use std::time::Instant;

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Initiates asynchronous dataset loading.
    ///
    /// Immediately clears previous data so the loading indicator shows.
    pub fn open_file(
        state: &mut AppState,
        loader: &mut AsyncLoader,
        path: PathBuf,
        ctx: &egui::Context,
    ) {
        state.reset_data();
        loader.start_file_load(path, ctx);
    }

    /// Generates and loads the in-memory sample dataset.
    pub fn open_sample(state: &mut AppState, loader: &mut AsyncLoader) {
        let data = loader.load_sample_data();
        Self::install_loaded_data(state, data, None);
    }

    /// Checks for loading completion and applies results to the state.
    ///
    /// Called once per frame in the update loop. Returns true if a load
    /// operation completed (success or error).
    pub fn check_loading_completion(state: &mut AppState, loader: &mut AsyncLoader) -> bool {
        match loader.check_completion() {
            LoadResult::Success { data, path } => {
                Self::install_loaded_data(state, data, path);
                true
            }
            LoadResult::Error(error_msg) => {
                state.reset_data();
                state.error_message = Some(format!("Error loading dataset: {error_msg}"));
                true
            }
            LoadResult::None => false,
        }
    }

    fn install_loaded_data(state: &mut AppState, data: LoadedData, path: Option<PathBuf>) {
        state.reset_data();
        state.data.load(data.dataset, data.world, path);
        // Start with the first year highlighted so the nav indicator has a home
        if let Some(geometry) = state.data.geometry() {
            state.selection.set_highlighted_year(Some(geometry.start_year));
        }
    }

    // ===== Interaction handlers =====

    pub fn handle_legend_click(state: &mut AppState, country: &str) {
        state.selection.legend_click(country);
    }

    pub fn handle_map_background_click(state: &mut AppState) {
        state.selection.map_click();
    }

    pub fn handle_map_hover(state: &mut AppState, hover: Option<EventId>) {
        state.selection.set_hovered(hover);
    }

    pub fn handle_timeline_label_click(state: &mut AppState, key: &GroupKey) {
        state.selection.timeline_label_click(key);
    }

    /// Scroll gesture on the timeline: the year highlight tracks the center
    /// of the visible window live; the settle debounce restarts.
    pub fn handle_timeline_scrolled(state: &mut AppState, offset: f32, viewport_width: f32) {
        state.scroll.observe(offset, viewport_width);
        state.scroll.debounce.on_scroll(Instant::now());
        if let Some(geometry) = state.data.geometry() {
            let year = geometry.year_at_scroll_center(offset, viewport_width);
            state.selection.set_highlighted_year(Some(year));
        }
    }

    /// Mini-nav click: scroll the timeline so the clicked year is centered
    /// and highlight it.
    pub fn handle_nav_click(state: &mut AppState, strip: Rect, x: f32) {
        let Some(geometry) = state.data.geometry() else {
            return;
        };
        let target_x = geometry.nav_x_to_timeline_x(x, strip);
        let year = geometry.year_at_x(target_x);
        let offset = geometry.scroll_offset_centering(target_x, state.scroll.viewport_width());
        state.scroll.request_offset(offset);
        state.selection.set_highlighted_year(Some(year));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nukeline::sample;

    fn loaded_state() -> AppState {
        let mut state = AppState::new();
        state.data.load(sample::generate_dataset(7), None, None);
        state
    }

    #[test]
    fn sample_load_highlights_the_first_year() {
        let mut state = AppState::new();
        let mut loader = AsyncLoader::new();
        ApplicationCoordinator::open_sample(&mut state, &mut loader);
        let start = state.data.geometry().unwrap().start_year;
        assert_eq!(state.selection.highlighted_year(), Some(start));
    }

    #[test]
    fn scroll_updates_highlight_and_arms_debounce() {
        let mut state = loaded_state();
        ApplicationCoordinator::handle_timeline_scrolled(&mut state, 0.0, 800.0);
        assert!(state.selection.highlighted_year().is_some());
        assert!(state.scroll.debounce.is_pending());
    }

    #[test]
    fn nav_click_queues_a_scroll_and_highlights() {
        let mut state = loaded_state();
        state.scroll.observe(0.0, 800.0);
        let strip = Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(1000.0, 40.0));
        ApplicationCoordinator::handle_nav_click(&mut state, strip, 500.0);
        assert!(state.scroll.take_pending_offset().is_some());
        assert!(state.selection.highlighted_year().is_some());
    }
}
