//! Map panel: world outlines, projected test points, and pointer handling.

use crate::app::AppState;
use crate::rendering::map_renderer;
use crate::ui::input::map_input_handler::{self, MapInputResult};
use eframe::egui;
use egui::Sense;
use nukeline::{EventId, ThemeColors};

/// Result of user interaction with the map panel
pub enum MapPanelInteraction {
    /// The hovered map point changed
    HoverChanged(Option<EventId>),
    /// A click inside the map band (clears transient selections)
    BackgroundClicked,
}

pub fn render_map_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    colors: &ThemeColors,
) -> Option<MapPanelInteraction> {
    let Some(dataset) = state.data.dataset() else {
        return None;
    };

    let size = ui.available_size();
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());

    // Projection depends on the rect; sync recomputes only when it changes
    state.scene.sync(dataset, rect);

    let painter = ui.painter_at(rect);
    if let Some(world) = state.data.world() {
        let layout = crate::domain::projection::MapLayout::new(rect);
        map_renderer::render_world(&painter, &layout, world, colors);
    }
    map_renderer::render_points(&painter, dataset, &state.scene, &state.selection, colors);

    match map_input_handler::handle_map_input(
        &response,
        rect,
        state.scene.map_points(),
        state.selection.hovered_event(),
    ) {
        MapInputResult::HoverChanged(hover) => Some(MapPanelInteraction::HoverChanged(hover)),
        MapInputResult::BackgroundClicked => Some(MapPanelInteraction::BackgroundClicked),
        MapInputResult::None => None,
    }
}
