//! Mini-nav panel: a compressed overview of the whole year range.

use crate::app::AppState;
use crate::domain::projection::NAV_HEIGHT;
use crate::rendering::nav_renderer;
use eframe::egui;
use egui::{vec2, Rect, Sense};
use nukeline::ThemeColors;

/// A click inside the mini-nav strip, reported with the strip rect so the
/// coordinator can map the X back onto the timeline.
pub struct NavClick {
    pub strip: Rect,
    pub x: f32,
}

pub fn render_nav_panel(
    ui: &mut egui::Ui,
    state: &AppState,
    colors: &ThemeColors,
) -> Option<NavClick> {
    let Some(geometry) = state.data.geometry() else {
        return None;
    };

    let width = ui.available_width();
    let (rect, response) = ui.allocate_exact_size(vec2(width, NAV_HEIGHT), Sense::click());

    // A country selection is not year-scoped: hide the year indicator
    let suppress_indicator = state.selection.selected_country().is_some();
    nav_renderer::render_nav(
        ui.painter(),
        rect,
        &geometry,
        state.selection.highlighted_year(),
        suppress_indicator,
        colors,
    );

    let response = response.on_hover_cursor(egui::CursorIcon::PointingHand);
    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            return Some(NavClick {
                strip: rect,
                x: pos.x,
            });
        }
    }
    None
}
