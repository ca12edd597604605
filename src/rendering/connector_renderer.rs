//! Curved connectors between map points and their timeline dots.
//!
//! Each connector is a cubic curve from the map point down to just above the
//! map/timeline boundary, then a straight drop onto the colored dot's exact
//! on-screen center. Connectors are drawn in three passes so the clicked
//! group's color always lands on top of a same-country bulk highlight.

use crate::presentation::color_mapping;
use crate::state::{SceneState, SelectionState};
use egui::epaint::CubicBezierShape;
use egui::{pos2, Color32, Pos2, Stroke};
use nukeline::{Dataset, EventId, GroupKey, TestEvent, ThemeColors};

/// Vertical offsets of the two inner control points above the boundary.
const CURVE_UPPER_OFFSET: f32 = 20.0;
const CURVE_LOWER_OFFSET: f32 = 10.0;

fn draw_connector(painter: &egui::Painter, from: Pos2, dot: Pos2, boundary_y: f32, color: Color32) {
    let stroke = Stroke::new(2.0, color);
    let control = [
        from,
        pos2(from.x, boundary_y - CURVE_UPPER_OFFSET),
        pos2(dot.x, boundary_y - CURVE_LOWER_OFFSET),
        pos2(dot.x, boundary_y),
    ];
    painter.add(CubicBezierShape::from_points_stroke(
        control,
        false,
        Color32::TRANSPARENT,
        stroke,
    ));
    painter.line_segment([pos2(dot.x, boundary_y), dot], stroke);
}

fn draw_for_event(
    painter: &egui::Painter,
    scene: &SceneState,
    id: EventId,
    event: &TestEvent,
    boundary_y: f32,
    color: Color32,
) {
    // No dot on screen (scrolled out or not drawn yet) means no connector.
    let key = GroupKey::new(&event.country, event.year);
    let Some(dot) = scene.dot_position(&key) else {
        return;
    };
    let Some(&from) = scene.map_points().get(id.index()) else {
        return;
    };
    draw_connector(painter, from, dot, boundary_y, color);
}

/// Draws all connectors for the current selection.
///
/// Pass 1: bulk connectors for a selected country, skipping events that
/// belong to the clicked group. Pass 2: the clicked group in the active
/// color. Pass 3: an individually selected event or group, only when no
/// group is clicked.
pub fn render_connectors(
    painter: &egui::Painter,
    dataset: &Dataset,
    scene: &SceneState,
    sel: &SelectionState,
    colors: &ThemeColors,
) {
    let Some(map_rect) = scene.map_rect() else {
        return;
    };
    let boundary_y = map_rect.bottom();
    let clicked = sel.clicked_group();

    if let Some(country) = sel.selected_country() {
        let color = color_mapping::country_bulk_connector(country, colors);
        for (id, event) in dataset.iter_ids() {
            if event.country != country {
                continue;
            }
            if clicked.is_some_and(|k| k.country == event.country && k.year == event.year) {
                continue;
            }
            draw_for_event(painter, scene, id, event, boundary_y, color);
        }
    }

    if let Some(key) = clicked {
        let color = color_mapping::active_connector(colors);
        for (id, event) in dataset.iter_ids() {
            if event.country == key.country && event.year == key.year {
                draw_for_event(painter, scene, id, event, boundary_y, color);
            }
        }
        return;
    }

    let color = color_mapping::selection_connector(colors);
    if let Some(id) = sel.selected_event() {
        if let Some(event) = dataset.get(id) {
            draw_for_event(painter, scene, id, event, boundary_y, color);
        }
    } else if let Some(key) = sel.selected_group() {
        for (id, event) in dataset.iter_ids() {
            if event.country == key.country && event.year == key.year {
                draw_for_event(painter, scene, id, event, boundary_y, color);
            }
        }
    }
}
