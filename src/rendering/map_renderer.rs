//! Map rendering: world outline strokes and per-test points.

use crate::domain::projection::MapLayout;
use crate::presentation::color_mapping;
use crate::state::{SceneState, SelectionState};
use egui::{Shape, Stroke};
use nukeline::{with_alpha, Dataset, ThemeColors, WorldMap};

/// Strokes every boundary ring onto the map canvas.
pub fn render_world(
    painter: &egui::Painter,
    layout: &MapLayout,
    world: &WorldMap,
    colors: &ThemeColors,
) {
    let stroke = Stroke::new(1.0, with_alpha(colors.text, 100));
    for ring in world.rings() {
        let points: Vec<egui::Pos2> = ring
            .iter()
            .map(|&[lon, lat]| layout.project(lon, lat))
            .collect();
        if points.len() >= 2 {
            painter.add(Shape::closed_line(points, stroke));
        }
    }
}

/// Draws every test event as a colored point, with stroke emphasis driven by
/// the selection state. Clicked-group emphasis outranks country emphasis,
/// matching the connector draw order.
pub fn render_points(
    painter: &egui::Painter,
    dataset: &Dataset,
    scene: &SceneState,
    sel: &SelectionState,
    colors: &ThemeColors,
) {
    let points = scene.map_points();

    for (id, event) in dataset.iter_ids() {
        let Some(&center) = points.get(id.index()) else {
            continue;
        };
        let fill = color_mapping::country_color(&event.country, colors);

        let in_group = |key: Option<&nukeline::GroupKey>| {
            key.is_some_and(|k| k.country == event.country && k.year == event.year)
        };
        let is_selected_event = sel.selected_event() == Some(id);
        let is_group_member = in_group(sel.selected_group()) || in_group(sel.clicked_group());
        let is_clicked_member = in_group(sel.clicked_group());
        let is_country = sel.selected_country() == Some(event.country.as_str());
        let is_hovered = sel.hovered_event() == Some(id);

        let stroke = if is_selected_event {
            Stroke::new(4.0, colors.orange)
        } else if is_group_member {
            Stroke::new(4.0, colors.red)
        } else if is_country {
            Stroke::new(3.0, colors.yellow)
        } else if is_hovered {
            Stroke::new(3.0, with_alpha(colors.orange, 200))
        } else {
            Stroke::NONE
        };

        let radius = if is_country || is_hovered || is_clicked_member {
            5.0
        } else {
            4.0
        };
        painter.circle(center, radius, fill, stroke);
    }
}
