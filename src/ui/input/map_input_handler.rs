//! Map input handling: point hover hit-testing and background clicks.

use crate::domain::projection;
use eframe::egui;
use nukeline::EventId;

/// Result of map input handling
pub enum MapInputResult {
    /// No interaction occurred
    None,
    /// The hovered map point changed (None means moved away)
    HoverChanged(Option<EventId>),
    /// A click landed inside the map band
    BackgroundClicked,
}

/// Hit-tests the pointer against the projected points and classifies clicks.
///
/// Hover uses a fixed pixel radius around each point and only applies inside
/// the map's vertical band. Clicks anywhere in the band clear the transient
/// selections; a click on a point still counts as a band click.
pub fn handle_map_input(
    response: &egui::Response,
    map_rect: egui::Rect,
    points: &[egui::Pos2],
    current_hover: Option<EventId>,
) -> MapInputResult {
    let hovered = response.hover_pos().and_then(|pos| {
        projection::hit_test(points, pos, map_rect.top(), map_rect.bottom())
            .map(|i| EventId(i as u32))
    });

    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            if pos.y >= map_rect.top() && pos.y <= map_rect.bottom() {
                return MapInputResult::BackgroundClicked;
            }
        }
    }

    if hovered != current_hover {
        return MapInputResult::HoverChanged(hovered);
    }
    MapInputResult::None
}
