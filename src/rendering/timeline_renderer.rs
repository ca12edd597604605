//! Timeline strip content: year axis, stacked group labels, and the colored
//! dots that anchor connectors.

use crate::domain::highlight::{self, LabelEmphasis};
use crate::domain::projection::{TimelineGeometry, TimelineSlot, LINE_HEIGHT, TIMELINE_Y_OFFSET};
use crate::presentation::color_mapping;
use crate::state::{SceneState, SelectionState};
use egui::{pos2, Align2, Color32, FontId, Rect, Sense, Stroke};
use nukeline::{with_alpha, Dataset, EventGroup, GroupKey, ThemeColors};

const LABEL_FONT: f32 = 10.0;
const LABEL_PAD: egui::Vec2 = egui::vec2(5.0, 2.0);

/// Draws the timeline content into `content_rect` (the allocated full-width
/// rect inside the scroll area) and records every colored dot's on-screen
/// center for the connector pass. Returns the group key of a clicked label.
pub fn render_timeline(
    ui: &mut egui::Ui,
    content_rect: Rect,
    geometry: &TimelineGeometry,
    dataset: &Dataset,
    groups: &[EventGroup],
    slots: &[TimelineSlot],
    sel: &SelectionState,
    scene: &mut SceneState,
    colors: &ThemeColors,
) -> Option<GroupKey> {
    let painter = ui.painter().clone();
    let axis_y = content_rect.top() + TIMELINE_Y_OFFSET;

    draw_axis(&painter, content_rect, geometry, axis_y, colors);

    let mut clicked = None;
    scene.begin_dot_frame();

    for (i, group) in groups.iter().enumerate() {
        let Some(slot) = slots.get(i) else {
            continue;
        };
        let x = content_rect.left() + slot.x;

        // Small black marker on the axis for every group
        painter.circle_filled(pos2(x, axis_y), 3.0, colors.text_strong);

        let label_y = axis_y + 5.0 + slot.row as f32 * LINE_HEIGHT;
        let emphasis = highlight::label_emphasis(sel, dataset, group);
        let response = draw_label(ui, &painter, group, pos2(x, label_y), emphasis, colors);
        if response.clicked() {
            clicked = Some(group.key());
        }

        // Colored dot under the label, the connector anchor for this group
        let dot_center = pos2(x, label_y);
        painter.circle_filled(
            dot_center,
            5.0,
            color_mapping::country_color(&group.country, colors),
        );
        scene.record_dot_position(group.key(), dot_center);
    }

    clicked
}

fn draw_axis(
    painter: &egui::Painter,
    content_rect: Rect,
    geometry: &TimelineGeometry,
    axis_y: f32,
    colors: &ThemeColors,
) {
    painter.line_segment(
        [
            pos2(content_rect.left(), axis_y),
            pos2(content_rect.right(), axis_y),
        ],
        Stroke::new(1.0, colors.border),
    );
    let mut year = geometry.start_year;
    while year <= geometry.end_year {
        let x = content_rect.left() + geometry.year_x(year);
        painter.line_segment(
            [pos2(x, axis_y - 10.0), pos2(x, axis_y)],
            Stroke::new(1.0, colors.text_dim),
        );
        painter.text(
            pos2(x, axis_y - 14.0),
            Align2::CENTER_BOTTOM,
            year.to_string(),
            FontId::proportional(11.0),
            colors.text_dim,
        );
        year += 5;
    }
}

fn draw_label(
    ui: &mut egui::Ui,
    painter: &egui::Painter,
    group: &EventGroup,
    anchor: egui::Pos2,
    emphasis: LabelEmphasis,
    colors: &ThemeColors,
) -> egui::Response {
    let text = format!("{} {} ({})", group.country, group.year, group.count());
    let (fill, border, text_color) = match emphasis {
        LabelEmphasis::Primary => (
            with_alpha(colors.orange, 128),
            Stroke::new(1.5, colors.orange),
            colors.text_strong,
        ),
        LabelEmphasis::CountryMatch => (
            with_alpha(colors.selection, 160),
            Stroke::new(1.0, colors.border),
            colors.text_strong,
        ),
        LabelEmphasis::YearMatch => (
            with_alpha(colors.selection, 110),
            Stroke::NONE,
            colors.text,
        ),
        LabelEmphasis::Neutral => (Color32::TRANSPARENT, Stroke::NONE, colors.text),
    };

    let galley = painter.layout_no_wrap(text, FontId::proportional(LABEL_FONT), text_color);
    let size = galley.size() + 2.0 * LABEL_PAD;
    let rect = Rect::from_min_size(pos2(anchor.x + 8.0, anchor.y - size.y / 2.0), size);

    if fill != Color32::TRANSPARENT {
        painter.rect_filled(rect, 3.0, fill);
    }
    if border != Stroke::NONE {
        painter.rect_stroke(rect, 3.0, border, egui::StrokeKind::Outside);
    }
    painter.galley(rect.min + LABEL_PAD, galley, text_color);

    let id = ui.id().with(("timeline_label", &group.country, group.year));
    ui.interact(rect, id, Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}
