//! Mini-nav strip: the whole year range compressed into one fixed-width bar,
//! with a one-year-wide indicator tracking the highlighted year.

use crate::domain::projection::{TimelineGeometry, NAV_MARGIN};
use egui::epaint::TextShape;
use egui::{pos2, vec2, Align2, FontId, Rect, Stroke};
use nukeline::{with_alpha, ThemeColors};

/// Draws the strip into `strip`. The indicator is suppressed while a country
/// is selected, since a country highlight is not year-scoped.
pub fn render_nav(
    painter: &egui::Painter,
    strip: Rect,
    geometry: &TimelineGeometry,
    highlighted_year: Option<i32>,
    suppress_indicator: bool,
    colors: &ThemeColors,
) {
    let line_y = strip.bottom() - 12.0;
    painter.line_segment(
        [
            pos2(strip.left() + NAV_MARGIN, line_y),
            pos2(strip.right() - NAV_MARGIN, line_y),
        ],
        Stroke::new(1.0, colors.border),
    );

    let year_w = geometry.nav_year_width(strip);
    for year in geometry.start_year..=geometry.end_year {
        let x = geometry.nav_x_for_year(year, strip);
        let is_highlighted = highlighted_year == Some(year);
        let color = if is_highlighted {
            colors.orange
        } else {
            colors.text_dim
        };
        let half = if year % 5 == 0 { 5.0 } else { 3.0 };
        painter.line_segment(
            [pos2(x, line_y - half), pos2(x, line_y + half)],
            Stroke::new(1.0, color),
        );

        draw_year_label(painter, pos2(x, line_y - 7.0), year, year_w, color);
    }

    if let Some(year) = highlighted_year {
        if !suppress_indicator {
            let x = geometry.nav_x_for_year(year, strip);
            let rect = Rect::from_center_size(pos2(x, line_y), vec2(year_w.max(4.0), 18.0));
            painter.rect_filled(rect, 3.0, with_alpha(colors.blue, 120));
            painter.rect_stroke(
                rect,
                3.0,
                Stroke::new(1.0, colors.blue),
                egui::StrokeKind::Outside,
            );
        }
    }
}

/// Label density adapts to how many pixels one year gets: every year when
/// there is room, every year rotated when tight, else every 5th year upright.
fn draw_year_label(
    painter: &egui::Painter,
    anchor: egui::Pos2,
    year: i32,
    year_w: f32,
    color: egui::Color32,
) {
    let every_year_fits = 3.0 * year_w > 30.0;
    let rotated_fits = 3.0 * year_w > 15.0;

    if every_year_fits {
        painter.text(
            anchor,
            Align2::CENTER_BOTTOM,
            year.to_string(),
            FontId::proportional(8.0),
            color,
        );
    } else if rotated_fits {
        let galley = painter.layout_no_wrap(year.to_string(), FontId::proportional(7.0), color);
        let shape = TextShape::new(anchor, galley, color)
            .with_angle(-std::f32::consts::FRAC_PI_4);
        painter.add(shape);
    } else if year % 5 == 0 {
        painter.text(
            anchor,
            Align2::CENTER_BOTTOM,
            year.to_string(),
            FontId::proportional(8.0),
            color,
        );
    }
}
