//! Legend panel: one clickable swatch-plus-name entry per testing country.

use crate::app::AppState;
use crate::domain::highlight;
use crate::presentation::color_mapping;
use eframe::egui;
use egui::{vec2, RichText, Sense, Stroke};
use nukeline::ThemeColors;

/// Renders the legend strip; returns a clicked country name.
pub fn render_legend(
    ui: &mut egui::Ui,
    state: &AppState,
    colors: &ThemeColors,
) -> Option<String> {
    let mut clicked = None;

    // Legend emphasis follows any selection's country, not just the toggle
    let emphasized = state
        .data
        .dataset()
        .and_then(|ds| highlight::effective_country(&state.selection, ds));

    ui.horizontal(|ui| {
        for country in color_mapping::COUNTRY_ORDER.iter() {
            let color = color_mapping::country_color(country, colors);
            let is_emphasized = emphasized.as_deref() == Some(*country);

            let (rect, response) = ui.allocate_exact_size(vec2(14.0, 14.0), Sense::click());
            ui.painter().rect_filled(rect, 3.0, color);
            if is_emphasized {
                ui.painter().rect_stroke(
                    rect,
                    3.0,
                    Stroke::new(2.0, colors.text_strong),
                    egui::StrokeKind::Outside,
                );
            }

            let mut text = RichText::new(*country);
            if is_emphasized {
                text = text.strong().underline();
            }
            let label_response = ui.add(egui::Label::new(text).sense(Sense::click()));

            if response.clicked() || label_response.clicked() {
                clicked = Some(country.to_string());
            }
            ui.add_space(10.0);
        }
    });

    clicked
}
