//! Header panel UI rendering
//!
//! Top bar with dataset controls and the theme selector.

use crate::app::AppState;
use eframe::egui;
use std::path::PathBuf;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a dataset file to open
    OpenFileRequested(PathBuf),
    /// User clicked "Sample Data"
    OpenSampleRequested,
}

pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("📁 Open Dataset").clicked() {
            let mut dialog = rfd::FileDialog::new().add_filter("CSV Files", &["csv"]);

            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenFileRequested(path));
            }
        }

        if ui.button("🔮 Sample Data").clicked() {
            interaction = Some(HeaderInteraction::OpenSampleRequested);
        }

        ui.separator();

        // Theme selector on the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let current = state.theme.current_theme_name().to_string();
            let names: Vec<String> = state
                .theme
                .theme_manager()
                .list_themes()
                .iter()
                .map(|s| s.to_string())
                .collect();

            egui::ComboBox::from_label("Theme")
                .selected_text(&current)
                .show_ui(ui, |ui| {
                    for name in names {
                        if ui.selectable_label(current == name, &name).clicked() {
                            state.theme.set_theme(&name);
                        }
                    }
                });
        });
    });

    interaction
}
