//! Status bar UI rendering
//!
//! Bottom strip with memory usage and dataset metadata.

use crate::app::AppState;
use crate::utils::{format_memory_mb, get_current_memory_mb};
use eframe::egui;
use egui::RichText;

pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());

        if let Some(dataset) = state.data.dataset() {
            ui.label(RichText::new("|").strong());

            let source = state
                .data
                .source_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "Sample Data | Seed: 42".to_string());
            let range = state
                .data
                .geometry()
                .map(|g| format!("{}..{}", g.start_year, g.end_year))
                .unwrap_or_else(|| "?".to_string());

            ui.label(
                RichText::new(format!(
                    "{} | Years: {} | Tests: {} | Groups: {}",
                    source,
                    range,
                    dataset.len(),
                    state.data.groups().len()
                ))
                .strong(),
            );
        } else {
            ui.label(RichText::new("| No dataset loaded").strong());
        }
    });
}
