//! Details panel: a floating card describing the primary selection.
//!
//! Shows a single-test card for a hovered or selected event, a compact grid
//! for a clicked/selected timeline group, and a country summary when only a
//! legend country is active. Hidden when nothing is selected.

use crate::app::AppState;
use crate::domain::highlight::{self, Primary};
use crate::domain::projection::TIMELINE_HEIGHT;
use crate::utils::{format_coord, format_kilotons, format_yield_desc, text_or_na};
use eframe::egui;
use egui::{vec2, Align2, RichText};
use nukeline::{Dataset, EventId, GroupKey, TestEvent, ThemeColors};
use std::collections::BTreeSet;

pub fn render_details_panel(ctx: &egui::Context, state: &AppState, colors: &ThemeColors) {
    let Some(dataset) = state.data.dataset() else {
        return;
    };
    let primary = highlight::primary_selection(&state.selection);
    if primary == Primary::None {
        return;
    }

    egui::Window::new("details")
        .title_bar(false)
        .resizable(false)
        .anchor(Align2::LEFT_BOTTOM, vec2(50.0, -(TIMELINE_HEIGHT + 60.0)))
        .show(ctx, |ui| match primary {
            Primary::HoveredEvent(id) | Primary::SelectedEvent(id) => {
                render_event_card(ui, dataset, id, colors);
            }
            Primary::ClickedGroup(key) | Primary::SelectedGroup(key) => {
                render_group_card(ui, dataset, &key, colors);
            }
            Primary::CountrySummary(country) => {
                render_country_card(ui, dataset, &country, colors);
            }
            Primary::None => {}
        });
}

fn render_event_card(ui: &mut egui::Ui, dataset: &Dataset, id: EventId, colors: &ThemeColors) {
    let Some(event) = dataset.get(id) else {
        return;
    };
    ui.label(
        RichText::new(format!("{} — {}", event.country, text_or_na(&event.name)))
            .strong()
            .color(colors.text_strong),
    );
    ui.separator();
    egui::Grid::new("event_details").num_columns(2).show(ui, |ui| {
        detail_row(ui, "Date", text_or_na(&event.date));
        detail_row(ui, "Region", text_or_na(&event.region));
        detail_row(ui, "Purpose", text_or_na(&event.purpose));
        detail_row(ui, "Depth", text_or_na(&event.depth));
        detail_row(ui, "Yield", &format_yield_desc(&event.yield_desc));
        detail_row(ui, "Avg yield", &format_kilotons(event.avg_yield));
        detail_row(
            ui,
            "Location",
            &format!(
                "{}, {}",
                format_coord(event.latitude),
                format_coord(event.longitude)
            ),
        );
    });
}

fn render_group_card(ui: &mut egui::Ui, dataset: &Dataset, key: &GroupKey, colors: &ThemeColors) {
    let members: Vec<&TestEvent> = dataset
        .events()
        .iter()
        .filter(|e| e.country == key.country && e.year == key.year)
        .collect();

    ui.label(
        RichText::new(format!("{} {}: {} Tests", key.country, key.year, members.len()))
            .strong()
            .color(colors.text_strong),
    );
    ui.separator();
    egui::Grid::new("group_details")
        .num_columns(3)
        .striped(true)
        .show(ui, |ui| {
            ui.label(RichText::new("Name").strong());
            ui.label(RichText::new("Region").strong());
            ui.label(RichText::new("Yield").strong());
            ui.end_row();
            for event in &members {
                ui.label(text_or_na(&event.name));
                ui.label(text_or_na(&event.region));
                ui.label(format_yield_desc(&event.yield_desc));
                ui.end_row();
            }
        });
}

fn render_country_card(ui: &mut egui::Ui, dataset: &Dataset, country: &str, colors: &ThemeColors) {
    let members: Vec<&TestEvent> = dataset
        .events()
        .iter()
        .filter(|e| e.country == country)
        .collect();
    if members.is_empty() {
        return;
    }

    let first = members.iter().map(|e| e.year).min().unwrap_or(0);
    let last = members.iter().map(|e| e.year).max().unwrap_or(0);
    let total_yield: f64 = members.iter().filter_map(|e| e.avg_yield).sum();
    let regions: BTreeSet<&str> = members
        .iter()
        .map(|e| e.region.as_str())
        .filter(|r| !r.is_empty())
        .collect();
    let mut region_list: Vec<&str> = regions.iter().copied().take(3).collect();
    if regions.len() > 3 {
        region_list.push("...");
    }

    ui.label(
        RichText::new(format!("{country} — {} Tests", members.len()))
            .strong()
            .color(colors.text_strong),
    );
    ui.separator();
    egui::Grid::new("country_details").num_columns(2).show(ui, |ui| {
        detail_row(ui, "Years", &format!("{first}–{last}"));
        detail_row(ui, "Total yield", &format_kilotons(Some(total_yield)));
        detail_row(ui, "Regions", &region_list.join(", "));
    });
}

fn detail_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.label(RichText::new(label).strong());
    ui.label(value);
    ui.end_row();
}
