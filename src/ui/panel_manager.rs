//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, mini-nav, legend, map, timeline,
//! details, status) and funnels their interactions back to the application
//! coordinator as a single enum.

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::presentation::color_mapping;
use crate::rendering::connector_renderer;
use crate::state::SCROLL_DEBOUNCE;
use crate::ui::{
    details_panel, header, legend, map_panel, nav_panel, status_bar, timeline_panel,
};
use egui::{Id, LayerId, Order, Rect};
use std::time::Instant;

/// Result of panel interactions that need to be handled by the application
/// coordinator.
pub enum PanelInteraction {
    /// User picked a dataset file to open
    OpenFileRequested(std::path::PathBuf),
    /// User requested the generated sample dataset
    OpenSampleRequested,
    /// A legend country entry was clicked
    LegendCountryClicked(String),
    /// A click landed inside the map band
    MapBackgroundClicked,
    /// The hovered map point changed
    MapHoverChanged(Option<nukeline::EventId>),
    /// A timeline group label was clicked
    TimelineLabelClicked(nukeline::GroupKey),
    /// The timeline scroll position changed
    TimelineScrolled { offset: f32, viewport_width: f32 },
    /// A click inside the mini-nav strip
    NavClicked { strip: Rect, x: f32 },
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loader: &AsyncLoader,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        let theme_colors = color_mapping::theme_colors(
            state.theme.theme_manager(),
            state.theme.current_theme_name(),
        )
        .clone();

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenFileRequested(path) => {
                        PanelInteraction::OpenFileRequested(path)
                    }
                    header::HeaderInteraction::OpenSampleRequested => {
                        PanelInteraction::OpenSampleRequested
                    }
                });
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        // The data-driven panels only exist once a dataset is loaded
        if state.data.has_data() {
            egui::TopBottomPanel::top("nav_strip").show(ctx, |ui| {
                if let Some(click) = nav_panel::render_nav_panel(ui, state, &theme_colors) {
                    interaction = Some(PanelInteraction::NavClicked {
                        strip: click.strip,
                        x: click.x,
                    });
                }
            });

            egui::TopBottomPanel::top("legend").show(ctx, |ui| {
                if let Some(country) = legend::render_legend(ui, state, &theme_colors) {
                    interaction = Some(PanelInteraction::LegendCountryClicked(country));
                }
            });

            egui::TopBottomPanel::bottom("timeline_panel")
                .exact_height(crate::domain::projection::TIMELINE_HEIGHT)
                .show(ctx, |ui| {
                    if let Some(tl) = timeline_panel::render_timeline_panel(ui, state, &theme_colors)
                    {
                        interaction = Some(match tl {
                            timeline_panel::TimelinePanelInteraction::LabelClicked(key) => {
                                PanelInteraction::TimelineLabelClicked(key)
                            }
                            timeline_panel::TimelinePanelInteraction::Scrolled {
                                offset,
                                viewport_width,
                            } => PanelInteraction::TimelineScrolled {
                                offset,
                                viewport_width,
                            },
                        });
                    }
                });
        }

        // Central panel: the map (or the load/error placeholder)
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(error) = &state.error_message {
                ui.centered_and_justified(|ui| {
                    ui.colored_label(theme_colors.red, error);
                });
            } else if loader.is_loading() {
                ui.centered_and_justified(|ui| {
                    ui.spinner();
                });
            } else if !state.data.has_data() {
                ui.centered_and_justified(|ui| {
                    ui.label("Open a dataset or load the sample data to begin.");
                });
            } else if let Some(map_interaction) =
                map_panel::render_map_panel(ui, state, &theme_colors)
            {
                interaction = Some(match map_interaction {
                    map_panel::MapPanelInteraction::HoverChanged(hover) => {
                        PanelInteraction::MapHoverChanged(hover)
                    }
                    map_panel::MapPanelInteraction::BackgroundClicked => {
                        PanelInteraction::MapBackgroundClicked
                    }
                });
            }
        });

        // Connectors span the map panel and the timeline strip, so they go on
        // a foreground layer after both have drawn. Suppressed mid-scroll:
        // the dots move every frame and the curves would just smear.
        if state.data.has_data() && state.error_message.is_none() {
            let scrolling = state.scroll.debounce.is_scrolling(Instant::now());
            if !scrolling {
                if let Some(dataset) = state.data.dataset() {
                    let painter =
                        ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("connectors")));
                    connector_renderer::render_connectors(
                        &painter,
                        dataset,
                        &state.scene,
                        &state.selection,
                        &theme_colors,
                    );
                }
            } else {
                // Keep repainting until the debounce settles
                ctx.request_repaint_after(SCROLL_DEBOUNCE / 5);
            }
        }

        // Details window floats above the map's lower-left corner
        details_panel::render_details_panel(ctx, state, &theme_colors);

        interaction
    }
}
