//! Nukeline GUI Application
//!
//! Interactive viewer for worldwide nuclear-test data built on egui: a world
//! map of test locations, a scrollable year timeline of (country, year)
//! groups, a mini-nav overview strip, a clickable legend, and a floating
//! details card — all kept in sync through one selection-state layer.
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `domain/` - Core logic (projection, highlight policy)
//! - `presentation/` - Color mapping (separated from domain logic)
//! - `io/` - Asynchronous dataset and boundary loading
//! - `utils/` - Formatting helpers
//! - `ui/` - UI panel rendering, interaction, and input handling
//! - `rendering/` - Low-level map, timeline, nav, and connector drawing
//! - `state/` - Selection, scroll, scene, and dataset state

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::path::PathBuf;
use std::time::Instant;

mod app;
mod domain;
mod io;
mod presentation;
mod rendering;
mod state;
mod ui;
mod utils;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator};
use io::AsyncLoader;
use ui::panel_manager::PanelManager;

/// Main application entry point that initializes and launches the viewer GUI.
fn main() -> eframe::Result {
    env_logger::init();

    // Command-line argument wins over the persisted last-opened path
    let initial_file = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Nukeline — Nuclear Test Explorer"),
        ..Default::default()
    };

    eframe::run_native(
        "Nukeline",
        options,
        Box::new(move |cc| Ok(Box::new(NukelineApp::new(cc, initial_file)))),
    )
}

/// The main viewer application.
///
/// Delegates most functionality to coordinators: `ApplicationCoordinator`
/// handles loading and interaction logic, `ThemeCoordinator` handles theme
/// persistence, and `PanelManager` handles panel layout and rendering.
struct NukelineApp {
    /// Centralized application state
    state: AppState,
    /// Asynchronous dataset loader
    loader: AsyncLoader,
    /// Optional file to load on first frame
    pending_file_load: Option<PathBuf>,
}

impl NukelineApp {
    /// Creates a new viewer instance with the theme restored from persistent
    /// storage, and an initial dataset taken from the command line or from
    /// the previous session.
    fn new(cc: &eframe::CreationContext, initial_file: Option<PathBuf>) -> Self {
        let current_theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let pending_file_load =
            initial_file.or_else(|| SettingsCoordinator::load_last_dataset(cc.storage));

        Self {
            state: AppState::with_theme(current_theme_name),
            loader: AsyncLoader::new(),
            pending_file_load,
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(
        &mut self,
        interaction: ui::panel_manager::PanelInteraction,
        ctx: &egui::Context,
    ) {
        use ui::panel_manager::PanelInteraction::*;
        match interaction {
            OpenFileRequested(path) => {
                ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
            }
            OpenSampleRequested => {
                ApplicationCoordinator::open_sample(&mut self.state, &mut self.loader);
            }
            LegendCountryClicked(country) => {
                ApplicationCoordinator::handle_legend_click(&mut self.state, &country);
            }
            MapBackgroundClicked => {
                ApplicationCoordinator::handle_map_background_click(&mut self.state);
            }
            MapHoverChanged(hover) => {
                ApplicationCoordinator::handle_map_hover(&mut self.state, hover);
            }
            TimelineLabelClicked(key) => {
                ApplicationCoordinator::handle_timeline_label_click(&mut self.state, &key);
            }
            TimelineScrolled {
                offset,
                viewport_width,
            } => {
                ApplicationCoordinator::handle_timeline_scrolled(
                    &mut self.state,
                    offset,
                    viewport_width,
                );
            }
            NavClicked { strip, x } => {
                ApplicationCoordinator::handle_nav_click(&mut self.state, strip, x);
            }
        }
    }
}

impl eframe::App for NukelineApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        if let Some(path) = self.state.data.source_path() {
            SettingsCoordinator::save_last_dataset(storage, path);
        }
    }

    /// Main update loop: poll the loader, apply the theme, run the scroll
    /// debounce, render all panels, and handle their interactions.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loader);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        // Load initial file if specified (only on first frame)
        if let Some(path) = self.pending_file_load.take() {
            ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
        }

        // Settle the scroll debounce: the trailing edge fires exactly once
        // per quiescence and brings the connectors back
        if self.state.scroll.debounce.take_settled(Instant::now()) {
            log::debug!("timeline scroll settled");
            ctx.request_repaint();
        }

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state, &self.loader)
        {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}
