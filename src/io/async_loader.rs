//! Background loading of the dataset CSV and world boundary data.
//!
//! The dataset load happens on a background thread so the window stays
//! responsive; the result is polled once per frame through a channel. World
//! boundary data is looked up next to the dataset file (falling back to the
//! working directory); its absence is logged and otherwise ignored.

use crate::io::LoadingState;
use eframe::egui;
use nukeline::{dataset, geo, sample, Dataset, WorldMap};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;

/// File name of the optional boundary data.
const WORLD_FILE: &str = "countries.geo.json";

/// Payload of a successful load.
pub struct LoadedData {
    pub dataset: Dataset,
    pub world: Option<WorldMap>,
}

/// Result of a completed load operation.
pub enum LoadResult {
    Success {
        data: LoadedData,
        /// Source file (None for sample data)
        path: Option<PathBuf>,
    },
    Error(String),
    /// No operation finished this frame
    None,
}

/// Coordinates background dataset loading with the UI thread.
pub struct AsyncLoader {
    loading_state: Arc<Mutex<LoadingState>>,
    loading_receiver: Option<Receiver<Result<LoadedData, String>>>,
    pending_load_path: Option<PathBuf>,
}

impl AsyncLoader {
    pub fn new() -> Self {
        Self {
            loading_state: Arc::new(Mutex::new(LoadingState::new())),
            loading_receiver: None,
            pending_load_path: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        match self.loading_state.lock() {
            Ok(state) => state.in_progress,
            Err(_) => false,
        }
    }

    /// Starts loading a dataset file on a background thread. Poll
    /// `check_completion()` once per frame for the result.
    pub fn start_file_load(&mut self, path: PathBuf, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.loading_receiver = Some(receiver);

        if let Ok(mut state) = self.loading_state.lock() {
            state.in_progress = true;
        }
        self.pending_load_path = Some(path.clone());

        let loading_state = Arc::clone(&self.loading_state);
        let ctx = ctx.clone();

        thread::spawn(move || {
            let result = load_from_disk(&path).map_err(|e| format!("{e:#}"));

            if let Ok(mut state) = loading_state.lock() {
                state.in_progress = false;
            }
            let _ = sender.send(result);
            // Wake the UI so the result is picked up promptly
            ctx.request_repaint();
        });
    }

    /// Generates the in-memory sample dataset (no file involved).
    pub fn load_sample_data(&self) -> LoadedData {
        LoadedData {
            dataset: sample::generate_dataset(42),
            world: load_world_near(Path::new(".")),
        }
    }

    /// Polls for a finished load. Returns `LoadResult::None` while still
    /// loading or when nothing is in flight.
    pub fn check_completion(&mut self) -> LoadResult {
        let Some(receiver) = &self.loading_receiver else {
            return LoadResult::None;
        };

        match receiver.try_recv() {
            Ok(Ok(data)) => {
                self.loading_receiver = None;
                let path = self.pending_load_path.take();
                LoadResult::Success { data, path }
            }
            Ok(Err(msg)) => {
                self.loading_receiver = None;
                self.pending_load_path = None;
                LoadResult::Error(msg)
            }
            Err(_) => LoadResult::None,
        }
    }
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn load_from_disk(path: &Path) -> anyhow::Result<LoadedData> {
    let dataset = dataset::load_dataset(path)?;
    log::debug!("loaded {} events from {}", dataset.len(), path.display());

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    Ok(LoadedData {
        dataset,
        world: load_world_near(dir),
    })
}

/// Tries the boundary file next to the dataset, then the working directory.
/// Missing or broken boundary data only costs the map its outlines.
fn load_world_near(dir: &Path) -> Option<WorldMap> {
    let candidates = [dir.join(WORLD_FILE), PathBuf::from(WORLD_FILE)];
    for candidate in &candidates {
        if candidate.is_file() {
            match geo::load_world(candidate) {
                Ok(world) => {
                    log::debug!("loaded {} boundary features", world.features.len());
                    return Some(world);
                }
                Err(e) => {
                    log::warn!("boundary data unusable, drawing map without outlines: {e:#}");
                    return None;
                }
            }
        }
    }
    log::warn!("no {WORLD_FILE} found, drawing map without outlines");
    None
}
