//! Loaded dataset, aggregated groups, and boundary data.

use crate::domain::projection::TimelineGeometry;
use nukeline::{group_events, EventGroup, Dataset, WorldMap};
use std::path::PathBuf;

/// State owning the loaded data and everything derived from it once.
///
/// Aggregation and the year extent are computed at load time; screen-space
/// positions live in `SceneState` because they depend on the canvas rect.
#[derive(Default)]
pub struct DatasetState {
    dataset: Option<Dataset>,
    groups: Vec<EventGroup>,
    geometry: Option<TimelineGeometry>,
    world: Option<WorldMap>,
    source_path: Option<PathBuf>,
}

impl DatasetState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs freshly loaded data, replacing whatever was there.
    pub fn load(&mut self, dataset: Dataset, world: Option<WorldMap>, path: Option<PathBuf>) {
        self.groups = group_events(&dataset);
        self.geometry = TimelineGeometry::from_dataset(&dataset);
        self.dataset = Some(dataset);
        self.world = world;
        self.source_path = path;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    // ===== Queries =====

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn groups(&self) -> &[EventGroup] {
        &self.groups
    }

    pub fn geometry(&self) -> Option<TimelineGeometry> {
        self.geometry
    }

    pub fn world(&self) -> Option<&WorldMap> {
        self.world.as_ref()
    }

    pub fn source_path(&self) -> Option<&PathBuf> {
        self.source_path.as_ref()
    }

    pub fn has_data(&self) -> bool {
        self.dataset.is_some()
    }
}
