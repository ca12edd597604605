//! Screen-space positions derived from the data and the current layout.
//!
//! Projection depends on the map canvas rect, so it is recomputed whenever
//! the rect changes (startup and resizes) and cached in between. The colored
//! timeline dots, by contrast, move with every scroll; their on-screen
//! centers are refreshed each frame by the timeline renderer, mirroring the
//! bounding-box query the connectors need.

use crate::domain::projection::{self, MapLayout};
use egui::{Pos2, Rect};
use nukeline::{Dataset, GroupKey};
use std::collections::HashMap;

#[derive(Default)]
pub struct SceneState {
    map_rect: Option<Rect>,
    /// Projected map point per event, in load order
    map_points: Vec<Pos2>,
    /// On-screen centers of the colored timeline dots, this frame
    dot_positions: HashMap<GroupKey, Pos2>,
}

impl SceneState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Recomputes projections if the map rect changed since the last frame.
    pub fn sync(&mut self, dataset: &Dataset, map_rect: Rect) {
        if self.map_rect == Some(map_rect) && self.map_points.len() == dataset.len() {
            return;
        }
        let layout = MapLayout::new(map_rect);
        self.map_points = projection::project_events(dataset, &layout);
        self.map_rect = Some(map_rect);
    }

    pub fn map_rect(&self) -> Option<Rect> {
        self.map_rect
    }

    pub fn map_points(&self) -> &[Pos2] {
        &self.map_points
    }

    /// Clears the per-frame dot positions; called before the timeline draws.
    pub fn begin_dot_frame(&mut self) {
        self.dot_positions.clear();
    }

    pub fn record_dot_position(&mut self, key: GroupKey, center: Pos2) {
        self.dot_positions.insert(key, center);
    }

    /// Dot center for a (country, year) key, if it was drawn this frame.
    pub fn dot_position(&self, key: &GroupKey) -> Option<Pos2> {
        self.dot_positions.get(key).copied()
    }
}
