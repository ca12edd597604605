//! World boundary data (GeoJSON outline polygons).
//!
//! Only the subset of GeoJSON the map needs is modeled: a FeatureCollection
//! whose features carry `Polygon` or `MultiPolygon` geometries. Everything
//! else is skipped. Boundary data is decorative; callers treat load failure
//! as non-fatal and render the map without outlines.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A [lon, lat] vertex.
pub type GeoPoint = [f64; 2];
/// A closed linear ring of vertices.
pub type Ring = Vec<GeoPoint>;

#[derive(Debug, Clone, Deserialize)]
pub struct WorldMap {
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    pub geometry: Geometry,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon { coordinates: Vec<Ring> },
    MultiPolygon { coordinates: Vec<Vec<Ring>> },
    #[serde(other)]
    Other,
}

impl WorldMap {
    /// Iterates every outline ring across all features.
    pub fn rings(&self) -> impl Iterator<Item = &Ring> {
        self.features.iter().flat_map(|f| match &f.geometry {
            Geometry::Polygon { coordinates } => {
                Box::new(coordinates.iter()) as Box<dyn Iterator<Item = &Ring>>
            }
            Geometry::MultiPolygon { coordinates } => {
                Box::new(coordinates.iter().flatten()) as Box<dyn Iterator<Item = &Ring>>
            }
            Geometry::Other => Box::new(std::iter::empty()) as Box<dyn Iterator<Item = &Ring>>,
        })
    }
}

/// Parses a GeoJSON FeatureCollection from text.
pub fn parse_world(text: &str) -> Result<WorldMap> {
    serde_json::from_str(text).context("failed to parse world boundary GeoJSON")
}

/// Loads boundary data from a file.
pub fn load_world(path: &Path) -> Result<WorldMap> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read boundary file {}", path.display()))?;
    parse_world(&text)
}
