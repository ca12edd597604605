//! Generic settings persistence coordination.
//!
//! Type-safe loading and saving of serializable settings to eframe's
//! persistent storage, stored as JSON strings. The viewer uses it for the
//! last-opened dataset path; theme persistence has its own coordinator.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Storage key for the most recently opened dataset file.
pub const LAST_DATASET_KEY: &str = "last_dataset_path";

/// Coordinates generic settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting, falling back to `T::default()` when missing or
    /// unparseable.
    pub fn load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> T
    where
        T: for<'de> Deserialize<'de> + Default,
    {
        Self::try_load_setting(storage, key).unwrap_or_default()
    }

    /// Saves a setting as JSON.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        if let Ok(json_str) = serde_json::to_string(value) {
            storage.set_string(key, json_str);
            storage.flush();
        }
    }

    /// Attempts to load a setting, returning None if missing or invalid.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let storage = storage?;
        let json_str = storage.get_string(key)?;
        serde_json::from_str(&json_str).ok()
    }

    /// The dataset path to re-open on startup, if one was saved and the file
    /// still exists.
    pub fn load_last_dataset(storage: Option<&dyn eframe::Storage>) -> Option<PathBuf> {
        let path: PathBuf = Self::try_load_setting(storage, LAST_DATASET_KEY)?;
        path.is_file().then_some(path)
    }

    pub fn save_last_dataset(storage: &mut dyn eframe::Storage, path: &PathBuf) {
        Self::save_setting(storage, LAST_DATASET_KEY, path);
    }
}
