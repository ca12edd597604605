//! Asynchronous dataset loading state.

/// Holds the state of an async dataset load.
///
/// Only the in_progress flag is shared; results come through a channel. The
/// struct is wrapped in an `Arc<Mutex<>>` so the loading thread and the UI
/// thread can both see it.
pub struct LoadingState {
    /// True while a dataset load is running
    pub in_progress: bool,
}

impl LoadingState {
    pub fn new() -> Self {
        Self { in_progress: false }
    }
}

impl Default for LoadingState {
    fn default() -> Self {
        Self::new()
    }
}
