//! I/O modules for dataset and boundary loading.

pub mod async_loader;
pub mod file_loader;

pub use async_loader::{AsyncLoader, LoadResult, LoadedData};
pub use file_loader::LoadingState;
