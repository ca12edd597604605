//! Application layer: composed state plus the coordinators that drive it.

pub mod app_state;
pub mod application_coordinator;
pub mod settings_coordinator;
pub mod theme_coordinator;

pub use app_state::AppState;
pub use application_coordinator::ApplicationCoordinator;
pub use settings_coordinator::SettingsCoordinator;
pub use theme_coordinator::ThemeCoordinator;
