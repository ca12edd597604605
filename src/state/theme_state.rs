//! Theme selection state.

use nukeline::ThemeManager;

/// Wraps the theme manager with the currently applied theme name.
pub struct ThemeState {
    theme_manager: ThemeManager,
}

impl ThemeState {
    pub fn new() -> Self {
        Self {
            theme_manager: ThemeManager::new(),
        }
    }

    /// Creates theme state with a theme restored from storage. Unknown names
    /// silently keep the default.
    pub fn with_theme(name: String) -> Self {
        let mut theme_manager = ThemeManager::new();
        let _ = theme_manager.set_current_theme(&name);
        Self { theme_manager }
    }

    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    pub fn current_theme_name(&self) -> &str {
        &self.theme_manager.current_theme().name
    }

    pub fn set_theme(&mut self, name: &str) {
        if let Err(e) = self.theme_manager.set_current_theme(name) {
            log::warn!("{e}");
        }
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}
