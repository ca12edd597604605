//! Theme support for the nukeline viewer.
//!
//! Provides the color schemes used across the map, timeline, mini-nav, and
//! legend. Besides the usual chrome colors, [`ThemeColors`] carries a small
//! palette of accent colors that double as the per-country colors and the
//! highlight colors for selections and connectors.
//!
//! # Examples
//!
//! ```
//! use nukeline::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let light = manager.get_theme("Light").unwrap();
//! println!("Light background: {:?}", light.colors.background);
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Complete color palette for a theme.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    pub background: Color32,
    pub panel_background: Color32,
    pub extreme_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,
    pub text_strong: Color32,

    // Interactive colors
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    // Accent colors (country palette and highlight colors)
    pub red: Color32,
    pub orange: Color32,
    pub yellow: Color32,
    pub green: Color32,
    pub cyan: Color32,
    pub blue: Color32,
    pub purple: Color32,
    pub magenta: Color32,
    pub gray: Color32,
}

/// A complete theme definition with metadata and color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// Centralized theme manager providing access to all available themes.
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    current_theme_name: String,
}

impl ThemeManager {
    /// Creates a manager initialized with the built-in themes.
    pub fn new() -> Self {
        let mut themes = HashMap::new();
        themes.insert("Light".to_string(), light_theme());
        themes.insert("Dark".to_string(), dark_theme());

        Self {
            themes,
            current_theme_name: "Light".to_string(),
        }
    }

    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// All available theme names, sorted.
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    pub fn current_theme(&self) -> &Theme {
        // current_theme_name is only ever set through set_current_theme.
        &self.themes[&self.current_theme_name]
    }

    pub fn set_current_theme(&mut self, name: &str) -> Result<(), String> {
        if self.themes.contains_key(name) {
            self.current_theme_name = name.to_string();
            Ok(())
        } else {
            Err(format!("Theme '{}' not found", name))
        }
    }

    /// Applies a theme's colors to egui visuals.
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.orange;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.hyperlink_color = colors.cyan;

        visuals.error_fg_color = colors.red;
        visuals.warn_fg_color = colors.orange;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Light theme, matching the map-on-paper look of the source visualization.
fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light map-on-paper color scheme".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(240, 240, 240),
            panel_background: Color32::from_rgb(248, 248, 248),
            extreme_background: Color32::from_rgb(255, 255, 255),

            text: Color32::from_rgb(51, 51, 51),
            text_dim: Color32::from_rgb(130, 130, 130),
            text_strong: Color32::from_rgb(0, 0, 0),

            selection: Color32::from_rgb(255, 216, 179),
            hover: Color32::from_rgb(225, 225, 225),
            border: Color32::from_rgb(160, 160, 160),

            // Saturated palette the country colors map onto
            red: Color32::from_rgb(255, 0, 0),
            orange: Color32::from_rgb(255, 150, 0),
            yellow: Color32::from_rgb(220, 190, 0),
            green: Color32::from_rgb(0, 170, 0),
            cyan: Color32::from_rgb(0, 128, 128),
            blue: Color32::from_rgb(0, 0, 255),
            purple: Color32::from_rgb(128, 0, 128),
            magenta: Color32::from_rgb(200, 40, 160),
            gray: Color32::from_rgb(150, 150, 150),
        },
    }
}

/// Dark theme.
fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark color scheme".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(32, 33, 36),
            panel_background: Color32::from_rgb(39, 39, 39),
            extreme_background: Color32::from_rgb(16, 16, 16),

            text: Color32::from_rgb(230, 230, 230),
            text_dim: Color32::from_rgb(160, 160, 160),
            text_strong: Color32::from_rgb(255, 255, 255),

            selection: Color32::from_rgb(90, 60, 20),
            hover: Color32::from_rgb(70, 70, 70),
            border: Color32::from_rgb(100, 100, 100),

            red: Color32::from_rgb(231, 76, 60),
            orange: Color32::from_rgb(243, 156, 18),
            yellow: Color32::from_rgb(241, 196, 15),
            green: Color32::from_rgb(46, 204, 113),
            cyan: Color32::from_rgb(26, 188, 156),
            blue: Color32::from_rgb(82, 152, 219),
            purple: Color32::from_rgb(155, 89, 182),
            magenta: Color32::from_rgb(255, 121, 198),
            gray: Color32::from_rgb(149, 165, 166),
        },
    }
}

/// Converts a hex color string (like "#ff9900") to Color32.
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0)
    }
}

/// Adjusts brightness by a factor (1.0 = unchanged, >1.0 brighter).
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}

/// Sets the alpha channel of a color.
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}
