//! Color assignment for countries and connector roles.
//!
//! Country colors are fixed per theme palette; connector colors encode
//! selection roles (bulk country highlight, clicked group, single selection).

use egui::Color32;
use nukeline::{with_alpha, ThemeColors, ThemeManager};
use once_cell::sync::Lazy;

/// Legend display order of the testing countries.
pub static COUNTRY_ORDER: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec!["USA", "USSR", "FRANCE", "UK", "CHINA", "INDIA", "PAKISTAN"]
});

/// Returns the current theme's palette, falling back to Light.
pub fn theme_colors<'a>(
    theme_manager: &'a ThemeManager,
    current_theme_name: &str,
) -> &'a ThemeColors {
    theme_manager
        .get_theme(current_theme_name)
        .map(|t| &t.colors)
        .unwrap_or(&theme_manager.current_theme().colors)
}

/// Color of a country's points, dots, and legend swatch.
pub fn country_color(country: &str, colors: &ThemeColors) -> Color32 {
    match country {
        "USA" => colors.red,
        "USSR" => colors.blue,
        "FRANCE" => colors.green,
        "UK" => colors.orange,
        "CHINA" => colors.yellow,
        "INDIA" => colors.purple,
        "PAKISTAN" => colors.cyan,
        _ => colors.gray,
    }
}

/// Translucent country-colored stroke for the bulk connectors of a selected
/// country.
pub fn country_bulk_connector(country: &str, colors: &ThemeColors) -> Color32 {
    with_alpha(country_color(country, colors), 150)
}

/// Color for the clicked timeline group's connectors; always wins visually.
pub fn active_connector(colors: &ThemeColors) -> Color32 {
    colors.red
}

/// Color for an individually selected event or group.
pub fn selection_connector(colors: &ThemeColors) -> Color32 {
    colors.orange
}
