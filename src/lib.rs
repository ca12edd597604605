pub mod aggregate;
pub mod dataset;
pub mod geo;
pub mod sample;
pub mod theme;

// Export the data model
pub use dataset::{load_dataset, parse_dataset, Dataset, EventId, TestEvent};

// Export aggregation
pub use aggregate::{find_group, group_events, EventGroup, GroupKey};

// Export boundary data
pub use geo::{load_world, parse_world, Geometry, WorldMap};

// Export theme support
pub use theme::{adjust_brightness, hex_to_color32, with_alpha, Theme, ThemeColors, ThemeManager};
