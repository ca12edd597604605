pub mod connector_renderer;
pub mod map_renderer;
pub mod nav_renderer;
pub mod timeline_renderer;
