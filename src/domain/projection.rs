//! Coordinate mapping between data space and screen space.
//!
//! Pure functions covering the three coupled views:
//! - geographic projection of (lon, lat) onto the map canvas,
//! - timeline placement of (country, year) groups with same-year stacking,
//! - mini-nav mapping between strip X, timeline scroll offset, and year.
//!
//! Everything here is a pure function of its inputs so it can be tested
//! without a rendering surface and recomputed freely on resize.

use egui::{pos2, Pos2, Rect};
use nukeline::{Dataset, EventGroup};

/// Height of the mini-nav strip.
pub const NAV_HEIGHT: f32 = 40.0;
/// Height of the timeline strip at the bottom of the window.
pub const TIMELINE_HEIGHT: f32 = 300.0;
/// Y of the timeline's main axis within the strip.
pub const TIMELINE_Y_OFFSET: f32 = 30.0;
/// Left padding before the first year on the timeline.
pub const TIMELINE_START_X: f32 = 50.0;
/// Horizontal pixels per year on the timeline.
pub const YEAR_STEP_PX: f32 = 120.0;
/// Vertical spacing between stacked same-year labels.
pub const LINE_HEIGHT: f32 = 30.0;
/// Side margin inside the mini-nav strip.
pub const NAV_MARGIN: f32 = 10.0;
/// Hit-test radius around a projected map point.
pub const HIT_RADIUS: f32 = 10.0;

/// The map canvas in screen coordinates.
///
/// Longitude [-180, 180] maps across the full width; latitude [-90, 90] maps
/// bottom-to-top (higher latitude, smaller y).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapLayout {
    pub rect: Rect,
}

impl MapLayout {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    pub fn lon_to_x(&self, lon: f64) -> f32 {
        let t = ((lon + 180.0) / 360.0) as f32;
        self.rect.left() + t * self.rect.width()
    }

    pub fn lat_to_y(&self, lat: f64) -> f32 {
        let t = ((lat + 90.0) / 180.0) as f32;
        self.rect.bottom() + t * (self.rect.top() - self.rect.bottom())
    }

    pub fn project(&self, lon: f64, lat: f64) -> Pos2 {
        pos2(self.lon_to_x(lon), self.lat_to_y(lat))
    }
}

/// Projects every event in load order.
pub fn project_events(dataset: &Dataset, layout: &MapLayout) -> Vec<Pos2> {
    dataset
        .events()
        .iter()
        .map(|e| layout.project(e.longitude, e.latitude))
        .collect()
}

/// Returns the index of the first event whose projected point is within
/// [`HIT_RADIUS`] of the pointer, restricted to the map's vertical band.
pub fn hit_test(points: &[Pos2], pointer: Pos2, band_top: f32, band_bottom: f32) -> Option<usize> {
    if pointer.y < band_top || pointer.y > band_bottom {
        return None;
    }
    points
        .iter()
        .position(|p| p.distance(pointer) < HIT_RADIUS)
}

/// Year extent of the timeline, derived from the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineGeometry {
    pub start_year: i32,
    pub end_year: i32,
}

impl TimelineGeometry {
    pub fn from_dataset(dataset: &Dataset) -> Option<Self> {
        let (start_year, end_year) = dataset.year_range()?;
        Some(Self {
            start_year,
            end_year,
        })
    }

    pub fn span_years(&self) -> i32 {
        (self.end_year - self.start_year).max(0)
    }

    /// Width of the year span itself, excluding side padding.
    pub fn content_width(&self) -> f32 {
        self.span_years() as f32 * YEAR_STEP_PX
    }

    /// Full scrollable width of the timeline strip.
    pub fn total_width(&self) -> f32 {
        self.content_width() + 2.0 * TIMELINE_START_X
    }

    /// X of a year in timeline-content coordinates.
    pub fn year_x(&self, year: i32) -> f32 {
        TIMELINE_START_X + (year - self.start_year) as f32 * YEAR_STEP_PX
    }

    /// Maps a [0, 1] position along the year span to a year, clamped.
    pub fn year_at_ratio(&self, ratio: f32) -> i32 {
        let ratio = ratio.clamp(0.0, 1.0);
        let year = self.start_year + (ratio * self.span_years() as f32).floor() as i32;
        year.clamp(self.start_year, self.end_year)
    }

    /// Year under the center of the visible scroll window.
    pub fn year_at_scroll_center(&self, scroll_offset: f32, viewport_width: f32) -> i32 {
        let center = scroll_offset + viewport_width / 2.0;
        self.year_at_x(center)
    }

    /// Year at an absolute timeline-content X.
    pub fn year_at_x(&self, x: f32) -> i32 {
        let content = self.content_width();
        if content <= 0.0 {
            return self.start_year;
        }
        self.year_at_ratio((x - TIMELINE_START_X) / content)
    }

    /// Scroll offset that centers the given absolute timeline X, clamped to
    /// the scrollable range.
    pub fn scroll_offset_centering(&self, target_x: f32, viewport_width: f32) -> f32 {
        let max = (self.total_width() - viewport_width).max(0.0);
        (target_x - viewport_width / 2.0).clamp(0.0, max)
    }

    /// X of a year inside the mini-nav strip.
    pub fn nav_x_for_year(&self, year: i32, strip: Rect) -> f32 {
        let span = self.span_years().max(1) as f32;
        let t = (year - self.start_year) as f32 / span;
        strip.left() + NAV_MARGIN + t * (strip.width() - 2.0 * NAV_MARGIN)
    }

    /// Pixel width of one year inside the mini-nav strip.
    pub fn nav_year_width(&self, strip: Rect) -> f32 {
        (strip.width() - 2.0 * NAV_MARGIN) / self.span_years().max(1) as f32
    }

    /// Maps a click X inside the mini-nav strip to the absolute timeline X
    /// it points at (proportional over the full scrollable width).
    pub fn nav_x_to_timeline_x(&self, click_x: f32, strip: Rect) -> f32 {
        let usable = (strip.width() - 2.0 * NAV_MARGIN).max(1.0);
        let t = ((click_x - strip.left() - NAV_MARGIN) / usable).clamp(0.0, 1.0);
        t * self.total_width()
    }
}

/// Placement of one group on the timeline: content X plus stacking row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineSlot {
    pub x: f32,
    pub row: usize,
}

/// Assigns each group its timeline X and a stacked row: same-year groups get
/// consecutive rows in sorted-group order.
pub fn stack_groups(groups: &[EventGroup], geometry: &TimelineGeometry) -> Vec<TimelineSlot> {
    let mut rows_per_year: std::collections::HashMap<i32, usize> = std::collections::HashMap::new();
    groups
        .iter()
        .map(|g| {
            let row = rows_per_year.entry(g.year).or_insert(0);
            let slot = TimelineSlot {
                x: geometry.year_x(g.year),
                row: *row,
            };
            *row += 1;
            slot
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;
    use nukeline::{group_events, TestEvent};

    fn event(country: &str, year: i32, lat: f64, lon: f64) -> TestEvent {
        TestEvent {
            country: country.to_string(),
            year,
            latitude: lat,
            longitude: lon,
            avg_yield: None,
            region: String::new(),
            depth: String::new(),
            yield_desc: String::new(),
            purpose: String::new(),
            name: String::new(),
            date: String::new(),
        }
    }

    fn layout_1000x800() -> MapLayout {
        MapLayout::new(Rect::from_min_size(pos2(0.0, 0.0), vec2(1000.0, 800.0)))
    }

    #[test]
    fn lon_zero_maps_to_mid_width() {
        let layout = layout_1000x800();
        assert_eq!(layout.lon_to_x(0.0), 500.0);
        assert_eq!(layout.lon_to_x(-180.0), 0.0);
        assert_eq!(layout.lon_to_x(180.0), 1000.0);
    }

    #[test]
    fn latitude_axis_is_inverted() {
        let layout = layout_1000x800();
        // lat 0 lands at the vertical midpoint of the band
        assert_eq!(layout.lat_to_y(0.0), 400.0);
        // higher latitude, smaller y
        assert!(layout.lat_to_y(60.0) < layout.lat_to_y(-60.0));
        assert_eq!(layout.lat_to_y(90.0), 0.0);
        assert_eq!(layout.lat_to_y(-90.0), 800.0);
    }

    #[test]
    fn projection_is_pure() {
        let ds = Dataset::new(vec![event("USA", 1954, 37.0, -116.0)]);
        let layout = layout_1000x800();
        assert_eq!(project_events(&ds, &layout), project_events(&ds, &layout));
    }

    #[test]
    fn hit_test_respects_radius_and_band() {
        let points = vec![pos2(100.0, 100.0), pos2(200.0, 100.0)];
        assert_eq!(hit_test(&points, pos2(205.0, 103.0), 0.0, 400.0), Some(1));
        assert_eq!(hit_test(&points, pos2(120.0, 100.0), 0.0, 400.0), None);
        // outside the vertical band
        assert_eq!(hit_test(&points, pos2(100.0, 100.0), 150.0, 400.0), None);
    }

    #[test]
    fn timeline_x_spacing_per_year() {
        let geometry = TimelineGeometry {
            start_year: 1945,
            end_year: 1998,
        };
        assert_eq!(geometry.year_x(1945), TIMELINE_START_X);
        assert_eq!(geometry.year_x(1946), TIMELINE_START_X + YEAR_STEP_PX);
        assert_eq!(
            geometry.total_width(),
            53.0 * YEAR_STEP_PX + 2.0 * TIMELINE_START_X
        );
    }

    #[test]
    fn year_at_ratio_clamps_to_range() {
        let geometry = TimelineGeometry {
            start_year: 1945,
            end_year: 1998,
        };
        assert_eq!(geometry.year_at_ratio(-0.5), 1945);
        assert_eq!(geometry.year_at_ratio(0.0), 1945);
        assert_eq!(geometry.year_at_ratio(1.0), 1998);
        assert_eq!(geometry.year_at_ratio(2.0), 1998);
    }

    #[test]
    fn scroll_center_maps_back_to_the_year_under_it() {
        let geometry = TimelineGeometry {
            start_year: 1945,
            end_year: 1998,
        };
        let viewport = 800.0;
        let x_1960 = geometry.year_x(1960);
        let offset = geometry.scroll_offset_centering(x_1960, viewport);
        assert_eq!(geometry.year_at_scroll_center(offset, viewport), 1960);
    }

    #[test]
    fn scroll_offset_is_clamped_to_content() {
        let geometry = TimelineGeometry {
            start_year: 1950,
            end_year: 1952,
        };
        // Content narrower than viewport: offset pins to zero
        assert_eq!(geometry.scroll_offset_centering(100.0, 2000.0), 0.0);
    }

    #[test]
    fn same_year_groups_stack_in_rows() {
        let ds = Dataset::new(vec![
            event("FRANCE", 1961, 0.0, 0.0),
            event("USSR", 1961, 0.0, 0.0),
            event("USA", 1962, 0.0, 0.0),
        ]);
        let groups = group_events(&ds);
        let geometry = TimelineGeometry::from_dataset(&ds).unwrap();
        let slots = stack_groups(&groups, &geometry);
        assert_eq!(slots[0].row, 0);
        assert_eq!(slots[1].row, 1);
        assert_eq!(slots[0].x, slots[1].x);
        assert_eq!(slots[2].row, 0);
    }

    #[test]
    fn nav_click_round_trip() {
        let geometry = TimelineGeometry {
            start_year: 1945,
            end_year: 1998,
        };
        let strip = Rect::from_min_size(pos2(0.0, 0.0), vec2(1000.0, NAV_HEIGHT));
        // Click far left / far right pin to the range ends
        assert_eq!(geometry.year_at_x(geometry.nav_x_to_timeline_x(0.0, strip)), 1945);
        assert_eq!(
            geometry.year_at_x(geometry.nav_x_to_timeline_x(1000.0, strip)),
            1998
        );
    }
}
