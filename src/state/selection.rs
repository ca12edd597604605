//! Selection and hover state across the map, legend, and timeline.
//!
//! Six tracked fields drive every highlight in the application. The
//! transitions are deliberately asymmetric: `clicked_group` belongs to the
//! timeline and survives both map clicks and legend toggles, while the other
//! selections are cleared freely.

use nukeline::{EventId, GroupKey};

/// Cross-view selection state.
///
/// All transitions are plain methods over plain data, so the state machine is
/// unit-testable without any rendering context.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Country toggled from the legend
    selected_country: Option<String>,
    /// Individually selected test event
    selected_event: Option<EventId>,
    /// Selected timeline group
    selected_group: Option<GroupKey>,
    /// Timeline-label click; stickier than the other selections
    clicked_group: Option<GroupKey>,
    /// Map point currently under the pointer
    hovered_event: Option<EventId>,
    /// Year emphasized across all views; None is "no year"
    highlighted_year: Option<i32>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears everything, including the sticky timeline click.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    // ===== Queries =====

    pub fn selected_country(&self) -> Option<&str> {
        self.selected_country.as_deref()
    }

    pub fn selected_event(&self) -> Option<EventId> {
        self.selected_event
    }

    pub fn selected_group(&self) -> Option<&GroupKey> {
        self.selected_group.as_ref()
    }

    pub fn clicked_group(&self) -> Option<&GroupKey> {
        self.clicked_group.as_ref()
    }

    pub fn hovered_event(&self) -> Option<EventId> {
        self.hovered_event
    }

    pub fn highlighted_year(&self) -> Option<i32> {
        self.highlighted_year
    }

    // ===== Transitions =====

    /// Pointer moved over (or away from) a map point. Hover never disturbs
    /// the click-driven selections.
    pub fn set_hovered(&mut self, event: Option<EventId>) {
        self.hovered_event = event;
    }

    /// Click on the map background band: clears the transient selections and
    /// the year highlight. The timeline's clicked group is not map state and
    /// stays put.
    pub fn map_click(&mut self) {
        self.selected_event = None;
        self.selected_country = None;
        self.selected_group = None;
        self.highlighted_year = None;
    }

    /// Legend entry click: toggles the country. Event/group selections clear
    /// either way; the clicked timeline group stays.
    pub fn legend_click(&mut self, country: &str) {
        if self.selected_country.as_deref() == Some(country) {
            self.selected_country = None;
        } else {
            self.selected_country = Some(country.to_string());
        }
        self.selected_event = None;
        self.selected_group = None;
        self.highlighted_year = None;
    }

    /// Timeline label click: toggles the clicked group. Selecting also makes
    /// it the selected group and pulls the year highlight to it.
    pub fn timeline_label_click(&mut self, key: &GroupKey) {
        if self.clicked_group.as_ref() == Some(key) {
            self.clicked_group = None;
            self.selected_group = None;
        } else {
            self.clicked_group = Some(key.clone());
            self.selected_group = Some(key.clone());
            self.selected_event = None;
            self.highlighted_year = Some(key.year);
        }
    }

    /// Year highlight from scroll position or a mini-nav click.
    pub fn set_highlighted_year(&mut self, year: Option<i32>) {
        self.highlighted_year = year;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(country: &str, year: i32) -> GroupKey {
        GroupKey::new(country, year)
    }

    #[test]
    fn hover_leaves_click_state_alone() {
        let mut sel = SelectionState::new();
        sel.legend_click("USA");
        sel.timeline_label_click(&key("USA", 1954));
        sel.set_hovered(Some(EventId(3)));
        assert_eq!(sel.selected_country(), Some("USA"));
        assert_eq!(sel.clicked_group(), Some(&key("USA", 1954)));
        sel.set_hovered(None);
        assert_eq!(sel.hovered_event(), None);
    }

    #[test]
    fn map_click_clears_everything_but_the_clicked_group() {
        let mut sel = SelectionState::new();
        sel.legend_click("USSR");
        sel.timeline_label_click(&key("USSR", 1961));
        sel.map_click();
        assert_eq!(sel.selected_country(), None);
        assert_eq!(sel.selected_event(), None);
        assert_eq!(sel.selected_group(), None);
        assert_eq!(sel.highlighted_year(), None);
        assert_eq!(sel.clicked_group(), Some(&key("USSR", 1961)));
    }

    #[test]
    fn legend_click_toggles() {
        let mut sel = SelectionState::new();
        sel.legend_click("FRANCE");
        assert_eq!(sel.selected_country(), Some("FRANCE"));
        sel.legend_click("FRANCE");
        assert_eq!(sel.selected_country(), None);
        sel.legend_click("FRANCE");
        sel.legend_click("UK");
        assert_eq!(sel.selected_country(), Some("UK"));
    }

    #[test]
    fn label_click_selects_and_highlights_its_year() {
        let mut sel = SelectionState::new();
        sel.timeline_label_click(&key("CHINA", 1964));
        assert_eq!(sel.clicked_group(), Some(&key("CHINA", 1964)));
        assert_eq!(sel.selected_group(), Some(&key("CHINA", 1964)));
        assert_eq!(sel.highlighted_year(), Some(1964));
    }

    #[test]
    fn label_click_twice_returns_to_nothing_clicked() {
        let mut sel = SelectionState::new();
        sel.set_highlighted_year(Some(1950));
        sel.timeline_label_click(&key("USA", 1954));
        sel.timeline_label_click(&key("USA", 1954));
        assert_eq!(sel.clicked_group(), None);
        assert_eq!(sel.selected_group(), None);
        // The year highlight set by the first click remains until the next
        // scroll or map interaction updates it.
        assert_eq!(sel.highlighted_year(), Some(1954));
    }

    #[test]
    fn legend_then_label_keeps_both_and_each_toggles_off_independently() {
        let mut sel = SelectionState::new();
        sel.legend_click("USA");
        sel.timeline_label_click(&key("USSR", 1961));
        assert_eq!(sel.selected_country(), Some("USA"));
        assert_eq!(sel.clicked_group(), Some(&key("USSR", 1961)));

        // Toggling the label off returns to the country-only state
        let mut label_off = sel.clone();
        label_off.timeline_label_click(&key("USSR", 1961));
        assert_eq!(label_off.selected_country(), Some("USA"));
        assert_eq!(label_off.clicked_group(), None);

        // Toggling the legend off returns to the clicked-group state
        let mut legend_off = sel;
        legend_off.legend_click("USA");
        assert_eq!(legend_off.selected_country(), None);
        assert_eq!(legend_off.clicked_group(), Some(&key("USSR", 1961)));
    }

    #[test]
    fn legend_toggle_resets_year_highlight() {
        let mut sel = SelectionState::new();
        sel.set_highlighted_year(Some(1970));
        sel.legend_click("INDIA");
        assert_eq!(sel.highlighted_year(), None);
    }
}
