//! Highlight propagation: which selection drives the details panel and how
//! each timeline label should be emphasized.

use crate::state::SelectionState;
use nukeline::{Dataset, EventGroup, EventId, GroupKey};

/// The single selection that drives the details panel, in precedence order.
#[derive(Debug, Clone, PartialEq)]
pub enum Primary {
    /// Map point under the pointer
    HoveredEvent(EventId),
    /// Sticky timeline-label click
    ClickedGroup(GroupKey),
    /// Country with nothing more specific selected
    CountrySummary(String),
    /// Individually selected test
    SelectedEvent(EventId),
    /// Selected group (without a timeline click)
    SelectedGroup(GroupKey),
    None,
}

/// Resolves the primary selection: hovered point > clicked timeline group >
/// country-only > selected event > selected group > none.
pub fn primary_selection(sel: &SelectionState) -> Primary {
    if let Some(id) = sel.hovered_event() {
        return Primary::HoveredEvent(id);
    }
    if let Some(key) = sel.clicked_group() {
        return Primary::ClickedGroup(key.clone());
    }
    if let Some(country) = sel.selected_country() {
        if sel.selected_event().is_none() && sel.selected_group().is_none() {
            return Primary::CountrySummary(country.to_string());
        }
    }
    if let Some(id) = sel.selected_event() {
        return Primary::SelectedEvent(id);
    }
    if let Some(key) = sel.selected_group() {
        return Primary::SelectedGroup(key.clone());
    }
    Primary::None
}

/// Visual emphasis of one timeline label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelEmphasis {
    Neutral,
    /// Label's year equals the highlighted year
    YearMatch,
    /// Label belongs to the selected country
    CountryMatch,
    /// Label is the single primarily-selected group
    Primary,
}

/// Applies the exclusive label-highlight policy ladder for one group:
/// a primary single-group selection wins, else a selected country highlights
/// all of its labels, else the highlighted year lights up matching labels.
pub fn label_emphasis(
    sel: &SelectionState,
    dataset: &Dataset,
    group: &EventGroup,
) -> LabelEmphasis {
    if let Some(target) = primary_group_key(sel, dataset) {
        if group.matches(&target) {
            return LabelEmphasis::Primary;
        }
        return LabelEmphasis::Neutral;
    }

    if let Some(country) = sel.selected_country() {
        if group.country == country {
            return LabelEmphasis::CountryMatch;
        }
        return LabelEmphasis::Neutral;
    }

    if sel.highlighted_year() == Some(group.year) {
        return LabelEmphasis::YearMatch;
    }
    LabelEmphasis::Neutral
}

/// The (country, year) of the primarily-selected single event or group, if
/// one exists. A selected event resolves to the group it belongs to.
pub fn primary_group_key(sel: &SelectionState, dataset: &Dataset) -> Option<GroupKey> {
    if let Some(id) = sel.selected_event() {
        let event = dataset.get(id)?;
        return Some(GroupKey::new(event.country.clone(), event.year));
    }
    sel.selected_group().cloned()
}

/// The country the legend should emphasize: the explicitly selected one, or
/// the country of whatever event/group selection exists.
pub fn effective_country(sel: &SelectionState, dataset: &Dataset) -> Option<String> {
    if let Some(c) = sel.selected_country() {
        return Some(c.to_string());
    }
    if let Some(id) = sel.selected_event() {
        return dataset.get(id).map(|e| e.country.clone());
    }
    if let Some(key) = sel.selected_group() {
        return Some(key.country.clone());
    }
    sel.clicked_group().map(|k| k.country.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nukeline::TestEvent;

    fn event(country: &str, year: i32) -> TestEvent {
        TestEvent {
            country: country.to_string(),
            year,
            latitude: 0.0,
            longitude: 0.0,
            avg_yield: None,
            region: String::new(),
            depth: String::new(),
            yield_desc: String::new(),
            purpose: String::new(),
            name: String::new(),
            date: String::new(),
        }
    }

    fn dataset() -> Dataset {
        Dataset::new(vec![
            event("USA", 1954),
            event("USA", 1954),
            event("USSR", 1961),
        ])
    }

    fn group(country: &str, year: i32, ids: &[u32]) -> EventGroup {
        EventGroup {
            country: country.to_string(),
            year,
            event_ids: ids.iter().map(|&i| EventId(i)).collect(),
        }
    }

    #[test]
    fn hover_beats_everything() {
        let mut sel = SelectionState::new();
        sel.legend_click("USA");
        sel.timeline_label_click(&GroupKey::new("USSR", 1961));
        sel.set_hovered(Some(EventId(0)));
        assert_eq!(primary_selection(&sel), Primary::HoveredEvent(EventId(0)));
    }

    #[test]
    fn clicked_group_beats_country() {
        let mut sel = SelectionState::new();
        sel.legend_click("USA");
        sel.timeline_label_click(&GroupKey::new("USSR", 1961));
        assert_eq!(
            primary_selection(&sel),
            Primary::ClickedGroup(GroupKey::new("USSR", 1961))
        );
    }

    #[test]
    fn country_summary_only_when_nothing_else_selected() {
        let mut sel = SelectionState::new();
        sel.legend_click("USA");
        assert_eq!(
            primary_selection(&sel),
            Primary::CountrySummary("USA".to_string())
        );
    }

    #[test]
    fn empty_state_has_no_primary() {
        assert_eq!(primary_selection(&SelectionState::new()), Primary::None);
    }

    #[test]
    fn primary_group_label_wins_over_country_and_year() {
        let ds = dataset();
        let mut sel = SelectionState::new();
        sel.legend_click("USA");
        sel.timeline_label_click(&GroupKey::new("USA", 1954));

        let usa_1954 = group("USA", 1954, &[0, 1]);
        let ussr_1961 = group("USSR", 1961, &[2]);
        assert_eq!(label_emphasis(&sel, &ds, &usa_1954), LabelEmphasis::Primary);
        assert_eq!(label_emphasis(&sel, &ds, &ussr_1961), LabelEmphasis::Neutral);
    }

    #[test]
    fn country_policy_covers_all_years_of_that_country() {
        let ds = dataset();
        let mut sel = SelectionState::new();
        sel.legend_click("USA");
        sel.set_highlighted_year(Some(1961));

        let usa_1954 = group("USA", 1954, &[0, 1]);
        let ussr_1961 = group("USSR", 1961, &[2]);
        assert_eq!(
            label_emphasis(&sel, &ds, &usa_1954),
            LabelEmphasis::CountryMatch
        );
        // Year-policy is suppressed while a country is selected
        assert_eq!(label_emphasis(&sel, &ds, &ussr_1961), LabelEmphasis::Neutral);
    }

    #[test]
    fn year_policy_applies_when_nothing_is_selected() {
        let ds = dataset();
        let mut sel = SelectionState::new();
        sel.set_highlighted_year(Some(1961));

        let usa_1954 = group("USA", 1954, &[0, 1]);
        let ussr_1961 = group("USSR", 1961, &[2]);
        assert_eq!(label_emphasis(&sel, &ds, &usa_1954), LabelEmphasis::Neutral);
        assert_eq!(
            label_emphasis(&sel, &ds, &ussr_1961),
            LabelEmphasis::YearMatch
        );
    }

    #[test]
    fn deselecting_the_label_restores_the_previous_policy() {
        let ds = dataset();
        let mut sel = SelectionState::new();
        sel.legend_click("USA");
        sel.timeline_label_click(&GroupKey::new("USSR", 1961));
        sel.timeline_label_click(&GroupKey::new("USSR", 1961));

        let usa_1954 = group("USA", 1954, &[0, 1]);
        assert_eq!(
            label_emphasis(&sel, &ds, &usa_1954),
            LabelEmphasis::CountryMatch
        );
    }

    #[test]
    fn selected_event_resolves_to_its_group() {
        let ds = dataset();
        let mut sel = SelectionState::new();
        sel.set_hovered(None);
        // Directly exercise primary_group_key through a selected event by
        // simulating the state a point selection would leave behind.
        let key = primary_group_key(&sel, &ds);
        assert_eq!(key, None);

        sel.timeline_label_click(&GroupKey::new("USA", 1954));
        assert_eq!(
            primary_group_key(&sel, &ds),
            Some(GroupKey::new("USA", 1954))
        );
    }

    #[test]
    fn legend_emphasis_follows_the_clicked_group_country() {
        let ds = dataset();
        let mut sel = SelectionState::new();
        sel.timeline_label_click(&GroupKey::new("USSR", 1961));
        assert_eq!(effective_country(&sel, &ds), Some("USSR".to_string()));
    }
}
