//! Aggregation of test events into (country, year) timeline groups.

use crate::dataset::{Dataset, EventId};
use std::collections::HashMap;

/// Key identifying a timeline group independently of its index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey {
    pub country: String,
    pub year: i32,
}

impl GroupKey {
    pub fn new(country: impl Into<String>, year: i32) -> Self {
        Self {
            country: country.into(),
            year,
        }
    }
}

/// One aggregated bucket of tests sharing (country, year).
///
/// Holds stable event ids rather than copied detail records; the dataset is
/// the single source of truth for per-test fields.
#[derive(Debug, Clone, PartialEq)]
pub struct EventGroup {
    pub country: String,
    pub year: i32,
    pub event_ids: Vec<EventId>,
}

impl EventGroup {
    pub fn count(&self) -> usize {
        self.event_ids.len()
    }

    pub fn key(&self) -> GroupKey {
        GroupKey::new(self.country.clone(), self.year)
    }

    pub fn matches(&self, key: &GroupKey) -> bool {
        self.country == key.country && self.year == key.year
    }
}

/// Groups events by (country, year) in a single pass, then sorts by
/// (year, country) lexicographically.
///
/// Membership is order-independent; within a group the ids keep load order,
/// so the result is deterministic for equal input sets.
pub fn group_events(dataset: &Dataset) -> Vec<EventGroup> {
    let mut index: HashMap<(String, i32), usize> = HashMap::new();
    let mut groups: Vec<EventGroup> = Vec::new();

    for (id, event) in dataset.iter_ids() {
        let key = (event.country.clone(), event.year);
        match index.get(&key) {
            Some(&i) => groups[i].event_ids.push(id),
            None => {
                index.insert(key, groups.len());
                groups.push(EventGroup {
                    country: event.country.clone(),
                    year: event.year,
                    event_ids: vec![id],
                });
            }
        }
    }

    groups.sort_by(|a, b| (a.year, a.country.as_str()).cmp(&(b.year, b.country.as_str())));
    groups
}

/// Finds the group matching a key, if present.
pub fn find_group<'a>(groups: &'a [EventGroup], key: &GroupKey) -> Option<&'a EventGroup> {
    groups.iter().find(|g| g.matches(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::TestEvent;

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

    #[test]
    fn one_group_per_distinct_key_and_counts_sum() {
        let ds = Dataset::new(vec![
            event("USA", 1954),
            event("USSR", 1954),
            event("USA", 1954),
            event("USA", 1962),
        ]);
        let groups = group_events(&ds);
        assert_eq!(groups.len(), 3);
        let total: usize = groups.iter().map(EventGroup::count).sum();
        assert_eq!(total, ds.len());
    }

    #[test]
    fn same_key_twice_yields_single_group_of_two() {
        let ds = Dataset::new(vec![event("USA", 1954), event("USA", 1954)]);
        let groups = group_events(&ds);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].count(), 2);
        assert_eq!(groups[0].event_ids, vec![EventId(0), EventId(1)]);
    }

    #[test]
    fn sorted_by_year_then_country() {
        let ds = Dataset::new(vec![
            event("USSR", 1961),
            event("USA", 1945),
            event("FRANCE", 1961),
            event("UK", 1952),
        ]);
        let keys: Vec<(i32, String)> = group_events(&ds)
            .into_iter()
            .map(|g| (g.year, g.country))
            .collect();
        assert_eq!(
            keys,
            vec![
                (1945, "USA".to_string()),
                (1952, "UK".to_string()),
                (1961, "FRANCE".to_string()),
                (1961, "USSR".to_string()),
            ]
        );
    }

    #[test]
    fn membership_is_order_independent() {
        let forward = Dataset::new(vec![
            event("USA", 1954),
            event("UK", 1957),
            event("USA", 1954),
        ]);
        let shuffled = Dataset::new(vec![
            event("UK", 1957),
            event("USA", 1954),
            event("USA", 1954),
        ]);
        let sig = |gs: &[EventGroup]| -> Vec<(String, i32, usize)> {
            gs.iter()
                .map(|g| (g.country.clone(), g.year, g.count()))
                .collect()
        };
        assert_eq!(sig(&group_events(&forward)), sig(&group_events(&shuffled)));
    }
}
