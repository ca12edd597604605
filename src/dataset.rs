//! Nuclear-test event records and CSV dataset parsing.
//!
//! The dataset is a header-labelled CSV with one row per test. Rows are parsed
//! into [`TestEvent`] values identified by their load-order [`EventId`]; that
//! id is the stable handle carried through aggregation and rendering, so no
//! later stage has to re-match records by floating-point equality.

use anyhow::{anyhow, Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Stable identifier of a test event: its index in load order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(pub u32);

impl EventId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One nuclear-test record, immutable after load.
///
/// Numeric fields that fail to parse degrade instead of aborting the load:
/// `year`/`latitude`/`longitude` fall back to zero, `avg_yield` to `None`
/// (rendered as "N/A"). `yield_desc` stays textual because the source data
/// contains values like `"<20"`.
#[derive(Debug, Clone, PartialEq)]
pub struct TestEvent {
    pub country: String,
    pub year: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub avg_yield: Option<f64>,
    pub region: String,
    pub depth: String,
    pub yield_desc: String,
    pub purpose: String,
    pub name: String,
    pub date: String,
}

/// The flat, load-ordered list of test events.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    events: Vec<TestEvent>,
}

impl Dataset {
    pub fn new(events: Vec<TestEvent>) -> Self {
        Self { events }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: EventId) -> Option<&TestEvent> {
        self.events.get(id.index())
    }

    pub fn events(&self) -> &[TestEvent] {
        &self.events
    }

    /// Iterates events with their stable ids.
    pub fn iter_ids(&self) -> impl Iterator<Item = (EventId, &TestEvent)> {
        self.events
            .iter()
            .enumerate()
            .map(|(i, e)| (EventId(i as u32), e))
    }

    /// (min_year, max_year) over the dataset, or None when empty.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let mut years = self.events.iter().map(|e| e.year);
        let first = years.next()?;
        Some(years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }
}

const REQUIRED_COLUMNS: [&str; 11] = [
    "country",
    "year",
    "latitude",
    "longitude",
    "average_yield",
    "region",
    "depth",
    "yield_1",
    "purpose",
    "name",
    "date_DMY",
];

/// Reads and parses a dataset CSV file.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset file {}", path.display()))?;
    parse_dataset(&text).with_context(|| format!("failed to parse dataset {}", path.display()))
}

/// Parses dataset CSV text. An empty table (no data rows) is an error, since
/// the viewer has nothing to show without it.
pub fn parse_dataset(text: &str) -> Result<Dataset> {
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());
    let header = lines.next().ok_or_else(|| anyhow!("dataset is empty"))?;
    let columns = column_indices(header)?;

    let mut events = Vec::new();
    for line in lines {
        let fields = split_csv_line(line);
        events.push(parse_row(&fields, &columns));
    }

    if events.is_empty() {
        return Err(anyhow!("dataset contains a header but no rows"));
    }
    Ok(Dataset::new(events))
}

fn column_indices(header: &str) -> Result<HashMap<String, usize>> {
    let names = split_csv_line(header);
    let map: HashMap<String, usize> = names
        .iter()
        .enumerate()
        .map(|(i, n)| (n.trim().to_string(), i))
        .collect();
    for required in REQUIRED_COLUMNS {
        if !map.contains_key(required) {
            return Err(anyhow!("dataset header is missing column '{}'", required));
        }
    }
    Ok(map)
}

fn parse_row(fields: &[String], columns: &HashMap<String, usize>) -> TestEvent {
    let field = |name: &str| -> String {
        columns
            .get(name)
            .and_then(|&i| fields.get(i))
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    };

    let mut country = field("country");
    // Dataset quirk: the source labels soviet tests inconsistently.
    if country == "RUSSIA" {
        country = "USSR".to_string();
    }

    TestEvent {
        country,
        year: field("year").parse().unwrap_or(0),
        latitude: field("latitude").parse().unwrap_or(0.0),
        longitude: field("longitude").parse().unwrap_or(0.0),
        avg_yield: field("average_yield").parse().ok(),
        region: field("region"),
        depth: field("depth"),
        yield_desc: field("yield_1"),
        purpose: field("purpose"),
        name: field("name"),
        date: field("date_DMY"),
    }
}

/// Minimal CSV field splitter: comma separated, double quotes guard embedded
/// commas, doubled quotes escape a literal quote.
fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "country,year,latitude,longitude,average_yield,region,depth,yield_1,purpose,name,date_DMY";

    fn row(country: &str, year: &str, lat: &str, lon: &str) -> String {
        format!("{country},{year},{lat},{lon},20.0,NEVADA,-640,20,WR,TRINITY,16/07/1945")
    }

    #[test]
    fn parses_rows_in_order() {
        let text = format!(
            "{HEADER}\n{}\n{}",
            row("USA", "1945", "33.675", "-106.475"),
            row("UK", "1952", "-20.4", "115.5")
        );
        let ds = parse_dataset(&text).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.get(EventId(0)).unwrap().country, "USA");
        assert_eq!(ds.get(EventId(1)).unwrap().year, 1952);
        assert_eq!(ds.year_range(), Some((1945, 1952)));
    }

    #[test]
    fn normalizes_russia_to_ussr() {
        let text = format!("{HEADER}\n{}", row("RUSSIA", "1949", "50.0", "78.0"));
        let ds = parse_dataset(&text).unwrap();
        assert_eq!(ds.get(EventId(0)).unwrap().country, "USSR");
    }

    #[test]
    fn malformed_numbers_degrade_instead_of_failing() {
        let text = format!("{HEADER}\nUSA,not_a_year,bad,worse,n/a,NEVADA,,<20,WR,X,1/1/1955");
        let ds = parse_dataset(&text).unwrap();
        let e = ds.get(EventId(0)).unwrap();
        assert_eq!(e.year, 0);
        assert_eq!(e.latitude, 0.0);
        assert_eq!(e.longitude, 0.0);
        assert_eq!(e.avg_yield, None);
        assert_eq!(e.yield_desc, "<20");
    }

    #[test]
    fn quoted_fields_keep_embedded_commas() {
        let fields = split_csv_line("USA,\"SITE, REMOTE\",\"he said \"\"hi\"\"\"");
        assert_eq!(fields, vec!["USA", "SITE, REMOTE", "he said \"hi\""]);
    }

    #[test]
    fn empty_table_is_an_error() {
        assert!(parse_dataset("").is_err());
        assert!(parse_dataset(HEADER).is_err());
    }

    #[test]
    fn missing_column_is_an_error() {
        assert!(parse_dataset("country,year\nUSA,1945").is_err());
    }
}
