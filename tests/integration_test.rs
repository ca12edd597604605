use anyhow::Result;
use nukeline::{group_events, load_dataset, parse_dataset, parse_world, sample, GroupKey};
use std::env;
use std::fs;

#[test]
fn test_parse_aggregate_pipeline() -> Result<()> {
    let csv = "\
country,year,latitude,longitude,average_yield,region,depth,yield_1,purpose,name,date_DMY
USA,1954,11.699,165.272,6000,BIKINI,0,6000,WE,CASTLE BRAVO,01.03.1954
RUSSIA,1949,50.0,78.0,22,SEMIPALATINSK,0,22,WE,RDS-1,29.08.1949
USA,1954,11.6,165.3,110,BIKINI,0,110,WE,CASTLE ROMEO,27.03.1954
FRANCE,1960,26.3,0.05,70,REGGANE,0,70,WE,GERBOISE BLEUE,13.02.1960
";
    let dataset = parse_dataset(csv)?;
    assert_eq!(dataset.len(), 4);

    // Load normalization folds RUSSIA into USSR
    assert!(dataset.events().iter().any(|e| e.country == "USSR"));
    assert!(dataset.events().iter().all(|e| e.country != "RUSSIA"));

    let groups = group_events(&dataset);
    assert_eq!(groups.len(), 3);

    // One group per distinct (country, year); counts sum to the input size
    let total: usize = groups.iter().map(|g| g.count()).sum();
    assert_eq!(total, dataset.len());
    let usa_1954 = groups
        .iter()
        .find(|g| g.matches(&GroupKey::new("USA", 1954)))
        .unwrap();
    assert_eq!(usa_1954.count(), 2);

    // Sorted by (year, country)
    let keys: Vec<(i32, &str)> = groups.iter().map(|g| (g.year, g.country.as_str())).collect();
    assert_eq!(keys, vec![(1949, "USSR"), (1954, "USA"), (1960, "FRANCE")]);

    Ok(())
}

#[test]
fn test_load_dataset_from_disk() -> Result<()> {
    let path = env::temp_dir().join("nukeline_integration.csv");
    let _ = fs::remove_file(&path);

    let dataset = sample::generate_dataset(42);
    fs::write(&path, sample::to_csv(&dataset))?;

    let reloaded = load_dataset(&path)?;
    assert_eq!(reloaded.len(), dataset.len());
    assert_eq!(reloaded.year_range(), dataset.year_range());

    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn test_empty_dataset_is_an_error() {
    let header_only = "country,year,latitude,longitude,average_yield,region,depth,yield_1,purpose,name,date_DMY\n";
    assert!(parse_dataset(header_only).is_err());
}

#[test]
fn test_parse_world_boundaries() -> Result<()> {
    let geojson = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"name": "Box"},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0]]]
                }
            },
            {
                "type": "Feature",
                "properties": {"name": "Twin"},
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [
                        [[[20.0, 0.0], [30.0, 0.0], [25.0, 10.0], [20.0, 0.0]]],
                        [[[40.0, 0.0], [50.0, 0.0], [45.0, 10.0], [40.0, 0.0]]]
                    ]
                }
            }
        ]
    }"#;
    let world = parse_world(geojson)?;
    assert_eq!(world.features.len(), 2);
    assert_eq!(world.rings().count(), 3);
    Ok(())
}

#[test]
fn test_sample_generation_is_deterministic() {
    let a = sample::generate_dataset(7);
    let b = sample::generate_dataset(7);
    assert_eq!(a.events(), b.events());
    assert_ne!(a.events(), sample::generate_dataset(8).events());
}
