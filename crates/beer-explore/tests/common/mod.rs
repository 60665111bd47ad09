//! Shared fixtures for the explore integration tests.
#![allow(dead_code)]

use beer_ingest::DatasetStore;
use beer_model::{BeerRecord, CellValue, CountryRecord};

pub fn beer(ale: &str, beer_type: &str, style: &str, country: &str) -> BeerRecord {
    BeerRecord {
        ale: ale.to_string(),
        beer_type: beer_type.to_string(),
        style: style.to_string(),
        country: country.to_string(),
        ..BeerRecord::default()
    }
}

pub fn named(mut record: BeerRecord, name: &str) -> BeerRecord {
    record
        .passthrough
        .insert("Name".to_string(), CellValue::Text(name.to_string()));
    record
}

pub fn with_abv(mut record: BeerRecord, abv: Option<f64>) -> BeerRecord {
    record.alcohol_by_volume = abv;
    record
}

pub fn country(country_id: &str, name: &str) -> CountryRecord {
    CountryRecord {
        country_id: country_id.to_string(),
        country: name.to_string(),
    }
}

pub fn countries() -> Vec<CountryRecord> {
    vec![
        country("USA", "United States"),
        country("DEU", "Germany"),
        country("BEL", "Belgium"),
        country("CZE", "Czech Republic"),
    ]
}

/// A small dataset spanning all three hierarchy levels.
pub fn sample_store() -> DatasetStore {
    let beers = vec![
        with_abv(named(beer("Ale", "IPA", "American IPA", "United States"), "Hop Drop"), Some(6.8)),
        with_abv(named(beer("Ale", "IPA", "English IPA", "Belgium"), "Old Port"), Some(5.9)),
        with_abv(named(beer("Ale", "Stout", "Imperial Stout", "United States"), "Dark Night"), Some(10.5)),
        with_abv(named(beer("Lager", "Pilsner", "Czech/Bohemian Pilsner", "Czech Republic"), "Pils One"), Some(4.4)),
        with_abv(named(beer("Lager", "Bock", "Doppelbock", "Germany"), "Double Goat"), None),
        with_abv(named(beer("Lager", "Stout", "Baltic Stout", "Germany"), "Baltic Night"), Some(7.0)),
    ];
    DatasetStore::from_records(beers, countries())
}

/// `count` records named `Beer 00`, `Beer 01`, ... all from Germany.
pub fn numbered_store(count: usize) -> DatasetStore {
    let beers = (0..count)
        .map(|i| named(beer("Ale", "IPA", "American IPA", "Germany"), &format!("Beer {i:02}")))
        .collect();
    DatasetStore::from_records(beers, countries())
}
