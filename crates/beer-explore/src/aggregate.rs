//! Selection filtering and per-country aggregation.

use std::collections::BTreeMap;

use beer_ingest::DatasetStore;
use beer_model::{BeerRecord, CountryEntry, CountryRecord, SelectionPath};

/// Country whose raw count is scaled before it reaches the map.
pub const SCALED_COUNTRY: &str = "United States";

/// Fixed correction factor applied to the [`SCALED_COUNTRY`] count.
pub const SCALED_COUNTRY_FACTOR: f64 = 0.10;

/// Records that pass a selection plus the map entries derived from them.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation<'a> {
    pub filtered: Vec<&'a BeerRecord>,
    pub countries: Vec<CountryEntry>,
}

/// Keeps the records matching `selection`, in their original order.
pub fn filter_records<'a>(records: &'a [BeerRecord], selection: &SelectionPath) -> Vec<&'a BeerRecord> {
    let filter = selection.filter();
    records.iter().filter(|r| filter.matches(r)).collect()
}

/// Number of records per country name.
pub fn count_by_country<'a>(records: &[&'a BeerRecord]) -> BTreeMap<&'a str, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.country.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Map value for a raw country count.
pub fn scaled_count(country: &str, raw: usize) -> f64 {
    let count = raw as f64;
    if country == SCALED_COUNTRY {
        count * SCALED_COUNTRY_FACTOR
    } else {
        count
    }
}

/// One entry per country-table row with a nonzero count, in table order.
/// Countries absent from `counts` count as zero and are left out.
pub fn country_entries(
    countries: &[CountryRecord],
    counts: &BTreeMap<&str, usize>,
) -> Vec<CountryEntry> {
    countries
        .iter()
        .map(|country| {
            let raw = counts.get(country.country.as_str()).copied().unwrap_or(0);
            CountryEntry {
                country_id: country.country_id.clone(),
                country: country.country.clone(),
                created_beer_count: scaled_count(&country.country, raw),
            }
        })
        .filter(|entry| entry.created_beer_count != 0.0)
        .collect()
}

/// Filters the beer table by `selection` and recomputes every country count
/// from scratch.
pub fn filter_and_aggregate<'a>(store: &'a DatasetStore, selection: &SelectionPath) -> Aggregation<'a> {
    let filtered = filter_records(store.beers(), selection);
    let counts = count_by_country(&filtered);
    let countries = country_entries(store.countries(), &counts);
    tracing::trace!(
        selection = %selection,
        filtered = filtered.len(),
        grouped_countries = counts.len(),
        mapped_countries = countries.len(),
        "aggregated selection"
    );
    Aggregation {
        filtered,
        countries,
    }
}
