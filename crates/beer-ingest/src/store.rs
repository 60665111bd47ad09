//! The in-memory dataset store.
//!
//! The store is built once at startup from the beer and country tables and
//! is read-only afterwards. Callers share it by reference; every derived
//! view is computed fresh from it.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use polars::prelude::{Column, DataFrame};
use tracing::{debug, info};

use beer_model::{
    ABV_COLUMN, ALE_COLUMN, BeerRecord, COUNTRY_COLUMN, COUNTRY_ID_COLUMN, CountryRecord,
    REQUIRED_BEER_COLUMNS, STATE_COLUMN, STYLE_COLUMN, TYPE_COLUMN,
    is_suppressed_detail_column,
};

use crate::convert::{any_to_cell, any_to_f64, any_to_string};
use crate::error::{IngestError, Result};
use crate::reader::{ReadOptions, column_names, read_csv_frame};

/// Locations of the two source tables.
#[derive(Debug, Clone)]
pub struct DatasetPaths {
    pub beers: PathBuf,
    pub countries: PathBuf,
}

/// Beer and country tables, loaded once.
#[derive(Debug, Clone, Default)]
pub struct DatasetStore {
    beers: Vec<BeerRecord>,
    countries: Vec<CountryRecord>,
    columns: Vec<String>,
}

impl DatasetStore {
    /// Builds a store from already-typed records.
    ///
    /// The column list is the required beer columns followed by every
    /// passthrough column seen, in name order.
    pub fn from_records(beers: Vec<BeerRecord>, countries: Vec<CountryRecord>) -> Self {
        let passthrough: BTreeSet<&String> = beers
            .iter()
            .flat_map(|record| record.passthrough.keys())
            .collect();
        let columns = REQUIRED_BEER_COLUMNS
            .iter()
            .map(|c| (*c).to_string())
            .chain(passthrough.into_iter().cloned())
            .collect();
        Self {
            beers,
            countries,
            columns,
        }
    }

    /// Loads both tables with the default read options.
    pub fn load(paths: &DatasetPaths) -> Result<Self> {
        Self::load_with_options(paths, &ReadOptions::default())
    }

    pub fn load_with_options(paths: &DatasetPaths, options: &ReadOptions) -> Result<Self> {
        let (beers, columns) = load_beers(&paths.beers, options)?;
        let countries = load_countries(&paths.countries, options)?;
        info!(
            beers = beers.len(),
            countries = countries.len(),
            columns = columns.len(),
            "dataset loaded"
        );
        Ok(Self {
            beers,
            countries,
            columns,
        })
    }

    pub fn beers(&self) -> &[BeerRecord] {
        &self.beers
    }

    pub fn countries(&self) -> &[CountryRecord] {
        &self.countries
    }

    /// All beer columns in file order, row index excluded.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Columns shown in the detail table, in file order.
    pub fn display_columns(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .map(String::as_str)
            .filter(|c| !is_suppressed_detail_column(c))
    }

    pub fn country(&self, name: &str) -> Option<&CountryRecord> {
        self.countries.iter().find(|c| c.country == name)
    }
}

fn required_column<'a>(df: &'a DataFrame, column: &str, path: &Path) -> Result<&'a Column> {
    df.column(column).map_err(|_| IngestError::MissingColumn {
        column: column.to_string(),
        path: path.to_path_buf(),
    })
}

/// Loads the beer table, returning the typed records and the column order.
pub fn load_beers(path: &Path, options: &ReadOptions) -> Result<(Vec<BeerRecord>, Vec<String>)> {
    let df = read_csv_frame(path, options)?;
    let columns = column_names(&df);

    let ale = required_column(&df, ALE_COLUMN, path)?;
    let beer_type = required_column(&df, TYPE_COLUMN, path)?;
    let style = required_column(&df, STYLE_COLUMN, path)?;
    let country = required_column(&df, COUNTRY_COLUMN, path)?;
    let state = required_column(&df, STATE_COLUMN, path)?;
    let abv = required_column(&df, ABV_COLUMN, path)?;
    let passthrough: Vec<(&String, &Column)> = columns
        .iter()
        .filter(|name| !REQUIRED_BEER_COLUMNS.contains(&name.as_str()))
        .map(|name| required_column(&df, name, path).map(|column| (name, column)))
        .collect::<Result<_>>()?;

    let mut beers = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let mut record = BeerRecord {
            ale: any_to_string(ale.get(idx)?),
            beer_type: any_to_string(beer_type.get(idx)?),
            style: any_to_string(style.get(idx)?),
            country: any_to_string(country.get(idx)?),
            state: any_to_string(state.get(idx)?),
            alcohol_by_volume: any_to_f64(abv.get(idx)?),
            ..BeerRecord::default()
        };
        for (name, column) in &passthrough {
            record
                .passthrough
                .insert((*name).clone(), any_to_cell(column.get(idx)?));
        }
        beers.push(record);
    }

    let missing_abv = beers
        .iter()
        .filter(|b| b.alcohol_by_volume.is_none())
        .count();
    info!(
        path = %path.display(),
        records = beers.len(),
        passthrough_columns = passthrough.len(),
        missing_abv,
        "loaded beer table"
    );
    Ok((beers, columns))
}

/// Loads the country table. Rows without a country name are skipped;
/// columns other than the id and name are ignored.
pub fn load_countries(path: &Path, options: &ReadOptions) -> Result<Vec<CountryRecord>> {
    let df = read_csv_frame(path, options)?;
    let country_id = required_column(&df, COUNTRY_ID_COLUMN, path)?;
    let country = required_column(&df, COUNTRY_COLUMN, path)?;

    let mut countries = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let name = any_to_string(country.get(idx)?);
        if name.is_empty() {
            debug!(path = %path.display(), row = idx, "skipping country row without a name");
            continue;
        }
        countries.push(CountryRecord {
            country_id: any_to_string(country_id.get(idx)?),
            country: name,
        });
    }

    info!(
        path = %path.display(),
        countries = countries.len(),
        "loaded country table"
    );
    Ok(countries)
}
