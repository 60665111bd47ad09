//! Typed rows of the beer and country tables.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Top level of the drill-down hierarchy.
pub const ALE_COLUMN: &str = "Ale";
/// Second level of the drill-down hierarchy.
pub const TYPE_COLUMN: &str = "Type";
/// Leaf level of the drill-down hierarchy.
pub const STYLE_COLUMN: &str = "Style";
pub const COUNTRY_COLUMN: &str = "Country";
pub const STATE_COLUMN: &str = "State";
pub const ABV_COLUMN: &str = "Alcohol By Volume";
pub const COUNTRY_ID_COLUMN: &str = "Country ID";
/// Name used for the leading row-index column of the source files.
pub const INDEX_COLUMN: &str = "index";

/// Columns every beer table must provide.
pub const REQUIRED_BEER_COLUMNS: [&str; 6] = [
    ALE_COLUMN,
    TYPE_COLUMN,
    STYLE_COLUMN,
    COUNTRY_COLUMN,
    STATE_COLUMN,
    ABV_COLUMN,
];

/// Columns every country table must provide.
pub const REQUIRED_COUNTRY_COLUMNS: [&str; 2] = [COUNTRY_ID_COLUMN, COUNTRY_COLUMN];

/// Columns hidden from the detail table. They stay available for filtering
/// and sorting.
pub const SUPPRESSED_DETAIL_COLUMNS: [&str; 4] =
    [ALE_COLUMN, INDEX_COLUMN, STATE_COLUMN, TYPE_COLUMN];

/// Returns true when a column is hidden from the detail table.
pub fn is_suppressed_detail_column(column: &str) -> bool {
    SUPPRESSED_DETAIL_COLUMNS.contains(&column)
}

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl CellValue {
    /// Builds a text cell, mapping blank strings to [`CellValue::Missing`].
    pub fn text(value: &str) -> Self {
        if value.trim().is_empty() {
            Self::Missing
        } else {
            Self::Text(value.to_string())
        }
    }

    pub fn number(value: Option<f64>) -> Self {
        match value {
            Some(v) if !v.is_nan() => Self::Number(v),
            _ => Self::Missing,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
            Self::Missing => Ok(()),
        }
    }
}

/// One beer, converted and validated at load time.
///
/// Descriptive columns the explorer does not interpret are kept in
/// `passthrough`, keyed by their header name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BeerRecord {
    pub ale: String,
    #[serde(rename = "type")]
    pub beer_type: String,
    pub style: String,
    pub country: String,
    pub state: String,
    pub alcohol_by_volume: Option<f64>,
    #[serde(default)]
    pub passthrough: BTreeMap<String, CellValue>,
}

impl BeerRecord {
    /// Reads any column of the full record by its header name.
    ///
    /// Returns `None` for columns the record does not know about.
    pub fn cell(&self, column: &str) -> Option<CellValue> {
        let value = match column {
            ALE_COLUMN => CellValue::text(&self.ale),
            TYPE_COLUMN => CellValue::text(&self.beer_type),
            STYLE_COLUMN => CellValue::text(&self.style),
            COUNTRY_COLUMN => CellValue::text(&self.country),
            STATE_COLUMN => CellValue::text(&self.state),
            ABV_COLUMN => CellValue::number(self.alcohol_by_volume),
            other => return self.passthrough.get(other).cloned(),
        };
        Some(value)
    }
}

/// One row of the country table. Counts are computed per request and never
/// stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub country_id: String,
    pub country: String,
}
