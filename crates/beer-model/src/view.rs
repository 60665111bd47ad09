//! View models handed to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::table::TablePage;

/// Per-country beer count for the current selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryEntry {
    pub country_id: String,
    pub country: String,
    pub created_beer_count: f64,
}

/// Value range the map colors are spread over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorRange {
    pub min: f64,
    pub max: f64,
}

impl ColorRange {
    /// Range spanning `values`, or `None` when there are none.
    pub fn spanning(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values.into_iter().fold(None, |range, value| {
            Some(match range {
                None => Self {
                    min: value,
                    max: value,
                },
                Some(Self { min, max }) => Self {
                    min: min.min(value),
                    max: max.max(value),
                },
            })
        })
    }
}

/// Choropleth data: only countries with a nonzero count appear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapViewModel {
    pub color_scale: String,
    pub range: Option<ColorRange>,
    pub entries: Vec<CountryEntry>,
}

impl MapViewModel {
    pub fn entry(&self, country: &str) -> Option<&CountryEntry> {
        self.entries.iter().find(|e| e.country == country)
    }
}

/// One node of the drill-down chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyNode {
    /// Labels from the root joined with `/`; this is the click payload id.
    pub id: String,
    pub label: String,
    /// Id of the parent node, empty for roots.
    pub parent: String,
    pub depth: usize,
    pub count: usize,
    pub mean_abv: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyChart {
    pub color_scale: String,
    pub nodes: Vec<HierarchyNode>,
}

impl HierarchyChart {
    pub fn node(&self, id: &str) -> Option<&HierarchyNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn roots(&self) -> impl Iterator<Item = &HierarchyNode> {
        self.nodes.iter().filter(|n| n.parent.is_empty())
    }
}

/// Everything re-rendered after one interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub map: MapViewModel,
    pub table: TablePage,
}
