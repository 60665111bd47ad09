//! Drill-down selection through the Ale → Type → Style hierarchy.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::record::BeerRecord;

/// Separator between hierarchy labels in chart node ids.
pub const PATH_SEPARATOR: char = '/';

/// Identifier of a clicked hierarchy node: either the chart's slash-joined
/// id or the labels themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HierarchyId {
    Path(String),
    Segments(Vec<String>),
}

/// One clicked point as reported by the hierarchy chart.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClickPoint {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<HierarchyId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Click payload of the hierarchy chart. Only the first point is used.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClickData {
    #[serde(default)]
    pub points: Vec<ClickPoint>,
}

impl ClickData {
    /// Click on the node with the given slash-joined id.
    pub fn node(id: impl Into<String>) -> Self {
        Self {
            points: vec![ClickPoint {
                id: Some(HierarchyId::Path(id.into())),
                label: None,
            }],
        }
    }
}

// Ids of an unexpected JSON shape are treated as absent.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<HierarchyId>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Id(HierarchyId),
        Other(IgnoredAny),
    }
    Ok(match Option::<Repr>::deserialize(deserializer)? {
        Some(Repr::Id(id)) => Some(id),
        Some(Repr::Other(_)) | None => None,
    })
}

/// Drill-down position as an ordered list of labels. Empty means no filter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionPath {
    labels: Vec<String>,
}

impl SelectionPath {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// The unfiltered selection.
    pub fn all() -> Self {
        Self::default()
    }

    /// Splits a chart node id such as `"Ale/IPA/American IPA"`.
    ///
    /// A blank id carries no identifiable node and yields the empty path.
    pub fn parse(id: &str) -> Self {
        if id.trim().is_empty() {
            return Self::all();
        }
        Self::new(id.split(PATH_SEPARATOR).map(str::to_string).collect())
    }

    /// Derives the selection from a click payload.
    ///
    /// Anything without an identifiable node id (no click, no points, no id,
    /// blank id, empty label list) falls back to the unfiltered selection.
    pub fn from_click(click: Option<&ClickData>) -> Self {
        let Some(id) = click
            .and_then(|click| click.points.first())
            .and_then(|point| point.id.as_ref())
        else {
            return Self::all();
        };
        match id {
            HierarchyId::Path(path) => Self::parse(path),
            HierarchyId::Segments(labels) => Self::new(labels.clone()),
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The record predicate this selection stands for.
    ///
    /// Depth 2 matches on the type label alone and depth 3+ on the style
    /// alone; labels from index 2 onward are rejoined because style names
    /// may themselves contain the separator.
    pub fn filter(&self) -> RecordFilter<'_> {
        match self.labels.as_slice() {
            [] => RecordFilter::All,
            [ale] => RecordFilter::Ale(ale),
            [_, beer_type] => RecordFilter::Type(beer_type),
            [_, _, style @ ..] => RecordFilter::Style(style.join("/")),
        }
    }
}

impl std::fmt::Display for SelectionPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.labels.join("/"))
    }
}

/// Predicate over beer records derived from a [`SelectionPath`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordFilter<'a> {
    All,
    Ale(&'a str),
    Type(&'a str),
    Style(String),
}

impl RecordFilter<'_> {
    pub fn matches(&self, record: &BeerRecord) -> bool {
        match self {
            Self::All => true,
            Self::Ale(ale) => record.ale == *ale,
            Self::Type(beer_type) => record.beer_type == *beer_type,
            Self::Style(style) => record.style == *style,
        }
    }
}
