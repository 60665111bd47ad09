//! Detail table types: sorting, paging, and the rendered page.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::record::CellValue;

/// Rows per page when the presentation layer does not say otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn is_ascending(self) -> bool {
        matches!(self, Self::Asc)
    }
}

impl FromStr for SortDirection {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            other => Err(ModelError::InvalidSortDirection(other.to_string())),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        })
    }
}

/// The single active sort key of the detail table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub column_id: String,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(column_id: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column_id: column_id.into(),
            direction,
        }
    }

    pub fn ascending(column_id: impl Into<String>) -> Self {
        Self::new(column_id, SortDirection::Asc)
    }

    pub fn descending(column_id: impl Into<String>) -> Self {
        Self::new(column_id, SortDirection::Desc)
    }
}

/// Which slice of the detail table is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    #[serde(default)]
    pub page_index: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageWindow {
    pub fn new(page_index: usize, page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(ModelError::ZeroPageSize);
        }
        Ok(Self {
            page_index,
            page_size,
        })
    }

    /// Returns the window with a zero page size replaced by the default.
    pub fn normalized(self) -> Self {
        if self.page_size == 0 {
            Self {
                page_size: DEFAULT_PAGE_SIZE,
                ..self
            }
        } else {
            self
        }
    }

    /// Row range covered by this window in a table of `total_rows` rows.
    ///
    /// Windows past the end produce an empty range.
    pub fn range(&self, total_rows: usize) -> Range<usize> {
        let start = self
            .page_index
            .checked_mul(self.page_size)
            .unwrap_or(usize::MAX)
            .min(total_rows);
        let end = start.saturating_add(self.page_size).min(total_rows);
        start..end
    }

    /// Number of pages needed for `total_rows` rows (at least one).
    pub fn page_count(&self, total_rows: usize) -> usize {
        total_rows.div_ceil(self.page_size.max(1)).max(1)
    }
}

/// A column declared by the detail table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub id: String,
    pub name: String,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
        }
    }
}

/// One displayed page of the detail table. Each row holds one cell per
/// entry of `columns`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TablePage {
    pub columns: Vec<ColumnDef>,
    pub rows: Vec<Vec<CellValue>>,
    pub page_index: usize,
    pub page_size: usize,
    pub total_rows: usize,
    pub page_count: usize,
}

impl TablePage {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_position(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.id == column)
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<&CellValue> {
        let position = self.column_position(column)?;
        self.rows.get(row)?.get(position)
    }

    /// Values of one column across the page, in row order.
    pub fn column_values(&self, column: &str) -> Vec<&CellValue> {
        let Some(position) = self.column_position(column) else {
            return Vec::new();
        };
        self.rows.iter().filter_map(|row| row.get(position)).collect()
    }
}
