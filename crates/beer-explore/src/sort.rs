//! Single-key stable sorting of the detail table.

use std::cmp::Ordering;

use beer_model::{BeerRecord, CellValue, SortDirection, SortSpec};

/// Orders two cells for a sort in `direction`.
///
/// Missing cells go last in both directions. Numbers compare numerically,
/// text lexicographically, and numbers come before text when ascending.
pub fn compare_cells(left: &CellValue, right: &CellValue, direction: SortDirection) -> Ordering {
    let ordering = match (left, right) {
        (CellValue::Missing, CellValue::Missing) => return Ordering::Equal,
        (CellValue::Missing, _) => return Ordering::Greater,
        (_, CellValue::Missing) => return Ordering::Less,
        (CellValue::Number(a), CellValue::Number(b)) => a.total_cmp(b),
        (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
        (CellValue::Number(_), CellValue::Text(_)) => Ordering::Less,
        (CellValue::Text(_), CellValue::Number(_)) => Ordering::Greater,
    };
    if direction.is_ascending() {
        ordering
    } else {
        ordering.reverse()
    }
}

/// Sorts `records` by the column named in `sort`. Ties keep their relative
/// order.
///
/// Returns false and leaves `records` untouched when `is_known_column`
/// rejects the column.
pub fn sort_records(
    records: &mut Vec<&BeerRecord>,
    sort: &SortSpec,
    is_known_column: impl Fn(&str) -> bool,
) -> bool {
    if !is_known_column(&sort.column_id) {
        tracing::debug!(column = %sort.column_id, "ignoring sort on unknown column");
        return false;
    }
    let mut keyed: Vec<(CellValue, &BeerRecord)> = records
        .drain(..)
        .map(|record| (record.cell(&sort.column_id).unwrap_or_default(), record))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| compare_cells(a, b, sort.direction));
    records.extend(keyed.into_iter().map(|(_, record)| record));
    true
}
