//! Terminal rendering of view models with `comfy-table`.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use beer_model::{CellValue, HierarchyChart, MapViewModel, TablePage};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_detail_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn value_cell(value: &CellValue) -> Cell {
    match value {
        CellValue::Missing => dim_cell("-"),
        CellValue::Number(v) => Cell::new(format_number(*v)),
        CellValue::Text(s) => Cell::new(s),
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        let rounded = format!("{value:.2}");
        rounded
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

/// Countries on the map with their (scaled) beer counts.
pub fn map_table(map: &MapViewModel) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Country"),
        header_cell("ID"),
        header_cell("Beers"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    for entry in &map.entries {
        table.add_row(vec![
            Cell::new(&entry.country).fg(Color::Blue),
            Cell::new(&entry.country_id),
            Cell::new(format_number(entry.created_beer_count)),
        ]);
    }
    if map.entries.is_empty() {
        table.add_row(vec![dim_cell("no countries"), dim_cell("-"), dim_cell("-")]);
    }
    table
}

/// One page of the detail table.
pub fn page_table(page: &TablePage) -> Table {
    let mut table = Table::new();
    table.set_header(page.columns.iter().map(|c| header_cell(&c.name)));
    apply_detail_table_style(&mut table);
    for row in &page.rows {
        table.add_row(row.iter().map(value_cell));
    }
    for (index, column) in page.columns.iter().enumerate() {
        let numeric = page
            .column_values(&column.id)
            .iter()
            .any(|cell| matches!(cell, CellValue::Number(_)));
        if numeric {
            align_column(&mut table, index, CellAlignment::Right);
        }
    }
    table
}

/// "Page 2 of 3 (rows 11-20 of 25)" line under the detail table.
pub fn page_footer(page: &TablePage) -> String {
    let page_number = page.page_index.saturating_add(1);
    if page.rows.is_empty() {
        return format!(
            "Page {} of {} (no rows, {} total)",
            page_number,
            page.page_count,
            page.total_rows
        );
    }
    let first = page
        .page_index
        .saturating_mul(page.page_size)
        .saturating_add(1);
    let last = first.saturating_add(page.rows.len() - 1);
    format!(
        "Page {} of {} (rows {}-{} of {})",
        page_number,
        page.page_count,
        first,
        last,
        page.total_rows
    )
}

/// Drill-down tree down to `max_depth`, indented by level.
pub fn hierarchy_table(chart: &HierarchyChart, max_depth: usize) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Node"),
        header_cell("Id"),
        header_cell("Beers"),
        header_cell("Mean ABV"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for node in chart.nodes.iter().filter(|n| n.depth <= max_depth) {
        let indent = "  ".repeat(node.depth.saturating_sub(1));
        let label = Cell::new(format!("{indent}{}", node.label));
        let label = match node.depth {
            1 => label.fg(Color::Blue).add_attribute(Attribute::Bold),
            2 => label.fg(Color::Cyan),
            _ => label,
        };
        table.add_row(vec![
            label,
            dim_cell(&node.id),
            Cell::new(node.count),
            match node.mean_abv {
                Some(abv) => Cell::new(format!("{abv:.2}")),
                None => dim_cell("-"),
            },
        ]);
    }
    table
}

/// Per-ale totals with an overall row, taken from the hierarchy roots.
pub fn summary_table(chart: &HierarchyChart) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Ale"),
        header_cell("Beers"),
        header_cell("Mean ABV"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    let mut total = 0usize;
    for root in chart.roots() {
        total += root.count;
        table.add_row(vec![
            Cell::new(&root.label).fg(Color::Blue),
            Cell::new(root.count),
            match root.mean_abv {
                Some(abv) => Cell::new(format!("{abv:.2}")),
                None => dim_cell("-"),
            },
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_drop_needless_decimals() {
        assert_eq!(format_number(12.0), "12");
        assert_eq!(format_number(0.2), "0.2");
        assert_eq!(format_number(6.789), "6.79");
    }

    #[test]
    fn footer_describes_window() {
        let page = TablePage {
            rows: vec![vec![CellValue::Missing]; 5],
            page_index: 2,
            page_size: 10,
            total_rows: 25,
            page_count: 3,
            ..TablePage::default()
        };
        assert_eq!(page_footer(&page), "Page 3 of 3 (rows 21-25 of 25)");

        let empty = TablePage {
            page_index: 3,
            ..page
        };
        let empty = TablePage {
            rows: Vec::new(),
            ..empty
        };
        assert_eq!(page_footer(&empty), "Page 4 of 3 (no rows, 25 total)");
    }

    #[test]
    fn footer_survives_last_possible_page_index() {
        let page = TablePage {
            page_index: usize::MAX,
            page_size: 10,
            total_rows: 25,
            page_count: 3,
            ..TablePage::default()
        };
        assert_eq!(
            page_footer(&page),
            format!("Page {} of 3 (no rows, 25 total)", usize::MAX)
        );
    }
}
