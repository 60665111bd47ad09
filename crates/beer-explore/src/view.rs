//! The view controller: one interaction in, fresh map and table out.

use beer_ingest::DatasetStore;
use beer_model::{
    BeerRecord, ColorRange, ColumnDef, CountryEntry, DashboardState, DashboardView,
    HierarchyChart, InteractionEvent, MapViewModel, PageWindow, TablePage,
};
use tracing::debug;

use crate::aggregate::filter_and_aggregate;
use crate::hierarchy::build_hierarchy;
use crate::sort::sort_records;

/// Color scale of the choropleth when none is configured.
pub const DEFAULT_MAP_COLOR_SCALE: &str = "sunsetdark";
/// Color scale of the drill-down chart when none is configured.
pub const DEFAULT_HIERARCHY_COLOR_SCALE: &str = "RdBu";

/// Rendering parameters passed through to the view models untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOptions {
    pub map_color_scale: String,
    pub hierarchy_color_scale: String,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            map_color_scale: DEFAULT_MAP_COLOR_SCALE.to_string(),
            hierarchy_color_scale: DEFAULT_HIERARCHY_COLOR_SCALE.to_string(),
        }
    }
}

/// Derives dashboard views from a borrowed, read-only [`DatasetStore`].
///
/// Holds no per-interaction state: the caller owns the [`DashboardState`]
/// and passes it in on every call.
#[derive(Debug, Clone)]
pub struct Dashboard<'a> {
    store: &'a DatasetStore,
    options: ViewOptions,
}

impl<'a> Dashboard<'a> {
    pub fn new(store: &'a DatasetStore, options: ViewOptions) -> Self {
        Self { store, options }
    }

    pub fn store(&self) -> &'a DatasetStore {
        self.store
    }

    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    /// Recomputes the map and the table page for `state`.
    ///
    /// Order of operations: filter, sort on the full record, paginate, then
    /// project to the display columns.
    pub fn on_interaction(&self, state: &DashboardState) -> DashboardView {
        let selection = state.selection();
        let aggregation = filter_and_aggregate(self.store, &selection);
        let mut records = aggregation.filtered;

        let sorted = match &state.sort {
            Some(sort) => sort_records(&mut records, sort, |c| self.store.has_column(c)),
            None => false,
        };

        let table = build_table_page(self.store, &records, state.page.normalized());
        let map = build_map(aggregation.countries, &self.options.map_color_scale);
        debug!(
            selection = %selection,
            filtered = records.len(),
            sorted,
            page_index = table.page_index,
            page_rows = table.rows.len(),
            map_countries = map.entries.len(),
            "interaction resolved"
        );
        DashboardView { map, table }
    }

    /// Folds `event` into `state` and derives the resulting view.
    pub fn dispatch(
        &self,
        state: DashboardState,
        event: InteractionEvent,
    ) -> (DashboardState, DashboardView) {
        debug!(?event, "dispatching interaction");
        let state = state.apply(event);
        let view = self.on_interaction(&state);
        (state, view)
    }

    /// View for a dashboard that has not seen any interaction yet.
    pub fn initial_view(&self) -> DashboardView {
        self.on_interaction(&DashboardState::default())
    }

    /// Column declarations of the detail table.
    pub fn table_columns(&self) -> Vec<ColumnDef> {
        table_columns(self.store)
    }

    /// The drill-down chart over the whole dataset.
    pub fn hierarchy(&self) -> HierarchyChart {
        build_hierarchy(self.store.beers(), &self.options.hierarchy_color_scale)
    }
}

/// Display columns of the detail table, in file order.
pub fn table_columns(store: &DatasetStore) -> Vec<ColumnDef> {
    store.display_columns().map(ColumnDef::new).collect()
}

/// Choropleth view model over already filtered, nonzero country entries.
pub fn build_map(entries: Vec<CountryEntry>, color_scale: &str) -> MapViewModel {
    let range = ColorRange::spanning(entries.iter().map(|e| e.created_beer_count));
    MapViewModel {
        color_scale: color_scale.to_string(),
        range,
        entries,
    }
}

/// Slices one page out of `records` and projects it to the display columns.
/// A window past the end yields a page without rows.
pub fn build_table_page(
    store: &DatasetStore,
    records: &[&BeerRecord],
    page: PageWindow,
) -> TablePage {
    let columns = table_columns(store);
    let rows = records[page.range(records.len())]
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|column| record.cell(&column.id).unwrap_or_default())
                .collect()
        })
        .collect();
    TablePage {
        columns,
        rows,
        page_index: page.page_index,
        page_size: page.page_size,
        total_rows: records.len(),
        page_count: page.page_count(records.len()),
    }
}
