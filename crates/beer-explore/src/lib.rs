//! Reactive views over the craft beer dataset.
//!
//! One interaction (hierarchy click, page change, sort change) is turned into
//! a fresh choropleth view model and a fresh page of the detail table. All
//! functions here are pure over the read-only dataset store.

pub mod aggregate;
pub mod hierarchy;
pub mod sort;
pub mod view;

pub use aggregate::{
    Aggregation, SCALED_COUNTRY, SCALED_COUNTRY_FACTOR, count_by_country, country_entries,
    filter_and_aggregate, filter_records, scaled_count,
};
pub use hierarchy::build_hierarchy;
pub use sort::{compare_cells, sort_records};
pub use view::{
    DEFAULT_HIERARCHY_COLOR_SCALE, DEFAULT_MAP_COLOR_SCALE, Dashboard, ViewOptions,
    build_map, build_table_page, table_columns,
};
