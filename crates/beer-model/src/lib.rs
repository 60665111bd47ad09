pub mod error;
pub mod event;
pub mod record;
pub mod selection;
pub mod table;
pub mod view;

pub use error::{ModelError, Result};
pub use event::{DashboardState, InteractionEvent};
pub use record::{
    ABV_COLUMN, ALE_COLUMN, BeerRecord, COUNTRY_COLUMN, COUNTRY_ID_COLUMN, CellValue,
    CountryRecord, INDEX_COLUMN, REQUIRED_BEER_COLUMNS, REQUIRED_COUNTRY_COLUMNS, STATE_COLUMN,
    STYLE_COLUMN, SUPPRESSED_DETAIL_COLUMNS, TYPE_COLUMN, is_suppressed_detail_column,
};
pub use selection::{ClickData, ClickPoint, HierarchyId, PATH_SEPARATOR, RecordFilter, SelectionPath};
pub use table::{ColumnDef, DEFAULT_PAGE_SIZE, PageWindow, SortDirection, SortSpec, TablePage};
pub use view::{
    ColorRange, CountryEntry, DashboardView, HierarchyChart, HierarchyNode, MapViewModel,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ale: &str, beer_type: &str, style: &str) -> BeerRecord {
        BeerRecord {
            ale: ale.to_string(),
            beer_type: beer_type.to_string(),
            style: style.to_string(),
            country: "Belgium".to_string(),
            ..BeerRecord::default()
        }
    }

    #[test]
    fn selection_depth_picks_filter_column() {
        assert_eq!(SelectionPath::parse("").filter(), RecordFilter::All);
        assert_eq!(SelectionPath::parse("Ale").filter(), RecordFilter::Ale("Ale"));
        assert_eq!(
            SelectionPath::parse("Ale/Pale Ale").filter(),
            RecordFilter::Type("Pale Ale")
        );
        assert_eq!(
            SelectionPath::parse("Ale/Pale Ale/American Pale Ale").filter(),
            RecordFilter::Style("American Pale Ale".to_string())
        );
    }

    #[test]
    fn style_labels_are_rejoined() {
        let selection = SelectionPath::parse("Lager/Pilsner/Czech/Bohemian Pilsner");
        assert_eq!(selection.len(), 4);
        assert_eq!(
            selection.filter(),
            RecordFilter::Style("Czech/Bohemian Pilsner".to_string())
        );
        assert!(selection.filter().matches(&record("x", "y", "Czech/Bohemian Pilsner")));
    }

    #[test]
    fn type_filter_ignores_ale_label() {
        let selection = SelectionPath::parse("Ale/Stout");
        let filter = selection.filter();
        assert!(filter.matches(&record("Lager", "Stout", "Dry Stout")));
        assert!(!filter.matches(&record("Ale", "Porter", "Baltic Porter")));
    }

    #[test]
    fn click_without_id_is_unfiltered() {
        let click: ClickData =
            serde_json::from_str(r#"{"points":[{"label":"IPA","curveNumber":0}]}"#)
                .expect("parse click");
        assert!(SelectionPath::from_click(Some(&click)).is_empty());
        assert!(SelectionPath::from_click(Some(&ClickData::default())).is_empty());
        assert!(SelectionPath::from_click(None).is_empty());
    }

    #[test]
    fn click_with_unexpected_id_shape_is_unfiltered() {
        let click: ClickData =
            serde_json::from_str(r#"{"points":[{"id":42}]}"#).expect("parse click");
        assert!(SelectionPath::from_click(Some(&click)).is_empty());
    }

    #[test]
    fn click_accepts_path_or_segments() {
        let path: ClickData =
            serde_json::from_str(r#"{"points":[{"id":"Ale/IPA"}]}"#).expect("parse click");
        let segments: ClickData =
            serde_json::from_str(r#"{"points":[{"id":["Ale","IPA"]}]}"#).expect("parse click");
        assert_eq!(
            SelectionPath::from_click(Some(&path)),
            SelectionPath::from_click(Some(&segments))
        );
    }

    #[test]
    fn page_window_ranges() {
        let window = PageWindow::new(2, 10).expect("window");
        assert_eq!(window.range(25), 20..25);
        assert_eq!(PageWindow::new(3, 10).expect("window").range(25), 25..25);
        assert_eq!(PageWindow::new(usize::MAX, 10).expect("window").range(25), 25..25);
        assert_eq!(window.page_count(25), 3);
        assert_eq!(window.page_count(0), 1);
        assert_eq!(PageWindow::new(0, 0), Err(ModelError::ZeroPageSize));
    }

    #[test]
    fn sort_direction_parses() {
        assert_eq!("asc".parse::<SortDirection>(), Ok(SortDirection::Asc));
        assert_eq!("DESC".parse::<SortDirection>(), Ok(SortDirection::Desc));
        assert!("up".parse::<SortDirection>().is_err());
    }

    #[test]
    fn events_fold_into_state() {
        let state = DashboardState::default()
            .apply(InteractionEvent::HierarchyClick(ClickData::node("Ale")))
            .apply(InteractionEvent::PageChange(PageWindow {
                page_index: 3,
                page_size: 0,
            }))
            .apply(InteractionEvent::SortChange {
                sort: Some(SortSpec::descending(ABV_COLUMN)),
            });
        assert_eq!(state.selection(), SelectionPath::parse("Ale"));
        assert_eq!(state.page.page_index, 3);
        assert_eq!(state.page.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(state.sort, Some(SortSpec::descending(ABV_COLUMN)));
    }

    #[test]
    fn events_deserialize_from_tagged_json() {
        let click: InteractionEvent =
            serde_json::from_str(r#"{"event":"hierarchy_click","points":[{"id":"Ale"}]}"#)
                .expect("click event");
        assert_eq!(click, InteractionEvent::HierarchyClick(ClickData::node("Ale")));

        let page: InteractionEvent =
            serde_json::from_str(r#"{"event":"page_change","page_index":2,"page_size":5}"#)
                .expect("page event");
        assert_eq!(
            page,
            InteractionEvent::PageChange(PageWindow {
                page_index: 2,
                page_size: 5
            })
        );

        let sort: InteractionEvent = serde_json::from_str(
            r#"{"event":"sort_change","sort":{"column_id":"Style","direction":"desc"}}"#,
        )
        .expect("sort event");
        assert_eq!(
            sort,
            InteractionEvent::SortChange {
                sort: Some(SortSpec::descending("Style"))
            }
        );

        let cleared: InteractionEvent =
            serde_json::from_str(r#"{"event":"sort_change"}"#).expect("sort clear");
        assert_eq!(cleared, InteractionEvent::SortChange { sort: None });
    }

    #[test]
    fn record_cells_by_column_name() {
        let mut beer = record("Ale", "IPA", "");
        beer.alcohol_by_volume = Some(6.5);
        beer.passthrough
            .insert("Name".to_string(), CellValue::Text("Hop Drop".to_string()));
        assert_eq!(beer.cell(ABV_COLUMN), Some(CellValue::Number(6.5)));
        assert_eq!(beer.cell(STYLE_COLUMN), Some(CellValue::Missing));
        assert_eq!(
            beer.cell("Name"),
            Some(CellValue::Text("Hop Drop".to_string()))
        );
        assert_eq!(beer.cell("Brewery"), None);
    }

    #[test]
    fn cells_serialize_as_plain_json() {
        let json = serde_json::to_string(&vec![
            CellValue::Number(4.5),
            CellValue::Text("x".to_string()),
            CellValue::Missing,
        ])
        .expect("serialize cells");
        assert_eq!(json, r#"[4.5,"x",null]"#);
    }
}
