//! Integration tests for dashboard configuration loading.

use std::path::PathBuf;

use beer_cli::config::{DEFAULT_BEERS_PATH, DEFAULT_COUNTRIES_PATH, DashboardConfig};
use tempfile::TempDir;

#[test]
fn empty_document_uses_defaults() {
    let config = DashboardConfig::from_toml("").expect("parse");
    assert_eq!(config, DashboardConfig::default());
    assert_eq!(config.data.beers, PathBuf::from(DEFAULT_BEERS_PATH));
    assert_eq!(config.data.countries, PathBuf::from(DEFAULT_COUNTRIES_PATH));
    assert_eq!(config.table.page_size, 10);
    assert_eq!(config.map.color_scale, "sunsetdark");
    assert_eq!(config.hierarchy.color_scale, "RdBu");
}

#[test]
fn partial_sections_keep_other_defaults() {
    let config = DashboardConfig::from_toml(
        r#"
        [table]
        page_size = 25

        [map]
        color_scale = "viridis"

        [data]
        beers = "beers.csv"
        "#,
    )
    .expect("parse");
    assert_eq!(config.table.page_size, 25);
    assert_eq!(config.map.color_scale, "viridis");
    assert_eq!(config.hierarchy.color_scale, "RdBu");
    assert_eq!(config.data.beers, PathBuf::from("beers.csv"));
    assert_eq!(config.data.countries, PathBuf::from(DEFAULT_COUNTRIES_PATH));
    assert_eq!(config.view_options().map_color_scale, "viridis");
}

#[test]
fn zero_page_size_is_rejected() {
    let error = DashboardConfig::from_toml("[table]\npage_size = 0\n").unwrap_err();
    assert!(format!("{error:#}").contains("page_size"));
}

#[test]
fn unknown_keys_are_rejected() {
    assert!(DashboardConfig::from_toml("[table]\nrows = 5\n").is_err());
    assert!(DashboardConfig::from_toml("[legend]\nshow = true\n").is_err());
}

#[test]
fn relative_paths_resolve_against_config_directory() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("dashboard.toml");
    std::fs::write(
        &path,
        "[data]\nbeers = \"data/beers.csv\"\ncountries = \"/srv/map.csv\"\n",
    )
    .expect("write config");

    let config = DashboardConfig::load(&path).expect("load");
    assert_eq!(config.data.beers, dir.path().join("data/beers.csv"));
    assert_eq!(config.data.countries, PathBuf::from("/srv/map.csv"));
}

#[test]
fn command_line_paths_override_config() {
    let config = DashboardConfig::default()
        .with_paths(Some(PathBuf::from("other.csv")), None);
    let paths = config.dataset_paths();
    assert_eq!(paths.beers, PathBuf::from("other.csv"));
    assert_eq!(paths.countries, PathBuf::from(DEFAULT_COUNTRIES_PATH));
}

#[test]
fn missing_config_file_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    assert!(DashboardConfig::load(&dir.path().join("absent.toml")).is_err());
    assert_eq!(
        DashboardConfig::load_or_default(None).expect("defaults"),
        DashboardConfig::default()
    );
}
