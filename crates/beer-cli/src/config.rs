//! Dashboard configuration loaded from TOML.
//!
//! ```toml
//! [data]
//! beers = "data/preprocessed_data.csv"
//! countries = "data/map_data.csv"
//!
//! [table]
//! page_size = 10
//!
//! [map]
//! color_scale = "sunsetdark"
//!
//! [hierarchy]
//! color_scale = "RdBu"
//! ```
//!
//! Every section is optional. Relative data paths are resolved against the
//! directory of the configuration file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use beer_explore::{DEFAULT_HIERARCHY_COLOR_SCALE, DEFAULT_MAP_COLOR_SCALE, ViewOptions};
use beer_ingest::DatasetPaths;
use beer_model::DEFAULT_PAGE_SIZE;

pub const DEFAULT_BEERS_PATH: &str = "data/preprocessed_data.csv";
pub const DEFAULT_COUNTRIES_PATH: &str = "data/map_data.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub data: DataConfig,
    pub table: TableConfig,
    pub map: ColorConfig,
    pub hierarchy: ColorConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataConfig {
    pub beers: PathBuf,
    pub countries: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
    pub page_size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorConfig {
    pub color_scale: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            table: TableConfig::default(),
            map: ColorConfig {
                color_scale: DEFAULT_MAP_COLOR_SCALE.to_string(),
            },
            hierarchy: ColorConfig {
                color_scale: DEFAULT_HIERARCHY_COLOR_SCALE.to_string(),
            },
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            beers: PathBuf::from(DEFAULT_BEERS_PATH),
            countries: PathBuf::from(DEFAULT_COUNTRIES_PATH),
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl DashboardConfig {
    /// Parses a configuration document. Missing sections keep their defaults.
    pub fn from_toml(text: &str) -> Result<Self> {
        let RawConfig {
            data,
            table,
            map,
            hierarchy,
        } = toml::from_str(text).context("parse dashboard config")?;
        let defaults = Self::default();
        let config = Self {
            data: data.unwrap_or(defaults.data),
            table: table.unwrap_or(defaults.table),
            map: map.unwrap_or(defaults.map),
            hierarchy: hierarchy.unwrap_or(defaults.hierarchy),
        };
        config.validate()?;
        Ok(config)
    }

    /// Reads the file at `path`, resolving relative data paths against its
    /// directory.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config: {}", path.display()))?;
        let mut config =
            Self::from_toml(&text).with_context(|| format!("load config: {}", path.display()))?;
        if let Some(base) = path.parent() {
            config.data.beers = resolve(base, &config.data.beers);
            config.data.countries = resolve(base, &config.data.countries);
        }
        Ok(config)
    }

    /// Loads `path` when given, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.table.page_size == 0 {
            bail!("table.page_size must be greater than zero");
        }
        Ok(())
    }

    /// Applies command-line path overrides.
    #[must_use]
    pub fn with_paths(mut self, beers: Option<PathBuf>, countries: Option<PathBuf>) -> Self {
        if let Some(beers) = beers {
            self.data.beers = beers;
        }
        if let Some(countries) = countries {
            self.data.countries = countries;
        }
        self
    }

    pub fn dataset_paths(&self) -> DatasetPaths {
        DatasetPaths {
            beers: self.data.beers.clone(),
            countries: self.data.countries.clone(),
        }
    }

    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            map_color_scale: self.map.color_scale.clone(),
            hierarchy_color_scale: self.hierarchy.color_scale.clone(),
        }
    }
}

/// Document shape before defaults are filled in per section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    data: Option<DataConfig>,
    table: Option<TableConfig>,
    map: Option<ColorConfig>,
    hierarchy: Option<ColorConfig>,
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
