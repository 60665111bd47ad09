//! Dataset loading for the craft beer explorer.
//!
//! This crate reads the beer and country tables (header-row CSV files with a
//! leading row-index column) through Polars and converts them once into
//! typed records held by a read-only [`DatasetStore`].
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use beer_ingest::{DatasetPaths, DatasetStore};
//!
//! let store = DatasetStore::load(&DatasetPaths {
//!     beers: PathBuf::from("data/preprocessed_data.csv"),
//!     countries: PathBuf::from("data/map_data.csv"),
//! })?;
//! println!("{} beers", store.beers().len());
//! ```

mod convert;
mod error;
mod reader;
mod store;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::{MAX_CSV_FILE_SIZE, ReadOptions, read_csv_frame};

// === Value Conversion ===
pub use convert::{any_to_cell, any_to_f64, any_to_string, format_numeric, parse_f64};

// === Dataset Store ===
pub use store::{DatasetPaths, DatasetStore, load_beers, load_countries};
