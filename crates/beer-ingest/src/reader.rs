//! CSV file reading into Polars DataFrames.

use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

use crate::error::{IngestError, Result};

/// Maximum file size accepted by the loader (100 MB).
pub const MAX_CSV_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// How the source files are laid out.
#[derive(Debug, Clone, Copy)]
pub struct ReadOptions {
    /// The first column is a row index written by the exporter and is dropped.
    pub leading_index_column: bool,
    pub max_file_size: u64,
    /// Rows inspected when inferring column types; `None` scans the whole
    /// file so a late text value turns the column into text.
    pub infer_schema_rows: Option<usize>,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            leading_index_column: true,
            max_file_size: MAX_CSV_FILE_SIZE,
            infer_schema_rows: None,
        }
    }
}

/// Check that the file exists and is under `max_size` bytes.
pub fn check_file_size(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Reject frames without rows or with blank column names.
pub fn validate_frame_shape(df: &DataFrame, path: &Path) -> Result<()> {
    if df.height() == 0 {
        return Err(IngestError::EmptyTable {
            path: path.to_path_buf(),
        });
    }

    for name in df.get_column_names() {
        if name.trim().is_empty() {
            return Err(IngestError::EmptyColumnName {
                path: path.to_path_buf(),
            });
        }
    }

    Ok(())
}

/// Reads a header-row CSV file, dropping the leading index column when
/// configured.
pub fn read_csv_frame(path: &Path, options: &ReadOptions) -> Result<DataFrame> {
    check_file_size(path, options.max_file_size)?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(options.infer_schema_rows)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let df = if options.leading_index_column {
        drop_leading_column(df)?
    } else {
        df
    };

    validate_frame_shape(&df, path)?;
    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read csv frame"
    );
    Ok(df)
}

fn drop_leading_column(df: DataFrame) -> Result<DataFrame> {
    let Some(first) = df.get_column_names().first().map(|name| name.to_string()) else {
        return Ok(df);
    };
    Ok(df.drop(&first)?)
}

/// Column names of a frame in file order.
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::DataType;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_drops_leading_index() {
        let file = create_temp_csv(",Country ID,Country\n0,BEL,Belgium\n1,DEU,Germany\n");
        let df = read_csv_frame(file.path(), &ReadOptions::default()).unwrap();

        assert_eq!(column_names(&df), vec!["Country ID", "Country"]);
        assert_eq!(df.height(), 2);
    }

    #[test]
    fn test_read_keeps_all_columns_without_index() {
        let file = create_temp_csv("Country ID,Country\nBEL,Belgium\n");
        let options = ReadOptions {
            leading_index_column: false,
            ..ReadOptions::default()
        };
        let df = read_csv_frame(file.path(), &options).unwrap();

        assert_eq!(column_names(&df), vec!["Country ID", "Country"]);
    }

    #[test]
    fn test_header_only_file_is_empty_table() {
        let file = create_temp_csv(",Country ID,Country\n");
        let result = read_csv_frame(file.path(), &ReadOptions::default());

        assert!(matches!(
            result,
            Err(IngestError::EmptyTable { .. } | IngestError::CsvParse { .. })
        ));
    }

    #[test]
    fn test_late_text_value_reads_column_as_text() {
        let mut content = String::from(",Name,Rating\n");
        for i in 0..600 {
            content.push_str(&format!("{i},Beer {i},{}\n", i % 5));
        }
        content.push_str("600,Last Beer,n/a\n");
        let file = create_temp_csv(&content);

        let df = read_csv_frame(file.path(), &ReadOptions::default()).unwrap();

        assert_eq!(df.height(), 601);
        let rating = df.column("Rating").unwrap();
        assert_eq!(rating.dtype(), &DataType::String);
        assert_eq!(crate::convert::any_to_string(rating.get(600).unwrap()), "n/a");
    }

    #[test]
    fn test_missing_file() {
        let result = read_csv_frame(
            Path::new("/nonexistent/beers.csv"),
            &ReadOptions::default(),
        );

        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_file_size_limit() {
        let file = create_temp_csv("Country ID,Country\nBEL,Belgium\n");
        let result = check_file_size(file.path(), 4);

        assert!(matches!(result, Err(IngestError::FileTooLarge { max_size: 4, .. })));
    }
}
