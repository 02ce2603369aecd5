//! CSV Data Loader Module
//! Handles CSV file loading using Polars. Known categorical columns are
//! always read as text so codes like `01` keep their original form.

use super::columns::CATEGORICAL_COLUMNS;
use super::processor::DataProcessor;
use log::{debug, info};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Error loading data: {0}")]
    Csv(#[from] PolarsError),
    #[error("The dataset must contain a '{0}' column.")]
    MissingColumn(String),
    #[error("No data loaded")]
    NoData,
}

/// Handles CSV file loading. The loaded table is read-only afterwards.
pub struct DataLoader {
    df: Option<DataFrame>,
    file_path: Option<PathBuf>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self {
            df: None,
            file_path: None,
        }
    }

    /// Load a CSV file. Either the whole table loads or nothing does.
    pub fn load_csv(&mut self, file_path: impl AsRef<Path>) -> Result<&DataFrame, LoaderError> {
        let file_path = file_path.as_ref();
        self.file_path = Some(file_path.to_path_buf());
        self.df = None;

        // Header pass: find which categorical columns the file carries
        let header = LazyCsvReader::new(file_path)
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .finish()?
            .collect_schema()?;

        let mut overwrite = Schema::with_capacity(CATEGORICAL_COLUMNS.len());
        for name in CATEGORICAL_COLUMNS {
            if header.contains(name) {
                overwrite.with_column(name.into(), DataType::String);
            }
        }
        debug!(
            "{} of {} categorical columns present in {}",
            overwrite.len(),
            CATEGORICAL_COLUMNS.len(),
            file_path.display()
        );

        // Remaining columns: dtype inferred from every row
        let df = LazyCsvReader::new(file_path)
            .with_has_header(true)
            .with_infer_schema_length(None)
            .with_dtype_overwrite(Some(Arc::new(overwrite)))
            .finish()?
            .collect()?;

        info!(
            "Loaded {} rows, {} columns from {}",
            df.height(),
            df.width(),
            file_path.display()
        );

        self.df = Some(df);
        self.df.as_ref().ok_or(LoaderError::NoData)
    }

    /// Fail unless the loaded table has the given column.
    pub fn require_column(&self, column: &str) -> Result<(), LoaderError> {
        let df = self.df.as_ref().ok_or(LoaderError::NoData)?;
        if df.column(column).is_ok() {
            Ok(())
        } else {
            Err(LoaderError::MissingColumn(column.to_string()))
        }
    }

    /// Get list of column names from loaded DataFrame.
    pub fn column_names(&self) -> Vec<String> {
        self.df
            .as_ref()
            .map(|df| {
                df.get_column_names()
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Distinct non-null values of a column, in order of first appearance.
    pub fn unique_values(&self, column: &str) -> Vec<String> {
        let Some(df) = &self.df else {
            return Vec::new();
        };
        DataProcessor::distinct_values(df, column).unwrap_or_default()
    }

    /// Get the number of rows in the DataFrame.
    pub fn row_count(&self) -> usize {
        self.df.as_ref().map(|df| df.height()).unwrap_or(0)
    }

    /// Get a reference to the loaded DataFrame.
    pub fn dataframe(&self) -> Option<&DataFrame> {
        self.df.as_ref()
    }

    /// Get file path.
    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }
}
