//! Data Processor Module
//! Row selection and text extraction over the loaded table.

use polars::prelude::*;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Stateless helpers shared by the loader and the reporter.
pub struct DataProcessor;

impl DataProcessor {
    /// Whether the frame has a column with this exact name.
    pub fn has_column(df: &DataFrame, column: &str) -> bool {
        df.column(column).is_ok()
    }

    /// Values of a column as text, `None` for missing cells.
    pub fn text_values(df: &DataFrame, column: &str) -> Result<Vec<Option<String>>, ProcessorError> {
        let text = df.column(column)?.cast(&DataType::String)?;
        let values = text
            .str()?
            .into_iter()
            .map(|v| v.map(str::to_string))
            .collect();
        Ok(values)
    }

    /// Distinct non-null values of a column, in order of first appearance.
    pub fn distinct_values(df: &DataFrame, column: &str) -> Result<Vec<String>, ProcessorError> {
        let mut seen = HashSet::new();
        let values = Self::text_values(df, column)?
            .into_iter()
            .flatten()
            .filter(|v| seen.insert(v.clone()))
            .collect();
        Ok(values)
    }

    /// Rows whose `column` equals `value`.
    pub fn filter_by_value(
        df: &DataFrame,
        column: &str,
        value: &str,
    ) -> Result<DataFrame, ProcessorError> {
        let filtered = df
            .clone()
            .lazy()
            .filter(col(column).eq(lit(value)))
            .collect()?;
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DataFrame {
        df!(
            "Preferred_Product_Type" => ["Serum", "Cream", "Serum", "Toner"],
            "Gender" => [Some("F"), None, Some("M"), Some("F")],
        )
        .unwrap()
    }

    #[test]
    fn distinct_values_keep_first_seen_order() {
        let df = sample();
        let values = DataProcessor::distinct_values(&df, "Preferred_Product_Type").unwrap();
        assert_eq!(values, vec!["Serum", "Cream", "Toner"]);
    }

    #[test]
    fn distinct_values_skip_nulls() {
        let df = sample();
        assert_eq!(
            DataProcessor::distinct_values(&df, "Gender").unwrap(),
            vec!["F", "M"]
        );
    }

    #[test]
    fn filter_keeps_matching_rows_only() {
        let df = sample();
        let serum = DataProcessor::filter_by_value(&df, "Preferred_Product_Type", "Serum").unwrap();
        assert_eq!(serum.height(), 2);
        assert_eq!(serum.width(), 2);
    }

    #[test]
    fn unknown_column_is_an_error() {
        let df = sample();
        assert!(DataProcessor::text_values(&df, "Region").is_err());
        assert!(!DataProcessor::has_column(&df, "Region"));
    }
}
