//! Demographic reporting - per-product aggregation
//!
//! [`DemographicReporter::report`] is a pure function of the loaded table and
//! the selected product. Rendering lives in `charts` and `gui`.

pub mod aggregate;

pub use aggregate::{
    CategoryShare, CrossTab, Distribution, IngredientCount, IngredientFrequency, TOP_INGREDIENTS,
};

use crate::data::columns::{
    AGE_GROUP, DEMOGRAPHIC_COLUMNS, GENDER, PREFERRED_PRODUCT_TYPE, TRENDING_INGREDIENTS,
};
use crate::data::{DataProcessor, ProcessorError};
use log::{debug, info, warn};
use polars::prelude::*;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("The dataset must contain a '{0}' column.")]
    MissingColumn(String),
    #[error("Failed to aggregate: {0}")]
    Processor(#[from] ProcessorError),
}

/// Result of an analysis request.
#[derive(Debug, Clone)]
pub enum ReportOutcome {
    Ready(Box<DemographicReport>),
    /// The product does not occur in the dataset. Not an error.
    ProductNotFound { product: String },
}

impl ReportOutcome {
    pub fn warning(&self) -> Option<String> {
        match self {
            ReportOutcome::Ready(_) => None,
            ReportOutcome::ProductNotFound { product } => {
                Some(format!("Product '{}' not found in the dataset.", product))
            }
        }
    }
}

/// Ingredient analysis, or the reason it could not run.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IngredientSection {
    Present(IngredientFrequency),
    MissingColumn,
}

impl IngredientSection {
    pub fn frequency(&self) -> Option<&IngredientFrequency> {
        match self {
            IngredientSection::Present(freq) => Some(freq),
            IngredientSection::MissingColumn => None,
        }
    }
}

/// Everything shown for one selected product.
#[derive(Debug, Clone, Serialize)]
pub struct DemographicReport {
    pub product: String,
    pub total_users: usize,
    pub distributions: Vec<Distribution>,
    pub cross_tab: Option<CrossTab>,
    pub ingredients: IngredientSection,
    pub warnings: Vec<String>,
    /// Rows preferring `product`, all columns.
    #[serde(skip)]
    pub subset: DataFrame,
}

impl DemographicReport {
    pub fn top_ingredients(&self) -> &[IngredientCount] {
        self.ingredients
            .frequency()
            .map(|f| f.top(TOP_INGREDIENTS))
            .unwrap_or(&[])
    }

    pub fn headline(&self) -> String {
        format!(
            "Total Users who prefer '{}': {}",
            self.product, self.total_users
        )
    }
}

/// Builds demographic reports from the loaded survey table.
pub struct DemographicReporter;

impl DemographicReporter {
    pub fn report(df: &DataFrame, product: &str) -> Result<ReportOutcome, ReportError> {
        if !DataProcessor::has_column(df, PREFERRED_PRODUCT_TYPE) {
            return Err(ReportError::MissingColumn(PREFERRED_PRODUCT_TYPE.to_string()));
        }

        let products = DataProcessor::distinct_values(df, PREFERRED_PRODUCT_TYPE)?;
        if !products.iter().any(|p| p == product) {
            warn!("Product '{}' not found in the dataset", product);
            return Ok(ReportOutcome::ProductNotFound {
                product: product.to_string(),
            });
        }

        let subset = DataProcessor::filter_by_value(df, PREFERRED_PRODUCT_TYPE, product)?;
        let total_users = subset.height();
        info!("Analyzing '{}': {} matching rows", product, total_users);

        let mut warnings = Vec::new();

        let distributions = Self::distributions(&subset)?;

        let cross_tab = if DataProcessor::has_column(&subset, GENDER)
            && DataProcessor::has_column(&subset, AGE_GROUP)
        {
            Some(Self::gender_by_age(&subset)?)
        } else {
            debug!("Skipping cross-tabulation: gender or age group column absent");
            None
        };

        let ingredients = if DataProcessor::has_column(&subset, TRENDING_INGREDIENTS) {
            let values = DataProcessor::text_values(&subset, TRENDING_INGREDIENTS)?;
            let freq = IngredientFrequency::from_values(values.iter().map(|v| v.as_deref()));
            debug!(
                "{} distinct ingredients across {} rows",
                freq.counts.len(),
                freq.rows_with_ingredients
            );
            IngredientSection::Present(freq)
        } else {
            let message = format!(
                "The dataset does not contain a '{}' column.",
                TRENDING_INGREDIENTS
            );
            warn!("{}", message);
            warnings.push(message);
            IngredientSection::MissingColumn
        };

        Ok(ReportOutcome::Ready(Box::new(DemographicReport {
            product: product.to_string(),
            total_users,
            distributions,
            cross_tab,
            ingredients,
            warnings,
            subset,
        })))
    }

    /// One distribution per demographic column present; absent ones are skipped.
    fn distributions(subset: &DataFrame) -> Result<Vec<Distribution>, ReportError> {
        DEMOGRAPHIC_COLUMNS
            .iter()
            .filter(|column| DataProcessor::has_column(subset, column))
            .map(|column| {
                let values = DataProcessor::text_values(subset, column)?;
                Ok(Distribution::from_values(
                    column,
                    values.iter().map(|v| v.as_deref()),
                ))
            })
            .collect()
    }

    fn gender_by_age(subset: &DataFrame) -> Result<CrossTab, ReportError> {
        let genders = DataProcessor::text_values(subset, GENDER)?;
        let ages = DataProcessor::text_values(subset, AGE_GROUP)?;
        let pairs = genders
            .iter()
            .zip(ages.iter())
            .map(|(g, a)| (g.as_deref(), a.as_deref()));
        Ok(CrossTab::from_pairs(GENDER, AGE_GROUP, pairs))
    }
}
