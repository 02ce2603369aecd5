//! Aggregation primitives.
//! Pure functions over column values; nothing here touches the UI.

use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// Number of ingredients shown in the ranked table and bar chart.
pub const TOP_INGREDIENTS: usize = 10;

/// Round to two decimals. Only ever applied to final percentages.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A cell counts as missing when it is null or blank.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Share of one category within a column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub value: String,
    pub count: usize,
    pub percent: f64,
}

/// Percentage breakdown of one demographic column.
#[derive(Debug, Clone, Serialize)]
pub struct Distribution {
    pub column: String,
    /// Rows with a value in this column.
    pub total: usize,
    /// Ordered by descending count, ties in first encountered order.
    pub shares: Vec<CategoryShare>,
}

impl Distribution {
    /// Count every non-missing value of `column`.
    ///
    /// Rows missing a value here are left out of this column only.
    pub fn from_values<'a, I>(column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let counts = stable_counts(values.into_iter().filter_map(present));
        let total: usize = counts.iter().map(|(_, n)| n).sum();

        let shares = counts
            .into_iter()
            .map(|(value, count)| CategoryShare {
                value: value.to_string(),
                count,
                percent: round2(count as f64 / total as f64 * 100.0),
            })
            .collect();

        Self {
            column: column.to_string(),
            total,
            shares,
        }
    }

    pub fn percent_sum(&self) -> f64 {
        self.shares.iter().map(|s| s.percent).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }
}

/// Occurrence counts in first encountered order, then stably sorted by
/// descending count.
fn stable_counts<'a, I>(values: I) -> Vec<(&'a str, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for value in values {
        match index.get(value) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(value, counts.len());
                counts.push((value, 1));
            }
        }
    }

    // sort_by is stable, which keeps ties in insertion order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Two-way frequency table, normalised per row.
#[derive(Debug, Clone, Serialize)]
pub struct CrossTab {
    pub row_column: String,
    pub col_column: String,
    /// Sorted row labels.
    pub rows: Vec<String>,
    /// Sorted column labels.
    pub columns: Vec<String>,
    /// `counts[r][c]` joint occurrences.
    pub counts: Vec<Vec<usize>>,
    /// `percents[r][c]` share of row `r` falling in column `c`.
    pub percents: Vec<Vec<f64>>,
}

impl CrossTab {
    /// Build from paired columns. Only rows with both values present count.
    pub fn from_pairs<'a, I>(row_column: &str, col_column: &str, pairs: I) -> Self
    where
        I: IntoIterator<Item = (Option<&'a str>, Option<&'a str>)>,
    {
        let pairs: Vec<(&str, &str)> = pairs
            .into_iter()
            .filter_map(|(r, c)| Some((present(r)?, present(c)?)))
            .collect();

        let rows: Vec<String> = pairs
            .iter()
            .map(|(r, _)| *r)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect();
        let columns: Vec<String> = pairs
            .iter()
            .map(|(_, c)| *c)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect();

        let row_index: HashMap<&str, usize> =
            rows.iter().enumerate().map(|(i, r)| (r.as_str(), i)).collect();
        let col_index: HashMap<&str, usize> =
            columns.iter().enumerate().map(|(i, c)| (c.as_str(), i)).collect();

        let mut counts = vec![vec![0usize; columns.len()]; rows.len()];
        for (r, c) in &pairs {
            counts[row_index[r]][col_index[c]] += 1;
        }

        let percents = counts
            .iter()
            .map(|row| {
                let row_total: usize = row.iter().sum();
                row.iter()
                    .map(|&n| {
                        if row_total == 0 {
                            0.0
                        } else {
                            round2(n as f64 / row_total as f64 * 100.0)
                        }
                    })
                    .collect()
            })
            .collect();

        Self {
            row_column: row_column.to_string(),
            col_column: col_column.to_string(),
            rows,
            columns,
            counts,
            percents,
        }
    }

    pub fn row_percent_sum(&self, row: usize) -> f64 {
        self.percents.get(row).map(|r| r.iter().sum()).unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Split a raw ingredients cell into normalised ingredient names.
///
/// Fragments are trimmed and lower-cased; empty fragments are dropped.
pub fn split_ingredients(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split(',')
        .map(|fragment| fragment.trim().to_lowercase())
        .filter(|fragment| !fragment.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientCount {
    pub ingredient: String,
    pub count: usize,
}

/// Ingredient occurrences across a set of rows.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IngredientFrequency {
    /// Rows that had a non-empty ingredients cell.
    pub rows_with_ingredients: usize,
    /// Every ingredient, descending by count, ties in first encountered order.
    pub counts: Vec<IngredientCount>,
}

impl IngredientFrequency {
    pub fn from_values<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let mut rows_with_ingredients = 0;
        let mut fragments: Vec<String> = Vec::new();

        for raw in values.into_iter().filter_map(present) {
            rows_with_ingredients += 1;
            fragments.extend(split_ingredients(raw));
        }

        let counts = stable_counts(fragments.iter().map(String::as_str))
            .into_iter()
            .map(|(ingredient, count)| IngredientCount {
                ingredient: ingredient.to_string(),
                count,
            })
            .collect();

        Self {
            rows_with_ingredients,
            counts,
        }
    }

    /// The `n` most frequent ingredients.
    pub fn top(&self, n: usize) -> &[IngredientCount] {
        &self.counts[..n.min(self.counts.len())]
    }

    pub fn count_of(&self, ingredient: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|c| c.ingredient == ingredient)
            .map(|c| c.count)
    }

    pub fn total_mentions(&self) -> usize {
        self.counts.iter().map(|c| c.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
