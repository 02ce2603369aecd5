mod common;

use common::{load, SURVEY};
use trend_lens::report::{DemographicReport, DemographicReporter, IngredientSection, ReportOutcome};

fn analyze(csv: &str, product: &str) -> ReportOutcome {
    let (_tmp, loader) = load(csv);
    DemographicReporter::report(loader.dataframe().unwrap(), product).unwrap()
}

fn ready(outcome: ReportOutcome) -> DemographicReport {
    match outcome {
        ReportOutcome::Ready(report) => *report,
        other => panic!("expected a report, got {:?}", other),
    }
}

#[test]
fn total_users_counts_matching_rows() {
    let report = ready(analyze(SURVEY, "Serum"));
    assert_eq!(report.total_users, 4);
    assert_eq!(report.subset.height(), 4);
    assert_eq!(report.headline(), "Total Users who prefer 'Serum': 4");
}

#[test]
fn distributions_cover_demographics_and_sum_to_100() {
    let report = ready(analyze(SURVEY, "Serum"));
    let columns: Vec<&str> = report
        .distributions
        .iter()
        .map(|d| d.column.as_str())
        .collect();
    assert_eq!(
        columns,
        vec!["Gender", "Age_Group", "Income_Level", "Geography", "Region"]
    );
    for dist in &report.distributions {
        assert!((dist.percent_sum() - 100.0).abs() <= 0.1, "{}", dist.column);
    }

    let gender = &report.distributions[0];
    assert_eq!(gender.shares[0].value, "Female");
    assert_eq!(gender.shares[0].count, 2);
    assert_eq!(gender.shares[0].percent, 50.0);
}

#[test]
fn cross_tab_rows_are_normalised() {
    let report = ready(analyze(SURVEY, "Serum"));
    let tab = report.cross_tab.expect("gender and age present");
    assert_eq!(tab.rows, vec!["Female", "Male"]);
    assert_eq!(tab.columns, vec!["18-24", "25-34", "35-44"]);
    for row in 0..tab.rows.len() {
        assert!((tab.row_percent_sum(row) - 100.0).abs() <= 0.1);
    }
    // Female: both in 18-24
    assert_eq!(tab.percents[0], vec![100.0, 0.0, 0.0]);
}

#[test]
fn ingredients_are_normalised_and_ranked() {
    let report = ready(analyze(SURVEY, "Serum"));
    let freq = report.ingredients.frequency().unwrap();
    assert_eq!(freq.count_of("aloe"), Some(3));
    assert_eq!(freq.count_of("retinol"), Some(2));
    assert_eq!(freq.count_of("vanilla"), Some(1));
    assert_eq!(report.top_ingredients()[0].ingredient, "aloe");
    assert!(report.warnings.is_empty());
}

#[test]
fn missing_ingredient_column_warns() {
    let csv = "Preferred_Product_Type,Gender\nSerum,Female\nSerum,Male\n";
    let report = ready(analyze(csv, "Serum"));
    assert!(matches!(report.ingredients, IngredientSection::MissingColumn));
    assert_eq!(
        report.warnings,
        vec!["The dataset does not contain a 'Trending_Ingredients' column."]
    );
    assert!(report.top_ingredients().is_empty());
}

#[test]
fn missing_demographic_column_is_skipped_silently() {
    let csv = "Preferred_Product_Type,Gender,Trending_Ingredients\nSerum,Female,aloe\n";
    let report = ready(analyze(csv, "Serum"));
    assert_eq!(report.distributions.len(), 1);
    assert!(report.cross_tab.is_none());
    assert!(report.warnings.is_empty());
}

#[test]
fn unknown_product_is_not_an_error() {
    let outcome = analyze(SURVEY, "Perfume");
    assert_eq!(
        outcome.warning().as_deref(),
        Some("Product 'Perfume' not found in the dataset.")
    );
    assert!(matches!(outcome, ReportOutcome::ProductNotFound { .. }));
}

#[test]
fn repeated_analysis_is_identical() {
    let (_tmp, loader) = load(SURVEY);
    let df = loader.dataframe().unwrap();
    let first = ready(DemographicReporter::report(df, "Shampoo").unwrap());
    let second = ready(DemographicReporter::report(df, "Shampoo").unwrap());
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
