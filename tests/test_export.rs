mod common;

use common::{load, SURVEY};
use trend_lens::data::DataLoader;
use trend_lens::export::{self, ChartBundle, SUMMARY_FILE};
use trend_lens::report::{DemographicReport, DemographicReporter, ReportOutcome};

fn serum_report() -> DemographicReport {
    report_for(SURVEY)
}

fn report_for(csv: &str) -> DemographicReport {
    let (_tmp, loader) = load(csv);
    match DemographicReporter::report(loader.dataframe().unwrap(), "Serum").unwrap() {
        ReportOutcome::Ready(report) => *report,
        other => panic!("expected a report, got {:?}", other),
    }
}

#[test]
fn downloaded_csv_reloads_to_the_same_rows() {
    let report = serum_report();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(export::subset_file_name(&report.product));
    export::write_subset_csv(&report.subset, &path).unwrap();

    assert_eq!(
        path.file_name().unwrap().to_str(),
        Some("Serum_demographics.csv")
    );

    let mut reloaded = DataLoader::new();
    let df = reloaded.load_csv(&path).unwrap();
    assert!(df.equals_missing(&report.subset));
}

#[test]
fn chart_bundle_writes_pngs_and_summary() {
    let report = serum_report();
    let dir = tempfile::tempdir().unwrap();
    let manifest = ChartBundle::write(&report, dir.path()).unwrap();

    let summary = dir.path().join(SUMMARY_FILE);
    assert!(manifest.files.contains(&summary));
    let json: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&summary).unwrap()).unwrap();
    assert_eq!(json["product"], "Serum");
    assert_eq!(json["total_users"], 4);
    assert_eq!(json["ingredients"]["status"], "present");

    assert!(manifest.skipped.is_empty(), "{:?}", manifest.skipped);
    // 5 distributions, heat map, ingredient bars, word cloud, summary
    assert_eq!(manifest.files.len(), 9);
    for file in &manifest.files {
        assert!(file.exists());
    }
}

#[test]
fn blank_ingredients_skip_only_ingredient_charts() {
    let csv = "\
Preferred_Product_Type,Gender,Age_Group,Trending_Ingredients
Serum,Female,18-24,
Serum,Male,25-34,
Serum,Female,25-34,
";
    let report = report_for(csv);
    assert_eq!(report.total_users, 3);
    assert!(report.warnings.is_empty());
    assert!(report.ingredients.frequency().unwrap().is_empty());

    let dir = tempfile::tempdir().unwrap();
    let manifest = ChartBundle::write(&report, dir.path()).unwrap();

    assert_eq!(manifest.skipped.len(), 2, "{:?}", manifest.skipped);
    assert!(manifest
        .skipped
        .iter()
        .any(|s| s == "word_cloud.png: no ingredients to draw"));
    assert!(manifest
        .skipped
        .iter()
        .any(|s| s.starts_with("top_ingredients.png")));

    for name in [
        "gender_distribution.png",
        "age_group_distribution.png",
        "gender_vs_age_group_heatmap.png",
        SUMMARY_FILE,
    ] {
        assert!(dir.path().join(name).exists(), "{} missing", name);
    }
    assert!(!dir.path().join("word_cloud.png").exists());
}
