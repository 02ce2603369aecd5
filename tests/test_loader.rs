mod common;

use common::{load, write_csv, SURVEY};
use polars::prelude::*;
use trend_lens::data::{DataLoader, LoaderError};

#[test]
fn loads_every_row_and_column() {
    let (_tmp, loader) = load(SURVEY);
    assert_eq!(loader.row_count(), 6);
    assert_eq!(loader.column_names().len(), 10);
    assert!(loader.require_column("Preferred_Product_Type").is_ok());
}

#[test]
fn region_codes_stay_text() {
    let (_tmp, loader) = load(SURVEY);
    let df = loader.dataframe().unwrap();
    let region = df.column("Region").unwrap();
    assert_eq!(region.dtype(), &DataType::String);
    assert_eq!(loader.unique_values("Region"), vec!["01", "02", "03"]);
}

#[test]
fn products_in_order_of_first_appearance() {
    let (_tmp, loader) = load(SURVEY);
    assert_eq!(
        loader.unique_values("Preferred_Product_Type"),
        vec!["Serum", "Shampoo"]
    );
}

#[test]
fn missing_file_is_an_error() {
    let mut loader = DataLoader::new();
    let result = loader.load_csv("/definitely/not/here/survey.csv");
    assert!(matches!(result, Err(LoaderError::Csv(_))));
    assert!(loader.dataframe().is_none());
}

#[test]
fn ragged_row_is_an_error() {
    let tmp = write_csv("Preferred_Product_Type,Gender\nSerum,Female\nSerum,Male,extra,fields\n");
    let mut loader = DataLoader::new();
    assert!(loader.load_csv(tmp.path()).is_err());
    assert_eq!(loader.row_count(), 0);
}

#[test]
fn product_column_is_required() {
    let (_tmp, loader) = load("Gender,Age_Group\nFemale,18-24\n");
    let err = loader.require_column("Preferred_Product_Type").unwrap_err();
    assert_eq!(
        err.to_string(),
        "The dataset must contain a 'Preferred_Product_Type' column."
    );
}

#[test]
fn nothing_loaded_yet() {
    let loader = DataLoader::new();
    assert!(matches!(
        loader.require_column("Gender"),
        Err(LoaderError::NoData)
    ));
    assert!(loader.unique_values("Gender").is_empty());
}

#[test]
fn late_text_value_in_unlisted_column_still_loads() {
    let mut csv = String::from("Preferred_Product_Type,Gender,Score\n");
    for _ in 0..10_050 {
        csv.push_str("Serum,F,5\n");
    }
    csv.push_str("Serum,M,n/a\n");

    let (_tmp, loader) = load(&csv);
    assert_eq!(loader.row_count(), 10_051);
    let df = loader.dataframe().unwrap();
    assert_eq!(df.column("Score").unwrap().dtype(), &DataType::String);
}
