#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;
use trend_lens::data::DataLoader;

pub const SURVEY: &str = "\
Product_Type,Price_Range,Geography,Age_Group,Gender,Income_Level,Preferred_Product_Type,Purchase_Channel,Trending_Ingredients,Region
Skincare,Mid,Urban,18-24,Female,Medium,Serum,Online,\"Aloe, Vanilla\",01
Skincare,High,Urban,25-34,Male,High,Serum,Store,\"aloe,Retinol\",02
Haircare,Low,Rural,25-34,Female,Low,Shampoo,Online,Argan,01
Skincare,Mid,Suburban,18-24,Female,Medium,Serum,Online,,03
Skincare,Mid,Urban,35-44,Male,High,Serum,Online,\"Retinol, ALOE ,\",01
Haircare,Mid,Rural,18-24,Male,Low,Shampoo,Store,Keratin,02
";

/// Write `contents` to a fresh `.csv` temp file kept alive by the caller.
pub fn write_csv(contents: &str) -> NamedTempFile {
    let mut tmp = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .unwrap();
    write!(tmp, "{}", contents).unwrap();
    tmp.flush().unwrap();
    tmp
}

pub fn load(contents: &str) -> (NamedTempFile, DataLoader) {
    let tmp = write_csv(contents);
    let mut loader = DataLoader::new();
    loader.load_csv(tmp.path()).unwrap();
    (tmp, loader)
}
