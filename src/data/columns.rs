//! Column names of the survey dataset.

pub const PRODUCT_TYPE: &str = "Product_Type";
pub const PRICE_RANGE: &str = "Price_Range";
pub const GEOGRAPHY: &str = "Geography";
pub const AGE_GROUP: &str = "Age_Group";
pub const GENDER: &str = "Gender";
pub const INCOME_LEVEL: &str = "Income_Level";
pub const PREFERRED_PRODUCT_TYPE: &str = "Preferred_Product_Type";
pub const PURCHASE_CHANNEL: &str = "Purchase_Channel";
pub const TRENDING_INGREDIENTS: &str = "Trending_Ingredients";
pub const REGION: &str = "Region";

/// Columns that are always read as text, whatever their cells look like.
pub const CATEGORICAL_COLUMNS: [&str; 10] = [
    PRODUCT_TYPE,
    PRICE_RANGE,
    GEOGRAPHY,
    AGE_GROUP,
    GENDER,
    INCOME_LEVEL,
    PREFERRED_PRODUCT_TYPE,
    PURCHASE_CHANNEL,
    TRENDING_INGREDIENTS,
    REGION,
];

/// Demographic columns reported per product, in display order.
pub const DEMOGRAPHIC_COLUMNS: [&str; 5] = [GENDER, AGE_GROUP, INCOME_LEVEL, GEOGRAPHY, REGION];
