use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleCount {
    /// `None` when every type was counted.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub article_type: Option<String>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeanPrice {
    pub articles: usize,
    pub mean_price: Decimal,
}

/// Every article released in the earliest year, in store order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OldestArticles {
    pub release_year: i32,
    pub ids: Vec<String>,
}
