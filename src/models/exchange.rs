use serde::{Deserialize, Serialize};

/// Rates are `None` when the provider omitted them, which is not the same as zero.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExchangeQuote {
    pub base: String,
    #[serde(rename = "USD")]
    pub usd: Option<f64>,
    #[serde(rename = "KZT")]
    pub kzt: Option<f64>,
    #[serde(rename = "updated")]
    pub last_updated: String,
}
