use reqwest::Client;
use serde_json::Value;
use std::collections::HashMap;
use tracing::warn;

use crate::models::exchange::ExchangeQuote;
use crate::models::NOT_AVAILABLE;
use crate::services::upstream::{endpoint, get_json};
use crate::types::external::ErLatest;
use crate::utils::error::ApiError;

const SUMMARY: &str = "ExchangeRate API error";

/// Latest USD and KZT rates for `base` (already upper-cased).
pub async fn fetch_quote(
    http: &Client,
    base_url: &str,
    key: Option<&str>,
    base: &str,
) -> Result<ExchangeQuote, ApiError> {
    let key = key.ok_or(ApiError::MissingKey("EXCHANGERATE_KEY"))?;
    let url = endpoint(base_url, &[key, "latest", base]).map_err(ApiError::upstream(SUMMARY))?;
    let latest: ErLatest = get_json(http.get(url)).await.map_err(ApiError::upstream(SUMMARY))?;

    let Some(rates) = latest.conversion_rates else {
        warn!(base, "rate provider answered without conversion_rates");
        return Err(ApiError::BadUpstream("Rates not found in API response".into()));
    };
    Ok(quote(base, &rates, latest.time_last_update_utc))
}

fn rate(rates: &HashMap<String, Value>, code: &str) -> Option<f64> {
    rates.get(code).and_then(Value::as_f64)
}

fn quote(base: &str, rates: &HashMap<String, Value>, updated: Option<String>) -> ExchangeQuote {
    ExchangeQuote {
        base: base.to_string(),
        usd: rate(rates, "USD"),
        kzt: rate(rates, "KZT"),
        last_updated: updated.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
    }
}
