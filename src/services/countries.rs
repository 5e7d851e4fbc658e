use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::models::country::CountrySnapshot;
use crate::services::upstream::{endpoint, get_json};
use crate::types::external::{ClCountry, RcCountry};
use crate::utils::error::UpstreamError;

/// How strictly the secondary directory should match the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    Exact,
    Fuzzy,
}

/// The preferred country directory. `Ok(None)` means it had nothing to say.
#[async_trait]
pub trait PrimaryDirectory: Send + Sync {
    async fn lookup(&self, name: &str) -> Result<Option<CountrySnapshot>, UpstreamError>;
}

/// The directory used to fill whatever the primary one left empty.
#[async_trait]
pub trait SecondaryDirectory: Send + Sync {
    async fn lookup(&self, name: &str, mode: MatchMode) -> Result<Option<CountrySnapshot>, UpstreamError>;
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|v| !v.is_empty())
}

pub struct Countrylayer {
    http: Client,
    base_url: String,
    access_key: Option<String>,
}

impl Countrylayer {
    pub fn new(http: Client, base_url: impl Into<String>, access_key: Option<String>) -> Self {
        Self { http, base_url: base_url.into(), access_key }
    }
}

#[async_trait]
impl PrimaryDirectory for Countrylayer {
    async fn lookup(&self, name: &str) -> Result<Option<CountrySnapshot>, UpstreamError> {
        let Some(key) = self.access_key.as_deref() else {
            return Ok(None);
        };
        let url = endpoint(&self.base_url, &["name", name])?;
        // countrylayer answers some failures with 200 and an object body
        let body: Value = get_json(self.http.get(url).query(&[("access_key", key)])).await?;
        let Some(first) = body.as_array().and_then(|a| a.first()) else {
            return Ok(None);
        };
        let c: ClCountry = serde_json::from_value(first.clone())
            .map_err(|e| UpstreamError::Malformed(format!("countrylayer: {e}")))?;
        Ok(Some(from_countrylayer(c)))
    }
}

fn from_countrylayer(c: ClCountry) -> CountrySnapshot {
    CountrySnapshot {
        name: non_empty(c.name),
        capital: non_empty(c.capital),
        languages: c
            .languages
            .unwrap_or_default()
            .into_iter()
            .filter_map(|l| non_empty(l.name))
            .collect(),
        currencies: c
            .currencies
            .unwrap_or_default()
            .into_iter()
            .filter_map(|x| non_empty(x.code))
            .collect(),
        flag: non_empty(c.flag),
    }
}

pub struct RestCountries {
    http: Client,
    base_url: String,
}

impl RestCountries {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self { http, base_url: base_url.into() }
    }
}

#[async_trait]
impl SecondaryDirectory for RestCountries {
    async fn lookup(&self, name: &str, mode: MatchMode) -> Result<Option<CountrySnapshot>, UpstreamError> {
        let url = endpoint(&self.base_url, &["name", name])?;
        let mut req = self.http.get(url);
        if mode == MatchMode::Exact {
            req = req.query(&[("fullText", "true")]);
        }
        let found: Vec<RcCountry> = get_json(req).await?;
        Ok(found.into_iter().next().map(from_restcountries))
    }
}

fn from_restcountries(d: RcCountry) -> CountrySnapshot {
    let flag = d.flags.and_then(|f| non_empty(f.png).or_else(|| non_empty(f.svg)));
    CountrySnapshot {
        name: non_empty(d.name.and_then(|n| n.common)),
        capital: non_empty(d.capital.and_then(|c| c.into_iter().next())),
        languages: d
            .languages
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(_, v)| v.as_str().filter(|s| !s.is_empty()).map(str::to_owned))
            .collect(),
        currencies: d.currencies.unwrap_or_default().into_iter().map(|(k, _)| k).collect(),
        flag,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countrylayer_drops_blank_fields() {
        let c: ClCountry = serde_json::from_value(serde_json::json!({
            "name": "Kazakhstan",
            "capital": "",
            "languages": [{ "name": "Kazakh" }, { "name": "" }, {}],
            "currencies": [{ "code": "KZT" }],
            "flag": ""
        }))
        .unwrap();
        let s = from_countrylayer(c);
        assert_eq!(s.name.as_deref(), Some("Kazakhstan"));
        assert_eq!(s.capital, None);
        assert_eq!(s.languages, vec!["Kazakh"]);
        assert_eq!(s.currencies, vec!["KZT"]);
        assert_eq!(s.flag, None);
        assert!(s.is_incomplete());
    }

    #[test]
    fn restcountries_keeps_language_order_and_prefers_png() {
        let d: RcCountry = serde_json::from_value(serde_json::json!({
            "name": { "common": "Switzerland", "official": "Swiss Confederation" },
            "capital": ["Bern"],
            "languages": { "gsw": "Swiss German", "fra": "French", "ita": "Italian", "roh": "Romansh" },
            "currencies": { "CHF": { "name": "Swiss franc", "symbol": "Fr." } },
            "flags": { "png": "https://flagcdn.com/w320/ch.png", "svg": "https://flagcdn.com/ch.svg" }
        }))
        .unwrap();
        let s = from_restcountries(d);
        assert_eq!(s.capital.as_deref(), Some("Bern"));
        assert_eq!(s.languages, vec!["Swiss German", "French", "Italian", "Romansh"]);
        assert_eq!(s.currencies, vec!["CHF"]);
        assert_eq!(s.flag.as_deref(), Some("https://flagcdn.com/w320/ch.png"));
    }

    #[test]
    fn restcountries_falls_back_to_svg_flag() {
        let d: RcCountry = serde_json::from_value(serde_json::json!({
            "name": { "common": "Antarctica" },
            "flags": { "svg": "https://flagcdn.com/aq.svg" }
        }))
        .unwrap();
        let s = from_restcountries(d);
        assert_eq!(s.flag.as_deref(), Some("https://flagcdn.com/aq.svg"));
        assert!(s.capital.is_none());
        assert!(s.currencies.is_empty());
    }
}
