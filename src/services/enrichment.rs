//! Country enrichment: one `CountryInfo` out of two country directories.
//!
//! The primary directory is consulted first and its failures are absorbed.
//! The secondary directory is only asked when the primary left languages,
//! currency or flag empty, first with an exact name match and then once
//! more with a fuzzy one.

use tracing::{debug, warn};

use crate::models::country::{CountryInfo, CountrySnapshot};
use crate::models::NOT_AVAILABLE;
use crate::services::countries::{MatchMode, PrimaryDirectory, SecondaryDirectory};
use crate::utils::error::UpstreamError;

pub struct CountryEnricher<P, S> {
    primary: P,
    secondary: S,
}

impl<P: PrimaryDirectory, S: SecondaryDirectory> CountryEnricher<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }

    /// Never fails: with both directories down every field is `"N/A"`.
    pub async fn enrich(&self, name: &str) -> CountryInfo {
        let primary = absorb("primary", name, self.primary.lookup(name).await);

        let secondary = match &primary {
            Some(p) if !p.is_incomplete() => None,
            _ => self.secondary_lookup(name).await,
        };

        merge(primary, secondary)
    }

    async fn secondary_lookup(&self, name: &str) -> Option<CountrySnapshot> {
        let res = match self.secondary.lookup(name, MatchMode::Exact).await {
            Ok(found) => Ok(found),
            Err(e) => {
                debug!(country = name, error = %e, "exact lookup failed, retrying fuzzy");
                self.secondary.lookup(name, MatchMode::Fuzzy).await
            }
        };
        absorb("secondary", name, res)
    }
}

fn absorb(
    source: &'static str,
    name: &str,
    res: Result<Option<CountrySnapshot>, UpstreamError>,
) -> Option<CountrySnapshot> {
    match res {
        Ok(found) => found,
        Err(e) => {
            warn!(source, country = name, error = %e, "country directory lookup failed");
            None
        }
    }
}

fn or_sentinel(v: Option<String>) -> String {
    v.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn or_sentinel_list(v: Vec<String>) -> Vec<String> {
    if v.is_empty() {
        vec![NOT_AVAILABLE.to_string()]
    } else {
        v
    }
}

/// Primary values win field by field; lists and the flag are replaced
/// wholesale by the secondary's when the primary's are empty.
pub fn merge(primary: Option<CountrySnapshot>, secondary: Option<CountrySnapshot>) -> CountryInfo {
    let p = primary.unwrap_or_default();
    let s = secondary.unwrap_or_default();

    let languages = if p.languages.is_empty() { s.languages } else { p.languages };
    let currencies = if p.currencies.is_empty() { s.currencies } else { p.currencies };

    CountryInfo {
        country_name: or_sentinel(p.name.or(s.name)),
        capital: or_sentinel(p.capital.or(s.capital)),
        languages: or_sentinel_list(languages),
        currency: or_sentinel_list(currencies),
        flag: or_sentinel(p.flag.or(s.flag)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    fn kz_primary() -> CountrySnapshot {
        CountrySnapshot {
            name: Some("Kazakhstan".into()),
            capital: Some("Astana".into()),
            languages: vec!["Kazakh".into(), "Russian".into()],
            currencies: vec!["KZT".into()],
            flag: Some("https://restcountries.eu/data/kaz.svg".into()),
        }
    }

    fn kz_secondary() -> CountrySnapshot {
        CountrySnapshot {
            name: Some("Kazakhstan".into()),
            capital: Some("Nur-Sultan".into()),
            languages: vec!["Kazakh".into(), "Russian".into()],
            currencies: vec!["KZT".into()],
            flag: Some("https://flagcdn.com/w320/kz.png".into()),
        }
    }

    fn boom() -> UpstreamError {
        UpstreamError::Malformed("simulated outage".into())
    }

    struct FakePrimary(Option<Result<CountrySnapshot, ()>>);

    #[async_trait]
    impl PrimaryDirectory for FakePrimary {
        async fn lookup(&self, _name: &str) -> Result<Option<CountrySnapshot>, UpstreamError> {
            match &self.0 {
                None => Ok(None),
                Some(Ok(s)) => Ok(Some(s.clone())),
                Some(Err(())) => Err(boom()),
            }
        }
    }

    /// Answers per mode; records every call.
    #[derive(Default, Clone)]
    struct FakeSecondary {
        exact: Option<CountrySnapshot>,
        exact_fails: bool,
        fuzzy: Option<CountrySnapshot>,
        fuzzy_fails: bool,
        calls: Arc<Mutex<Vec<MatchMode>>>,
    }

    #[async_trait]
    impl SecondaryDirectory for FakeSecondary {
        async fn lookup(&self, _name: &str, mode: MatchMode) -> Result<Option<CountrySnapshot>, UpstreamError> {
            self.calls.lock().unwrap().push(mode);
            match mode {
                MatchMode::Exact if self.exact_fails => Err(boom()),
                MatchMode::Exact => Ok(self.exact.clone()),
                MatchMode::Fuzzy if self.fuzzy_fails => Err(boom()),
                MatchMode::Fuzzy => Ok(self.fuzzy.clone()),
            }
        }
    }

    #[tokio::test]
    async fn complete_primary_skips_secondary() {
        let secondary = FakeSecondary { exact: Some(kz_secondary()), ..Default::default() };
        let calls = secondary.calls.clone();
        let e = CountryEnricher::new(FakePrimary(Some(Ok(kz_primary()))), secondary);

        let info = e.enrich("Kazakhstan").await;

        assert_eq!(info.capital, "Astana");
        assert_eq!(info.currency, vec!["KZT"]);
        assert!(calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn primary_capital_wins_over_secondary() {
        let mut partial = kz_primary();
        partial.flag = None;
        let secondary = FakeSecondary { exact: Some(kz_secondary()), ..Default::default() };
        let e = CountryEnricher::new(FakePrimary(Some(Ok(partial))), secondary);

        let info = e.enrich("Kazakhstan").await;

        assert_eq!(info.capital, "Astana");
        assert_eq!(info.flag, "https://flagcdn.com/w320/kz.png");
    }

    #[tokio::test]
    async fn failed_primary_yields_secondary_fields_exactly() {
        let mut s = kz_secondary();
        s.capital = None;
        let secondary = FakeSecondary { exact: Some(s), ..Default::default() };
        let e = CountryEnricher::new(FakePrimary(Some(Err(()))), secondary);

        let info = e.enrich("Kazakhstan").await;

        assert_eq!(
            info,
            CountryInfo {
                country_name: "Kazakhstan".into(),
                capital: "N/A".into(),
                languages: vec!["Kazakh".into(), "Russian".into()],
                currency: vec!["KZT".into()],
                flag: "https://flagcdn.com/w320/kz.png".into(),
            }
        );
    }

    #[tokio::test]
    async fn exact_failure_retries_fuzzy_once() {
        let secondary = FakeSecondary {
            exact_fails: true,
            fuzzy: Some(kz_secondary()),
            ..Default::default()
        };
        let calls = secondary.calls.clone();
        let e = CountryEnricher::new(FakePrimary(None), secondary);

        let info = e.enrich("kazakh").await;

        assert_eq!(info.country_name, "Kazakhstan");
        assert_eq!(*calls.lock().unwrap(), vec![MatchMode::Exact, MatchMode::Fuzzy]);
    }

    #[tokio::test]
    async fn exact_empty_result_does_not_retry() {
        let secondary = FakeSecondary { fuzzy: Some(kz_secondary()), ..Default::default() };
        let calls = secondary.calls.clone();
        let e = CountryEnricher::new(FakePrimary(None), secondary);

        let info = e.enrich("Atlantis").await;

        assert_eq!(info.country_name, "N/A");
        assert_eq!(*calls.lock().unwrap(), vec![MatchMode::Exact]);
    }

    #[tokio::test]
    async fn everything_down_degrades_to_sentinels() {
        let secondary = FakeSecondary { exact_fails: true, fuzzy_fails: true, ..Default::default() };
        let e = CountryEnricher::new(FakePrimary(Some(Err(()))), secondary);

        let info = e.enrich("Kazakhstan").await;

        assert_eq!(info.country_name, "N/A");
        assert_eq!(info.capital, "N/A");
        assert_eq!(info.languages, vec!["N/A"]);
        assert_eq!(info.currency, vec!["N/A"]);
        assert_eq!(info.flag, "N/A");
        assert_eq!(info.base_currency(), None);
    }

    #[test]
    fn merge_replaces_empty_lists_wholesale() {
        let p = CountrySnapshot {
            name: Some("Switzerland".into()),
            languages: vec!["German".into()],
            ..Default::default()
        };
        let s = CountrySnapshot {
            languages: vec!["Swiss German".into(), "French".into()],
            currencies: vec!["CHF".into()],
            ..Default::default()
        };

        let info = merge(Some(p), Some(s));

        assert_eq!(info.languages, vec!["German"]);
        assert_eq!(info.currency, vec!["CHF"]);
        assert_eq!(info.capital, "N/A");
        assert_eq!(info.flag, "N/A");
    }
}
