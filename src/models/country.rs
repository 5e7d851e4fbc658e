use serde::{Deserialize, Serialize};

use super::NOT_AVAILABLE;

/// Merged country record. Every field is populated; gaps hold `"N/A"`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CountryInfo {
    pub country_name: String,
    pub capital: String,
    pub languages: Vec<String>,
    pub currency: Vec<String>,
    pub flag: String,
}

impl CountryInfo {
    /// The currency the exchange step should quote, if there is a real one.
    pub fn base_currency(&self) -> Option<&str> {
        self.currency
            .first()
            .map(String::as_str)
            .filter(|c| !c.is_empty() && *c != NOT_AVAILABLE)
    }
}

/// What one country directory knew. Empty strings never make it in here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountrySnapshot {
    pub name: Option<String>,
    pub capital: Option<String>,
    pub languages: Vec<String>,
    pub currencies: Vec<String>,
    pub flag: Option<String>,
}

impl CountrySnapshot {
    /// True when another source is needed to fill languages, currency or flag.
    pub fn is_incomplete(&self) -> bool {
        self.languages.is_empty() || self.currencies.is_empty() || self.flag.is_none()
    }
}
