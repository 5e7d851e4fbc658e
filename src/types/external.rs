use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

// randomuser.me

#[derive(Deserialize)]
pub struct RuResponse { pub results: Vec<RuUser> }

#[derive(Deserialize)]
pub struct RuUser {
    pub gender: String,
    pub name: RuName,
    pub location: RuLocation,
    pub dob: RuDob,
    pub picture: RuPicture,
}

#[derive(Deserialize)]
pub struct RuName { pub first: String, pub last: String }

#[derive(Deserialize)]
pub struct RuLocation {
    pub street: RuStreet,
    pub city: String,
    pub country: String,
}

#[derive(Deserialize)]
pub struct RuStreet { pub number: Value, pub name: String }

#[derive(Deserialize)]
pub struct RuDob { pub date: String, pub age: u32 }

#[derive(Deserialize)]
pub struct RuPicture { pub large: String }

// countrylayer v2

#[derive(Deserialize)]
pub struct ClLanguage { pub name: Option<String> }

#[derive(Deserialize)]
pub struct ClCurrency { pub code: Option<String> }

#[derive(Deserialize)]
pub struct ClCountry {
    pub name: Option<String>,
    pub capital: Option<String>,
    pub languages: Option<Vec<ClLanguage>>,
    pub currencies: Option<Vec<ClCurrency>>,
    pub flag: Option<String>,
}

// restcountries v3.1

#[derive(Deserialize)]
pub struct RcName { pub common: Option<String> }

#[derive(Deserialize)]
pub struct RcFlags { pub png: Option<String>, pub svg: Option<String> }

#[derive(Deserialize)]
pub struct RcCountry {
    pub name: Option<RcName>,
    pub capital: Option<Vec<String>>,
    /// Code → display name, in provider order.
    pub languages: Option<Map<String, Value>>,
    /// Code → details; only the keys matter.
    pub currencies: Option<Map<String, Value>>,
    pub flags: Option<RcFlags>,
}

// exchangerate-api v6

#[derive(Deserialize)]
pub struct ErLatest {
    pub conversion_rates: Option<HashMap<String, Value>>,
    pub time_last_update_utc: Option<String>,
}

// newsapi

#[derive(Deserialize)]
pub struct NaResponse { pub articles: Option<Vec<NaArticle>> }

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NaArticle {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub url_to_image: Option<String>,
}
