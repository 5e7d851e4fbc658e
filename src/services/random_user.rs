use chrono::{DateTime, Utc};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::models::user::UserProfile;
use crate::types::external::{RuResponse, RuUser};
use crate::services::upstream::get_json;
use crate::utils::error::UpstreamError;

pub async fn fetch_random_user(http: &Client, url: &str) -> Result<UserProfile, UpstreamError> {
    let resp: RuResponse = get_json(http.get(url).query(&[("results", "1")])).await?;
    let user = resp
        .results
        .into_iter()
        .next()
        .ok_or_else(|| UpstreamError::Malformed("random user response has no results".into()))?;
    let profile = to_profile(user)?;
    debug!(country = %profile.country, "random user fetched");
    Ok(profile)
}

fn to_profile(u: RuUser) -> Result<UserProfile, UpstreamError> {
    let dob = DateTime::parse_from_rfc3339(&u.dob.date)
        .map_err(|e| UpstreamError::Malformed(format!("bad dob.date {:?}: {}", u.dob.date, e)))?
        .with_timezone(&Utc)
        .date_naive();

    let number = match &u.location.street.number {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    Ok(UserProfile {
        first_name: u.name.first,
        last_name: u.name.last,
        gender: u.gender,
        picture: u.picture.large,
        age: u.dob.age,
        date_of_birth: dob.format("%Y-%m-%d").to_string(),
        city: u.location.city,
        country: u.location.country,
        full_address: format!("{} {}", u.location.street.name, number),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(date: &str) -> RuUser {
        let raw = serde_json::json!({
            "gender": "female",
            "name": { "title": "Ms", "first": "Aigerim", "last": "Sadykova" },
            "location": {
                "street": { "number": 4821, "name": "Abay Avenue" },
                "city": "Almaty",
                "country": "Kazakhstan",
                "postcode": 50000
            },
            "dob": { "date": date, "age": 31 },
            "picture": { "large": "https://randomuser.me/api/portraits/women/12.jpg" }
        });
        serde_json::from_value(raw).unwrap()
    }

    #[test]
    fn maps_provider_user_to_profile() {
        let p = to_profile(fixture("1993-07-20T09:44:18.674Z")).unwrap();
        assert_eq!(p.first_name, "Aigerim");
        assert_eq!(p.last_name, "Sadykova");
        assert_eq!(p.date_of_birth, "1993-07-20");
        assert_eq!(p.full_address, "Abay Avenue 4821");
        assert_eq!(p.country, "Kazakhstan");
        assert_eq!(p.age, 31);
    }

    #[test]
    fn dob_is_reported_in_utc() {
        let p = to_profile(fixture("1990-01-01T02:00:00+05:00")).unwrap();
        assert_eq!(p.date_of_birth, "1989-12-31");
    }

    #[test]
    fn unparseable_dob_is_malformed() {
        assert!(matches!(to_profile(fixture("yesterday")), Err(UpstreamError::Malformed(_))));
    }
}
