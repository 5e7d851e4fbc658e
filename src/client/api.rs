use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::models::country::CountryInfo;
use crate::models::exchange::ExchangeQuote;
use crate::models::news::NewsItem;
use crate::models::user::UserProfile;

/// A failed internal call, carrying the message the user should see.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{0}")]
pub struct ClientError(pub String);

/// The four aggregation endpoints as the dashboard sees them.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    async fn random_user(&self) -> Result<UserProfile, ClientError>;
    async fn country(&self, name: &str) -> Result<CountryInfo, ClientError>;
    async fn exchange(&self, base: &str) -> Result<ExchangeQuote, ClientError>;
    async fn news(&self, country: &str) -> Result<Vec<NewsItem>, ClientError>;
}

pub struct HttpDashboardApi {
    http: Client,
    base_url: String,
}

impl HttpDashboardApi {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .send()
            .await
            .map_err(|e| ClientError(e.to_string()))?;
        let ok = resp.status().is_success();
        let body = resp.bytes().await.map_err(|e| ClientError(e.to_string()))?;

        if !ok {
            let message = serde_json::from_slice::<Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_owned))
                .unwrap_or_else(|| "Request failed".to_string());
            return Err(ClientError(message));
        }
        serde_json::from_slice(&body).map_err(|e| ClientError(e.to_string()))
    }
}

#[async_trait]
impl DashboardApi for HttpDashboardApi {
    async fn random_user(&self) -> Result<UserProfile, ClientError> {
        self.fetch_json("/api/random-user", &[]).await
    }

    async fn country(&self, name: &str) -> Result<CountryInfo, ClientError> {
        self.fetch_json("/api/country", &[("name", name)]).await
    }

    async fn exchange(&self, base: &str) -> Result<ExchangeQuote, ClientError> {
        self.fetch_json("/api/exchange", &[("base", base)]).await
    }

    async fn news(&self, country: &str) -> Result<Vec<NewsItem>, ClientError> {
        self.fetch_json("/api/news", &[("country", country)]).await
    }
}
