use reqwest::Client;
use std::{env, sync::Arc, time::Duration};
use tracing::{info, warn};

pub const DEFAULT_RANDOM_USER_URL: &str = "https://randomuser.me/api/";
pub const DEFAULT_COUNTRYLAYER_URL: &str = "http://api.countrylayer.com/v2";
pub const DEFAULT_RESTCOUNTRIES_URL: &str = "https://restcountries.com/v3.1";
pub const DEFAULT_EXCHANGERATE_URL: &str = "https://v6.exchangerate-api.com/v6";
pub const DEFAULT_NEWS_API_URL: &str = "https://newsapi.org/v2/everything";

#[derive(Clone)]
pub struct AppState {
    pub http: Client,
    pub upstreams: Arc<Upstreams>,
}

/// Where each provider lives and the credentials it needs.
#[derive(Clone, Debug)]
pub struct Upstreams {
    pub random_user_url: String,
    pub countrylayer_url: String,
    pub restcountries_url: String,
    pub exchangerate_url: String,
    pub news_api_url: String,
    pub countrylayer_key: Option<String>,
    pub exchangerate_key: Option<String>,
    pub news_api_key: Option<String>,
}

impl Upstreams {
    /// Every provider rooted at one base URL, the way tests mount a mock server.
    pub fn rooted_at(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            random_user_url: format!("{base}/api/"),
            countrylayer_url: format!("{base}/v2"),
            restcountries_url: format!("{base}/v3.1"),
            exchangerate_url: format!("{base}/v6"),
            news_api_url: format!("{base}/v2/everything"),
            countrylayer_key: None,
            exchangerate_key: None,
            news_api_key: None,
        }
    }
}

pub struct AppConfig {
    pub port: u16,
    pub external_timeout_ms: u64,
    pub upstreams: Upstreams,
}

fn key(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

fn url(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.into())
}

impl AppConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let port: u16 = env::var("PORT").unwrap_or_else(|_| "3000".into()).parse()?;
        let external_timeout_ms: u64 = env::var("EXTERNAL_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8_000);
        let upstreams = Upstreams {
            random_user_url: url("RANDOM_USER_URL", DEFAULT_RANDOM_USER_URL),
            countrylayer_url: url("COUNTRYLAYER_URL", DEFAULT_COUNTRYLAYER_URL),
            restcountries_url: url("RESTCOUNTRIES_URL", DEFAULT_RESTCOUNTRIES_URL),
            exchangerate_url: url("EXCHANGERATE_URL", DEFAULT_EXCHANGERATE_URL),
            news_api_url: url("NEWS_API_URL", DEFAULT_NEWS_API_URL),
            countrylayer_key: key("COUNTRYLAYER_KEY"),
            exchangerate_key: key("EXCHANGERATE_KEY"),
            news_api_key: key("NEWS_API_KEY"),
        };
        Ok(Self { port, external_timeout_ms, upstreams })
    }

    pub fn build_state(&self) -> Result<AppState, anyhow::Error> {
        let u = &self.upstreams;
        if u.countrylayer_key.is_none() {
            warn!("COUNTRYLAYER_KEY not set, country lookups use restcountries only");
        }
        if u.exchangerate_key.is_none() {
            warn!("EXCHANGERATE_KEY not set, /api/exchange will fail");
        }
        if u.news_api_key.is_none() {
            warn!("NEWS_API_KEY not set, /api/news will fail");
        }

        // http client
        let http = Client::builder()
            .timeout(Duration::from_millis(self.external_timeout_ms))
            .build()?;
        info!(timeout_ms = self.external_timeout_ms, "✅ HTTP client ready");

        Ok(AppState {
            http,
            upstreams: Arc::new(self.upstreams.clone()),
        })
    }
}
