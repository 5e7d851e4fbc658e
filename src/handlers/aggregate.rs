use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::config::AppState;
use crate::services::countries::{Countrylayer, RestCountries};
use crate::services::enrichment::CountryEnricher;
use crate::services::exchange::fetch_quote;
use crate::services::news::fetch_headlines;
use crate::services::random_user::fetch_random_user;
use crate::utils::error::ApiError;

#[derive(Deserialize)]
pub struct CountryParams {
    pub name: Option<String>,
}

#[derive(Deserialize)]
pub struct ExchangeParams {
    pub base: Option<String>,
}

#[derive(Deserialize)]
pub struct NewsParams {
    pub country: Option<String>,
}

// Absent and empty both count as missing.
fn required(value: Option<String>, message: &str) -> Result<String, ApiError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::Validation(message.into()))
}

pub async fn random_user(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let profile = fetch_random_user(&state.http, &state.upstreams.random_user_url)
        .await
        .map_err(ApiError::upstream("Failed to fetch random user"))?;
    Ok(Json(profile))
}

pub async fn country(
    State(state): State<AppState>,
    Query(p): Query<CountryParams>,
) -> Result<impl IntoResponse, ApiError> {
    let name = required(p.name, "Missing country name")?;

    let u = &state.upstreams;
    let enricher = CountryEnricher::new(
        Countrylayer::new(state.http.clone(), &u.countrylayer_url, u.countrylayer_key.clone()),
        RestCountries::new(state.http.clone(), &u.restcountries_url),
    );
    let info = enricher.enrich(&name).await;
    info!(query = %name, country = %info.country_name, "country enriched");
    Ok(Json(info))
}

pub async fn exchange(
    State(state): State<AppState>,
    Query(p): Query<ExchangeParams>,
) -> Result<impl IntoResponse, ApiError> {
    let base = required(p.base, "Missing base currency")?.to_uppercase();
    let u = &state.upstreams;
    let quote = fetch_quote(
        &state.http,
        &u.exchangerate_url,
        u.exchangerate_key.as_deref(),
        &base,
    )
    .await?;
    Ok(Json(quote))
}

pub async fn news(
    State(state): State<AppState>,
    Query(p): Query<NewsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let country = required(p.country, "Missing country name")?;
    let u = &state.upstreams;
    let items =
        fetch_headlines(&state.http, &u.news_api_url, u.news_api_key.as_deref(), &country)
            .await?;
    Ok(Json(items))
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "ok": true }))
}
