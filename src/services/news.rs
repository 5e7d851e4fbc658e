use reqwest::Client;
use std::collections::HashSet;
use tracing::debug;

use crate::models::news::{NewsItem, NO_DESCRIPTION};
use crate::services::upstream::get_json;
use crate::types::external::{NaArticle, NaResponse};
use crate::utils::error::ApiError;

const SUMMARY: &str = "News API error";
pub const MAX_ITEMS: usize = 5;

/// Latest English headlines mentioning `country`, at most five.
pub async fn fetch_headlines(
    http: &Client,
    url: &str,
    key: Option<&str>,
    country: &str,
) -> Result<Vec<NewsItem>, ApiError> {
    let key = key.ok_or(ApiError::MissingKey("NEWS_API_KEY"))?;
    let page_size = MAX_ITEMS.to_string();
    let req = http.get(url).query(&[
        ("q", country),
        ("language", "en"),
        ("pageSize", page_size.as_str()),
        ("sortBy", "publishedAt"),
        ("apiKey", key),
    ]);
    let resp: NaResponse = get_json(req).await.map_err(ApiError::upstream(SUMMARY))?;
    let articles = resp.articles.unwrap_or_default();
    let items = rank_by_relevance(&articles, country);
    debug!(country, received = articles.len(), kept = items.len(), "news filtered");
    Ok(items)
}

fn mentions(field: &Option<String>, needle: &str) -> bool {
    field.as_deref().is_some_and(|t| t.to_lowercase().contains(needle))
}

/// Articles naming the country in the title first, then ones naming it only
/// in the description, both in provider order, capped at five. Articles are
/// identified by URL, falling back to position when the URL is missing.
pub fn rank_by_relevance(articles: &[NaArticle], country: &str) -> Vec<NewsItem> {
    let needle = country.to_lowercase();
    let identity = |i: usize, a: &NaArticle| a.url.clone().unwrap_or_else(|| format!("#{i}"));

    let mut picked: Vec<&NaArticle> = Vec::with_capacity(MAX_ITEMS);
    let mut seen = HashSet::new();
    for (i, a) in articles.iter().enumerate() {
        if mentions(&a.title, &needle) && seen.insert(identity(i, a)) {
            picked.push(a);
        }
    }
    if picked.len() < MAX_ITEMS {
        for (i, a) in articles.iter().enumerate() {
            if mentions(&a.description, &needle) && seen.insert(identity(i, a)) {
                picked.push(a);
            }
        }
    }

    picked
        .into_iter()
        .take(MAX_ITEMS)
        .map(|a| NewsItem {
            title: a.title.clone(),
            image: a.url_to_image.clone().filter(|s| !s.is_empty()),
            description: a
                .description
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            url: a.url.clone(),
        })
        .collect()
}
