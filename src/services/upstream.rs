use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::utils::error::UpstreamError;

/// `base` with each segment appended percent-encoded, so free-text names
/// like "United States" or "Côte d'Ivoire" survive the trip.
pub fn endpoint(base: &str, segments: &[&str]) -> Result<Url, UpstreamError> {
    let mut url = Url::parse(base).map_err(|e| UpstreamError::InvalidUrl(format!("{base}: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| UpstreamError::InvalidUrl(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Sends the request and decodes a 2xx JSON body. Non-2xx responses become
/// `UpstreamError::Status` carrying whatever message the provider sent.
pub async fn get_json<T: DeserializeOwned>(req: RequestBuilder) -> Result<T, UpstreamError> {
    let resp = req.send().await?;
    let status = resp.status();
    if !status.is_success() {
        let body = resp.bytes().await.unwrap_or_default();
        return Err(UpstreamError::from_status(status, &body));
    }
    let body = resp.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| UpstreamError::Malformed(e.to_string()))
}
