use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use serde::Serialize;
use thiserror::Error;

/// Failure talking to a third-party provider.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Stored without its URL; provider keys ride in paths and query strings.
    #[error("{0}")]
    Transport(reqwest::Error),
    #[error("{0}")]
    Status(String),
    #[error("{0}")]
    Malformed(String),
    #[error("invalid upstream url: {0}")]
    InvalidUrl(String),
}

impl UpstreamError {
    /// Builds a `Status` error, preferring the provider's own message when the
    /// body carries one in `error`, `error-type` or `message`.
    pub fn from_status(status: reqwest::StatusCode, body: &[u8]) -> Self {
        let extracted = serde_json::from_slice::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                ["error", "error-type", "message"]
                    .iter()
                    .find_map(|k| v.get(*k).and_then(|m| m.as_str()).map(str::to_owned))
            })
            .filter(|m| !m.is_empty());
        let message = extracted
            .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()));
        UpstreamError::Status(message)
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        UpstreamError::Transport(e.without_url())
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("validation: {0}")]
    Validation(String),
    #[error("missing_key: {0}")]
    MissingKey(&'static str),
    #[error("bad_upstream: {0}")]
    BadUpstream(String),
    #[error("upstream: {summary}: {source}")]
    Upstream {
        summary: &'static str,
        #[source]
        source: UpstreamError,
    },
    #[error("internal: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn upstream(summary: &'static str) -> impl FnOnce(UpstreamError) -> ApiError {
        move |source| ApiError::Upstream { summary, source }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")] pub details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody { error: msg, details: None }),
            ).into_response(),
            ApiError::MissingKey(key) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody { error: format!("{key} missing in environment"), details: None }),
            ).into_response(),
            ApiError::BadUpstream(msg) => (
                StatusCode::BAD_GATEWAY,
                Json(ErrorBody { error: msg, details: None }),
            ).into_response(),
            ApiError::Upstream { summary, source } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody { error: summary.into(), details: Some(source.to_string()) }),
            ).into_response(),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody { error: "Server error".into(), details: Some(msg) }),
            ).into_response(),
        }
    }
}
