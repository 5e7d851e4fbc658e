use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::error;

use crate::config::AppState;
use crate::handlers::aggregate::{country, exchange, health, news, random_user};
use crate::utils::error::ApiError;

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    error!(%details, "handler panicked");
    ApiError::Internal(details).into_response()
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/random-user", get(random_user))
        .route("/api/country", get(country))
        .route("/api/exchange", get(exchange))
        .route("/api/news", get(news))
        .route("/healthz", get(health))
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
}
