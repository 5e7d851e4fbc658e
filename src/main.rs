use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{info, warn};

use country_dashboard::{config::AppConfig, routes, utils::logging::init_server_logger};

/// Resolves on Ctrl-C or SIGTERM. In-flight aggregations finish; upstream
/// calls still pending are bounded by `EXTERNAL_TIMEOUT_MS`.
async fn aggregator_stopped() {
    let interrupted = async {
        tokio::signal::ctrl_c().await.ok();
    };
    #[cfg(unix)]
    let terminated = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "SIGTERM handler unavailable, relying on Ctrl-C");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminated = std::future::pending::<()>();

    let cause = tokio::select! {
        _ = interrupted => "ctrl-c",
        _ = terminated => "SIGTERM",
    };
    info!(cause, "aggregator shutting down, draining open requests");
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();
    init_server_logger();

    let cfg = AppConfig::from_env()?;
    let app = routes::router(cfg.build_state()?);

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.port));
    let listener = TcpListener::bind(addr).await?;
    info!("🚀 Aggregator listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(aggregator_stopped())
        .await?;

    Ok(())
}
