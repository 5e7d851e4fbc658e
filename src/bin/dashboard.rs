//! Runs the dashboard sequence once against a running aggregator and prints
//! whatever panels ended up visible.

use dotenvy::dotenv;
use std::{env, process::ExitCode, time::Duration};

use country_dashboard::client::{api::HttpDashboardApi, orchestrator::Orchestrator};
use country_dashboard::utils::logging::init_dashboard_logger;

#[tokio::main]
async fn main() -> Result<ExitCode, anyhow::Error> {
    dotenv().ok();
    init_dashboard_logger();

    let base_url = env::var("DASHBOARD_API_URL").unwrap_or_else(|_| "http://localhost:3000".into());
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;

    let mut orchestrator = Orchestrator::new(HttpDashboardApi::new(http, base_url));
    let outcome = orchestrator.run().await;
    print!("{}", orchestrator.dashboard());

    Ok(if outcome.is_ok() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
