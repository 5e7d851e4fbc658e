use tracing::{debug, warn};

use super::api::{ClientError, DashboardApi};
use super::dashboard::{
    render_country, render_currency_unavailable, render_exchange, render_news, render_user,
    Dashboard,
};

/// Runs user → country → exchange → news, one call at a time, revealing
/// each panel as its step succeeds. The first failure stops the sequence;
/// panels already shown stay shown.
///
/// `run` takes `&mut self`, so a second sequence cannot start on the same
/// orchestrator while one is still in flight.
pub struct Orchestrator<A> {
    api: A,
    dashboard: Dashboard,
}

impl<A: DashboardApi> Orchestrator<A> {
    pub fn new(api: A) -> Self {
        Self { api, dashboard: Dashboard::default() }
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub async fn run(&mut self) -> Result<(), ClientError> {
        self.dashboard.reset();
        let res = steps(&self.api, &mut self.dashboard).await;
        match &res {
            Ok(()) => self.dashboard.status.clear(),
            Err(e) => {
                warn!(error = %e, "dashboard sequence aborted");
                self.dashboard.status = format!("Error: {e}");
            }
        }
        res
    }
}

async fn steps<A: DashboardApi>(api: &A, d: &mut Dashboard) -> Result<(), ClientError> {
    d.status = "Loading the user...".into();
    let user = api.random_user().await?;
    d.user.show(render_user(&user));

    d.status = "Loading country info...".into();
    let country = api.country(&user.country).await?;
    d.country.show(render_country(&country));

    d.status = "Loading exchange rates...".into();
    match country.base_currency() {
        None => {
            debug!(country = %user.country, "no currency, skipping exchange");
            d.exchange.show(render_currency_unavailable());
        }
        Some(base) => {
            let quote = api.exchange(base).await?;
            d.exchange.show(render_exchange(&quote));
        }
    }

    d.status = "Loading news...".into();
    let news = api.news(&user.country).await?;
    d.news.show(render_news(&news));

    Ok(())
}
