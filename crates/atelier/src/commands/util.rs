//! Shared helpers for command handlers.

use std::time::Duration;

use atelier_api::{SiteClient, TransportConfig};
use atelier_config::Config;
use atelier_core::Portfolio;
use tracing::debug;

use crate::cli::GlobalOpts;
use crate::error::{CliError, from_core};
use crate::output;

/// Resolve config with CLI flag overrides applied.
pub fn resolved_config(global: &GlobalOpts) -> Result<Config, CliError> {
    let mut cfg = atelier_config::load_config()?;
    if let Some(site) = &global.site {
        cfg.site.domain.clone_from(site);
    }
    if let Some(timeout) = global.timeout {
        cfg.site.timeout = timeout;
    }
    Ok(cfg)
}

/// Build the transport from config.
pub fn transport(cfg: &Config) -> TransportConfig {
    TransportConfig::default().with_timeout(Duration::from_secs(cfg.site.timeout))
}

/// Fetch and curate the portfolio, with a loading note around the call.
pub async fn load_portfolio(cfg: &Config, global: &GlobalOpts) -> Result<Portfolio, CliError> {
    let client = SiteClient::new(&cfg.site.domain, &transport(cfg))
        .map_err(|e| from_core(e.into(), &cfg.site.domain))?;

    output::status_note(&format!("Loading {} ...", cfg.site.domain), global.quiet);

    let mut portfolio = Portfolio::new();
    let result = portfolio.load(&client, cfg.site.per_page).await;
    output::status_note("done", global.quiet);

    let count = result.map_err(|e| from_core(e, &cfg.site.domain))?;
    debug!(count, "collections loaded");
    Ok(portfolio)
}
