//! Data bridge — background network tasks feeding the TUI action loop.
//!
//! The fetch task issues the one startup (or reload) request against the
//! content API and forwards the outcome as an [`Action`]. Cancellation
//! guards against a late response mutating state after shutdown.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use atelier_api::{ContactForm, RelayClient, SiteClient, TransportConfig};
use atelier_config::Config;

use crate::action::Action;

fn transport(cfg: &Config) -> TransportConfig {
    TransportConfig::default().with_timeout(std::time::Duration::from_secs(cfg.site.timeout))
}

/// Fetch the site's post list once and report the outcome.
///
/// Sends [`Action::PostsLoaded`] or [`Action::FetchFailed`]; sends nothing
/// if cancelled first, so a stale response can't touch state the user has
/// already navigated away from.
pub async fn fetch_posts(
    cfg: Config,
    action_tx: mpsc::UnboundedSender<Action>,
    cancel: CancellationToken,
) {
    let client = match SiteClient::new(&cfg.site.domain, &transport(&cfg)) {
        Ok(c) => c,
        Err(e) => {
            warn!(error = %e, "could not build content client");
            let _ = action_tx.send(Action::FetchFailed(e.to_string()));
            return;
        }
    };

    debug!(site = %cfg.site.domain, "fetching portfolio");

    tokio::select! {
        () = cancel.cancelled() => {
            debug!("fetch cancelled before completion");
        }
        result = client.list_posts(cfg.site.per_page) => {
            let action = match result {
                Ok(posts) => Action::PostsLoaded(posts),
                Err(e) => {
                    warn!(error = %e, "portfolio fetch failed");
                    Action::FetchFailed(e.to_string())
                }
            };
            let _ = action_tx.send(action);
        }
    }
}

/// Submit the contact form through the relay and report the outcome.
///
/// One attempt, never retried here; the form screen decides what to do
/// with a failure.
pub async fn submit_contact(
    cfg: Config,
    form: ContactForm,
    action_tx: mpsc::UnboundedSender<Action>,
) {
    let client = match RelayClient::new(&cfg.relay.endpoint, &transport(&cfg)) {
        Ok(c) => c,
        Err(e) => {
            let _ = action_tx.send(Action::ContactFailed(e.to_string()));
            return;
        }
    };

    match client
        .send_form(&cfg.relay.service_id, &cfg.relay.template_id, &form)
        .await
    {
        Ok(()) => {
            let _ = action_tx.send(Action::ContactSent);
        }
        Err(e) => {
            warn!(error = %e, "contact relay failed");
            let _ = action_tx.send(Action::ContactFailed(e.to_string()));
        }
    }
}
