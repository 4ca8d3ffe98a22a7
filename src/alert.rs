//! Tsunami alert provider
//!
//! Checks the configured bulletin page for an active warning marker. The
//! check is fail-open: when the bulletin cannot be fetched the provider
//! reports "no alert" as a fallback value. Whether failure should instead
//! be treated as an active alert is an open product question.

use crate::config::AppConfig;
use crate::models::Sourced;
use crate::{CoastwatchError, Result};
use tracing::{debug, warn};

/// Marker looked for case-insensitively in the bulletin body
const ALERT_MARKER: &str = "WARNING";

/// Check whether the tsunami bulletin currently carries a warning.
pub async fn tsunami_alert(config: &AppConfig, client: &reqwest::Client) -> Sourced<bool> {
    match fetch(config, client).await {
        Ok(active) => {
            debug!("Tsunami bulletin checked, alert active: {}", active);
            Sourced::Live(active)
        }
        Err(e) => {
            warn!("Tsunami bulletin unavailable ({}), assuming no alert", e);
            Sourced::Fallback(false)
        }
    }
}

async fn fetch(config: &AppConfig, client: &reqwest::Client) -> Result<bool> {
    let response = client
        .get(&config.endpoints.alert_bulletin_url)
        .send()
        .await
        .map_err(|e| CoastwatchError::api(format!("bulletin request failed: {e}")))?;

    if !response.status().is_success() {
        return Err(CoastwatchError::api(format!(
            "bulletin returned status {}",
            response.status()
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| CoastwatchError::api(format!("bulletin body unreadable: {e}")))?;

    Ok(contains_marker(&body))
}

fn contains_marker(body: &str) -> bool {
    body.to_uppercase().contains(ALERT_MARKER)
}
