//! Advisory pipeline shared by the ask and chat endpoints
//!
//! Runs the strictly sequential provider chain: location (hard failure),
//! then weather, alert, classification and details. Degraded providers are
//! carried through as `Sourced` values rather than surfacing errors.

use crate::config::AppConfig;
use crate::models::{BeachDetails, Coordinates, SafetyVerdict, Sourced, WeatherSnapshot};
use crate::{Result, alert, location, narrative, safety, weather};
use tracing::info;

/// Everything gathered for one beach advisory
#[derive(Debug, Clone)]
pub struct Advisory {
    /// Resolved beach name (lowercase)
    pub beach: String,
    pub coordinates: Coordinates,
    pub weather: Sourced<WeatherSnapshot>,
    pub alert: Sourced<bool>,
    pub verdict: SafetyVerdict,
    pub details: Sourced<BeachDetails>,
}

impl Advisory {
    /// Beach name for display ("marina beach" -> "Marina Beach")
    #[must_use]
    pub fn display_name(&self) -> String {
        narrative::title_case(&self.beach)
    }
}

/// Build an advisory for an already-resolved beach name.
///
/// Fails only when the beach cannot be located; every downstream provider
/// degrades to a fallback value instead.
pub async fn build(
    config: &AppConfig,
    client: &reqwest::Client,
    beach: &str,
) -> Result<Advisory> {
    let coordinates = location::resolve(config, client, beach).await?;

    let weather = weather::current_conditions(config, client, coordinates).await;
    let alert = alert::tsunami_alert(config, client).await;
    let verdict = safety::classify(weather.get().wind_speed, *alert.get(), beach);
    let details = crate::details::beach_details(config, client, beach).await;

    info!(
        "Advisory for '{}': {} ({}){}",
        beach,
        verdict.status,
        verdict.color,
        if weather.is_fallback() || alert.is_fallback() || details.is_fallback() {
            " [degraded]"
        } else {
            ""
        }
    );

    Ok(Advisory {
        beach: beach.to_string(),
        coordinates,
        weather,
        alert,
        verdict,
        details,
    })
}
