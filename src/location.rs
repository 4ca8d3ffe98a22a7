//! Location provider for beach names
//!
//! Resolves a beach name to coordinates, first through a static table of
//! well-known beaches and then through a geocoding query scoped to India.
//! Resolution failure is a hard error; the advisory pipeline cannot proceed
//! without coordinates.

use crate::config::AppConfig;
use crate::models::Coordinates;
use crate::{CoastwatchError, Result};
use serde::Deserialize;
use tracing::debug;

/// Well-known beaches with hard-coded coordinates (fast path, no network)
const BEACH_COORDS: &[(&str, Coordinates)] = &[
    ("marina beach", Coordinates::new(13.0500, 80.2824)),
    ("kovalam beach", Coordinates::new(8.4000, 76.9780)),
    ("goa beach", Coordinates::new(15.2993, 74.1240)),
    ("puri beach", Coordinates::new(19.7983, 85.8245)),
];

/// First result returned by a Nominatim-compatible geocoder.
/// Nominatim encodes coordinates as strings.
#[derive(Debug, Deserialize)]
struct GeocoderPlace {
    lat: String,
    lon: String,
}

/// Resolve a beach name to coordinates.
///
/// Checks the static table first, then issues a single geocoding query for
/// `"{name}, India"` and takes the first result. Any transport error, empty
/// result list or unparsable coordinate maps to
/// [`CoastwatchError::LocationNotFound`].
pub async fn resolve(
    config: &AppConfig,
    client: &reqwest::Client,
    beach: &str,
) -> Result<Coordinates> {
    if let Some(coordinates) = static_coordinates(beach) {
        debug!("Using static coordinates for '{}'", beach);
        return Ok(coordinates);
    }
    geocode(config, client, beach).await
}

fn static_coordinates(beach: &str) -> Option<Coordinates> {
    BEACH_COORDS
        .iter()
        .find(|(name, _)| *name == beach)
        .map(|(_, coordinates)| *coordinates)
}

async fn geocode(
    config: &AppConfig,
    client: &reqwest::Client,
    beach: &str,
) -> Result<Coordinates> {
    let query = format!("{beach}, India");
    let url = format!(
        "{}/search?q={}&format=json&limit=1",
        config.endpoints.geocoder_base,
        urlencoding::encode(&query)
    );
    debug!("Geocoding '{}' via {}", query, url);

    let not_found = || CoastwatchError::location_not_found(beach);

    let response = client.get(&url).send().await.map_err(|e| {
        debug!("Geocoding request failed: {}", e);
        not_found()
    })?;

    if !response.status().is_success() {
        debug!("Geocoder returned status {}", response.status());
        return Err(not_found());
    }

    let places: Vec<GeocoderPlace> = response.json().await.map_err(|e| {
        debug!("Failed to parse geocoder response: {}", e);
        not_found()
    })?;

    let place = places.into_iter().next().ok_or_else(not_found)?;
    let latitude: f64 = place.lat.parse().map_err(|_| not_found())?;
    let longitude: f64 = place.lon.parse().map_err(|_| not_found())?;

    debug!(
        "Geocoded '{}' to ({:.4}, {:.4})",
        beach, latitude, longitude
    );
    Ok(Coordinates::new(latitude, longitude))
}
