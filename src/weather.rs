//! Weather provider backed by the Open-Meteo forecast API
//!
//! Fetches current conditions and today's temperature range for a
//! coordinate pair. The provider degrades rather than fails: any transport
//! or parse error yields a snapshot with every field set to the unavailable
//! sentinel.

use crate::config::AppConfig;
use crate::models::{Coordinates, Sourced, WeatherSnapshot};
use crate::{CoastwatchError, Result};
use tracing::{debug, warn};

/// Fetch current conditions for a coordinate pair.
///
/// Always returns a complete snapshot; on failure the fields carry the
/// unavailable sentinel and the value is marked as a fallback.
pub async fn current_conditions(
    config: &AppConfig,
    client: &reqwest::Client,
    coordinates: Coordinates,
) -> Sourced<WeatherSnapshot> {
    match fetch(config, client, coordinates).await {
        Ok(snapshot) => Sourced::Live(snapshot),
        Err(e) => {
            warn!(
                "Weather lookup failed for ({:.4}, {:.4}): {}, serving unavailable snapshot",
                coordinates.latitude, coordinates.longitude, e
            );
            Sourced::Fallback(WeatherSnapshot::unavailable())
        }
    }
}

async fn fetch(
    config: &AppConfig,
    client: &reqwest::Client,
    coordinates: Coordinates,
) -> Result<WeatherSnapshot> {
    let url = format!(
        "{}/v1/forecast?latitude={}&longitude={}&daily=temperature_2m_max,temperature_2m_min&current_weather=true&timezone=auto",
        config.endpoints.weather_base, coordinates.latitude, coordinates.longitude
    );
    debug!("Open-Meteo request URL: {}", url);

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| CoastwatchError::api(format!("weather request failed: {e}")))?;

    if !response.status().is_success() {
        return Err(CoastwatchError::api(format!(
            "weather service returned status {}",
            response.status()
        )));
    }

    let forecast: openmeteo::ForecastResponse = response
        .json()
        .await
        .map_err(|e| CoastwatchError::api(format!("invalid weather response: {e}")))?;

    Ok(WeatherSnapshot::from(&forecast))
}

/// `OpenMeteo` API response structures and conversion utilities
mod openmeteo {
    use crate::models::WeatherSnapshot;
    use serde::Deserialize;

    /// Current weather and daily forecast response from `OpenMeteo`
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub current_weather: Option<CurrentWeather>,
        pub daily: Option<DailyData>,
    }

    /// Current conditions block (`current_weather=true`)
    #[derive(Debug, Deserialize)]
    pub struct CurrentWeather {
        pub temperature: f64,
        /// Wind speed in km/h (Open-Meteo default unit)
        pub windspeed: f64,
    }

    /// Daily aggregates, one entry per forecast day starting today
    #[derive(Debug, Deserialize)]
    pub struct DailyData {
        #[serde(rename = "temperature_2m_max")]
        pub temperature_max: Vec<Option<f64>>,
        #[serde(rename = "temperature_2m_min")]
        pub temperature_min: Vec<Option<f64>>,
    }

    impl From<&ForecastResponse> for WeatherSnapshot {
        fn from(response: &ForecastResponse) -> Self {
            let current = response.current_weather.as_ref();
            let daily = response.daily.as_ref();
            Self {
                temperature: current.map(|c| c.temperature),
                wind_speed: current.map(|c| c.windspeed),
                temperature_min: daily
                    .and_then(|d| d.temperature_min.first().copied().flatten()),
                temperature_max: daily
                    .and_then(|d| d.temperature_max.first().copied().flatten()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::openmeteo::ForecastResponse;
    use crate::models::WeatherSnapshot;

    const FIXTURE: &str = r#"{
        "latitude": 13.05,
        "longitude": 80.2824,
        "timezone": "Asia/Kolkata",
        "current_weather": {
            "temperature": 29.4,
            "windspeed": 14.8,
            "winddirection": 120,
            "weathercode": 1,
            "time": "2024-06-01T09:00"
        },
        "daily": {
            "time": ["2024-06-01", "2024-06-02"],
            "temperature_2m_max": [33.1, 32.8],
            "temperature_2m_min": [26.5, 26.2]
        }
    }"#;

    #[test]
    fn test_snapshot_from_forecast_response() {
        let response: ForecastResponse = serde_json::from_str(FIXTURE).unwrap();
        let snapshot = WeatherSnapshot::from(&response);
        assert_eq!(snapshot.temperature, Some(29.4));
        assert_eq!(snapshot.wind_speed, Some(14.8));
        assert_eq!(snapshot.temperature_min, Some(26.5));
        assert_eq!(snapshot.temperature_max, Some(33.1));
    }

    #[test]
    fn test_missing_blocks_become_sentinels() {
        let response: ForecastResponse =
            serde_json::from_str(r#"{"latitude": 0.0, "longitude": 0.0}"#).unwrap();
        let snapshot = WeatherSnapshot::from(&response);
        assert_eq!(snapshot, WeatherSnapshot::unavailable());
    }

    #[test]
    fn test_empty_daily_arrays_are_tolerated() {
        let body = r#"{
            "current_weather": {"temperature": 31.0, "windspeed": 6.0},
            "daily": {"temperature_2m_max": [], "temperature_2m_min": []}
        }"#;
        let response: ForecastResponse = serde_json::from_str(body).unwrap();
        let snapshot = WeatherSnapshot::from(&response);
        assert_eq!(snapshot.temperature, Some(31.0));
        assert_eq!(snapshot.temperature_min, None);
        assert_eq!(snapshot.temperature_max, None);
    }
}
