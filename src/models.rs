//! Data models for beach advisories and provider responses
//!
//! This module contains the structures shared across the advisory pipeline:
//! coordinates, weather snapshots, safety verdicts, encyclopedia-derived
//! beach details, and the `Sourced` wrapper that distinguishes live provider
//! data from substituted fallback values.

use serde::{Deserialize, Serialize, Serializer};

/// Latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Coordinates {
    /// Create a new coordinate pair
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Wrapper distinguishing live provider data from fallback values.
///
/// Degrading providers never fail outright; they return `Fallback` carrying
/// the substitute value so callers can still see that the upstream call did
/// not succeed.
#[derive(Debug, Clone, PartialEq)]
pub enum Sourced<T> {
    /// Value fetched from the upstream service
    Live(T),
    /// Substitute value used because the upstream call failed
    Fallback(T),
}

impl<T> Sourced<T> {
    /// Borrow the inner value regardless of provenance
    pub fn get(&self) -> &T {
        match self {
            Sourced::Live(value) | Sourced::Fallback(value) => value,
        }
    }

    /// Consume the wrapper and return the inner value
    pub fn into_inner(self) -> T {
        match self {
            Sourced::Live(value) | Sourced::Fallback(value) => value,
        }
    }

    /// True when the value was substituted after an upstream failure
    pub fn is_fallback(&self) -> bool {
        matches!(self, Sourced::Fallback(_))
    }
}

/// Snapshot of current conditions at a coordinate pair.
///
/// Fields are `None` when the upstream call failed or omitted the value;
/// they serialize as the string `"N/A"` so degraded payloads keep the same
/// shape as healthy ones.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherSnapshot {
    /// Current temperature in Celsius
    #[serde(rename = "temp", serialize_with = "na_sentinel")]
    pub temperature: Option<f64>,
    /// Current wind speed in km/h
    #[serde(rename = "wind", serialize_with = "na_sentinel")]
    pub wind_speed: Option<f64>,
    /// Today's minimum temperature in Celsius
    #[serde(rename = "min", serialize_with = "na_sentinel")]
    pub temperature_min: Option<f64>,
    /// Today's maximum temperature in Celsius
    #[serde(rename = "max", serialize_with = "na_sentinel")]
    pub temperature_max: Option<f64>,
}

impl WeatherSnapshot {
    /// Snapshot with every field set to the unavailable sentinel
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            temperature: None,
            wind_speed: None,
            temperature_min: None,
            temperature_max: None,
        }
    }

    /// Format a metric for display, using "N/A" for missing values
    #[must_use]
    pub fn metric(value: Option<f64>) -> String {
        value.map_or_else(|| "N/A".to_string(), |v| format!("{v}"))
    }
}

fn na_sentinel<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => serializer.serialize_f64(*v),
        None => serializer.serialize_str("N/A"),
    }
}

/// Suitability classification for a beach visit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SafetyStatus {
    #[serde(rename = "SUITABLE")]
    Suitable,
    #[serde(rename = "CAUTION")]
    Caution,
    #[serde(rename = "NOT SUITABLE")]
    NotSuitable,
}

impl std::fmt::Display for SafetyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SafetyStatus::Suitable => write!(f, "SUITABLE"),
            SafetyStatus::Caution => write!(f, "CAUTION"),
            SafetyStatus::NotSuitable => write!(f, "NOT SUITABLE"),
        }
    }
}

/// Color tag paired with a safety status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatusColor {
    #[serde(rename = "GREEN")]
    Green,
    #[serde(rename = "YELLOW")]
    Yellow,
    #[serde(rename = "RED")]
    Red,
}

impl std::fmt::Display for StatusColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusColor::Green => write!(f, "GREEN"),
            StatusColor::Yellow => write!(f, "YELLOW"),
            StatusColor::Red => write!(f, "RED"),
        }
    }
}

/// Safety classification result: a status with its color tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafetyVerdict {
    pub status: SafetyStatus,
    pub color: StatusColor,
}

impl SafetyVerdict {
    pub const SUITABLE: Self = Self {
        status: SafetyStatus::Suitable,
        color: StatusColor::Green,
    };
    pub const CAUTION: Self = Self {
        status: SafetyStatus::Caution,
        color: StatusColor::Yellow,
    };
    pub const NOT_SUITABLE: Self = Self {
        status: SafetyStatus::NotSuitable,
        color: StatusColor::Red,
    };
}

/// Descriptive details for a beach, seeded with generic defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BeachDetails {
    /// One-line description of what the beach is known for
    pub famous_for: String,
    /// Points of interest near the beach
    pub hotspots: Vec<String>,
    /// Safety advice for visitors
    pub safety_rules: Vec<String>,
    /// Recommended visiting window
    pub best_time: String,
}

impl Default for BeachDetails {
    fn default() -> Self {
        Self {
            famous_for: "Scenic coastal destination".to_string(),
            hotspots: vec!["Local shoreline".to_string()],
            safety_rules: vec![
                "Follow local advisories".to_string(),
                "Avoid swimming during rough sea".to_string(),
            ],
            best_time: "Morning and evening hours".to_string(),
        }
    }
}
