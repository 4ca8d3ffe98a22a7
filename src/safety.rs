//! Safety classifier for beach conditions
//!
//! Pure decision logic with no I/O. This is the only branching logic in the
//! advisory pipeline and carries the bulk of the unit test coverage.

use crate::models::SafetyVerdict;

/// Wind speed in km/h above which conditions are flagged as caution
pub const WIND_CAUTION_KMH: f64 = 12.0;

/// Classify beach conditions into a safety verdict.
///
/// Rules, in priority order:
/// 1. an active tsunami alert is always NOT SUITABLE / RED;
/// 2. wind above [`WIND_CAUTION_KMH`] is CAUTION / YELLOW;
/// 3. Marina Beach carries a standing caution for its strong rip currents;
/// 4. everything else is SUITABLE / GREEN.
///
/// A missing wind reading is treated as calm (0 km/h).
#[must_use]
pub fn classify(wind_kmh: Option<f64>, alert: bool, beach_name: &str) -> SafetyVerdict {
    if alert {
        return SafetyVerdict::NOT_SUITABLE;
    }

    let wind = wind_kmh.unwrap_or(0.0);
    if wind > WIND_CAUTION_KMH {
        return SafetyVerdict::CAUTION;
    }

    if beach_name.contains("marina") {
        return SafetyVerdict::CAUTION;
    }

    SafetyVerdict::SUITABLE
}
