//! Narrative composer for advisory responses
//!
//! Assembles the deterministic text blocks returned by the API. These
//! templates are the canonical answer; the optional language-model rewrite
//! only ever replaces them when it succeeds.

use crate::models::{BeachDetails, SafetyVerdict, WeatherSnapshot};

/// Hotspots shown in the long-form answer
const HOTSPOT_LIMIT: usize = 3;
/// Safety rules shown in the long-form answer
const SAFETY_RULE_LIMIT: usize = 4;

/// Fixed water-quality note appended to every advisory
pub const WATER_QUALITY_NOTE: &str =
    "Baseline coastal water quality monitored under NWMP guidelines.";

/// Short water-quality blurb used by the chat endpoint
pub const WATER_DETAILS: &str =
    "Baseline coastal water quality (NWMP) with current weather check";

/// Compose the long-form, multi-section advisory text.
#[must_use]
pub fn compose_answer(
    beach: &str,
    verdict: SafetyVerdict,
    weather: &WeatherSnapshot,
    details: &BeachDetails,
) -> String {
    let hotspots = bullet_list(&details.hotspots, HOTSPOT_LIMIT);
    let safety_rules = bullet_list(&details.safety_rules, SAFETY_RULE_LIMIT);

    format!(
        "**{title}** - Status: **{status}**\n\
         \n\
         🌡️ **Current Weather:**\n\
         - Temperature: {temp}°C (Min: {min}°C, Max: {max}°C)\n\
         - Wind Speed: {wind} km/h\n\
         \n\
         📍 **Famous For:**\n\
         {famous_for}\n\
         \n\
         🏖️ **Hotspots:**\n\
         {hotspots}\n\
         \n\
         ⚠️ **Safety Rules:**\n\
         {safety_rules}\n\
         \n\
         🕐 **Best Time to Visit:**\n\
         {best_time}\n\
         \n\
         📊 **Water Quality:**\n\
         {water_quality}\n",
        title = title_case(beach),
        status = verdict.status,
        temp = WeatherSnapshot::metric(weather.temperature),
        min = WeatherSnapshot::metric(weather.temperature_min),
        max = WeatherSnapshot::metric(weather.temperature_max),
        wind = WeatherSnapshot::metric(weather.wind_speed),
        famous_for = details.famous_for,
        hotspots = hotspots,
        safety_rules = safety_rules,
        best_time = details.best_time,
        water_quality = WATER_QUALITY_NOTE,
    )
}

/// Compose the one-line reply used by the chat endpoint.
#[must_use]
pub fn compose_reply(beach: &str, verdict: SafetyVerdict, weather: &WeatherSnapshot) -> String {
    format!(
        "{} is currently {}. Temperature is around {}°C with wind speed of {} km/h. \
         Visitors should follow safety rules.",
        title_case(beach),
        verdict.status,
        WeatherSnapshot::metric(weather.temperature),
        WeatherSnapshot::metric(weather.wind_speed),
    )
}

/// Uppercase the first letter of every word ("marina beach" -> "Marina Beach")
#[must_use]
pub fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn bullet_list(items: &[String], limit: usize) -> String {
    items
        .iter()
        .take(limit)
        .map(|item| format!("• {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}
