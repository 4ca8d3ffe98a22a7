//! Detail enricher backed by encyclopedia pages
//!
//! Fetches the encyclopedia article for a beach and mines its opening
//! paragraphs for descriptive details with keyword heuristics. Extraction
//! is deliberately shallow: the first four paragraphs only, first-sentence
//! truncation, and a fixed keyword list. Any failure falls back to the
//! pre-seeded defaults.

use crate::config::AppConfig;
use crate::models::{BeachDetails, Sourced};
use crate::{CoastwatchError, Result};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Number of leading paragraphs considered
const PARAGRAPH_LIMIT: usize = 4;

/// Season substituted when an article mentions the monsoon
const MONSOON_BEST_TIME: &str = "October to March";

const HOTSPOT_KEYWORDS: &[&str] = &["lighthouse", "promenade", "tourist"];
const SAFETY_KEYWORDS: &[&str] = &["swim", "current", "unsafe"];

static PARAGRAPH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<p[^>]*>(.*?)</p>").expect("valid paragraph regex"));
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<[^>]+>").expect("valid tags regex"));

/// Fetch descriptive details for a beach, falling back to defaults on any
/// failure.
pub async fn beach_details(
    config: &AppConfig,
    client: &reqwest::Client,
    beach: &str,
) -> Sourced<BeachDetails> {
    match fetch(config, client, beach).await {
        Ok(details) => Sourced::Live(details),
        Err(e) => {
            warn!(
                "Detail lookup failed for '{}': {}, using defaults",
                beach, e
            );
            Sourced::Fallback(BeachDetails::default())
        }
    }
}

async fn fetch(
    config: &AppConfig,
    client: &reqwest::Client,
    beach: &str,
) -> Result<BeachDetails> {
    let slug = beach.replace(' ', "_");
    let url = format!("{}/wiki/{}", config.endpoints.encyclopedia_base, slug);
    debug!("Fetching encyclopedia page {}", url);

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| CoastwatchError::api(format!("encyclopedia request failed: {e}")))?;

    if !response.status().is_success() {
        return Err(CoastwatchError::api(format!(
            "encyclopedia returned status {}",
            response.status()
        )));
    }

    let html = response
        .text()
        .await
        .map_err(|e| CoastwatchError::api(format!("encyclopedia body unreadable: {e}")))?;

    Ok(extract_details(&html))
}

/// Mine the leading paragraphs of an article for beach details.
pub(crate) fn extract_details(html: &str) -> BeachDetails {
    let paragraphs = leading_paragraphs(html, PARAGRAPH_LIMIT);
    let mut details = BeachDetails::default();

    if let Some(first) = paragraphs.first() {
        let lead = first_sentence(first);
        if !lead.is_empty() {
            details.famous_for = lead;
        }
    }

    for paragraph in &paragraphs {
        let lower = paragraph.to_lowercase();
        if HOTSPOT_KEYWORDS.iter().any(|k| lower.contains(k)) {
            details.hotspots.push(first_sentence(paragraph));
        }
        if SAFETY_KEYWORDS.iter().any(|k| lower.contains(k)) {
            details.safety_rules.push(first_sentence(paragraph));
        }
        if lower.contains("monsoon") {
            details.best_time = MONSOON_BEST_TIME.to_string();
        }
    }

    details
}

/// Extract up to `limit` non-empty paragraph texts from the page body
fn leading_paragraphs(html: &str, limit: usize) -> Vec<String> {
    PARAGRAPH_RE
        .captures_iter(html)
        .filter_map(|cap| cap.get(1).map(|m| clean_text(m.as_str())))
        .filter(|text| !text.is_empty())
        .take(limit)
        .collect()
}

/// Truncate a paragraph to its first sentence
fn first_sentence(text: &str) -> String {
    text.split('.').next().unwrap_or(text).trim().to_string()
}

fn clean_text(input: &str) -> String {
    let no_tags = TAG_RE.replace_all(input, " ");
    no_tags.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"
        <html><body>
        <p>Marina Beach is a natural urban beach along the Bay of Bengal. It is
        the longest natural urban beach in India.</p>
        <p>The <a href="/wiki/Madras_Lighthouse">lighthouse</a> at the southern
        end is a popular tourist attraction. Visitors gather there at dusk.</p>
        <p>Swimming is dangerous here because of strong rip currents. Bathing
        is prohibited along most of the stretch.</p>
        <p>The region receives most of its rain during the northeast monsoon
        season. Rainfall peaks in November.</p>
        <p>This fifth paragraph mentions a promenade but is past the limit.</p>
        </body></html>
    "#;

    #[test]
    fn test_famous_for_is_first_sentence_of_lead() {
        let details = extract_details(FIXTURE);
        assert_eq!(
            details.famous_for,
            "Marina Beach is a natural urban beach along the Bay of Bengal"
        );
    }

    #[test]
    fn test_hotspot_and_safety_paragraphs_are_collected() {
        let details = extract_details(FIXTURE);
        // Defaults stay in place, heuristic matches are appended.
        assert_eq!(details.hotspots[0], "Local shoreline");
        assert!(details.hotspots[1].contains("lighthouse"));
        assert_eq!(details.safety_rules[0], "Follow local advisories");
        assert!(
            details.safety_rules[2].contains("rip currents"),
            "expected a mined safety rule, got {:?}",
            details.safety_rules
        );
    }

    #[test]
    fn test_monsoon_mention_overrides_best_time() {
        let details = extract_details(FIXTURE);
        assert_eq!(details.best_time, "October to March");
    }

    #[test]
    fn test_only_leading_paragraphs_are_considered() {
        let details = extract_details(FIXTURE);
        // The promenade mention in paragraph five must not contribute.
        assert!(!details.hotspots.iter().any(|h| h.contains("promenade")));
    }

    #[test]
    fn test_empty_page_keeps_defaults() {
        let details = extract_details("<html><body></body></html>");
        assert_eq!(details, BeachDetails::default());
    }

    #[test]
    fn test_clean_text_strips_tags_and_collapses_whitespace() {
        let cleaned = clean_text("A <b>bold</b>\n  statement.");
        assert_eq!(cleaned, "A bold statement.");
    }
}
