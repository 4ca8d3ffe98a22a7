//! Beach Name Resolution Module
//!
//! Turns free-text questions like "what are the safety rules for kovalam"
//! into a candidate beach name. Stop-words are filtered on word boundaries
//! so names that merely contain a stop-word substring are left intact.

use crate::CoastwatchError;
use tracing::debug;

/// Filler words stripped from questions before the name lookup
const STOP_WORDS: &[&str] = &[
    "safety",
    "rules",
    "regulations",
    "guidelines",
    "hotspots",
    "what",
    "is",
    "are",
    "the",
    "about",
    "tell",
    "me",
];

/// Resolve free-text input into a candidate beach name.
///
/// The output is lowercase, whitespace-normalized and always contains the
/// word "beach". It is a best-effort candidate, not guaranteed to resolve
/// to a real place. Resolution is idempotent.
pub fn resolve_beach_name(input: &str) -> Result<String, CoastwatchError> {
    if input.trim().is_empty() {
        return Err(CoastwatchError::validation("beach name cannot be empty"));
    }

    let lowered: String = input
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    let mut tokens: Vec<&str> = lowered
        .split_whitespace()
        .filter(|word| !STOP_WORDS.contains(word))
        .collect();

    if !tokens.contains(&"beach") {
        tokens.push("beach");
    }

    let name = tokens.join(" ");
    debug!("Resolved beach name '{}' from input '{}'", name, input);
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_beach_when_absent() {
        assert_eq!(resolve_beach_name("kovalam").unwrap(), "kovalam beach");
    }

    #[test]
    fn test_keeps_existing_beach_word() {
        assert_eq!(resolve_beach_name("Marina Beach").unwrap(), "marina beach");
    }

    #[test]
    fn test_strips_stop_words() {
        assert_eq!(
            resolve_beach_name("what are the safety rules for marina beach?").unwrap(),
            "for marina beach"
        );
        assert_eq!(
            resolve_beach_name("tell me about goa beach hotspots").unwrap(),
            "goa beach"
        );
    }

    #[test]
    fn test_stop_word_substrings_do_not_corrupt_names() {
        // "puthenthope" contains "the"; token filtering must leave it alone.
        assert_eq!(
            resolve_beach_name("the puthenthope beach").unwrap(),
            "puthenthope beach"
        );
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let once = resolve_beach_name("What is Kovalam beach?").unwrap();
        let twice = resolve_beach_name(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(resolve_beach_name("   ").is_err());
    }

    #[test]
    fn test_all_stop_word_input_still_yields_beach() {
        assert_eq!(resolve_beach_name("what is the").unwrap(), "beach");
    }
}
