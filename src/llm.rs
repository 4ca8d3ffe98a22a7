//! Optional language-model rewrite client
//!
//! Sends a prompt to an OpenAI-compatible chat completion endpoint and
//! returns the rewritten text. This is best-effort enrichment: a missing
//! credential, transport error, non-success status or unparsable body all
//! yield `None` and the caller keeps its templated text.

use crate::config::AppConfig;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, warn};

const SYSTEM_PROMPT: &str = "You are a beach safety assistant.";

/// Rewrite a prompt through the configured completion endpoint.
///
/// Returns `None` when the rewrite is unavailable for any reason.
pub async fn rewrite(config: &AppConfig, client: &reqwest::Client, prompt: &str) -> Option<String> {
    let api_key = config.llm.api_key.as_deref()?;

    let prompt: String = prompt.chars().take(config.llm.max_prompt_chars).collect();
    let body = json!({
        "model": config.llm.model,
        "messages": [
            { "role": "system", "content": SYSTEM_PROMPT },
            { "role": "user", "content": prompt }
        ],
        "max_tokens": config.llm.max_tokens,
        "temperature": config.llm.temperature
    });

    let response = client
        .post(format!("{}/chat/completions", config.endpoints.llm_base))
        .bearer_auth(api_key)
        .timeout(Duration::from_secs(config.llm.timeout_seconds))
        .json(&body)
        .send()
        .await
        .inspect_err(|e| warn!("LLM request failed: {}", e))
        .ok()?;

    if !response.status().is_success() {
        warn!("LLM endpoint returned status {}", response.status());
        return None;
    }

    let body: Value = response
        .json()
        .await
        .inspect_err(|e| warn!("LLM response unreadable: {}", e))
        .ok()?;

    let content = extract_content(&body)?;
    debug!("LLM rewrite produced {} chars", content.len());
    Some(content)
}

fn extract_content(body: &Value) -> Option<String> {
    body.get("choices")
        .and_then(Value::as_array)
        .and_then(|choices| choices.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}
