//! HTTP API surface: liveness, ask and chat endpoints
//!
//! Every endpoint answers HTTP 200; failures the user can act on are
//! reported as an `{"error": ...}` body rather than a status code.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::AppConfig;
use crate::models::{BeachDetails, SafetyStatus, StatusColor, WeatherSnapshot};
use crate::{CoastwatchError, advisory, llm, narrative, resolver};

/// Sources cited on a full advisory answer
const ADVISORY_SOURCES: [&str; 3] = ["Wikipedia", "Open-Meteo Weather", "INCOIS"];

/// Shared state passed to every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    /// Build the state and its outbound HTTP client from configuration
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http.timeout_seconds))
            .user_agent(config.http.user_agent.clone())
            .build()?;
        Ok(Self {
            config: Arc::new(config),
            http,
        })
    }
}

#[derive(Deserialize)]
struct AskRequest {
    #[serde(default)]
    question: String,
}

#[derive(Deserialize)]
struct ChatRequest {
    #[serde(default)]
    message: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
    timestamp: DateTime<Utc>,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Serialize)]
struct AskResponse {
    answer: String,
    sources: Vec<&'static str>,
    beach: String,
    status: SafetyStatus,
    color: StatusColor,
    lat: f64,
    lon: f64,
}

/// Answer served from the language model when no location resolves
#[derive(Serialize)]
struct KnowledgeAnswer {
    answer: String,
    sources: Vec<&'static str>,
}

#[derive(Serialize)]
struct ChatResponse {
    beach: String,
    status: SafetyStatus,
    color: StatusColor,
    weather: WeatherSnapshot,
    lat: f64,
    lon: f64,
    water_details: &'static str,
    famous_for: String,
    hotspots: Vec<String>,
    safety_rules: Vec<String>,
    best_time: String,
    reply: String,
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/ask", post(ask))
        .route("/chat", post(chat))
        .with_state(state)
}

fn error_reply(message: impl Into<String>) -> Response {
    Json(ErrorResponse {
        error: message.into(),
    })
    .into_response()
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "running",
        message: "Beach Safety API is running!",
        timestamp: Utc::now(),
    })
}

async fn ask(State(state): State<AppState>, Json(request): Json<AskRequest>) -> Response {
    let question = request.question.trim();
    if question.is_empty() {
        return error_reply("Please enter a question about a beach");
    }

    let beach = match resolver::resolve_beach_name(question) {
        Ok(beach) => beach,
        Err(e) => return error_reply(e.user_message()),
    };

    let advisory = match advisory::build(&state.config, &state.http, &beach).await {
        Ok(advisory) => advisory,
        Err(e @ CoastwatchError::LocationNotFound { .. }) => {
            // Fall back to general knowledge for questions about beaches we
            // cannot pin on the map.
            let prompt = format!("Answer this question about Indian beaches: {question}");
            if let Some(answer) = llm::rewrite(&state.config, &state.http, &prompt).await {
                return Json(KnowledgeAnswer {
                    answer,
                    sources: vec!["AI Knowledge Base"],
                })
                .into_response();
            }
            return error_reply(e.user_message());
        }
        Err(e) => return error_reply(e.user_message()),
    };

    let templated = narrative::compose_answer(
        &advisory.beach,
        advisory.verdict,
        advisory.weather.get(),
        advisory.details.get(),
    );
    let prompt =
        format!("Enhance this beach safety information in a friendly, helpful way: {templated}");
    let answer = llm::rewrite(&state.config, &state.http, &prompt)
        .await
        .unwrap_or(templated);

    Json(AskResponse {
        answer,
        sources: ADVISORY_SOURCES.to_vec(),
        beach: advisory.display_name(),
        status: advisory.verdict.status,
        color: advisory.verdict.color,
        lat: advisory.coordinates.latitude,
        lon: advisory.coordinates.longitude,
    })
    .into_response()
}

async fn chat(State(state): State<AppState>, Json(request): Json<ChatRequest>) -> Response {
    let message = request.message.trim();
    if message.is_empty() {
        return error_reply("Please enter a beach name");
    }

    let beach = match resolver::resolve_beach_name(message) {
        Ok(beach) => beach,
        Err(e) => return error_reply(e.user_message()),
    };

    let advisory = match advisory::build(&state.config, &state.http, &beach).await {
        Ok(advisory) => advisory,
        Err(e) => return error_reply(e.user_message()),
    };

    let templated =
        narrative::compose_reply(&advisory.beach, advisory.verdict, advisory.weather.get());
    let reply = llm::rewrite(&state.config, &state.http, &templated)
        .await
        .unwrap_or(templated);

    let details: &BeachDetails = advisory.details.get();
    Json(ChatResponse {
        beach: advisory.display_name(),
        status: advisory.verdict.status,
        color: advisory.verdict.color,
        weather: advisory.weather.get().clone(),
        lat: advisory.coordinates.latitude,
        lon: advisory.coordinates.longitude,
        water_details: narrative::WATER_DETAILS,
        famous_for: details.famous_for.clone(),
        hotspots: details.hotspots.iter().take(3).cloned().collect(),
        safety_rules: details.safety_rules.iter().take(4).cloned().collect(),
        best_time: details.best_time.clone(),
        reply,
    })
    .into_response()
}
