//! Configuration management for the `Coastwatch` service
//!
//! Configuration is built once at startup from environment variables and
//! passed explicitly into each provider. Every external base URL is
//! configurable so tests can point the providers at a local mock server.

use crate::CoastwatchError;
use anyhow::Result;

/// Root configuration for the `Coastwatch` service
#[derive(Clone)]
pub struct AppConfig {
    /// HTTP server settings
    pub server: ServerConfig,
    /// Logging settings
    pub logging: LoggingConfig,
    /// Outbound HTTP client settings
    pub http: HttpConfig,
    /// External service endpoints
    pub endpoints: EndpointConfig,
    /// Optional language-model rewrite settings
    pub llm: LlmConfig,
}

/// HTTP server settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind on
    pub port: u16,
}

/// Logging settings
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,
}

/// Outbound HTTP client settings
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Default request timeout in seconds
    pub timeout_seconds: u64,
    /// User-Agent header sent on every outbound request
    pub user_agent: String,
}

/// External service endpoints, all overridable via environment
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    /// Nominatim-compatible geocoder base URL
    pub geocoder_base: String,
    /// Open-Meteo-compatible forecast service base URL
    pub weather_base: String,
    /// Tsunami bulletin page URL
    pub alert_bulletin_url: String,
    /// Encyclopedia base URL (pages live under `/wiki/{name}`)
    pub encyclopedia_base: String,
    /// OpenAI-compatible completion endpoint base URL
    pub llm_base: String,
}

/// Language-model rewrite settings
#[derive(Clone)]
pub struct LlmConfig {
    /// API credential; the rewrite step is skipped when absent
    pub api_key: Option<String>,
    /// Model identifier
    pub model: String,
    /// Response token budget
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f64,
    /// Request timeout in seconds (longer than the default client timeout)
    pub timeout_seconds: u64,
    /// Hard limit on prompt length in characters
    pub max_prompt_chars: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("server", &self.server)
            .field("logging", &self.logging)
            .field("http", &self.http)
            .field("endpoints", &self.endpoints)
            .field(
                "llm_api_key",
                &self.llm.api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("llm_model", &self.llm.model)
            .finish()
    }
}

// Default value functions
fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_http_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("coastwatch/{}", env!("CARGO_PKG_VERSION"))
}

fn default_geocoder_base() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_weather_base() -> String {
    "https://api.open-meteo.com".to_string()
}

fn default_alert_bulletin_url() -> String {
    "https://incois.gov.in/portal/tsunami.jsp".to_string()
}

fn default_encyclopedia_base() -> String {
    "https://en.wikipedia.org".to_string()
}

fn default_llm_base() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_llm_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: default_port(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
            },
            http: HttpConfig {
                timeout_seconds: default_http_timeout(),
                user_agent: default_user_agent(),
            },
            endpoints: EndpointConfig {
                geocoder_base: default_geocoder_base(),
                weather_base: default_weather_base(),
                alert_bulletin_url: default_alert_bulletin_url(),
                encyclopedia_base: default_encyclopedia_base(),
                llm_base: default_llm_base(),
            },
            llm: LlmConfig {
                api_key: None,
                model: default_llm_model(),
                max_tokens: 500,
                temperature: 0.3,
                timeout_seconds: 20,
                max_prompt_chars: 2000,
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(port) = env_var("PORT") {
            config.server.port = port
                .parse()
                .map_err(|_| CoastwatchError::config(format!("Invalid PORT value: {port}")))?;
        }
        if let Some(level) = env_var("COASTWATCH_LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Some(timeout) = env_var("COASTWATCH_HTTP_TIMEOUT_SECS") {
            config.http.timeout_seconds = timeout.parse().map_err(|_| {
                CoastwatchError::config(format!("Invalid HTTP timeout value: {timeout}"))
            })?;
        }
        if let Some(url) = env_var("COASTWATCH_GEOCODER_URL") {
            config.endpoints.geocoder_base = url;
        }
        if let Some(url) = env_var("COASTWATCH_WEATHER_URL") {
            config.endpoints.weather_base = url;
        }
        if let Some(url) = env_var("COASTWATCH_ALERT_URL") {
            config.endpoints.alert_bulletin_url = url;
        }
        if let Some(url) = env_var("COASTWATCH_ENCYCLOPEDIA_URL") {
            config.endpoints.encyclopedia_base = url;
        }
        if let Some(url) = env_var("COASTWATCH_LLM_URL") {
            config.endpoints.llm_base = url;
        }
        if let Some(model) = env_var("COASTWATCH_LLM_MODEL") {
            config.llm.model = model;
        }
        config.llm.api_key = env_var("GROQ_API_KEY");

        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_key()?;
        self.validate_endpoints()?;
        self.validate_numeric_ranges()?;
        Ok(())
    }

    fn validate_api_key(&self) -> Result<()> {
        if let Some(api_key) = &self.llm.api_key {
            if api_key.len() < 8 {
                return Err(CoastwatchError::config(
                    "LLM API key appears to be invalid (too short). Please check GROQ_API_KEY.",
                )
                .into());
            }
        }
        Ok(())
    }

    fn validate_endpoints(&self) -> Result<()> {
        let urls = [
            ("geocoder", &self.endpoints.geocoder_base),
            ("weather", &self.endpoints.weather_base),
            ("alert bulletin", &self.endpoints.alert_bulletin_url),
            ("encyclopedia", &self.endpoints.encyclopedia_base),
            ("LLM", &self.endpoints.llm_base),
        ];
        for (name, url) in urls {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(CoastwatchError::config(format!(
                    "{name} endpoint must be a valid HTTP or HTTPS URL, got '{url}'"
                ))
                .into());
            }
        }
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.http.timeout_seconds == 0 || self.http.timeout_seconds > 300 {
            return Err(
                CoastwatchError::config("HTTP timeout must be between 1 and 300 seconds").into(),
            );
        }
        if self.llm.timeout_seconds == 0 || self.llm.timeout_seconds > 300 {
            return Err(
                CoastwatchError::config("LLM timeout must be between 1 and 300 seconds").into(),
            );
        }
        Ok(())
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
