//! Error types and handling for the `Coastwatch` service

use thiserror::Error;

/// Main error type for the `Coastwatch` service
#[derive(Error, Debug)]
pub enum CoastwatchError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Outbound API communication errors
    #[error("API error: {message}")]
    Api { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// A beach name could not be resolved to coordinates
    #[error("Unable to locate beach: {name}")]
    LocationNotFound { name: String },
}

impl CoastwatchError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new location-not-found error
    pub fn location_not_found<S: Into<String>>(name: S) -> Self {
        Self::LocationNotFound { name: name.into() }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            CoastwatchError::Config { .. } => {
                "Configuration error. Please check your environment settings.".to_string()
            }
            CoastwatchError::Api { .. } => {
                "Unable to reach external services. Please try again later.".to_string()
            }
            CoastwatchError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            CoastwatchError::LocationNotFound { .. } => {
                "Unable to locate this beach in India. Please try a specific beach name."
                    .to_string()
            }
        }
    }
}
