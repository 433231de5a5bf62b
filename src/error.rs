//! Error types and handling for the travel assistant

use serde::Serialize;
use thiserror::Error;

/// Machine readable classification of geocoding failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The service answered but had no match for the query
    GeocodeNotFound,
    /// Either the local rate limiter or the service (HTTP 429) refused the request
    GeocodeRateLimit,
    /// Connection, timeout or non-success HTTP status
    GeocodeNetworkError,
    /// The response body could not be decoded
    GeocodeInvalidResponse,
}

/// Main error type for the travel assistant
#[derive(Error, Debug)]
pub enum TravelError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors (out-of-range budgets, months, unknown seasons...)
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Geocoding service errors
    #[error("Geocoding error: {message}")]
    Geocoding { message: String, code: ErrorCode },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Malformed catalog or preference documents
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl TravelError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new geocoding error
    pub fn geocoding<S: Into<String>>(message: S, code: ErrorCode) -> Self {
        Self::Geocoding {
            message: message.into(),
            code,
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Error code for geocoding failures, `None` for everything else
    #[must_use]
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            TravelError::Geocoding { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TravelError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            TravelError::Validation { message } => format!("Invalid input: {message}"),
            TravelError::Geocoding { code, .. } => match code {
                ErrorCode::GeocodeRateLimit => {
                    "Map loading delayed - free service limit reached. Try again in a minute."
                        .to_string()
                }
                ErrorCode::GeocodeNotFound => "Location not found.".to_string(),
                ErrorCode::GeocodeNetworkError | ErrorCode::GeocodeInvalidResponse => {
                    "Unable to reach the map service. Please check your internet connection."
                        .to_string()
                }
            },
            TravelError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            TravelError::Json { source } => format!("Malformed JSON document: {source}"),
            TravelError::General { message } => message.clone(),
        }
    }
}
