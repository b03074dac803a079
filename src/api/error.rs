//! Error handling for the backend API module

use crate::logging::LogLevel;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The response body was not the JSON shape the endpoint promises.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },
}

impl ApiError {
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        ApiError::Http { status, message }
    }

    /// Log level used when this error ends a poll cycle.
    pub fn log_level(&self) -> LogLevel {
        match self {
            // Backend briefly unavailable - the next tick will try again
            ApiError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,
            ApiError::Http { status, .. } if *status == 429 => LogLevel::Warn,

            // Wrong URL or a backend speaking a different contract
            ApiError::Http { .. } => LogLevel::Error,
            ApiError::Decode(_) => LogLevel::Error,

            // Network issues - usually temporary
            ApiError::Reqwest(_) => LogLevel::Warn,
        }
    }
}
