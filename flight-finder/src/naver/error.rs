//! Naver client error types.

use std::fmt;

/// Errors from the Naver flight API client.
#[derive(Debug)]
pub enum NaverError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    ApiError { status: u16, message: String },

    /// GraphQL layer reported errors instead of data
    Graphql { message: String },

    /// Rate limited by the API
    RateLimited,

    /// Request rejected by the endpoint's bot protection
    Blocked,
}

impl fmt::Display for NaverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NaverError::Http(e) => write!(f, "HTTP error: {e}"),
            NaverError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            NaverError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            NaverError::Graphql { message } => write!(f, "GraphQL error: {message}"),
            NaverError::RateLimited => write!(f, "rate limited by the flight API"),
            NaverError::Blocked => {
                write!(f, "request blocked by the flight API (bot protection)")
            }
        }
    }
}

impl std::error::Error for NaverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NaverError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for NaverError {
    fn from(err: reqwest::Error) -> Self {
        NaverError::Http(err)
    }
}
