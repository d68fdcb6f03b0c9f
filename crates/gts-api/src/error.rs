//! Error types for the GlobalTreeSearch client

use std::fmt;

/// Errors from the GlobalTreeSearch client
#[derive(Debug)]
pub enum GtsError {
    /// HTTP request failed (connect, timeout, ...)
    Http(reqwest::Error),
    /// The service answered with a non-success status code
    Status(reqwest::StatusCode),
    /// Failed to parse the response body into the expected schema
    Json(serde_json::Error),
}

impl fmt::Display for GtsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "GlobalTreeSearch HTTP error: {}", e),
            Self::Status(code) => write!(f, "GlobalTreeSearch returned status {}", code),
            Self::Json(e) => write!(f, "GlobalTreeSearch JSON parse error: {}", e),
        }
    }
}

impl std::error::Error for GtsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            Self::Status(_) => None,
            Self::Json(e) => Some(e),
        }
    }
}

impl From<reqwest::Error> for GtsError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<serde_json::Error> for GtsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Result type for GlobalTreeSearch operations
pub type Result<T> = std::result::Result<T, GtsError>;
