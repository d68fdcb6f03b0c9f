//! Error types for the Kew name services client

use std::fmt;

/// Errors that can occur when talking to IPNI/POWO
#[derive(Debug)]
pub enum PowoError {
    /// HTTP request failed (connect, timeout, ...)
    Http(reqwest::Error),
    /// The service answered with a non-success status code
    Status(reqwest::StatusCode),
    /// Failed to parse the response body into the expected schema
    Json(serde_json::Error),
}

impl fmt::Display for PowoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "Kew HTTP error: {}", e),
            Self::Status(code) => write!(f, "Kew returned status {}", code),
            Self::Json(e) => write!(f, "Kew JSON parse error: {}", e),
        }
    }
}

impl std::error::Error for PowoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            Self::Status(_) => None,
            Self::Json(e) => Some(e),
        }
    }
}

impl From<reqwest::Error> for PowoError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<serde_json::Error> for PowoError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Result type for IPNI/POWO operations
pub type Result<T> = std::result::Result<T, PowoError>;
