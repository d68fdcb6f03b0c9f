//! Error taxonomy for authority calls and name resolution

use crate::types::Taxon;
use std::fmt;

/// Outcome classification for a single authority call
///
/// Classification is owned by each source adapter; the rest of the engine
/// only ever sees these three cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The authority explicitly reported no match (terminal, not retryable)
    NotFound,
    /// Timeout, connection failure or 5xx-class response (retryable)
    Transient(String),
    /// Response could not be parsed into the expected schema; signals a
    /// contract break with the authority, not a user error
    Malformed(String),
}

impl SourceError {
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transient(_))
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "no match reported by authority"),
            Self::Transient(msg) => write!(f, "transient network error: {}", msg),
            Self::Malformed(msg) => write!(f, "malformed authority response: {}", msg),
        }
    }
}

impl std::error::Error for SourceError {}

/// Why a query could not be resolved to a single taxon
#[derive(Debug, Clone)]
pub enum ResolveError {
    /// The search returned zero candidates
    NotFound,
    /// Several candidates and no exact (name, author) match among them;
    /// carries the full candidate list so the user can disambiguate
    Ambiguous(Vec<Taxon>),
    /// The search call itself failed
    Source(SourceError),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "name not found"),
            Self::Ambiguous(candidates) => {
                let names: Vec<String> = candidates.iter().map(|t| t.to_string()).collect();
                write!(f, "ambiguous name, candidates: {}", names.join(" | "))
            }
            Self::Source(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Source(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SourceError> for ResolveError {
    fn from(e: SourceError) -> Self {
        match e {
            SourceError::NotFound => Self::NotFound,
            other => Self::Source(other),
        }
    }
}
