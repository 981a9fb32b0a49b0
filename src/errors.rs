//! Shared error types for scoring runs

use std::fmt;
use thiserror::Error;

/// Phase of a scoring run that produced an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Configuration,
    Collection,
    Analysis,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Configuration => "configuration",
            Phase::Collection => "collection",
            Phase::Analysis => "analysis",
        };
        f.write_str(name)
    }
}

/// Main error type for repscore operations
#[derive(Debug, Error)]
pub enum Error {
    /// Network, auth or lookup failure reported by the repository provider
    #[error("Provider error in {operation}: {message}")]
    Provider { operation: String, message: String },

    /// Missing repository identifiers or invalid scoring rules
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Analysis errors that cannot be recovered locally
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a provider error naming the failing operation
    pub fn provider(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create an analysis error
    pub fn analysis(message: impl Into<String>) -> Self {
        Self::Analysis(message.into())
    }

    /// The run phase this error aborted
    pub fn phase(&self) -> Phase {
        match self {
            Error::Provider { .. } | Error::Io(_) | Error::Json(_) => Phase::Collection,
            Error::Configuration(_) | Error::Toml(_) => Phase::Configuration,
            Error::Analysis(_) => Phase::Analysis,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_is_collection_phase() {
        let err = Error::provider("list_pull_requests", "rate limited");
        assert_eq!(err.phase(), Phase::Collection);
        assert_eq!(
            err.to_string(),
            "Provider error in list_pull_requests: rate limited"
        );
    }

    #[test]
    fn test_configuration_error_phase() {
        let err = Error::configuration("missing owner");
        assert_eq!(err.phase(), Phase::Configuration);
        assert_eq!(err.phase().to_string(), "configuration");
    }

    #[test]
    fn test_analysis_error_phase() {
        let err = Error::analysis("pull request #4 not found");
        assert_eq!(err.phase(), Phase::Analysis);
        assert_eq!(err.to_string(), "Analysis error: pull request #4 not found");
    }
}
