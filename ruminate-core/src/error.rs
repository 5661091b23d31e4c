//! Error types for the Ruminate framework.
//!
//! Collaborator failures (generators, docstores) and configuration problems
//! are reported through [`RuminateError`]; agent crates wrap it in their own
//! error enums.

use thiserror::Error;

/// Core error types for the Ruminate framework.
#[derive(Error, Debug)]
pub enum RuminateError {
    /// I/O related errors (config file reading, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Text generation errors
    #[error("LLM error: {message}")]
    Llm {
        /// Detailed error message
        message: String,
    },

    /// Document store errors
    #[error("Docstore error: {message}")]
    Docstore {
        /// Detailed error message
        message: String,
    },

    /// Configuration validation errors
    #[error("Configuration error: {message}")]
    Configuration {
        /// Detailed error message
        message: String,
    },

    /// Generic errors from external dependencies
    #[error("External error: {source}")]
    External {
        /// The underlying error
        #[source]
        source: anyhow::Error,
    },
}

impl RuminateError {
    /// Create a new LLM error with a message.
    pub fn llm<S: Into<String>>(message: S) -> Self {
        Self::Llm {
            message: message.into(),
        }
    }

    /// Create a new docstore error with a message.
    pub fn docstore<S: Into<String>>(message: S) -> Self {
        Self::Docstore {
            message: message.into(),
        }
    }

    /// Create a new configuration error with a message.
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Get the error category for logging.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Serialization(_) => "serialization",
            Self::TomlParse(_) => "toml",
            Self::Llm { .. } => "llm",
            Self::Docstore { .. } => "docstore",
            Self::Configuration { .. } => "configuration",
            Self::External { .. } => "external",
        }
    }
}

/// Convert from `anyhow::Error` to `RuminateError`.
impl From<anyhow::Error> for RuminateError {
    fn from(error: anyhow::Error) -> Self {
        Self::External { source: error }
    }
}

/// Result type alias for convenience.
///
/// This is the standard result type used throughout the Ruminate framework.
pub type Result<T> = std::result::Result<T, RuminateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = RuminateError::llm("responses exhausted");
        assert!(matches!(err, RuminateError::Llm { .. }));
        assert_eq!(err.to_string(), "LLM error: responses exhausted");
    }

    #[test]
    fn test_error_category() {
        assert_eq!(RuminateError::docstore("offline").category(), "docstore");
        assert_eq!(
            RuminateError::from(anyhow::anyhow!("boom")).category(),
            "external"
        );
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.toml");
        assert_eq!(RuminateError::from(io).category(), "io");
    }
}
