//! Error types for the Ruminate agents framework.

use ruminate_core::RuminateError;
use thiserror::Error;

/// Result type alias for agent operations
pub type Result<T> = std::result::Result<T, AgentError>;

/// Errors that end a reasoning run.
///
/// Every variant is fatal for the run that raised it: the loop returns it to
/// the caller immediately and keeps no partial answer.
#[derive(Error, Debug)]
pub enum AgentError {
    /// Core Ruminate errors (generator, docstore, config I/O)
    #[error("Core error: {0}")]
    Core(#[from] RuminateError),

    /// The model asked for a tool outside the fixed set
    #[error("Unknown action: {tool}")]
    UnknownAction {
        /// Tool name exactly as the model wrote it
        tool: String,
    },

    /// A tool was used out of order (e.g. `Lookup` before `Search`)
    #[error("State error: {message}")]
    State {
        /// Error message
        message: String,
    },

    /// No `Action N:` line appeared within the attempt budget
    #[error("No action for round {round} after {attempts} generator calls")]
    ParseExhausted {
        /// Round being parsed
        round: usize,
        /// Generator calls spent on the round
        attempts: usize,
    },

    /// The action line carried no parseable `Tool[Input]` directive
    #[error("Could not parse action directive: {directive}")]
    MalformedAction {
        /// Directive text after the `Action N:` prefix
        directive: String,
    },

    /// The run used every round without finishing
    #[error("No final answer within {max_rounds} rounds")]
    RoundLimitExceeded {
        /// Configured round limit
        max_rounds: usize,
    },

    /// Agent configuration errors
    #[error("Agent configuration error: {message}")]
    Configuration {
        /// Error message
        message: String,
    },
}

impl AgentError {
    /// Create an unknown action error
    pub fn unknown_action(tool: impl Into<String>) -> Self {
        Self::UnknownAction { tool: tool.into() }
    }

    /// Create a state error
    pub fn state(message: impl Into<String>) -> Self {
        Self::State {
            message: message.into(),
        }
    }

    /// Create a malformed action error
    pub fn malformed_action(directive: impl Into<String>) -> Self {
        Self::MalformedAction {
            directive: directive.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::Core(inner) => inner.category(),
            Self::UnknownAction { .. } => "unknown_action",
            Self::State { .. } => "state",
            Self::ParseExhausted { .. } => "parse_exhausted",
            Self::MalformedAction { .. } => "malformed_action",
            Self::RoundLimitExceeded { .. } => "round_limit",
            Self::Configuration { .. } => "configuration",
        }
    }
}

// Convert from anyhow errors
impl From<anyhow::Error> for AgentError {
    fn from(err: anyhow::Error) -> Self {
        Self::Core(RuminateError::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = AgentError::unknown_action("BadAction");
        assert!(matches!(err, AgentError::UnknownAction { ref tool } if tool == "BadAction"));
        assert_eq!(err.category(), "unknown_action");
    }

    #[test]
    fn test_error_display() {
        let err = AgentError::ParseExhausted {
            round: 2,
            attempts: 5,
        };
        let display = format!("{err}");
        assert!(display.contains("round 2"));
        assert!(display.contains('5'));
    }

    #[test]
    fn test_core_category_passes_through() {
        let err = AgentError::from(RuminateError::llm("exhausted"));
        assert_eq!(err.category(), "llm");
    }
}
