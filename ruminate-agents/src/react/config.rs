//! Configuration for the `ReAct` chain.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::prompt::DEFAULT_EXAMPLES;
use crate::error::{AgentError, Result};

/// `ReAct` chain configuration.
///
/// Every field has a default, so config files only need the values they
/// change:
///
/// ```toml
/// max_rounds = 6
/// excerpt_chars = 300
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReActConfig {
    /// Maximum number of think/act/observe rounds before giving up
    pub max_rounds: usize,
    /// Maximum generator calls spent looking for one round's action line
    pub max_parse_attempts: usize,
    /// Characters of a found document returned as the `Search` observation
    pub excerpt_chars: usize,
    /// Few-shot examples placed before the question
    pub examples: String,
}

impl Default for ReActConfig {
    fn default() -> Self {
        Self {
            max_rounds: 10,
            max_parse_attempts: 5,
            excerpt_chars: 500,
            examples: DEFAULT_EXAMPLES.to_string(),
        }
    }
}

impl ReActConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a `.json` or `.toml` file
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let config: Self = ruminate_core::config::load_config(path).await?;
        config.validate()?;
        Ok(config)
    }

    /// Set maximum rounds
    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Set maximum generator calls per round
    #[must_use]
    pub fn with_max_parse_attempts(mut self, max_parse_attempts: usize) -> Self {
        self.max_parse_attempts = max_parse_attempts;
        self
    }

    /// Set the search excerpt length
    #[must_use]
    pub fn with_excerpt_chars(mut self, excerpt_chars: usize) -> Self {
        self.excerpt_chars = excerpt_chars;
        self
    }

    /// Set the few-shot examples
    #[must_use]
    pub fn with_examples(mut self, examples: impl Into<String>) -> Self {
        self.examples = examples.into();
        self
    }

    /// Reject limits that would make every run fail
    pub fn validate(&self) -> Result<()> {
        if self.max_rounds == 0 {
            return Err(AgentError::configuration("max_rounds must be at least 1"));
        }
        if self.max_parse_attempts == 0 {
            return Err(AgentError::configuration(
                "max_parse_attempts must be at least 1",
            ));
        }
        if self.excerpt_chars == 0 {
            return Err(AgentError::configuration(
                "excerpt_chars must be at least 1",
            ));
        }
        Ok(())
    }
}
