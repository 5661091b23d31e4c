//! Text generation trait for completion-style language models.
//!
//! The reasoning loop only needs plain completions: a prompt goes in, text
//! comes out, and generation halts at any of the supplied stop sequences.

use async_trait::async_trait;

use crate::Result;

/// Completes prompts with a language model.
///
/// # Examples
///
/// ```rust
/// use async_trait::async_trait;
/// use ruminate_core::{Result, TextGenerator};
///
/// #[derive(Debug)]
/// struct Echo;
///
/// #[async_trait]
/// impl TextGenerator for Echo {
///     async fn generate(&self, prompt: &str, _stop: Option<&[String]>) -> Result<String> {
///         Ok(prompt.to_string())
///     }
/// }
/// ```
#[async_trait]
pub trait TextGenerator: Send + Sync + std::fmt::Debug {
    /// Generate a completion for `prompt`.
    ///
    /// # Arguments
    ///
    /// * `prompt` - The full prompt text
    /// * `stop` - Optional stop sequences; the completion must end before
    ///   the first occurrence of any of them
    ///
    /// # Errors
    ///
    /// Returns an error if the model cannot produce a completion.
    async fn generate(&self, prompt: &str, stop: Option<&[String]>) -> Result<String>;

    /// Get a human-readable name for this generator.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
