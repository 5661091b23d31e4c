//! Scripted generator that replays a fixed list of completions.

use std::sync::Mutex;

use async_trait::async_trait;
use ruminate_core::{Result, RuminateError, TextGenerator};
use tracing::debug;

/// One recorded call to a [`FakeListGenerator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorCall {
    /// Prompt the generator received.
    pub prompt: String,
    /// Stop sequences the generator received.
    pub stop: Option<Vec<String>>,
}

/// Generator returning the next scripted response on each call.
///
/// The prompt is ignored for choosing the response but every call is
/// recorded, so tests can assert on the prompts and stop sequences the loop
/// produced. Calling past the end of the script is an LLM error.
///
/// ```rust
/// use ruminate_agents::llm::FakeListGenerator;
/// use ruminate_core::TextGenerator;
///
/// # #[tokio::main]
/// # async fn main() {
/// let generator = FakeListGenerator::new(["first", "second"]);
/// assert_eq!(generator.generate("any prompt", None).await.unwrap(), "first");
/// assert_eq!(generator.generate("any prompt", None).await.unwrap(), "second");
/// assert!(generator.generate("any prompt", None).await.is_err());
/// # }
/// ```
#[derive(Debug, Default)]
pub struct FakeListGenerator {
    responses: Vec<String>,
    calls: Mutex<Vec<GeneratorCall>>,
}

impl FakeListGenerator {
    /// Create a generator that replays `responses` in order.
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: responses.into_iter().map(Into::into).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.lock_calls().len()
    }

    /// Snapshot of every call made so far.
    pub fn calls(&self) -> Vec<GeneratorCall> {
        self.lock_calls().clone()
    }

    /// Responses not yet handed out.
    pub fn remaining(&self) -> usize {
        self.responses.len().saturating_sub(self.call_count())
    }

    fn lock_calls(&self) -> std::sync::MutexGuard<'_, Vec<GeneratorCall>> {
        // A poisoned log is still a valid log.
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl TextGenerator for FakeListGenerator {
    async fn generate(&self, prompt: &str, stop: Option<&[String]>) -> Result<String> {
        let mut calls = self.lock_calls();
        let index = calls.len();
        let response = self.responses.get(index).cloned().ok_or_else(|| {
            RuminateError::llm(format!(
                "FakeListGenerator exhausted: call {} but only {} responses scripted",
                index + 1,
                self.responses.len()
            ))
        })?;

        calls.push(GeneratorCall {
            prompt: prompt.to_string(),
            stop: stop.map(<[String]>::to_vec),
        });
        debug!("FakeListGenerator call {} -> {:?}", index + 1, response);
        Ok(response)
    }

    fn name(&self) -> &'static str {
        "FakeListGenerator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replays_in_order_then_fails() {
        let generator = FakeListGenerator::new(["a", "b"]);
        assert_eq!(generator.generate("p1", None).await.unwrap(), "a");
        assert_eq!(generator.remaining(), 1);
        assert_eq!(generator.generate("p2", None).await.unwrap(), "b");

        let err = generator.generate("p3", None).await.unwrap_err();
        assert_eq!(err.category(), "llm");
        assert_eq!(generator.call_count(), 2);
    }

    #[tokio::test]
    async fn test_records_prompt_and_stop() {
        let generator = FakeListGenerator::new(["ok"]);
        let stop = vec!["\nObservation 1:".to_string()];
        generator.generate("Question: x", Some(&stop)).await.unwrap();

        let calls = generator.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].prompt, "Question: x");
        assert_eq!(calls[0].stop.as_deref(), Some(stop.as_slice()));
    }
}
