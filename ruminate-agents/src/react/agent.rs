//! `ReAct` chain: the think, act, observe loop.
//!
//! Each round asks the [`ReActOutputParser`] for the next action, hands it
//! to the [`StepDispatcher`] and either feeds the observation back into the
//! transcript or returns the final answer.

use std::{sync::Arc, time::Instant};

use ruminate_core::{Docstore, TextGenerator};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::{
    config::ReActConfig,
    output_parser::ReActOutputParser,
    prompt::{ReActPrompt, observation_suffix},
    reasoning::{
        ActionStep, FinalAnswerStep, ObservationStep, ReasoningStep, ReasoningTrace, ThoughtStep,
    },
    tool_executor::{DocstoreState, StepDispatcher, ToolResult},
};
use crate::error::{AgentError, Result};

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReActOutput {
    /// The `Finish` input
    pub answer: String,
    /// Rounds used, including the finishing one
    pub rounds: usize,
    /// Thoughts, actions and observations in order
    pub trace: ReasoningTrace,
    /// Full transcript through the finishing action line
    pub transcript: String,
}

/// Question-answering chain over a text generator and a docstore.
#[derive(Debug, Clone)]
pub struct ReActChain {
    parser: ReActOutputParser,
    dispatcher: StepDispatcher,
    prompt: ReActPrompt,
    config: ReActConfig,
}

impl ReActChain {
    /// Create a chain with the default configuration
    pub fn new(generator: Arc<dyn TextGenerator>, docstore: Arc<dyn Docstore>) -> Self {
        Self::build(generator, docstore, ReActConfig::default())
    }

    /// Create a chain with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::Configuration`] if the configuration is invalid.
    pub fn with_config(
        generator: Arc<dyn TextGenerator>,
        docstore: Arc<dyn Docstore>,
        config: ReActConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(generator, docstore, config))
    }

    fn build(
        generator: Arc<dyn TextGenerator>,
        docstore: Arc<dyn Docstore>,
        config: ReActConfig,
    ) -> Self {
        Self {
            parser: ReActOutputParser::new(generator, config.max_parse_attempts),
            dispatcher: StepDispatcher::new(docstore, config.excerpt_chars),
            prompt: ReActPrompt::new(config.examples.clone()),
            config,
        }
    }

    /// Chain configuration
    pub fn config(&self) -> &ReActConfig {
        &self.config
    }

    /// Answer `question`, returning only the final answer
    pub async fn run(&self, question: &str) -> Result<String> {
        self.run_with_trace(question).await.map(|output| output.answer)
    }

    /// Answer `question`, returning the answer with its reasoning.
    ///
    /// # Errors
    ///
    /// Fails on the first error of any round; nothing is retried across
    /// rounds. See [`ReActOutputParser::predict_until_observation`] and
    /// [`StepDispatcher::dispatch`], plus
    /// [`AgentError::RoundLimitExceeded`] when no round finishes.
    pub async fn run_with_trace(&self, question: &str) -> Result<ReActOutput> {
        let start_time = Instant::now();
        info!("Starting ReAct run for question: {}", question);

        let mut transcript = self.prompt.render(question);
        let mut state = DocstoreState::new();
        let mut trace = ReasoningTrace::new();

        for round in 1..=self.config.max_rounds {
            let action = self
                .parser
                .predict_until_observation(&transcript, round)
                .await?;

            trace.add_step(ReasoningStep::Thought(ThoughtStep::new(
                round,
                action.thought(),
            )));
            trace.add_step(ReasoningStep::Action(ActionStep::new(
                round,
                &action.tool,
                &action.tool_input,
            )));

            match self.dispatcher.execute(&action, &mut state).await? {
                ToolResult::Observation(observation) => {
                    debug!("Round {} observation: {}", round, observation);
                    transcript.push_str(&action.log);
                    transcript.push_str(&observation_suffix(round, &observation));
                    trace.add_step(ReasoningStep::Observation(ObservationStep::new(
                        round,
                        observation,
                    )));
                }
                ToolResult::FinalAnswer(answer) => {
                    transcript.push_str(&action.log);
                    trace.add_step(ReasoningStep::FinalAnswer(FinalAnswerStep::new(
                        round,
                        answer.clone(),
                    )));

                    let elapsed = start_time.elapsed();
                    info!(
                        "ReAct run finished in {} round(s) ({:?})",
                        round, elapsed
                    );
                    return Ok(ReActOutput {
                        answer,
                        rounds: round,
                        trace: trace.with_total_time(
                            u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
                        ),
                        transcript,
                    });
                }
            }
        }

        warn!(
            "ReAct run gave up after {} rounds without an answer",
            self.config.max_rounds
        );
        Err(AgentError::RoundLimitExceeded {
            max_rounds: self.config.max_rounds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{docstore::InMemoryDocstore, llm::FakeListGenerator};
    use ruminate_core::Document;

    fn chain(responses: &[&str], config: ReActConfig) -> Result<ReActChain> {
        let generator = Arc::new(FakeListGenerator::new(responses.iter().copied()));
        let docstore = InMemoryDocstore::new().with_document("x", Document::new("X is y."));
        ReActChain::with_config(generator, Arc::new(docstore), config)
    }

    #[tokio::test]
    async fn test_finish_in_first_round() {
        let chain = chain(&["Easy.\nAction 1: Finish[42]"], ReActConfig::new()).unwrap();
        let output = chain.run_with_trace("q").await.unwrap();

        assert_eq!(output.answer, "42");
        assert_eq!(output.rounds, 1);
        assert_eq!(output.trace.thoughts()[0].content, "Easy.");
        assert!(output.transcript.ends_with("Action 1: Finish[42]"));
    }

    #[tokio::test]
    async fn test_round_limit() {
        let config = ReActConfig::new().with_max_rounds(2);
        let chain = chain(
            &["a\nAction 1: Search[x]", "b\nAction 2: Search[x]", "c"],
            config,
        )
        .unwrap();

        let err = chain.run("q").await.unwrap_err();
        assert!(matches!(err, AgentError::RoundLimitExceeded { max_rounds: 2 }));
    }

    #[tokio::test]
    async fn test_new_uses_default_config() {
        let generator = Arc::new(FakeListGenerator::new(["Easy.\nAction 1: Finish[42]"]));
        let chain = ReActChain::new(generator.clone(), Arc::new(InMemoryDocstore::new()));
        assert_eq!(chain.config(), &ReActConfig::default());

        chain.run("q").await.unwrap();
        let calls = generator.calls();
        assert!(calls[0].prompt.starts_with(&ReActConfig::default().examples));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = chain(&[], ReActConfig::new().with_max_rounds(0)).unwrap_err();
        assert_eq!(err.category(), "configuration");
    }
}
