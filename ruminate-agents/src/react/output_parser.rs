//! `ReAct` action parser: predict until the model commits to an action.
//!
//! The generator is stopped at the next `Observation N:` marker, so each
//! completion holds a thought and, usually, an `Action N: Tool[Input]`
//! line. When the line is missing the parser nudges the model by appending
//! `Action N:` itself and asks for a continuation.

use std::sync::{Arc, LazyLock};

use regex::Regex;
use ruminate_core::TextGenerator;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::prompt::{action_prefix, observation_marker};
use crate::error::{AgentError, Result};

/// Matches any numbered action line; the round is checked after matching.
static ACTION_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^Action (\d+):(.*)$").expect("Invalid action regex"));

/// An action the model committed to in one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedAction {
    /// Round the action belongs to (1-based)
    pub round: usize,
    /// Generated text up to and including the action line
    pub log: String,
    /// Tool name as written by the model
    pub tool: String,
    /// Text between the directive's brackets
    pub tool_input: String,
}

impl ParsedAction {
    /// The reasoning that preceded the action line, trimmed.
    pub fn thought(&self) -> &str {
        self.log
            .rfind('\n')
            .map_or("", |idx| self.log[..idx].trim())
    }
}

/// Drives a [`TextGenerator`] until it emits the action line for a round.
#[derive(Debug, Clone)]
pub struct ReActOutputParser {
    generator: Arc<dyn TextGenerator>,
    max_attempts: usize,
}

impl ReActOutputParser {
    /// Create a parser spending at most `max_attempts` generator calls per round
    pub fn new(generator: Arc<dyn TextGenerator>, max_attempts: usize) -> Self {
        Self {
            generator,
            max_attempts,
        }
    }

    /// Generator calls allowed per round
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Generate from `transcript` until an `Action {round}:` line appears.
    ///
    /// Each continuation prompt is the transcript followed by everything
    /// generated so far for this round, so the model resumes mid-thought.
    ///
    /// # Errors
    ///
    /// - [`AgentError::ParseExhausted`] when `max_attempts` calls produce no
    ///   action line
    /// - [`AgentError::MalformedAction`] when the action line has no
    ///   `Tool[Input]` directive
    /// - [`AgentError::Core`] when the generator fails
    pub async fn predict_until_observation(
        &self,
        transcript: &str,
        round: usize,
    ) -> Result<ParsedAction> {
        let stop = vec![observation_marker(round)];
        let mut buffer = self.generator.generate(transcript, Some(&stop)).await?;
        let mut attempts = 1;

        loop {
            if let Some(action) = parse_action(&buffer, round)? {
                debug!(
                    "Round {} parsed {}[{}] after {} generator call(s)",
                    round, action.tool, action.tool_input, attempts
                );
                return Ok(action);
            }

            if attempts >= self.max_attempts {
                warn!("Round {} produced no action in {} calls", round, attempts);
                return Err(AgentError::ParseExhausted { round, attempts });
            }

            push_action_prefix(&mut buffer, round);
            debug!("Round {} has no action yet, continuing", round);

            let prompt = format!("{transcript}{buffer}");
            let output = self.generator.generate(&prompt, Some(&stop)).await?;
            buffer.push_str(&output);
            attempts += 1;
        }
    }
}

/// Find the first `Action {round}:` line in `text` and parse its directive.
///
/// Returns `Ok(None)` when no such line carries a directive yet. A bare
/// `Action {round}:` line is treated as not yet written.
pub fn parse_action(text: &str, round: usize) -> Result<Option<ParsedAction>> {
    for caps in ACTION_LINE_REGEX.captures_iter(text) {
        if caps[1].parse::<usize>().ok() != Some(round) {
            continue;
        }
        let directive = caps[2].trim();
        if directive.is_empty() {
            continue;
        }

        let (tool, tool_input) = split_directive(directive)?;
        let line_end = caps.get(0).map_or(text.len(), |m| m.end());
        return Ok(Some(ParsedAction {
            round,
            log: text[..line_end].to_string(),
            tool: tool.to_string(),
            tool_input: tool_input.to_string(),
        }));
    }
    Ok(None)
}

/// Split `Tool[Input]` into tool name and input.
///
/// The input runs from the first `[` to its matching `]`, so nested
/// brackets survive: `Search[Foo [film]]` has input `Foo [film]`.
pub fn split_directive(directive: &str) -> Result<(&str, &str)> {
    let open = directive
        .find('[')
        .ok_or_else(|| AgentError::malformed_action(directive))?;
    let tool = directive[..open].trim();
    if tool.is_empty() {
        return Err(AgentError::malformed_action(directive));
    }

    let mut depth = 0usize;
    for (idx, ch) in directive[open..].char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Ok((tool, &directive[open + 1..open + idx]));
                }
            }
            _ => {}
        }
    }
    Err(AgentError::malformed_action(directive))
}

/// Append `\nAction {round}:` unless the buffer already ends with it.
fn push_action_prefix(buffer: &mut String, round: usize) {
    let prefix = action_prefix(round);
    let trimmed_len = buffer.trim_end().len();
    if buffer[..trimmed_len]
        .lines()
        .last()
        .is_some_and(|line| line == prefix)
    {
        buffer.truncate(trimmed_len);
        return;
    }
    buffer.push('\n');
    buffer.push_str(&prefix);
}
