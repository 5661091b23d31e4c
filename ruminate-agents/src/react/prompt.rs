//! Prompt template and transcript markers for the `ReAct` loop.
//!
//! The transcript is plain text in the form popularised by the `ReAct`
//! paper: numbered `Thought N:`, `Action N:` and `Observation N:` lines.

use serde::{Deserialize, Serialize};

/// Few-shot examples shown to the model before the question.
pub const DEFAULT_EXAMPLES: &str = "\
Solve a question answering task with interleaving Thought, Action, Observation steps. \
Thought can reason about the current situation, and Action can be three types:
(1) Search[entity], which searches for the entity and returns the opening text of its page.
(2) Lookup[keyword], which returns the next paragraph containing keyword in the last page searched.
(3) Finish[answer], which returns the answer and finishes the task.

Question: Which river flows through the capital of Hungary?
Thought 1: I need to search Hungary and find its capital.
Action 1: Search[Hungary]
Observation 1: Hungary is a landlocked country in Central Europe. Its capital and largest city is Budapest.
Thought 2: The capital is Budapest. I need to search Budapest and find the river.
Action 2: Search[Budapest]
Observation 2: Budapest is the capital and most populous city of Hungary.
Thought 3: The opening text does not mention a river. I should look up river.
Action 3: Lookup[river]
Observation 3: The city straddles the river Danube, with Buda on the west bank and Pest on the east.
Thought 4: The Danube flows through Budapest, so the answer is the Danube.
Action 4: Finish[Danube]

";

/// Literal that starts the action line of `round`, e.g. `Action 2:`.
pub fn action_prefix(round: usize) -> String {
    format!("Action {round}:")
}

/// Stop sequence ending generation before the model invents an observation.
pub fn observation_marker(round: usize) -> String {
    format!("\nObservation {round}:")
}

/// Literal that opens the thought of `round`, e.g. `Thought 3:`.
pub fn thought_prefix(round: usize) -> String {
    format!("Thought {round}:")
}

/// Text appended to the transcript after an observation in `round`.
///
/// Produces `"\nObservation {round}: {observation}\nThought {round+1}:"`.
pub fn observation_suffix(round: usize, observation: &str) -> String {
    format!(
        "{} {}\n{}",
        observation_marker(round),
        observation,
        thought_prefix(round + 1)
    )
}

/// Template seeding the transcript from a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReActPrompt {
    examples: String,
}

impl ReActPrompt {
    /// Create a prompt with custom few-shot examples.
    pub fn new(examples: impl Into<String>) -> Self {
        Self {
            examples: examples.into(),
        }
    }

    /// The few-shot examples preceding the question.
    pub fn examples(&self) -> &str {
        &self.examples
    }

    /// Render the opening transcript: examples, the question, `Thought 1:`.
    pub fn render(&self, question: &str) -> String {
        format!(
            "{}Question: {}\n{}",
            self.examples,
            question,
            thought_prefix(1)
        )
    }
}

impl Default for ReActPrompt {
    fn default() -> Self {
        Self::new(DEFAULT_EXAMPLES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_without_examples() {
        let prompt = ReActPrompt::new("");
        assert_eq!(
            prompt.render("when was langchain made"),
            "Question: when was langchain made\nThought 1:"
        );
    }

    #[test]
    fn test_default_examples_use_all_tools() {
        let examples = ReActPrompt::default();
        for tool in ["Search[", "Lookup[", "Finish["] {
            assert!(examples.examples().contains(tool), "missing {tool}");
        }
        assert!(examples.render("q").ends_with("Question: q\nThought 1:"));
    }

    #[test]
    fn test_markers() {
        assert_eq!(action_prefix(3), "Action 3:");
        assert_eq!(observation_marker(1), "\nObservation 1:");
        assert_eq!(
            observation_suffix(1, "It is a framework."),
            "\nObservation 1: It is a framework.\nThought 2:"
        );
    }
}
