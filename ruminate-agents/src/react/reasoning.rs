//! `ReAct` reasoning steps and the trace of a run.
//!
//! A run records, per round, the model's thought, the action it chose and
//! either the observation that came back or the final answer.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Type of reasoning step in the `ReAct` pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReasoningStepType {
    /// Internal reasoning/thinking step
    Thought,
    /// Action step (tool call)
    Action,
    /// Observation of action results
    Observation,
    /// Final answer to the user
    FinalAnswer,
}

/// A single step in the `ReAct` reasoning process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReasoningStep {
    /// Thought step - internal reasoning
    Thought(ThoughtStep),
    /// Action step - tool call
    Action(ActionStep),
    /// Observation step - result of action
    Observation(ObservationStep),
    /// Final answer step - response to user
    FinalAnswer(FinalAnswerStep),
}

impl ReasoningStep {
    /// Get the type of this reasoning step
    #[must_use]
    pub fn step_type(&self) -> ReasoningStepType {
        match self {
            ReasoningStep::Thought(_) => ReasoningStepType::Thought,
            ReasoningStep::Action(_) => ReasoningStepType::Action,
            ReasoningStep::Observation(_) => ReasoningStepType::Observation,
            ReasoningStep::FinalAnswer(_) => ReasoningStepType::FinalAnswer,
        }
    }

    /// Round this step belongs to
    #[must_use]
    pub fn round(&self) -> usize {
        match self {
            ReasoningStep::Thought(step) => step.round,
            ReasoningStep::Action(step) => step.round,
            ReasoningStep::Observation(step) => step.round,
            ReasoningStep::FinalAnswer(step) => step.round,
        }
    }

    /// Get the step ID
    #[must_use]
    pub fn id(&self) -> Uuid {
        match self {
            ReasoningStep::Thought(step) => step.id,
            ReasoningStep::Action(step) => step.id,
            ReasoningStep::Observation(step) => step.id,
            ReasoningStep::FinalAnswer(step) => step.id,
        }
    }
}

/// Thought step - internal reasoning about the problem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThoughtStep {
    /// Step ID
    pub id: Uuid,
    /// Round (1-based)
    pub round: usize,
    /// The thought content
    pub content: String,
    /// Timestamp
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl ThoughtStep {
    /// Create a new thought step
    pub fn new(round: usize, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            round,
            content: content.into(),
            timestamp: chrono::Utc::now(),
        }
    }
}

/// Action step - the tool the model chose
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionStep {
    /// Step ID
    pub id: Uuid,
    /// Round (1-based)
    pub round: usize,
    /// Tool name as written by the model
    pub tool: String,
    /// Tool input
    pub tool_input: String,
    /// Timestamp
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl ActionStep {
    /// Create a new action step
    pub fn new(round: usize, tool: impl Into<String>, tool_input: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            round,
            tool: tool.into(),
            tool_input: tool_input.into(),
            timestamp: chrono::Utc::now(),
        }
    }
}

/// Observation step - represents the result of an action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationStep {
    /// Step ID
    pub id: Uuid,
    /// Round (1-based)
    pub round: usize,
    /// The observation content
    pub content: String,
    /// Timestamp
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl ObservationStep {
    /// Create a new observation step
    pub fn new(round: usize, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            round,
            content: content.into(),
            timestamp: chrono::Utc::now(),
        }
    }
}

/// Final answer step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalAnswerStep {
    /// Step ID
    pub id: Uuid,
    /// Round (1-based)
    pub round: usize,
    /// The final answer content
    pub content: String,
    /// Timestamp
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl FinalAnswerStep {
    /// Create a new final answer step
    pub fn new(round: usize, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            round,
            content: content.into(),
            timestamp: chrono::Utc::now(),
        }
    }
}

/// Ordered record of one run's reasoning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningTrace {
    /// Trace ID
    pub id: Uuid,
    /// All reasoning steps in order
    pub steps: Vec<ReasoningStep>,
    /// Total reasoning time in milliseconds
    pub total_time_ms: u64,
    /// Timestamp when trace was created
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl ReasoningTrace {
    /// Create a new empty reasoning trace
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            steps: Vec::new(),
            total_time_ms: 0,
            timestamp: chrono::Utc::now(),
        }
    }

    /// Add a step to the trace
    pub fn add_step(&mut self, step: ReasoningStep) {
        self.steps.push(step);
    }

    /// Set the total reasoning time
    #[must_use]
    pub fn with_total_time(mut self, ms: u64) -> Self {
        self.total_time_ms = ms;
        self
    }

    /// Get the final answer from the trace, if any
    #[must_use]
    pub fn final_answer(&self) -> Option<&FinalAnswerStep> {
        self.steps.iter().rev().find_map(|step| match step {
            ReasoningStep::FinalAnswer(answer) => Some(answer),
            _ => None,
        })
    }

    /// Get all thought steps
    #[must_use]
    pub fn thoughts(&self) -> Vec<&ThoughtStep> {
        self.steps
            .iter()
            .filter_map(|step| match step {
                ReasoningStep::Thought(thought) => Some(thought),
                _ => None,
            })
            .collect()
    }

    /// Get all action steps
    #[must_use]
    pub fn actions(&self) -> Vec<&ActionStep> {
        self.steps
            .iter()
            .filter_map(|step| match step {
                ReasoningStep::Action(action) => Some(action),
                _ => None,
            })
            .collect()
    }

    /// Get all observation steps
    #[must_use]
    pub fn observations(&self) -> Vec<&ObservationStep> {
        self.steps
            .iter()
            .filter_map(|step| match step {
                ReasoningStep::Observation(obs) => Some(obs),
                _ => None,
            })
            .collect()
    }

    /// Get the number of steps
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Check if the trace is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Default for ReasoningTrace {
    fn default() -> Self {
        Self::new()
    }
}
