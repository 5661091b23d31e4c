//! `ReAct` (Reasoning and Acting) question answering.
//!
//! A run alternates between three parts:
//!
//! 1. **Parse**: [`ReActOutputParser`] drives the generator until it writes
//!    `Action N: Tool[Input]`
//! 2. **Dispatch**: [`StepDispatcher`] runs `Search`, `Lookup` or `Finish`
//! 3. **Loop**: [`ReActChain`] appends each observation to the transcript and
//!    starts the next round until `Finish`

pub mod agent;
pub mod config;
pub mod output_parser;
pub mod prompt;
pub mod reasoning;
pub mod tool_executor;

// Re-export main components
pub use agent::{ReActChain, ReActOutput};
pub use config::ReActConfig;
pub use output_parser::{ParsedAction, ReActOutputParser, parse_action, split_directive};
pub use prompt::{DEFAULT_EXAMPLES, ReActPrompt};
pub use reasoning::{
    ActionStep, FinalAnswerStep, ObservationStep, ReasoningStep, ReasoningStepType, ReasoningTrace,
    ThoughtStep,
};
pub use tool_executor::{
    DocstoreState, NO_MORE_RESULTS, NO_RESULTS, ReActTool, StepDispatcher, ToolResult,
};

/// `ReAct` prelude for convenient imports
pub mod prelude {
    pub use super::{
        DocstoreState, ParsedAction, ReActChain, ReActConfig, ReActOutput, ReActOutputParser,
        ReActPrompt, ReActTool, ReasoningStep, ReasoningTrace, StepDispatcher, ToolResult,
    };
}
