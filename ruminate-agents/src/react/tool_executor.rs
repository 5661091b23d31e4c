//! Step dispatcher for `ReAct` actions.
//!
//! Routes a parsed action to one of the fixed tools (`Search`, `Lookup`,
//! `Finish`). The document found by the last `Search` is run-scoped state
//! the caller owns and passes in as [`DocstoreState`], so the dispatcher
//! itself holds nothing between calls.

use std::str::FromStr;
use std::sync::Arc;

use ruminate_core::{Docstore, Document, SearchResult};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::{debug, info};

use super::output_parser::ParsedAction;
use crate::error::{AgentError, Result};

/// Observation when a lookup term appears nowhere in the document.
pub const NO_RESULTS: &str = "No Results";

/// Observation when repeated lookups have walked past the last match.
pub const NO_MORE_RESULTS: &str = "No More Results";

/// Tools a `ReAct` run may call. Names match case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ReActTool {
    /// Search the docstore and remember the document found
    Search,
    /// Find a paragraph in the remembered document
    Lookup,
    /// Return the final answer
    Finish,
}

/// What executing one action produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolResult {
    /// Text to feed back into the transcript
    Observation(String),
    /// The run's answer
    FinalAnswer(String),
}

/// Document remembered between `Search` and `Lookup` within one run.
#[derive(Debug, Clone, Default)]
pub struct DocstoreState {
    document: Option<Document>,
    lookup_term: Option<String>,
    lookup_index: usize,
}

impl DocstoreState {
    /// Create state with no current document
    pub fn new() -> Self {
        Self::default()
    }

    /// Document found by the most recent successful `Search`
    pub fn current_document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    fn set_document(&mut self, document: Option<Document>) {
        self.document = document;
        self.lookup_term = None;
        self.lookup_index = 0;
    }

    /// Next paragraph of the current document containing `term`.
    ///
    /// Repeating a term walks through successive matches; a new term starts
    /// over from the first one.
    fn lookup(&mut self, term: &str) -> Result<String> {
        let document = self
            .document
            .as_ref()
            .ok_or_else(|| AgentError::state("Cannot lookup without a successful search first"))?;

        let term = term.to_lowercase();
        if self.lookup_term.as_deref() == Some(term.as_str()) {
            self.lookup_index += 1;
        } else {
            self.lookup_index = 0;
        }

        let matches = document.paragraphs_containing(&term);
        let observation = if matches.is_empty() {
            NO_RESULTS.to_string()
        } else {
            matches
                .get(self.lookup_index)
                .map_or_else(|| NO_MORE_RESULTS.to_string(), |p| (*p).to_string())
        };
        self.lookup_term = Some(term);
        Ok(observation)
    }
}

/// Executes `ReAct` actions against a docstore.
#[derive(Debug, Clone)]
pub struct StepDispatcher {
    docstore: Arc<dyn Docstore>,
    excerpt_chars: usize,
}

impl StepDispatcher {
    /// Create a dispatcher returning `excerpt_chars` characters per search
    pub fn new(docstore: Arc<dyn Docstore>, excerpt_chars: usize) -> Self {
        Self {
            docstore,
            excerpt_chars,
        }
    }

    /// Execute a parsed action
    pub async fn execute(
        &self,
        action: &ParsedAction,
        state: &mut DocstoreState,
    ) -> Result<ToolResult> {
        self.dispatch(&action.tool, &action.tool_input, state).await
    }

    /// Execute `tool` with `tool_input`.
    ///
    /// # Errors
    ///
    /// - [`AgentError::UnknownAction`] for a tool outside [`ReActTool`]
    /// - [`AgentError::State`] for `Lookup` before a successful `Search`
    /// - [`AgentError::Core`] when the docstore fails
    pub async fn dispatch(
        &self,
        tool: &str,
        tool_input: &str,
        state: &mut DocstoreState,
    ) -> Result<ToolResult> {
        let kind = ReActTool::from_str(tool).map_err(|_| AgentError::unknown_action(tool))?;
        debug!("Dispatching {}[{}]", kind, tool_input);

        match kind {
            ReActTool::Search => self.search(tool_input, state).await,
            ReActTool::Lookup => state.lookup(tool_input).map(ToolResult::Observation),
            ReActTool::Finish => Ok(ToolResult::FinalAnswer(tool_input.to_string())),
        }
    }

    async fn search(&self, query: &str, state: &mut DocstoreState) -> Result<ToolResult> {
        match self.docstore.search(query).await? {
            SearchResult::Found(document) => {
                info!(
                    "Search '{}' found document {} from {}",
                    query,
                    document.id,
                    document
                        .get_metadata_string("source")
                        .as_deref()
                        .unwrap_or("unknown source")
                );
                let excerpt = document.excerpt(self.excerpt_chars).to_string();
                state.set_document(Some(document));
                Ok(ToolResult::Observation(excerpt))
            }
            SearchResult::NotFound(message) => {
                info!("Search '{}' found nothing", query);
                state.set_document(None);
                Ok(ToolResult::Observation(message))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docstore::InMemoryDocstore;
    use test_case::test_case;

    const PAGE: &str = "This is a page about LangChain.\n\nIt is a really cool framework.\n\nWhat isn't there to love about langchain?\n\nMade in 2022.";

    fn dispatcher(excerpt_chars: usize) -> StepDispatcher {
        let store = InMemoryDocstore::new().with_document("langchain", Document::new(PAGE));
        StepDispatcher::new(Arc::new(store), excerpt_chars)
    }

    #[test_case("Search", ReActTool::Search; "canonical")]
    #[test_case("search", ReActTool::Search; "lower")]
    #[test_case("LOOKUP", ReActTool::Lookup; "upper")]
    #[test_case("fInIsH", ReActTool::Finish; "mixed")]
    fn test_tool_names_are_case_insensitive(name: &str, expected: ReActTool) {
        assert_eq!(ReActTool::from_str(name).unwrap(), expected);
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let mut state = DocstoreState::new();
        let err = dispatcher(500)
            .dispatch("BadAction", "langchain", &mut state)
            .await
            .unwrap_err();
        assert!(matches!(err, AgentError::UnknownAction { ref tool } if tool == "BadAction"));
    }

    #[tokio::test]
    async fn test_search_returns_excerpt_and_remembers_document() {
        let mut state = DocstoreState::new();
        let result = dispatcher(20)
            .dispatch("Search", "langchain", &mut state)
            .await
            .unwrap();

        assert_eq!(
            result,
            ToolResult::Observation("This is a page about".to_string())
        );
        assert_eq!(state.current_document().map(|d| d.content.as_str()), Some(PAGE));
    }

    #[tokio::test]
    async fn test_search_keeps_document_source() {
        let page = Document::new(PAGE).with_metadata("source", "wiki/LangChain");
        let store = InMemoryDocstore::new().with_document("langchain", page);
        let dispatcher = StepDispatcher::new(Arc::new(store), 500);
        let mut state = DocstoreState::new();

        dispatcher.dispatch("Search", "langchain", &mut state).await.unwrap();
        let source = state
            .current_document()
            .and_then(|d| d.get_metadata_string("source"));
        assert_eq!(source.as_deref(), Some("wiki/LangChain"));
    }

    #[tokio::test]
    async fn test_search_miss_clears_document() {
        let dispatcher = dispatcher(500);
        let mut state = DocstoreState::new();
        dispatcher.dispatch("Search", "langchain", &mut state).await.unwrap();

        let result = dispatcher
            .dispatch("Search", "llamaindex", &mut state)
            .await
            .unwrap();
        assert_eq!(
            result,
            ToolResult::Observation("Could not find [llamaindex].".to_string())
        );
        assert!(state.current_document().is_none());

        let err = dispatcher
            .dispatch("Lookup", "made", &mut state)
            .await
            .unwrap_err();
        assert!(matches!(err, AgentError::State { .. }));
    }

    #[tokio::test]
    async fn test_lookup_before_search() {
        let mut state = DocstoreState::new();
        let err = dispatcher(500)
            .dispatch("Lookup", "made", &mut state)
            .await
            .unwrap_err();
        assert!(matches!(err, AgentError::State { .. }));
    }

    #[tokio::test]
    async fn test_lookup_walks_matches() {
        let dispatcher = dispatcher(500);
        let mut state = DocstoreState::new();
        dispatcher.dispatch("Search", "langchain", &mut state).await.unwrap();

        assert_eq!(
            lookup(&dispatcher, &mut state, "LangChain").await,
            "This is a page about LangChain."
        );
        assert_eq!(
            lookup(&dispatcher, &mut state, "langchain").await,
            "What isn't there to love about langchain?"
        );
        assert_eq!(lookup(&dispatcher, &mut state, "LANGCHAIN").await, NO_MORE_RESULTS);
        assert_eq!(lookup(&dispatcher, &mut state, "made").await, "Made in 2022.");
        assert_eq!(lookup(&dispatcher, &mut state, "rust").await, NO_RESULTS);
    }

    async fn lookup(dispatcher: &StepDispatcher, state: &mut DocstoreState, term: &str) -> String {
        match dispatcher.dispatch("Lookup", term, state).await.unwrap() {
            ToolResult::Observation(text) => text,
            ToolResult::FinalAnswer(text) => panic!("unexpected answer {text}"),
        }
    }

    #[tokio::test]
    async fn test_finish() {
        let mut state = DocstoreState::new();
        let result = dispatcher(500)
            .dispatch("Finish", "2022", &mut state)
            .await
            .unwrap();
        assert_eq!(result, ToolResult::FinalAnswer("2022".to_string()));
    }
}
