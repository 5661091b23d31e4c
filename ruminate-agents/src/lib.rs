//! `ReAct` agents for Ruminate.
//!
//! This crate answers questions by letting a text generator reason in
//! numbered rounds and call a small fixed set of docstore tools:
//!
//! - [`react`]: the action parser, step dispatcher and reasoning loop
//! - [`docstore`]: an in-memory [`ruminate_core::Docstore`]
//! - [`llm`]: a scripted [`ruminate_core::TextGenerator`] for replaying
//!   recorded completions
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use ruminate_agents::prelude::*;
//! use ruminate_core::Document;
//!
//! # #[tokio::main]
//! # async fn main() -> ruminate_agents::Result<()> {
//! let generator = FakeListGenerator::new([
//!     "I should search LangChain.\nAction 1: Search[LangChain]",
//!     "It was made in 2022.\nAction 2: Finish[2022]",
//! ]);
//! let docstore = InMemoryDocstore::new()
//!     .with_document("LangChain", Document::new("LangChain was made in 2022."));
//!
//! let chain = ReActChain::new(Arc::new(generator), Arc::new(docstore));
//! assert_eq!(chain.run("When was LangChain made?").await?, "2022");
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod docstore;
pub mod error;
pub mod llm;
pub mod react;

pub use error::{AgentError, Result};

/// Agents prelude for convenient imports
pub mod prelude {
    pub use crate::docstore::InMemoryDocstore;
    pub use crate::error::{AgentError, Result};
    pub use crate::llm::FakeListGenerator;
    pub use crate::react::prelude::*;
}
