//! # Ruminate - `ReAct` question answering in Rust
//!
//! Ruminate lets a text generator answer questions by reasoning in numbered
//! rounds and consulting a docstore through `Search`, `Lookup` and `Finish`
//! actions.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use ruminate::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> std::result::Result<(), AgentError> {
//! let docstore = InMemoryDocstore::new().with_document(
//!     "Danube",
//!     Document::new("The Danube flows through Budapest.\n\nIt is 2,850 km long."),
//! );
//! let generator = FakeListGenerator::new([
//!     "I need the river's page.\nAction 1: Search[Danube]",
//!     "I need its length.\nAction 2: Lookup[km]",
//!     "It is 2,850 km long.\nAction 3: Finish[2,850 km]",
//! ]);
//!
//! let chain = ReActChain::new(Arc::new(generator), Arc::new(docstore));
//! assert_eq!(chain.run("How long is the Danube?").await?, "2,850 km");
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **ruminate-core**: core traits, types, configuration and errors
//! - **ruminate-agents**: the `ReAct` parser, dispatcher and reasoning loop

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export all public APIs from sub-crates
pub use ruminate_agents as agents;
pub use ruminate_core as core;

/// Prelude module for convenient imports.
///
/// `Result` here is the core alias; agent operations return
/// [`agents::Result`].
pub mod prelude {
    // Re-export core prelude
    pub use ruminate_core::prelude::*;

    pub use ruminate_agents::docstore::InMemoryDocstore;
    pub use ruminate_agents::error::AgentError;
    pub use ruminate_agents::llm::FakeListGenerator;
    pub use ruminate_agents::react::prelude::*;
}

/// Version information for the Ruminate framework.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
