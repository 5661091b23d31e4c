//! # Ruminate Core
//!
//! Core traits, types, and interfaces for the Ruminate reasoning framework.
//!
//! This crate provides the foundational building blocks shared by the agent
//! crates:
//!
//! - **Data structures**: [`Document`] and [`SearchResult`]
//! - **Core traits**: [`TextGenerator`] for completion models and
//!   [`Docstore`] for document lookup
//! - **Configuration**: JSON/TOML file loading with environment substitution
//! - **Error handling**: [`RuminateError`] with category and retry hints
//!
//! ## Quick Start
//!
//! ```rust
//! use ruminate_core::prelude::*;
//!
//! let doc = Document::builder()
//!     .content("LangChain is a framework.\n\nMade in 2022.")
//!     .metadata("source", "example.txt")
//!     .build();
//!
//! assert_eq!(doc.summary(), "LangChain is a framework.");
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export commonly used types and traits
pub mod prelude;

// Core modules
pub mod config;
pub mod error;
pub mod traits;
pub mod types;

// Re-export key types at crate root for convenience
pub use error::{Result, RuminateError};
pub use types::{Document, DocumentBuilder, SearchResult};

// Re-export traits for convenience
pub use traits::*;

/// Version information for the Ruminate core library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the Ruminate core library.
pub const NAME: &str = env!("CARGO_PKG_NAME");
