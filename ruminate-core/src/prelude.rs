//! Prelude module for convenient imports.
//!
//! ```rust
//! use ruminate_core::prelude::*;
//!
//! let doc = Document::new("Hello, world!");
//! let hit = SearchResult::Found(doc);
//! assert!(hit.is_found());
//! ```

// Re-export core error types
pub use crate::error::{Result, RuminateError};

// Re-export all data types
pub use crate::types::{Document, DocumentBuilder, SearchResult};

// Re-export core traits
pub use crate::traits::{Docstore, TextGenerator};

// Re-export configuration helpers
pub use crate::config::{ConfigFormat, load_config, parse_config};
