//! Core data types for the Ruminate framework.

pub mod document;
pub mod search;

pub use document::{Document, DocumentBuilder, PARAGRAPH_SEPARATOR};
pub use search::SearchResult;
