//! Core traits for the Ruminate framework.
//!
//! These traits are the seams between the reasoning loop and its
//! collaborators: a text generator that completes prompts and a docstore
//! that answers searches.

pub mod docstore;
pub mod generator;

// Re-export all traits for convenience
pub use docstore::*;
pub use generator::*;
