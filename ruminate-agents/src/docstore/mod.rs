//! Docstore implementations for agent tools.

mod in_memory;

pub use in_memory::InMemoryDocstore;
