//! Document type and related structures.
//!
//! Documents are what a docstore hands back for a search: the raw page
//! content plus metadata about where it came from.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Separator between paragraphs in document content.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Represents a raw document returned by a docstore.
///
/// # Examples
///
/// ```rust
/// use ruminate_core::types::Document;
///
/// let doc = Document::new("First paragraph.\n\nSecond paragraph.");
/// assert_eq!(doc.paragraphs().count(), 2);
/// assert_eq!(doc.summary(), "First paragraph.");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Unique identifier for the document.
    pub id: Uuid,

    /// Raw content of the document.
    pub content: String,

    /// Document metadata (source, title, etc.).
    ///
    /// Common metadata keys include:
    /// - `source`: Original file path or URL
    /// - `title`: Document title
    pub metadata: HashMap<String, serde_json::Value>,
}

impl Document {
    /// Create a new document with the given content.
    ///
    /// ```rust
    /// use ruminate_core::types::Document;
    ///
    /// let doc = Document::new("Hello, world!");
    /// assert_eq!(doc.content, "Hello, world!");
    /// assert!(doc.metadata.is_empty());
    /// ```
    pub fn new<S: Into<String>>(content: S) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            metadata: HashMap::new(),
        }
    }

    /// Create a builder for constructing documents with fluent API.
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::new()
    }

    /// Add or update metadata for this document.
    pub fn with_metadata<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<serde_json::Value>,
    {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Get metadata value as a string.
    pub fn get_metadata_string(&self, key: &str) -> Option<String> {
        self.metadata.get(key)?.as_str().map(String::from)
    }

    /// Iterate over the paragraphs of the content, split on blank lines.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.content.split(PARAGRAPH_SEPARATOR)
    }

    /// The first paragraph of the content.
    pub fn summary(&self) -> &str {
        self.paragraphs().next().unwrap_or_default()
    }

    /// The first `max_chars` characters of the content.
    ///
    /// Cuts on a char boundary, so multi-byte text is never split.
    pub fn excerpt(&self, max_chars: usize) -> &str {
        match self.content.char_indices().nth(max_chars) {
            Some((byte_idx, _)) => &self.content[..byte_idx],
            None => &self.content,
        }
    }

    /// Paragraphs containing `term`, compared case-insensitively.
    pub fn paragraphs_containing(&self, term: &str) -> Vec<&str> {
        let needle = term.to_lowercase();
        self.paragraphs()
            .filter(|p| p.to_lowercase().contains(&needle))
            .collect()
    }
}

/// Builder for creating documents with a fluent API.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    content: Option<String>,
    metadata: HashMap<String, serde_json::Value>,
}

impl DocumentBuilder {
    /// Create a new document builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document content.
    #[must_use]
    pub fn content<S: Into<String>>(mut self, content: S) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Add metadata to the document.
    #[must_use]
    pub fn metadata<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<serde_json::Value>,
    {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Build the document. Missing content builds an empty document.
    pub fn build(self) -> Document {
        Document {
            id: Uuid::new_v4(),
            content: self.content.unwrap_or_default(),
            metadata: self.metadata,
        }
    }
}
