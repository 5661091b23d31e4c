//! Docstore search results.

use serde::{Deserialize, Serialize};

use super::Document;

/// Outcome of a docstore search.
///
/// A miss is not an error: the docstore explains it in a message that is
/// shown to the model as the observation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum SearchResult {
    /// A document matched the query.
    Found(Document),
    /// Nothing matched; carries a human-readable explanation.
    NotFound(String),
}

impl SearchResult {
    /// Build a miss with the given message.
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    /// Whether a document was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The found document, if any.
    pub fn into_document(self) -> Option<Document> {
        match self {
            Self::Found(doc) => Some(doc),
            Self::NotFound(_) => None,
        }
    }
}

impl From<Document> for SearchResult {
    fn from(doc: Document) -> Self {
        Self::Found(doc)
    }
}
