//! Docstore backed by a name → document map.

use std::collections::HashMap;

use async_trait::async_trait;
use ruminate_core::{Docstore, Document, Result, SearchResult};
use tracing::debug;

/// In-memory docstore keyed by document name.
///
/// Searches match the name exactly; a miss is reported as
/// `Could not find [query].` so the model can try another title.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocstore {
    documents: HashMap<String, Document>,
}

impl InMemoryDocstore {
    /// Create an empty docstore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a document under `name`.
    #[must_use]
    pub fn with_document(mut self, name: impl Into<String>, document: Document) -> Self {
        self.insert(name, document);
        self
    }

    /// Add or replace a document under `name`, returning the previous one.
    pub fn insert(&mut self, name: impl Into<String>, document: Document) -> Option<Document> {
        self.documents.insert(name.into(), document)
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the docstore holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Document)> for InMemoryDocstore {
    fn from_iter<T: IntoIterator<Item = (K, Document)>>(iter: T) -> Self {
        Self {
            documents: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[async_trait]
impl Docstore for InMemoryDocstore {
    async fn search(&self, query: &str) -> Result<SearchResult> {
        debug!("InMemoryDocstore search: {}", query);
        Ok(match self.documents.get(query) {
            Some(doc) => SearchResult::Found(doc.clone()),
            None => SearchResult::not_found(format!("Could not find [{query}].")),
        })
    }

    fn name(&self) -> &'static str {
        "InMemoryDocstore"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_search_hit_and_miss() {
        let store: InMemoryDocstore = [("LangChain", Document::new("Made in 2022."))]
            .into_iter()
            .collect();
        assert_eq!(store.len(), 1);

        let hit = store.search("LangChain").await.unwrap();
        assert_eq!(hit.into_document().unwrap().content, "Made in 2022.");

        let miss = store.search("langchain").await.unwrap();
        assert_eq!(miss, SearchResult::not_found("Could not find [langchain]."));
    }

    #[test]
    fn test_insert_replaces() {
        let mut store = InMemoryDocstore::new().with_document("a", Document::new("one"));
        let previous = store.insert("a", Document::new("two"));
        assert_eq!(previous.map(|d| d.content), Some("one".to_string()));
        assert_eq!(store.len(), 1);
    }
}
