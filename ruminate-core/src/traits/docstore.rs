//! Document lookup trait.

use async_trait::async_trait;

use crate::{Result, SearchResult};

/// Looks up documents by a free-text key.
///
/// Implementations return [`SearchResult::NotFound`] for a miss and reserve
/// `Err` for failures of the store itself.
///
/// # Examples
///
/// ```rust
/// use async_trait::async_trait;
/// use ruminate_core::{Docstore, Document, Result, SearchResult};
///
/// #[derive(Debug)]
/// struct SinglePage;
///
/// #[async_trait]
/// impl Docstore for SinglePage {
///     async fn search(&self, _query: &str) -> Result<SearchResult> {
///         Ok(SearchResult::Found(Document::new("The only page.")))
///     }
/// }
/// ```
#[async_trait]
pub trait Docstore: Send + Sync + std::fmt::Debug {
    /// Search for the document best matching `query`.
    async fn search(&self, query: &str) -> Result<SearchResult>;

    /// Get a human-readable name for this docstore.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
