use async_trait::async_trait;

use super::error::{Result, StoreError};
use super::types::{Document, DocumentPath, StoredDocument, WriteBatch};

/// A collection-oriented document store.
///
/// Implementors provide point reads, collection listing and atomic batch
/// commits; single-document writes are expressed as one-op batches.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Gets the document at `path`, if any.
    async fn get(&self, path: &DocumentPath) -> Result<Option<Document>>;

    /// Lists every document of a collection, ordered by document id.
    async fn list(&self, collection: &str) -> Result<Vec<StoredDocument>>;

    /// Applies every write of `batch` atomically.
    ///
    /// Returns the path written by each op, in batch order. Fails with
    /// [`StoreError::BatchTooLarge`] when the batch exceeds
    /// [`max_batch_size`](Self::max_batch_size).
    async fn commit(&self, batch: WriteBatch) -> Result<Vec<DocumentPath>>;

    /// Largest number of writes a single [`commit`](Self::commit) accepts.
    fn max_batch_size(&self) -> usize;

    /// Human-readable description of where the data lives.
    fn target_display(&self) -> String;

    /// Gets the document at `path`, failing if it does not exist.
    async fn get_required(&self, path: &DocumentPath) -> Result<Document> {
        self.get(path).await?.ok_or_else(|| StoreError::NotFound {
            path: path.to_string(),
        })
    }

    /// Overwrites the document at `path`.
    async fn set(&self, path: &DocumentPath, data: Document) -> Result<()> {
        let mut batch = WriteBatch::new();
        batch.set(path.clone(), data);
        self.commit(batch).await.map(|_| ())
    }

    /// Merges top-level fields into the document at `path`, creating it if needed.
    async fn set_merge(&self, path: &DocumentPath, data: Document) -> Result<()> {
        let mut batch = WriteBatch::new();
        batch.set_merge(path.clone(), data);
        self.commit(batch).await.map(|_| ())
    }

    /// Counts the documents of a collection.
    async fn count(&self, collection: &str) -> Result<usize> {
        Ok(self.list(collection).await?.len())
    }
}
