//! Batch loader: commits write batches in store-sized atomic chunks.

use humanbench_core::storage::{DocumentPath, DocumentStore, Result, WriteBatch};

/// What a load wrote.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Written paths, in batch order.
    pub written: Vec<DocumentPath>,
    /// Number of atomic commits used.
    pub chunks: usize,
}

impl LoadReport {
    pub fn len(&self) -> usize {
        self.written.len()
    }

    pub fn is_empty(&self) -> bool {
        self.written.is_empty()
    }
}

/// Document count of one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionStatus {
    pub collection: String,
    pub count: usize,
}

/// Commits `batch`, split into chunks of at most
/// [`max_batch_size`](DocumentStore::max_batch_size) writes.
///
/// Each chunk is atomic; the load as a whole is not. The first failing chunk
/// aborts the load and earlier chunks stay written.
pub async fn load(store: &dyn DocumentStore, batch: WriteBatch) -> Result<LoadReport> {
    let total = batch.len();
    let chunks = batch.into_chunks(store.max_batch_size());
    let chunk_count = chunks.len();

    let mut report = LoadReport {
        written: Vec::with_capacity(total),
        chunks: 0,
    };

    for (i, chunk) in chunks.into_iter().enumerate() {
        let size = chunk.len();
        let paths = store.commit(chunk).await.map_err(|e| {
            tracing::error!(
                chunk = i + 1,
                chunks = chunk_count,
                written = report.written.len(),
                error = %e,
                "batch commit failed"
            );
            e
        })?;
        tracing::debug!(chunk = i + 1, chunks = chunk_count, size, "batch committed");
        report.written.extend(paths);
        report.chunks += 1;
    }

    tracing::info!(documents = total, chunks = report.chunks, "load complete");
    Ok(report)
}

/// Counts the documents of each collection.
pub async fn status(
    store: &dyn DocumentStore,
    collections: &[&str],
) -> Result<Vec<CollectionStatus>> {
    let mut statuses = Vec::with_capacity(collections.len());
    for collection in collections {
        statuses.push(CollectionStatus {
            collection: collection.to_string(),
            count: store.count(collection).await?,
        });
    }
    Ok(statuses)
}
