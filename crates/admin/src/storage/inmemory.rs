//! In-memory document store.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use humanbench_core::storage::{
    generate_document_id, merge_documents, Document, DocumentPath, DocumentStore, Result,
    StoreError, StoredDocument, WriteBatch, WriteOp,
};

/// Largest batch a single commit accepts.
pub const IN_MEMORY_MAX_BATCH_SIZE: usize = 500;

/// Every collection with its documents, both keyed in sorted order.
pub type Snapshot = BTreeMap<String, BTreeMap<String, Document>>;

/// In-memory storage backend.
///
/// Collections live in a `BTreeMap` wrapped in `Arc<RwLock<_>>`, so clones
/// share the same data. Nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    collections: Arc<RwLock<Snapshot>>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given data.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            collections: Arc::new(RwLock::new(snapshot)),
        }
    }

    /// Copies out the current contents.
    pub async fn snapshot(&self) -> Snapshot {
        self.collections.read().await.clone()
    }
}

fn apply(collections: &mut Snapshot, op: WriteOp) -> DocumentPath {
    match op {
        WriteOp::Set { path, data, merge } => {
            let documents = collections.entry(path.collection.clone()).or_default();
            match documents.get_mut(&path.id) {
                Some(existing) if merge => merge_documents(existing, data),
                _ => {
                    documents.insert(path.id.clone(), data);
                }
            }
            path
        }
        WriteOp::Create { collection, data } => {
            let id = generate_document_id();
            collections
                .entry(collection.clone())
                .or_default()
                .insert(id.clone(), data);
            DocumentPath::new(collection, id)
        }
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn get(&self, path: &DocumentPath) -> Result<Option<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&path.collection)
            .and_then(|documents| documents.get(&path.id))
            .cloned())
    }

    async fn list(&self, collection: &str) -> Result<Vec<StoredDocument>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .map(|(id, data)| StoredDocument {
                        path: DocumentPath::new(collection, id),
                        data: data.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn commit(&self, batch: WriteBatch) -> Result<Vec<DocumentPath>> {
        if batch.len() > IN_MEMORY_MAX_BATCH_SIZE {
            return Err(StoreError::BatchTooLarge {
                size: batch.len(),
                max: IN_MEMORY_MAX_BATCH_SIZE,
            });
        }

        // One write lock for the whole batch.
        let mut collections = self.collections.write().await;
        Ok(batch
            .into_ops()
            .into_iter()
            .map(|op| apply(&mut collections, op))
            .collect())
    }

    fn max_batch_size(&self) -> usize {
        IN_MEMORY_MAX_BATCH_SIZE
    }

    fn target_display(&self) -> String {
        "In-memory store".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            _ => panic!("test document must be an object"),
        }
    }

    #[tokio::test]
    async fn test_set_and_get() {
        let store = InMemoryStore::new();
        let path = DocumentPath::new("web_settings", "main");

        store
            .set(&path, doc(json!({"webGameEnabled": true})))
            .await
            .unwrap();

        let retrieved = store.get(&path).await.unwrap();
        assert_eq!(retrieved, Some(doc(json!({"webGameEnabled": true}))));
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let store = InMemoryStore::new();
        let path = DocumentPath::new("app_settings", "maintenance");

        assert!(store.get(&path).await.unwrap().is_none());
        assert_eq!(
            store.get_required(&path).await,
            Err(StoreError::NotFound {
                path: "app_settings/maintenance".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let store = InMemoryStore::new();
        let path = DocumentPath::new("ranks", "rookie");

        store.set(&path, doc(json!({"a": 1, "b": 2}))).await.unwrap();
        store.set(&path, doc(json!({"a": 3}))).await.unwrap();

        assert_eq!(store.get(&path).await.unwrap(), Some(doc(json!({"a": 3}))));
    }

    #[tokio::test]
    async fn test_set_merge_keeps_untouched_fields() {
        let store = InMemoryStore::new();
        let path = DocumentPath::new("ranks", "rookie");

        store.set(&path, doc(json!({"a": 1, "b": 2}))).await.unwrap();
        store.set_merge(&path, doc(json!({"a": 3}))).await.unwrap();

        assert_eq!(
            store.get(&path).await.unwrap(),
            Some(doc(json!({"a": 3, "b": 2})))
        );
    }

    #[tokio::test]
    async fn test_set_merge_creates_missing_document() {
        let store = InMemoryStore::new();
        let path = DocumentPath::new("ranks", "legend");

        store.set_merge(&path, doc(json!({"order": 10}))).await.unwrap();

        assert_eq!(
            store.get(&path).await.unwrap(),
            Some(doc(json!({"order": 10})))
        );
    }

    #[tokio::test]
    async fn test_commit_returns_paths_in_order() {
        let store = InMemoryStore::new();
        let mut batch = WriteBatch::new();
        batch
            .set(DocumentPath::new("a", "first"), doc(json!({"n": 1})))
            .create("b", doc(json!({"n": 2})))
            .set(DocumentPath::new("a", "third"), doc(json!({"n": 3})));

        let paths = store.commit(batch).await.unwrap();

        assert_eq!(paths.len(), 3);
        assert_eq!(paths[0], DocumentPath::new("a", "first"));
        assert_eq!(paths[1].collection, "b");
        assert_eq!(paths[2], DocumentPath::new("a", "third"));
        assert_eq!(
            store.get(&paths[1]).await.unwrap(),
            Some(doc(json!({"n": 2})))
        );
    }

    #[tokio::test]
    async fn test_create_generates_distinct_ids() {
        let store = InMemoryStore::new();
        let mut batch = WriteBatch::new();
        batch
            .create("decision_trials", doc(json!({"n": 1})))
            .create("decision_trials", doc(json!({"n": 1})));

        let paths = store.commit(batch).await.unwrap();

        assert_ne!(paths[0].id, paths[1].id);
        assert_eq!(store.count("decision_trials").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let store = InMemoryStore::new();
        for id in ["charlie", "alpha", "bravo"] {
            store
                .set(&DocumentPath::new("ranks", id), doc(json!({})))
                .await
                .unwrap();
        }

        let ids: Vec<String> = store
            .list("ranks")
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.path.id)
            .collect();

        assert_eq!(ids, vec!["alpha", "bravo", "charlie"]);
        assert!(store.list("missing").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_commit_rejects_oversized_batch() {
        let store = InMemoryStore::new();
        let mut batch = WriteBatch::new();
        for _ in 0..=IN_MEMORY_MAX_BATCH_SIZE {
            batch.create("decision_trials", doc(json!({})));
        }

        let result = store.commit(batch).await;

        assert_eq!(
            result,
            Err(StoreError::BatchTooLarge {
                size: IN_MEMORY_MAX_BATCH_SIZE + 1,
                max: IN_MEMORY_MAX_BATCH_SIZE,
            })
        );
        assert_eq!(store.count("decision_trials").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_clones_share_data() {
        let store = InMemoryStore::new();
        let clone = store.clone();
        let path = DocumentPath::new("web_settings", "main");

        store.set(&path, doc(json!({"x": 1}))).await.unwrap();

        assert!(clone.get(&path).await.unwrap().is_some());
        assert_eq!(clone.snapshot().await.len(), 1);
    }
}
