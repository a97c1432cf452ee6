//! JSON snapshot file store for local development.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use humanbench_core::storage::{
    Document, DocumentPath, DocumentStore, Result, StoreError, StoredDocument, WriteBatch,
};

use super::inmemory::{InMemoryStore, Snapshot};

/// An [`InMemoryStore`] loaded from, and written back to, a JSON file.
///
/// The whole snapshot is rewritten after every commit.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    inner: InMemoryStore,
    /// Serializes commit + save so snapshots land in commit order.
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Loads the snapshot at `path`. A missing file is an empty store.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let snapshot = match tokio::fs::read_to_string(&path).await {
            Ok(contents) if contents.trim().is_empty() => Snapshot::new(),
            Ok(contents) => serde_json::from_str(&contents).map_err(|e| {
                StoreError::InvalidData(format!("{}: {}", path.display(), e))
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "snapshot not found, starting empty");
                Snapshot::new()
            }
            Err(e) => {
                return Err(StoreError::ConnectionFailed(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            }
        };

        Ok(Self {
            path,
            inner: InMemoryStore::from_snapshot(snapshot),
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn save(&self) -> Result<()> {
        let snapshot = self.inner.snapshot().await;
        let contents = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, contents)
            .await
            .map_err(|e| StoreError::QueryFailed(format!("{}: {}", tmp.display(), e)))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| StoreError::QueryFailed(format!("{}: {}", self.path.display(), e)))?;

        tracing::debug!(path = %self.path.display(), "snapshot saved");
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for FileStore {
    async fn get(&self, path: &DocumentPath) -> Result<Option<Document>> {
        self.inner.get(path).await
    }

    async fn list(&self, collection: &str) -> Result<Vec<StoredDocument>> {
        self.inner.list(collection).await
    }

    async fn commit(&self, batch: WriteBatch) -> Result<Vec<DocumentPath>> {
        let _guard = self.write_lock.lock().await;
        let paths = self.inner.commit(batch).await?;
        self.save().await?;
        Ok(paths)
    }

    fn max_batch_size(&self) -> usize {
        self.inner.max_batch_size()
    }

    fn target_display(&self) -> String {
        format!("Local file ({})", self.path.display())
    }
}
