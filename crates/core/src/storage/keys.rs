//! Document id generation.
//!
//! Pure functions; the only source of randomness is `Uuid::new_v4`.

use uuid::Uuid;

use super::types::{Document, DocumentPath, WriteBatch};

/// How bulk-inserted documents are keyed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyStrategy {
    /// A fresh random id per write. Reseeding duplicates documents.
    #[default]
    Generated,
    /// An id derived from the document content. Reseeding overwrites.
    ContentHash,
}

/// Generates a random document id.
pub fn generate_document_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Derives a stable id from a collection name and document content.
///
/// `Document` keeps its keys sorted, so the serialized form is canonical.
pub fn content_hash_id(collection: &str, data: &Document) -> String {
    let canonical = serde_json::to_string(data).unwrap_or_default();
    let name = format!("{collection}\n{canonical}");
    Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes())
        .simple()
        .to_string()
}

impl WriteBatch {
    /// Queues an insert into `collection`, keyed according to `strategy`.
    pub fn insert(
        &mut self,
        collection: &str,
        data: Document,
        strategy: KeyStrategy,
    ) -> &mut Self {
        match strategy {
            KeyStrategy::Generated => self.create(collection, data),
            KeyStrategy::ContentHash => {
                let id = content_hash_id(collection, &data);
                self.set(DocumentPath::new(collection, id), data)
            }
        }
    }
}
