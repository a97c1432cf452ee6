mod error;
mod keys;
mod traits;
mod types;

pub use error::{Result, StoreError};
pub use keys::{content_hash_id, generate_document_id, KeyStrategy};
pub use traits::DocumentStore;
pub use types::{
    from_document, merge_documents, to_document, Document, DocumentPath, StoredDocument,
    WriteBatch, WriteOp,
};
