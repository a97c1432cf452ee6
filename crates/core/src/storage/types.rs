use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{Result, StoreError};

/// A schemaless document: a JSON object keyed by field name.
pub type Document = serde_json::Map<String, Value>;

/// Location of a single document: `<collection>/<id>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DocumentPath {
    pub collection: String,
    pub id: String,
}

impl DocumentPath {
    /// Creates a path for the document `id` inside `collection`.
    pub fn new(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            id: id.into(),
        }
    }
}

impl fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.collection, self.id)
    }
}

/// A document read back from a store together with its location.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub path: DocumentPath,
    pub data: Document,
}

/// A single write inside a [`WriteBatch`].
#[derive(Debug, Clone, PartialEq)]
pub enum WriteOp {
    /// Overwrite (or merge into) the document at a known path.
    Set {
        path: DocumentPath,
        data: Document,
        merge: bool,
    },
    /// Insert a new document; the store assigns its id.
    Create { collection: String, data: Document },
}

impl WriteOp {
    /// Returns the collection this write targets.
    pub fn collection(&self) -> &str {
        match self {
            WriteOp::Set { path, .. } => &path.collection,
            WriteOp::Create { collection, .. } => collection,
        }
    }
}

/// An ordered group of writes applied atomically by a store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WriteBatch {
    ops: Vec<WriteOp>,
}

impl WriteBatch {
    /// Creates an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an overwrite of the document at `path`.
    pub fn set(&mut self, path: DocumentPath, data: Document) -> &mut Self {
        self.ops.push(WriteOp::Set {
            path,
            data,
            merge: false,
        });
        self
    }

    /// Queues a shallow merge into the document at `path`.
    pub fn set_merge(&mut self, path: DocumentPath, data: Document) -> &mut Self {
        self.ops.push(WriteOp::Set {
            path,
            data,
            merge: true,
        });
        self
    }

    /// Queues a new document with a store-generated id.
    pub fn create(&mut self, collection: impl Into<String>, data: Document) -> &mut Self {
        self.ops.push(WriteOp::Create {
            collection: collection.into(),
            data,
        });
        self
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn ops(&self) -> &[WriteOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<WriteOp> {
        self.ops
    }

    /// Splits the batch into consecutive batches of at most `max` writes.
    ///
    /// Order is preserved. A `max` of zero is treated as one.
    pub fn into_chunks(self, max: usize) -> Vec<WriteBatch> {
        let max = max.max(1);
        let mut chunks = Vec::with_capacity(self.ops.len().div_ceil(max));
        let mut current = WriteBatch::new();
        for op in self.ops {
            if current.len() == max {
                chunks.push(std::mem::take(&mut current));
            }
            current.ops.push(op);
        }
        if !current.is_empty() {
            chunks.push(current);
        }
        chunks
    }
}

/// Serializes a record into a [`Document`].
///
/// Fails when the record does not serialize to a JSON object.
pub fn to_document<T: Serialize>(value: &T) -> Result<Document> {
    match serde_json::to_value(value).map_err(|e| StoreError::Serialization(e.to_string()))? {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::Serialization(format!(
            "expected an object, got {}",
            json_kind(&other)
        ))),
    }
}

/// Deserializes a record from a [`Document`].
pub fn from_document<T: DeserializeOwned>(document: &Document) -> Result<T> {
    serde_json::from_value(Value::Object(document.clone()))
        .map_err(|e| StoreError::InvalidData(e.to_string()))
}

/// Shallow merge: top-level fields of `incoming` replace those of `existing`,
/// fields absent from `incoming` are kept.
pub fn merge_documents(existing: &mut Document, incoming: Document) {
    for (key, value) in incoming {
        existing.insert(key, value);
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
