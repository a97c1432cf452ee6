use thiserror::Error;

/// Errors that can occur during document store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Document not found: {path}")]
    NotFound { path: String },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Batch of {size} writes exceeds the store limit of {max}")]
    BatchTooLarge { size: usize, max: usize },
}

/// Result type for document store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
