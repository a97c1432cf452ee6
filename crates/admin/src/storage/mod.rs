//! Storage backend implementations.
//!
//! This module provides concrete implementations of the `DocumentStore`
//! trait defined in `humanbench_core::storage`. The backend used by the
//! binary is selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `local` (default): JSON snapshot file backed by the in-memory store
//! - `dynamodb`: AWS DynamoDB storage backend using `aws-sdk-dynamodb`
//!
//! These features are mutually exclusive. The in-memory store is always
//! compiled; the file backend and the tests build on it.
//!
//! Build with DynamoDB:
//! ```bash
//! cargo build -p humanbench_admin --no-default-features --features dynamodb
//! ```

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "local", feature = "dynamodb"))]
compile_error!(
    "Features 'local' and 'dynamodb' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "local", feature = "dynamodb")))]
compile_error!(
    "No storage backend selected. Enable 'local' or 'dynamodb' feature. \
    Example: cargo build -p humanbench_admin --features local"
);

mod inmemory;

#[cfg(feature = "local")]
mod file;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

pub use inmemory::{InMemoryStore, Snapshot, IN_MEMORY_MAX_BATCH_SIZE};

#[cfg(feature = "local")]
pub use file::FileStore;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbStore;

use humanbench_core::storage::Result;

use crate::config::Config;

/// The backend selected at build time.
#[cfg(feature = "local")]
pub type Store = FileStore;

/// The backend selected at build time.
#[cfg(feature = "dynamodb")]
pub type Store = DynamoDbStore;

/// Opens the configured backend.
#[cfg(feature = "local")]
pub async fn open(config: &Config) -> Result<Store> {
    FileStore::open(&config.data_file).await
}

/// Opens the configured backend.
#[cfg(feature = "dynamodb")]
pub async fn open(config: &Config) -> Result<Store> {
    DynamoDbStore::from_config(config).await
}
