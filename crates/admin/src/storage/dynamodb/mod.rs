//! DynamoDB storage backend implementation.
//!
//! Every collection shares one table (single-table design). See [`keys`]
//! for the key layout and [`conversions`] for the JSON mapping.

pub mod conversions;
mod error;
pub mod keys;
mod store;

pub use store::{target_display, DynamoDbStore, DYNAMODB_MAX_BATCH_SIZE};
