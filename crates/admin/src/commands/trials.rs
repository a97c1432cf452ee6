//! Decision-trial seeding.

use humanbench_core::storage::{to_document, DocumentStore, KeyStrategy, WriteBatch};
use humanbench_core::trials::{decision_trials, TRIALS_COLLECTION};

use crate::error::Result;
use crate::loader::{load, LoadReport};

/// Writes the full trial catalogue.
///
/// With [`KeyStrategy::Generated`] every run adds a fresh copy of each
/// trial; [`KeyStrategy::ContentHash`] overwrites the previous run instead.
pub async fn seed_trials(store: &dyn DocumentStore, strategy: KeyStrategy) -> Result<LoadReport> {
    let trials = decision_trials();
    tracing::info!(trials = trials.len(), ?strategy, "seeding decision trials");

    let mut batch = WriteBatch::new();
    for trial in &trials {
        batch.insert(TRIALS_COLLECTION, to_document(trial)?, strategy);
    }

    Ok(load(store, batch).await?)
}
