//! Document counts for every seeded collection.

use humanbench_core::maintenance::MAINTENANCE_COLLECTION;
use humanbench_core::personality::{
    AGGREGATES_COLLECTION, PERSONALITY_SCALE_COLLECTION, QUESTIONS_COLLECTION,
};
use humanbench_core::ranks::RANKS_COLLECTION;
use humanbench_core::storage::DocumentStore;
use humanbench_core::trials::TRIALS_COLLECTION;
use humanbench_core::web_settings::WEB_SETTINGS_COLLECTION;

use crate::error::Result;
use crate::loader::{status, CollectionStatus};

/// Every collection the admin tooling writes to.
pub const SEEDED_COLLECTIONS: [&str; 7] = [
    MAINTENANCE_COLLECTION,
    TRIALS_COLLECTION,
    PERSONALITY_SCALE_COLLECTION,
    QUESTIONS_COLLECTION,
    AGGREGATES_COLLECTION,
    RANKS_COLLECTION,
    WEB_SETTINGS_COLLECTION,
];

pub async fn seed_status(store: &dyn DocumentStore) -> Result<Vec<CollectionStatus>> {
    Ok(status(store, &SEEDED_COLLECTIONS).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{ranks::seed_ranks, web_settings::seed_web_settings};
    use crate::storage::InMemoryStore;
    use chrono::Utc;

    #[tokio::test]
    async fn test_seed_status_reports_every_collection() {
        let store = InMemoryStore::new();
        seed_ranks(&store, Utc::now()).await.unwrap();
        seed_web_settings(&store, Utc::now()).await.unwrap();

        let statuses = seed_status(&store).await.unwrap();

        assert_eq!(statuses.len(), SEEDED_COLLECTIONS.len());
        let count = |name: &str| {
            statuses
                .iter()
                .find(|s| s.collection == name)
                .map(|s| s.count)
        };
        assert_eq!(count("ranks"), Some(10));
        assert_eq!(count("web_settings"), Some(1));
        assert_eq!(count("decision_trials"), Some(0));
    }
}
