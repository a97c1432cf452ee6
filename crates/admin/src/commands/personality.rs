//! Personality-quiz seeding: scale, question bank and empty aggregates.

use humanbench_core::personality::{
    bigfive_scale, certified_questions, initial_aggregates, Aggregates, PersonalityScale,
    QUESTIONS_COLLECTION,
};
use humanbench_core::storage::{to_document, DocumentStore, KeyStrategy, WriteBatch};

use crate::error::Result;
use crate::loader::{load, LoadReport};

/// What a personality seed wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonalitySeed {
    pub scale: PersonalityScale,
    pub questions: LoadReport,
    pub aggregates: Aggregates,
}

/// Writes the scale, the question bank and zeroed aggregates, in that order.
///
/// The scale and aggregates are singletons and are overwritten; questions
/// follow `strategy`.
pub async fn seed_personality(
    store: &dyn DocumentStore,
    strategy: KeyStrategy,
) -> Result<PersonalitySeed> {
    let scale = bigfive_scale();
    store
        .set(&PersonalityScale::path(), to_document(&scale)?)
        .await?;
    tracing::info!(path = %PersonalityScale::path(), "personality scale written");

    let mut batch = WriteBatch::new();
    for question in certified_questions() {
        batch.insert(QUESTIONS_COLLECTION, to_document(&question)?, strategy);
    }
    let questions = load(store, batch).await?;
    tracing::info!(questions = questions.len(), ?strategy, "personality questions written");

    let aggregates = initial_aggregates();
    store
        .set(&Aggregates::path(), to_document(&aggregates)?)
        .await?;
    tracing::info!(path = %Aggregates::path(), "personality aggregates written");

    Ok(PersonalitySeed {
        scale,
        questions,
        aggregates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryStore;
    use humanbench_core::personality::{AGGREGATES_COLLECTION, PERSONALITY_SCALE_COLLECTION};
    use humanbench_core::storage::from_document;

    #[tokio::test]
    async fn test_seed_personality_writes_everything() {
        let store = InMemoryStore::new();

        let seed = seed_personality(&store, KeyStrategy::Generated).await.unwrap();

        assert_eq!(seed.questions.len(), 50);
        assert_eq!(store.count(QUESTIONS_COLLECTION).await.unwrap(), 50);
        assert_eq!(store.count(PERSONALITY_SCALE_COLLECTION).await.unwrap(), 1);
        assert_eq!(store.count(AGGREGATES_COLLECTION).await.unwrap(), 1);

        let scale: PersonalityScale =
            from_document(&store.get_required(&PersonalityScale::path()).await.unwrap()).unwrap();
        assert_eq!(scale, seed.scale);
    }

    #[tokio::test]
    async fn test_reseeding_duplicates_questions_only() {
        let store = InMemoryStore::new();

        seed_personality(&store, KeyStrategy::Generated).await.unwrap();
        seed_personality(&store, KeyStrategy::Generated).await.unwrap();

        assert_eq!(store.count(QUESTIONS_COLLECTION).await.unwrap(), 100);
        assert_eq!(store.count(PERSONALITY_SCALE_COLLECTION).await.unwrap(), 1);
        assert_eq!(store.count(AGGREGATES_COLLECTION).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_idempotent_reseed_keeps_fifty_questions() {
        let store = InMemoryStore::new();

        seed_personality(&store, KeyStrategy::ContentHash).await.unwrap();
        seed_personality(&store, KeyStrategy::ContentHash).await.unwrap();

        assert_eq!(store.count(QUESTIONS_COLLECTION).await.unwrap(), 50);
    }
}
