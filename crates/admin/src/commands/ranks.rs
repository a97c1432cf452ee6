//! Rank-tier seeding.

use chrono::{DateTime, Utc};
use humanbench_core::ranks::{default_ranks, validate_tiers, RankTier, RANKS_COLLECTION};
use humanbench_core::storage::{from_document, to_document, DocumentStore, WriteBatch};

use crate::error::Result;
use crate::loader::{load, LoadReport};

/// Whether the seed found an existing ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RanksMode {
    Created,
    /// Existing documents were merged into, keeping fields the seed does not set.
    Updated { existing: usize },
}

/// What a rank seed wrote, and the ladder read back afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RanksSeed {
    pub mode: RanksMode,
    pub report: LoadReport,
    /// Tiers as stored, sorted by `order`.
    pub stored: Vec<RankTier>,
}

/// Writes the default tiers, keyed by tier id, then reads the collection back.
pub async fn seed_ranks(store: &dyn DocumentStore, now: DateTime<Utc>) -> Result<RanksSeed> {
    let tiers = default_ranks(now);
    if let Err(e) = validate_tiers(&tiers) {
        tracing::warn!(error = %e, "default rank ladder is inconsistent");
    }

    let existing = store.count(RANKS_COLLECTION).await?;
    let mode = if existing > 0 {
        tracing::info!(existing, "ranks collection exists, merging");
        RanksMode::Updated { existing }
    } else {
        tracing::info!("creating ranks collection");
        RanksMode::Created
    };

    let mut batch = WriteBatch::new();
    for tier in &tiers {
        let document = to_document(tier)?;
        match mode {
            RanksMode::Created => batch.set(tier.path(), document),
            RanksMode::Updated { .. } => batch.set_merge(tier.path(), document),
        };
    }
    let report = load(store, batch).await?;

    Ok(RanksSeed {
        mode,
        report,
        stored: list_ranks(store).await?,
    })
}

/// Every stored tier, sorted by `order`.
pub async fn list_ranks(store: &dyn DocumentStore) -> Result<Vec<RankTier>> {
    let mut tiers = store
        .list(RANKS_COLLECTION)
        .await?
        .iter()
        .map(|stored| from_document::<RankTier>(&stored.data))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    tiers.sort_by_key(|tier| tier.order);
    Ok(tiers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryStore;
    use chrono::TimeZone;
    use humanbench_core::storage::DocumentPath;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_seed_ranks_creates_ladder() {
        let store = InMemoryStore::new();

        let seed = seed_ranks(&store, now()).await.unwrap();

        assert_eq!(seed.mode, RanksMode::Created);
        assert_eq!(seed.report.len(), 10);
        let orders: Vec<u32> = seed.stored.iter().map(|t| t.order).collect();
        assert_eq!(orders, (1..=10).collect::<Vec<_>>());
        assert_eq!(seed.stored[0].id, "rookie");
        assert_eq!(seed.stored[9].id, "legend");
        assert!(validate_tiers(&seed.stored).is_ok());
    }

    #[tokio::test]
    async fn test_reseed_merges_into_existing_ranks() {
        let store = InMemoryStore::new();
        seed_ranks(&store, now()).await.unwrap();

        let path = DocumentPath::new(RANKS_COLLECTION, "rookie");
        let mut extra = serde_json::Map::new();
        extra.insert("badgeUrl".to_string(), json!("https://example.com/rookie.png"));
        store.set_merge(&path, extra).await.unwrap();

        let seed = seed_ranks(&store, now()).await.unwrap();

        assert_eq!(seed.mode, RanksMode::Updated { existing: 10 });
        assert_eq!(store.count(RANKS_COLLECTION).await.unwrap(), 10);
        let rookie = store.get_required(&path).await.unwrap();
        assert_eq!(rookie["badgeUrl"], "https://example.com/rookie.png");
        assert_eq!(rookie["minGlobalScore"], 0);
    }

    #[tokio::test]
    async fn test_list_ranks_sorts_by_order_not_id() {
        let store = InMemoryStore::new();
        seed_ranks(&store, now()).await.unwrap();

        // "adept" sorts first by id but has order 4.
        let tiers = list_ranks(&store).await.unwrap();

        assert_eq!(tiers[0].id, "rookie");
        assert_eq!(tiers[3].id, "adept");
    }
}
