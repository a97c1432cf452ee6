use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::DocumentPath;

pub const RANKS_COLLECTION: &str = "ranks";

/// A named band of global scores, `[min_global_score, max_global_score]` inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankTier {
    pub id: String,
    pub name: String,
    pub description: String,
    pub min_global_score: u32,
    pub max_global_score: u32,
    /// Badge color (CSS hex value).
    pub color: String,
    /// Material icon name.
    pub icon: String,
    pub order: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RankTier {
    /// Ranks are stored under their own id.
    pub fn path(&self) -> DocumentPath {
        DocumentPath::new(RANKS_COLLECTION, &self.id)
    }

    pub fn contains(&self, score: u32) -> bool {
        (self.min_global_score..=self.max_global_score).contains(&score)
    }
}
