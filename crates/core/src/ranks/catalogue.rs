use chrono::{DateTime, Utc};

use super::error::RankError;
use super::types::RankTier;

// (id, name, description, min, max, color, icon)
type TierRow = (&'static str, &'static str, &'static str, u32, u32, &'static str, &'static str);

const TIERS: [TierRow; 10] = [
    ("rookie", "Rookie", "Just getting started on your cognitive journey", 0, 999, "#6B7280", "person"),
    ("novice", "Novice", "Developing your mental abilities", 1000, 1999, "#10B981", "school"),
    ("apprentice", "Apprentice", "Showing consistent improvement", 2000, 2999, "#3B82F6", "trending_up"),
    ("adept", "Adept", "Mastering multiple cognitive domains", 3000, 3999, "#8B5CF6", "star"),
    ("expert", "Expert", "Exceptional cognitive performance", 4000, 4999, "#F59E0B", "emoji_events"),
    ("master", "Master", "Elite level cognitive abilities", 5000, 5999, "#EF4444", "military_tech"),
    ("grandmaster", "Grandmaster", "Transcendent cognitive performance", 6000, 6999, "#DC2626", "workspace_premium"),
    ("champion", "Champion", "Top-tier consistent performance", 7000, 7999, "#0EA5E9", "workspace_premium"),
    ("mythic", "Mythic", "Exceptional mastery across domains", 8000, 8999, "#A855F7", "workspace_premium"),
    ("legend", "Legend", "Transcendent cognitive performance", 9000, 999_999, "#DC2626", "workspace_premium"),
];

/// The ten default tiers, ordered `1..=10`, stamped with `now`.
pub fn default_ranks(now: DateTime<Utc>) -> Vec<RankTier> {
    TIERS
        .iter()
        .zip(1u32..)
        .map(
            |(&(id, name, description, min, max, color, icon), order)| RankTier {
                id: id.to_string(),
                name: name.to_string(),
                description: description.to_string(),
                min_global_score: min,
                max_global_score: max,
                color: color.to_string(),
                icon: icon.to_string(),
                order,
                created_at: now,
                updated_at: now,
            },
        )
        .collect()
}

/// Checks that tiers are ordered `1..=n` and cover contiguous,
/// non-overlapping score ranges.
pub fn validate_tiers(tiers: &[RankTier]) -> Result<(), RankError> {
    if tiers.is_empty() {
        return Err(RankError::Empty);
    }

    for (tier, expected) in tiers.iter().zip(1u32..) {
        if tier.order != expected {
            return Err(RankError::OrderGap {
                id: tier.id.clone(),
                expected,
                found: tier.order,
            });
        }
        if tier.min_global_score > tier.max_global_score {
            return Err(RankError::InvertedRange {
                id: tier.id.clone(),
                min: tier.min_global_score,
                max: tier.max_global_score,
            });
        }
    }

    for pair in tiers.windows(2) {
        let (lower, upper) = (&pair[0], &pair[1]);
        if upper.min_global_score <= lower.max_global_score {
            return Err(RankError::Overlap {
                lower: lower.id.clone(),
                upper: upper.id.clone(),
            });
        }
        if upper.min_global_score != lower.max_global_score + 1 {
            return Err(RankError::Gap {
                lower: lower.id.clone(),
                upper: upper.id.clone(),
            });
        }
    }

    Ok(())
}
