use thiserror::Error;

/// Problems found when checking a tier ladder.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RankError {
    #[error("No rank tiers defined")]
    Empty,
    #[error("Rank '{id}' has order {found}, expected {expected}")]
    OrderGap {
        id: String,
        expected: u32,
        found: u32,
    },
    #[error("Rank '{id}' has min score {min} above max score {max}")]
    InvertedRange { id: String, min: u32, max: u32 },
    #[error("Ranks '{lower}' and '{upper}' overlap")]
    Overlap { lower: String, upper: String },
    #[error("Scores between ranks '{lower}' and '{upper}' are not covered")]
    Gap { lower: String, upper: String },
}
