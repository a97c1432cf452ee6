mod catalogue;
mod error;
mod types;

pub use catalogue::{default_ranks, validate_tiers};
pub use error::RankError;
pub use types::{RankTier, RANKS_COLLECTION};
