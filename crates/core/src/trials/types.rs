use serde::{Deserialize, Serialize};

pub const TRIALS_COLLECTION: &str = "decision_trials";

/// Seconds a player has to pick a side.
pub const TIME_LIMIT_SECONDS: u32 = 10;

/// One side of a decision trial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialOption {
    pub label: String,
    pub description: String,
    pub is_risky: bool,
    pub probability: f64,
    pub payoff: f64,
    /// Points awarded for picking this side.
    pub score: f64,
}

/// A decision-making stimulus: a safe option on the left, a risky one on the right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trial {
    pub prompt: String,
    pub time_limit_seconds: u32,
    pub active: bool,
    pub category: String,
    pub left: TrialOption,
    pub right: TrialOption,
}
