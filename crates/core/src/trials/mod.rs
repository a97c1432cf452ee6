mod catalogue;
mod templates;
mod types;

pub use catalogue::{decision_trials, TRIAL_CATEGORIES, TRIALS_PER_CATEGORY};
pub use templates::{context_trial, framing_trial, money_trial, ContextOptions};
pub use types::{Trial, TrialOption, TIME_LIMIT_SECONDS, TRIALS_COLLECTION};
