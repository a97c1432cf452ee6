mod catalogue;
mod types;

pub use catalogue::{bigfive_scale, certified_questions, initial_aggregates, QUESTIONS_PER_TRAIT};
pub use types::{
    Aggregates, BigFiveTrait, PersonalityScale, Question, ScalePoint, AGGREGATES_COLLECTION,
    BIGFIVE_DOC_ID, PERSONALITY_SCALE_COLLECTION, QUESTIONS_COLLECTION,
};
