use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::storage::DocumentPath;

pub const PERSONALITY_SCALE_COLLECTION: &str = "personality_scale";
pub const QUESTIONS_COLLECTION: &str = "personality_questions";
pub const AGGREGATES_COLLECTION: &str = "aggregates";
pub const BIGFIVE_DOC_ID: &str = "bigfive_v1";

/// The five personality dimensions measured by the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BigFiveTrait {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

impl BigFiveTrait {
    pub const ALL: [BigFiveTrait; 5] = [
        BigFiveTrait::Openness,
        BigFiveTrait::Conscientiousness,
        BigFiveTrait::Extraversion,
        BigFiveTrait::Agreeableness,
        BigFiveTrait::Neuroticism,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BigFiveTrait::Openness => "Openness",
            BigFiveTrait::Conscientiousness => "Conscientiousness",
            BigFiveTrait::Extraversion => "Extraversion",
            BigFiveTrait::Agreeableness => "Agreeableness",
            BigFiveTrait::Neuroticism => "Neuroticism",
        }
    }
}

impl fmt::Display for BigFiveTrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A quiz statement rated on the agreement scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Display order. Not a storage key.
    pub id: u32,
    pub text: String,
    #[serde(rename = "trait")]
    pub big_five_trait: BigFiveTrait,
    pub active: bool,
}

/// One point of the Likert scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalePoint {
    pub value: u8,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityScale {
    pub scale: Vec<ScalePoint>,
    pub traits: Vec<BigFiveTrait>,
    pub questions_per_trait: u32,
}

impl PersonalityScale {
    pub fn path() -> DocumentPath {
        DocumentPath::new(PERSONALITY_SCALE_COLLECTION, BIGFIVE_DOC_ID)
    }
}

/// Running per-trait response statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregates {
    pub counts: BTreeMap<BigFiveTrait, u64>,
    pub avg: BTreeMap<BigFiveTrait, f64>,
    pub responses: u64,
}

impl Aggregates {
    pub fn path() -> DocumentPath {
        DocumentPath::new(AGGREGATES_COLLECTION, BIGFIVE_DOC_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::to_document;
    use serde_json::json;

    #[test]
    fn test_question_serializes_trait_field() {
        let question = Question {
            id: 7,
            text: "I am open to new ideas and alternative viewpoints.".to_string(),
            big_five_trait: BigFiveTrait::Openness,
            active: true,
        };
        let document = to_document(&question).unwrap();

        assert_eq!(document["trait"], json!("Openness"));
        assert_eq!(document["id"], json!(7));
        assert!(!document.contains_key("big_five_trait"));
    }

    #[test]
    fn test_aggregates_keys_are_trait_names() {
        let aggregates = Aggregates {
            counts: BigFiveTrait::ALL.iter().map(|t| (*t, 0)).collect(),
            avg: BTreeMap::new(),
            responses: 0,
        };
        let document = to_document(&aggregates).unwrap();

        assert_eq!(document["counts"]["Neuroticism"], json!(0));
    }

    #[test]
    fn test_trait_display() {
        assert_eq!(BigFiveTrait::Agreeableness.to_string(), "Agreeableness");
    }

    #[test]
    fn test_paths() {
        assert_eq!(PersonalityScale::path().to_string(), "personality_scale/bigfive_v1");
        assert_eq!(Aggregates::path().to_string(), "aggregates/bigfive_v1");
    }
}
