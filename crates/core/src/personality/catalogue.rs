//! Big Five quiz content: agreement scale, certified questions, empty aggregates.

use super::types::{Aggregates, BigFiveTrait, PersonalityScale, Question, ScalePoint};

pub const QUESTIONS_PER_TRAIT: usize = 10;

const SCALE_LABELS: [&str; 5] = [
    "Strongly Disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];

// Items adapted from NEO-PI-R, BFI and related validated instruments.
const QUESTION_BANK: [(BigFiveTrait, [&str; QUESTIONS_PER_TRAIT]); 5] = [
    (
        BigFiveTrait::Openness,
        [
            "I have a vivid imagination and daydream frequently.",
            "I enjoy abstract philosophical discussions and theoretical concepts.",
            "I appreciate art, music, and poetry that challenges conventional thinking.",
            "I am curious about different cultures and ways of life.",
            "I enjoy trying new foods and cuisines from around the world.",
            "I like to explore new places and travel to unfamiliar destinations.",
            "I am open to new ideas and alternative viewpoints.",
            "I enjoy solving complex puzzles and intellectual challenges.",
            "I appreciate unconventional and avant-garde forms of expression.",
            "I am interested in science and scientific discoveries.",
        ],
    ),
    (
        BigFiveTrait::Conscientiousness,
        [
            "I keep my workspace organized and maintain a systematic approach to tasks.",
            "I complete tasks on time and consistently meet deadlines.",
            "I plan ahead and think carefully about the future consequences of my actions.",
            "I pay attention to details and strive for accuracy in my work.",
            "I follow rules and procedures even when no one is watching.",
            "I am persistent and work hard to achieve my goals.",
            "I prefer to have a clear schedule and routine in my daily life.",
            "I think things through before making important decisions.",
            "I am reliable and can be counted on to follow through on commitments.",
            "I prefer order and structure in my environment and activities.",
        ],
    ),
    (
        BigFiveTrait::Extraversion,
        [
            "I feel energized when spending time with large groups of people.",
            "I enjoy being the center of attention in social situations.",
            "I prefer to work in teams rather than alone.",
            "I am talkative and enjoy engaging in conversations with others.",
            "I seek out social activities and enjoy being around people.",
            "I am enthusiastic and express my emotions openly.",
            "I take charge in group situations and enjoy leadership roles.",
            "I am adventurous and willing to take risks in social situations.",
            "I enjoy public speaking and performing in front of others.",
            "I make friends easily and have a wide social network.",
        ],
    ),
    (
        BigFiveTrait::Agreeableness,
        [
            "I find it easy to forgive others when they make mistakes.",
            "I enjoy helping others and being of service to people in need.",
            "I avoid conflicts and arguments when possible.",
            "I trust others and believe people are generally honest and well-intentioned.",
            "I am cooperative and work well with others in group settings.",
            "I am sympathetic and concerned about the feelings of others.",
            "I am modest and don't like to draw attention to my accomplishments.",
            "I am patient and tolerant of people who are different from me.",
            "I am generous and willing to share my time and resources with others.",
            "I avoid criticizing others and try to see the good in people.",
        ],
    ),
    (
        BigFiveTrait::Neuroticism,
        [
            "I often worry about things that could go wrong in the future.",
            "I feel stressed or anxious in challenging or uncertain situations.",
            "I experience mood swings and emotional ups and downs.",
            "I am easily upset and take things personally.",
            "I often feel nervous or tense in social situations.",
            "I have difficulty controlling my emotions and reactions.",
            "I am self-critical and often doubt my abilities and decisions.",
            "I have trouble relaxing and often feel restless or on edge.",
            "I am sensitive to criticism and rejection from others.",
            "I tend to overthink situations and dwell on negative thoughts.",
        ],
    ),
];

/// The five-point agreement scale shared by every question.
pub fn bigfive_scale() -> PersonalityScale {
    PersonalityScale {
        scale: SCALE_LABELS
            .iter()
            .zip(1u8..)
            .map(|(label, value)| ScalePoint {
                value,
                label: (*label).to_string(),
            })
            .collect(),
        traits: BigFiveTrait::ALL.to_vec(),
        questions_per_trait: QUESTIONS_PER_TRAIT as u32,
    }
}

/// All fifty questions, grouped by trait, with ids `1..=50`.
pub fn certified_questions() -> Vec<Question> {
    QUESTION_BANK
        .iter()
        .flat_map(|(big_five_trait, texts)| texts.iter().map(move |text| (*big_five_trait, *text)))
        .zip(1u32..)
        .map(|((big_five_trait, text), id)| Question {
            id,
            text: text.to_string(),
            big_five_trait,
            active: true,
        })
        .collect()
}

/// Zeroed counters for every trait.
pub fn initial_aggregates() -> Aggregates {
    Aggregates {
        counts: BigFiveTrait::ALL.iter().map(|t| (*t, 0)).collect(),
        avg: BigFiveTrait::ALL.iter().map(|t| (*t, 0.0)).collect(),
        responses: 0,
    }
}
