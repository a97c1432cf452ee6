//! The seeded decision-trial catalogue: ten categories of twenty trials.

use super::templates::{context_trial, money_trial, percent, ContextOptions};
use super::types::Trial;

pub const TRIALS_PER_CATEGORY: usize = 20;

pub const TRIAL_CATEGORIES: [&str; 10] = [
    "monetary_gain",
    "monetary_loss",
    "career",
    "investment",
    "travel",
    "social",
    "health_fitness",
    "technology",
    "education",
    "lifestyle",
];

/// A labelled category: safe and risky labels are cycled independently.
struct LabelledCategory {
    category: &'static str,
    prompt: &'static str,
    safe: &'static [&'static str],
    risky: &'static [&'static str],
    opts: fn(usize) -> ContextOptions,
}

static LABELLED: [LabelledCategory; 8] = [
    LabelledCategory {
        category: "career",
        prompt: "You must choose between two job offers in 10 seconds.",
        safe: &[
            "Safe & steady job",
            "Stable company role",
            "Keep current position",
            "Local offer",
        ],
        risky: &[
            "Exciting & uncertain job",
            "Early-stage startup role",
            "Apply for ambitious role",
            "Relocation to fast-growing hub",
        ],
        opts: |_| ContextOptions {
            safe_score: 0.5,
            risky_score: 0.9,
            risky_prob: 0.5,
            risky_payoff: 2.0,
            ..ContextOptions::default()
        },
    },
    LabelledCategory {
        category: "investment",
        prompt: "Pick an investment strategy quickly.",
        safe: &["Government bonds", "Index fund", "Blue-chip stock"],
        risky: &["Crypto asset", "Leveraged ETF", "Emerging startup"],
        opts: |i| ContextOptions {
            safe_score: 0.6,
            risky_score: 1.0,
            risky_prob: 0.45 + (i % 4) as f64 * 0.1,
            risky_payoff: 3.0,
            ..ContextOptions::default()
        },
    },
    LabelledCategory {
        category: "travel",
        prompt: "Vacation planning: decide fast.",
        safe: &["Direct flight", "Familiar destination", "Guided tour"],
        risky: &["Multi-stop saver", "Remote destination", "Solo backpacking"],
        opts: |_| ContextOptions {
            safe_score: 0.5,
            risky_score: 0.8,
            risky_prob: 0.6,
            risky_payoff: 2.0,
            ..ContextOptions::default()
        },
    },
    LabelledCategory {
        category: "social",
        prompt: "Social plan: choose now.",
        safe: &["Small gathering", "Dinner with friends", "Stay home"],
        risky: &["Large party", "Public speaking", "Network event"],
        opts: |_| ContextOptions {
            safe_score: 0.4,
            risky_score: 0.9,
            risky_prob: 0.5,
            risky_payoff: 2.0,
            ..ContextOptions::default()
        },
    },
    LabelledCategory {
        category: "health_fitness",
        prompt: "Health & fitness decision under time pressure.",
        safe: &["Moderate workout", "Balanced meal plan", "Regular sleep"],
        risky: &["Max intensity HIIT", "Crash diet", "All-nighter project"],
        opts: |_| ContextOptions {
            safe_score: 0.7,
            risky_score: 0.6,
            risky_prob: 0.4,
            risky_payoff: 1.5,
            ..ContextOptions::default()
        },
    },
    LabelledCategory {
        category: "technology",
        prompt: "Choose a technology approach quickly.",
        safe: &["Stable LTS stack", "Proven framework", "Vendor-supported tool"],
        risky: &[
            "New beta framework",
            "In-house experimental tool",
            "Unproven library",
        ],
        opts: |_| ContextOptions {
            safe_score: 0.6,
            risky_score: 1.0,
            risky_prob: 0.5,
            risky_payoff: 3.0,
            ..ContextOptions::default()
        },
    },
    LabelledCategory {
        category: "education",
        prompt: "Education plan: pick one in 10s.",
        safe: &["Accredited course", "Structured curriculum", "Certified path"],
        risky: &[
            "Self-taught sprint",
            "Drop into advanced class",
            "Skip fundamentals",
        ],
        opts: |_| ContextOptions {
            safe_score: 0.7,
            risky_score: 0.9,
            risky_prob: 0.45,
            risky_payoff: 2.5,
            ..ContextOptions::default()
        },
    },
    LabelledCategory {
        category: "lifestyle",
        prompt: "Lifestyle choice: decide fast.",
        safe: &["Keep routine", "Budget spending", "Cook at home"],
        risky: &["Spontaneous trip", "Big purchase now", "Dine out often"],
        opts: |_| ContextOptions {
            safe_score: 0.5,
            risky_score: 0.8,
            risky_prob: 0.55,
            risky_payoff: 2.0,
            ..ContextOptions::default()
        },
    },
];

/// Builds the full catalogue in category order.
///
/// ```
/// use humanbench_core::trials::{decision_trials, TRIALS_PER_CATEGORY, TRIAL_CATEGORIES};
///
/// let trials = decision_trials();
/// assert_eq!(trials.len(), TRIALS_PER_CATEGORY * TRIAL_CATEGORIES.len());
/// ```
pub fn decision_trials() -> Vec<Trial> {
    let mut trials = Vec::with_capacity(TRIALS_PER_CATEGORY * TRIAL_CATEGORIES.len());
    trials.extend(monetary_gain_trials());
    trials.extend(monetary_loss_trials());
    for labelled in &LABELLED {
        trials.extend(labelled_trials(labelled));
    }
    trials
}

fn monetary_gain_trials() -> impl Iterator<Item = Trial> {
    (0..TRIALS_PER_CATEGORY).map(|i| {
        let sure = 10.0 + i as f64 * 5.0;
        let prob = (0.2 + (i % 7) as f64 * 0.1).min(0.9);
        let risky_payoff = sure * (2 + i % 3) as f64;
        money_trial(sure, prob, risky_payoff)
    })
}

fn monetary_loss_trials() -> impl Iterator<Item = Trial> {
    (0..TRIALS_PER_CATEGORY).map(|i| {
        let sure_loss = 8.0 + i as f64 * 4.0;
        let prob = (0.2 + (i % 6) as f64 * 0.12).min(0.95);
        let risky_loss = sure_loss * (2 + i % 3) as f64;
        let percent = percent(prob);
        context_trial(
            "monetary_loss",
            format!("Lose ${sure_loss} now or a {percent}% chance to lose ${risky_loss}?"),
            format!("Accept ${sure_loss} loss now"),
            format!("{percent}% chance to lose ${risky_loss}"),
            ContextOptions {
                safe_payoff: 1.0,
                risky_prob: prob,
                risky_payoff: 2.0,
                safe_score: 0.4,
                risky_score: 0.6,
            },
        )
    })
}

fn labelled_trials(labelled: &'static LabelledCategory) -> impl Iterator<Item = Trial> {
    (0..TRIALS_PER_CATEGORY).map(move |i| {
        let n = i + 1;
        let safe = labelled.safe[i % labelled.safe.len()];
        let risky = labelled.risky[i % labelled.risky.len()];
        context_trial(
            labelled.category,
            labelled.prompt,
            format!("{safe} (#{n})"),
            format!("{risky} (#{n})"),
            (labelled.opts)(i),
        )
    })
}
