//! Pure trial builders.
//!
//! Every trial has the safe option on the left (`probability = 1`) and the
//! risky one on the right.

use super::types::{Trial, TrialOption, TIME_LIMIT_SECONDS};

const PREDICTABLE: &str = "Predictable outcome";
const UNCERTAIN: &str = "Uncertain outcome";

/// Payoffs and scores for [`context_trial`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContextOptions {
    pub safe_payoff: f64,
    pub risky_prob: f64,
    pub risky_payoff: f64,
    pub safe_score: f64,
    pub risky_score: f64,
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self {
            safe_payoff: 1.0,
            risky_prob: 0.5,
            risky_payoff: 2.0,
            safe_score: 0.5,
            risky_score: 0.8,
        }
    }
}

/// A sure amount now against a chance at a bigger payoff.
///
/// The safe side scores `sure_amount / 10`, the risky side its expected
/// value over ten.
pub fn money_trial(sure_amount: f64, risky_prob: f64, risky_payoff: f64) -> Trial {
    let percent = percent(risky_prob);
    Trial {
        prompt: format!(
            "You can take ${sure_amount} now or a {percent}% chance to win ${risky_payoff}. Which do you choose?"
        ),
        time_limit_seconds: TIME_LIMIT_SECONDS,
        active: true,
        category: "monetary".to_string(),
        left: TrialOption {
            label: format!("Take ${sure_amount} now"),
            description: "Guaranteed, no risk".to_string(),
            is_risky: false,
            probability: 1.0,
            payoff: sure_amount,
            score: sure_amount / 10.0,
        },
        right: TrialOption {
            label: format!("{percent}% chance to win ${risky_payoff}"),
            description: "High risk, high reward".to_string(),
            is_risky: true,
            probability: risky_prob,
            payoff: risky_payoff,
            score: (risky_prob * risky_payoff) / 10.0,
        },
    }
}

/// The same safe/uncertain choice presented under different labels.
pub fn framing_trial(safe_label: impl Into<String>, risky_label: impl Into<String>) -> Trial {
    context_trial(
        "framing",
        "Choose quickly between a safe and an uncertain option.",
        safe_label,
        risky_label,
        ContextOptions::default(),
    )
}

/// A generic everyday-context trial.
pub fn context_trial(
    category: impl Into<String>,
    prompt: impl Into<String>,
    safe_label: impl Into<String>,
    risky_label: impl Into<String>,
    opts: ContextOptions,
) -> Trial {
    Trial {
        prompt: prompt.into(),
        time_limit_seconds: TIME_LIMIT_SECONDS,
        active: true,
        category: category.into(),
        left: TrialOption {
            label: safe_label.into(),
            description: PREDICTABLE.to_string(),
            is_risky: false,
            probability: 1.0,
            payoff: opts.safe_payoff,
            score: opts.safe_score,
        },
        right: TrialOption {
            label: risky_label.into(),
            description: UNCERTAIN.to_string(),
            is_risky: true,
            probability: opts.risky_prob,
            payoff: opts.risky_payoff,
            score: opts.risky_score,
        },
    }
}

/// Probability as a whole percentage, rounded half up.
pub(crate) fn percent(probability: f64) -> i64 {
    (probability * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_money_trial_scores() {
        for (sure, prob, payoff) in [(10.0, 0.2, 20.0), (55.0, 0.5, 220.0), (105.0, 0.8, 315.0)] {
            let trial = money_trial(sure, prob, payoff);

            assert!((trial.left.score - sure / 10.0).abs() < EPSILON);
            assert!((trial.right.score - prob * payoff / 10.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_money_trial_text() {
        let trial = money_trial(10.0, 0.30000000000000004, 30.0);

        assert_eq!(
            trial.prompt,
            "You can take $10 now or a 30% chance to win $30. Which do you choose?"
        );
        assert_eq!(trial.left.label, "Take $10 now");
        assert_eq!(trial.right.label, "30% chance to win $30");
        assert_eq!(trial.category, "monetary");
    }

    #[test]
    fn test_money_trial_sides() {
        let trial = money_trial(20.0, 0.4, 60.0);

        assert!(!trial.left.is_risky);
        assert_eq!(trial.left.probability, 1.0);
        assert_eq!(trial.left.payoff, 20.0);
        assert!(trial.right.is_risky);
        assert_eq!(trial.right.probability, 0.4);
        assert_eq!(trial.time_limit_seconds, 10);
        assert!(trial.active);
    }

    #[test]
    fn test_context_trial_defaults() {
        let trial = context_trial(
            "travel",
            "Vacation planning: decide fast.",
            "Direct flight",
            "Multi-stop saver",
            ContextOptions::default(),
        );

        assert_eq!(trial.left.payoff, 1.0);
        assert_eq!(trial.left.score, 0.5);
        assert_eq!(trial.right.probability, 0.5);
        assert_eq!(trial.right.payoff, 2.0);
        assert_eq!(trial.right.score, 0.8);
        assert_eq!(trial.left.description, "Predictable outcome");
        assert_eq!(trial.right.description, "Uncertain outcome");
    }

    #[test]
    fn test_context_trial_partial_override() {
        let opts = ContextOptions {
            safe_score: 0.7,
            ..ContextOptions::default()
        };
        let trial = context_trial("education", "Pick one.", "A", "B", opts);

        assert_eq!(trial.left.score, 0.7);
        assert_eq!(trial.right.score, 0.8);
        assert_eq!(trial.right.payoff, 2.0);
    }

    #[test]
    fn test_framing_trial() {
        let trial = framing_trial("Save 200 people", "One-third chance to save 600");

        assert_eq!(trial.category, "framing");
        assert_eq!(
            trial.prompt,
            "Choose quickly between a safe and an uncertain option."
        );
        assert_eq!(trial.left.score, 0.5);
        assert_eq!(trial.right.score, 0.8);
        assert_eq!(trial.right.payoff, 2.0);
    }

    #[test]
    fn test_percent_rounding() {
        assert_eq!(percent(0.2), 20);
        assert_eq!(percent(0.44), 44);
        assert_eq!(percent(0.92), 92);
        assert_eq!(percent(0.555), 56);
    }
}
