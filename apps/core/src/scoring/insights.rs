//! Insight Generation.
//!
//! Independent threshold checks that append strength and suggestion strings
//! from a fixed catalog. Every rule is evaluated; none short-circuits.

use serde::{Deserialize, Serialize};

use super::metrics::LyricMetrics;

/// Emitted when no strength rule fires
pub const DEFAULT_STRENGTH: &str = "Solid foundation for lyrics";
/// Emitted when no suggestion rule fires
pub const DEFAULT_SUGGESTION: &str = "Experiment with different emotional tones";

/// Textual feedback for the dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insights {
    pub strengths: Vec<String>,
    pub suggestions: Vec<String>,
}

struct Rule {
    applies: fn(&LyricMetrics) -> bool,
    message: &'static str,
}

const STRENGTH_RULES: &[Rule] = &[
    Rule {
        applies: |m| m.lexical_diversity > 70.0,
        message: "High vocabulary diversity",
    },
    Rule {
        applies: |m| m.rhyme > 60.0,
        message: "Strong rhyme patterns",
    },
    Rule {
        applies: |m| m.emotion > 70.0,
        message: "High emotional expression",
    },
    Rule {
        applies: |m| m.complexity > 75.0,
        message: "Sophisticated language use",
    },
    Rule {
        applies: |m| m.energy > 70.0,
        message: "High energy and intensity",
    },
];

const SUGGESTION_RULES: &[Rule] = &[
    Rule {
        applies: |m| m.lexical_diversity < 40.0,
        message: "Try using more varied vocabulary",
    },
    Rule {
        applies: |m| m.rhyme < 30.0,
        message: "Consider adding more rhyming elements",
    },
    Rule {
        applies: |m| m.avg_syllables < 1.5,
        message: "Experiment with longer, more complex words",
    },
    Rule {
        applies: |m| m.flow_consistency < 60.0,
        message: "Work on maintaining consistent syllable patterns",
    },
];

fn collect(rules: &[Rule], metrics: &LyricMetrics, fallback: &str) -> Vec<String> {
    let mut messages: Vec<String> = rules
        .iter()
        .filter(|rule| (rule.applies)(metrics))
        .map(|rule| rule.message.to_string())
        .collect();

    if messages.is_empty() {
        messages.push(fallback.to_string());
    }
    messages
}

/// Build insights for aggregated metrics
pub fn generate(metrics: &LyricMetrics) -> Insights {
    Insights {
        strengths: collect(STRENGTH_RULES, metrics, DEFAULT_STRENGTH),
        suggestions: collect(SUGGESTION_RULES, metrics, DEFAULT_SUGGESTION),
    }
}
