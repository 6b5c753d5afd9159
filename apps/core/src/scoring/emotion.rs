//! Emotion Scoring.
//!
//! Absolute-point accumulation over the lexicon's emotion categories plus a
//! punctuation bonus. Score is clamped to [0, 100].

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::lexicon::{EmotionKind, Lexicon};

/// Points per exclamation mark
const EXCLAMATION_POINTS: f64 = 5.0;
/// Points per question mark
const QUESTION_POINTS: f64 = 3.0;

/// Per-signal breakdown of an emotion score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionBreakdown {
    pub positive_hits: usize,
    pub negative_hits: usize,
    pub intense_hits: usize,
    pub exclamations: usize,
    pub questions: usize,
    /// Clamped emotion score (0.0 - 100.0)
    pub score: f64,
}

/// Lexicon + punctuation emotion scorer
#[derive(Debug, Clone)]
pub struct EmotionScorer {
    lexicon: Arc<Lexicon>,
}

impl EmotionScorer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Emotion score in [0, 100]
    pub fn score(&self, text: &str) -> f64 {
        self.analyze(text).score
    }

    /// Score with per-category hit counts
    pub fn analyze(&self, text: &str) -> EmotionBreakdown {
        let mut breakdown = EmotionBreakdown {
            positive_hits: 0,
            negative_hits: 0,
            intense_hits: 0,
            exclamations: count_char(text, '!'),
            questions: count_char(text, '?'),
            score: 0.0,
        };

        let mut raw = 0.0;
        for category in self.lexicon.emotion_categories() {
            let hits = category.count_in(text);
            raw += hits as f64 * category.kind.weight();

            match category.kind {
                EmotionKind::Positive => breakdown.positive_hits += hits,
                EmotionKind::Negative => breakdown.negative_hits += hits,
                EmotionKind::Intense => breakdown.intense_hits += hits,
            }
        }

        raw += breakdown.exclamations as f64 * EXCLAMATION_POINTS;
        raw += breakdown.questions as f64 * QUESTION_POINTS;

        breakdown.score = raw.clamp(0.0, 100.0);
        breakdown
    }
}

/// Occurrences of `needle` anywhere in `text`
pub fn count_char(text: &str, needle: char) -> usize {
    text.chars().filter(|c| *c == needle).count()
}
