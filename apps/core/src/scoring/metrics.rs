//! Metric Aggregation.
//!
//! Combines tokens, syllables, rhyme and emotion into the numeric scores of
//! the bundle: lexical diversity, complexity, flow consistency, energy and
//! the derived creativity/structure values.
//!
//! Every score lands in [0, 100]. Formulas are fixed; the only knob is the
//! [`EnergyModel`].

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use super::emotion::{count_char, EmotionBreakdown};
use super::tokenizer::LineRecord;
use crate::error::ScoringError;

/// Flow consistency reported when there is no variance to measure
pub const SINGLE_LINE_FLOW: f64 = 75.0;

/// Words per minute for the reading-time estimate
const READING_WORDS_PER_MINUTE: usize = 150;

// NOTE: expect() is acceptable here: the pattern is a literal
static CAPS_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{2,}\b").expect("Invalid regex: caps word pattern"));

/// How the energy level is weighted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyModel {
    /// Emotion, rhyme, syllable density and capped diversity
    #[default]
    Blended,
    /// Exclamation marks, shouted words and very long words
    Punctuation,
}

impl EnergyModel {
    pub fn label(&self) -> &'static str {
        match self {
            EnergyModel::Blended => "blended",
            EnergyModel::Punctuation => "punctuation",
        }
    }

    /// Energy level in [0, 100]
    pub fn level(&self, signals: &EnergySignals) -> f64 {
        let raw = match self {
            EnergyModel::Blended => {
                signals.emotion * 0.4
                    + signals.rhyme * 0.3
                    + signals.avg_syllables * 10.0
                    + signals.lexical_diversity.min(50.0) * 0.3
            }
            EnergyModel::Punctuation => {
                let long_words_bonus = if signals.avg_syllables > 2.5 { 15.0 } else { 0.0 };
                signals.exclamations as f64 * 8.0 + signals.caps_words as f64 * 5.0 + long_words_bonus
            }
        };
        raw.clamp(0.0, 100.0)
    }
}

impl fmt::Display for EnergyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for EnergyModel {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "blended" => Ok(EnergyModel::Blended),
            "punctuation" => Ok(EnergyModel::Punctuation),
            other => Err(ScoringError::Config(format!(
                "Unknown energy model '{}' (expected 'blended' or 'punctuation')",
                other
            ))),
        }
    }
}

/// Raw signals feeding the energy level
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EnergySignals {
    pub emotion: f64,
    pub rhyme: f64,
    pub avg_syllables: f64,
    pub lexical_diversity: f64,
    pub exclamations: usize,
    pub caps_words: usize,
}

/// Aggregated numeric metrics for one lyric text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LyricMetrics {
    pub word_count: usize,
    pub unique_words: usize,
    pub line_count: usize,
    pub total_syllables: u32,
    /// Syllables per non-empty line, in order
    pub line_syllables: Vec<u32>,
    pub lexical_diversity: f64,
    pub avg_syllables: f64,
    pub complexity: f64,
    pub creativity: f64,
    pub structure: f64,
    pub flow_consistency: f64,
    pub stress_points: u32,
    pub emotion: f64,
    pub rhyme: f64,
    pub energy: f64,
    pub exclamations: usize,
    pub caps_words: usize,
    /// Estimated reading time in whole minutes
    pub minutes: usize,
}

/// Combines per-component results into [`LyricMetrics`]
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricAggregator {
    energy_model: EnergyModel,
}

impl MetricAggregator {
    pub fn new(energy_model: EnergyModel) -> Self {
        Self { energy_model }
    }

    pub fn energy_model(&self) -> EnergyModel {
        self.energy_model
    }

    /// Aggregate line records, raw text, rhyme score and emotion breakdown
    pub fn aggregate(
        &self,
        text: &str,
        lines: &[LineRecord],
        rhyme: f64,
        emotion: &EmotionBreakdown,
    ) -> LyricMetrics {
        let words: Vec<&str> = lines
            .iter()
            .flat_map(|line| line.words.iter().map(|w| w.normalized.as_str()))
            .collect();

        let word_count = words.len();
        let unique_words = words.iter().collect::<HashSet<_>>().len();
        let line_syllables: Vec<u32> = lines.iter().map(|line| line.syllables).collect();
        let total_syllables: u32 = line_syllables.iter().sum();

        let lexical_diversity = lexical_diversity(unique_words, word_count);
        let avg_syllables = average_syllables(total_syllables, word_count);
        let complexity = complexity_score(lexical_diversity, avg_syllables, unique_words, word_count);
        let flow_consistency = flow_consistency(&line_syllables);

        let exclamations = count_char(text, '!');
        let caps_words = count_caps_words(text);
        let energy = self.energy_model.level(&EnergySignals {
            emotion: emotion.score,
            rhyme,
            avg_syllables,
            lexical_diversity,
            exclamations,
            caps_words,
        });

        LyricMetrics {
            word_count,
            unique_words,
            line_count: lines.len(),
            total_syllables,
            line_syllables,
            lexical_diversity,
            avg_syllables,
            complexity,
            creativity: creativity_score(complexity, lexical_diversity),
            structure: structure_score(flow_consistency, lines.len()),
            flow_consistency,
            stress_points: stress_points(avg_syllables),
            emotion: emotion.score,
            rhyme,
            energy,
            exclamations,
            caps_words,
            minutes: reading_minutes(word_count),
        }
    }
}

/// Unique words as a percentage of all words, 0 without words
pub fn lexical_diversity(unique_words: usize, total_words: usize) -> f64 {
    if total_words == 0 {
        return 0.0;
    }
    unique_words as f64 / total_words as f64 * 100.0
}

/// Mean syllables per word, 0 without words
pub fn average_syllables(total_syllables: u32, total_words: usize) -> f64 {
    if total_words == 0 {
        return 0.0;
    }
    total_syllables as f64 / total_words as f64
}

/// Diversity-weighted complexity with syllable and uniqueness bonuses
pub fn complexity_score(
    lexical_diversity: f64,
    avg_syllables: f64,
    unique_words: usize,
    total_words: usize,
) -> f64 {
    let syllable_bonus = if avg_syllables > 2.0 {
        20.0
    } else if avg_syllables > 1.5 {
        10.0
    } else {
        0.0
    };
    let unique_bonus = if unique_words as f64 > total_words as f64 * 0.7 {
        20.0
    } else {
        0.0
    };

    (lexical_diversity * 0.6 + syllable_bonus + unique_bonus).clamp(0.0, 100.0)
}

/// Population variance, 0 for an empty slice
pub fn population_variance(values: &[u32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().map(|&v| v as f64).sum::<f64>() / n;
    values
        .iter()
        .map(|&v| (v as f64 - mean).powi(2))
        .sum::<f64>()
        / n
}

/// `100 - 2 * variance` of per-line syllables; fixed value below two lines
pub fn flow_consistency(line_syllables: &[u32]) -> f64 {
    if line_syllables.len() < 2 {
        return SINGLE_LINE_FLOW;
    }
    (100.0 - population_variance(line_syllables) * 2.0).clamp(0.0, 100.0)
}

pub fn creativity_score(complexity: f64, lexical_diversity: f64) -> f64 {
    (complexity * 0.8 + lexical_diversity * 0.2).clamp(0.0, 100.0)
}

/// Flow-weighted structure score with a bonus that saturates past four lines
pub fn structure_score(flow_consistency: f64, line_count: usize) -> f64 {
    let line_bonus = if line_count > 4 {
        20.0
    } else {
        line_count as f64 * 5.0
    };
    (flow_consistency * 0.7 + line_bonus).clamp(0.0, 100.0)
}

pub fn stress_points(avg_syllables: f64) -> u32 {
    (avg_syllables * 1.4).floor() as u32
}

/// Whole reading minutes, at least one
pub fn reading_minutes(word_count: usize) -> usize {
    (word_count / READING_WORDS_PER_MINUTE).max(1)
}

/// Whole words of two or more uppercase ASCII letters
pub fn count_caps_words(text: &str) -> usize {
    CAPS_WORD.find_iter(text).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::tokenizer::WordToken;

    fn line(words: &[(&str, u32)]) -> LineRecord {
        LineRecord::new(
            words
                .iter()
                .map(|(w, s)| WordToken {
                    raw: w.to_string(),
                    normalized: w.to_lowercase(),
                    syllables: *s,
                })
                .collect(),
        )
    }

    fn no_emotion() -> EmotionBreakdown {
        EmotionBreakdown {
            positive_hits: 0,
            negative_hits: 0,
            intense_hits: 0,
            exclamations: 0,
            questions: 0,
            score: 0.0,
        }
    }

    #[test]
    fn test_lexical_diversity_bounds() {
        assert_eq!(lexical_diversity(0, 0), 0.0);
        assert_eq!(lexical_diversity(5, 5), 100.0);
        assert!((lexical_diversity(1, 3) - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_average_syllables() {
        assert_eq!(average_syllables(0, 0), 0.0);
        assert_eq!(average_syllables(9, 6), 1.5);
    }

    #[test]
    fn test_complexity_bonuses() {
        // diversity 100 -> 60, +20 syllable bonus, +20 unique bonus
        assert_eq!(complexity_score(100.0, 2.5, 10, 10), 100.0);
        // 1.5 < avg <= 2 gives the smaller bonus
        assert_eq!(complexity_score(50.0, 1.8, 5, 10), 40.0);
        // exactly 70% unique does not earn the unique bonus
        assert_eq!(complexity_score(70.0, 1.0, 7, 10), 42.0);
    }

    #[test]
    fn test_population_variance() {
        assert_eq!(population_variance(&[]), 0.0);
        assert_eq!(population_variance(&[4, 4, 4]), 0.0);
        assert_eq!(population_variance(&[3, 4]), 0.25);
    }

    #[test]
    fn test_flow_single_line_is_fixed() {
        assert_eq!(flow_consistency(&[]), SINGLE_LINE_FLOW);
        assert_eq!(flow_consistency(&[12]), SINGLE_LINE_FLOW);
    }

    #[test]
    fn test_flow_identical_lines_is_perfect() {
        assert_eq!(flow_consistency(&[8, 8, 8, 8]), 100.0);
    }

    #[test]
    fn test_flow_clamps_at_zero() {
        assert_eq!(flow_consistency(&[1, 40]), 0.0);
    }

    #[test]
    fn test_structure_and_creativity() {
        assert_eq!(structure_score(100.0, 2), 80.0);
        assert_eq!(structure_score(100.0, 6), 90.0);
        assert_eq!(structure_score(100.0, 4), 90.0);
        assert_eq!(creativity_score(50.0, 100.0), 60.0);
    }

    #[test]
    fn test_stress_points_and_minutes() {
        assert_eq!(stress_points(1.0), 1);
        assert_eq!(stress_points(1.5), 2);
        assert_eq!(stress_points(0.0), 0);
        assert_eq!(reading_minutes(10), 1);
        assert_eq!(reading_minutes(300), 2);
    }

    #[test]
    fn test_caps_words() {
        assert_eq!(count_caps_words("WE WILL rock YOU"), 3);
        assert_eq!(count_caps_words("I am Loud"), 0);
    }

    #[test]
    fn test_blended_energy() {
        let signals = EnergySignals {
            emotion: 50.0,
            rhyme: 100.0,
            avg_syllables: 1.0,
            lexical_diversity: 80.0,
            ..Default::default()
        };
        // 20 + 30 + 10 + 15
        assert!((EnergyModel::Blended.level(&signals) - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_punctuation_energy() {
        let signals = EnergySignals {
            avg_syllables: 3.0,
            exclamations: 5,
            caps_words: 4,
            ..Default::default()
        };
        // 40 + 20 + 15
        assert_eq!(EnergyModel::Punctuation.level(&signals), 75.0);

        let loud = EnergySignals {
            exclamations: 20,
            ..Default::default()
        };
        assert_eq!(EnergyModel::Punctuation.level(&loud), 100.0);
    }

    #[test]
    fn test_energy_model_parsing() {
        assert_eq!("blended".parse::<EnergyModel>().unwrap(), EnergyModel::Blended);
        assert_eq!(" Punctuation ".parse::<EnergyModel>().unwrap(), EnergyModel::Punctuation);
        assert!(matches!(
            "loud".parse::<EnergyModel>(),
            Err(ScoringError::Config(_))
        ));
    }

    #[test]
    fn test_aggregate_repeated_words() {
        let lines = vec![line(&[("echo", 2), ("echo", 2), ("echo", 2)])];
        let metrics = MetricAggregator::default().aggregate("echo echo echo", &lines, 0.0, &no_emotion());

        assert_eq!(metrics.word_count, 3);
        assert_eq!(metrics.unique_words, 1);
        assert!((metrics.lexical_diversity - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(metrics.avg_syllables, 2.0);
        assert_eq!(metrics.flow_consistency, SINGLE_LINE_FLOW);
    }

    #[test]
    fn test_aggregate_counts_lines_and_syllables() {
        let lines = vec![
            line(&[("sun", 1), ("and", 1), ("fun", 1)]),
            line(&[("under", 2), ("the", 1), ("sun", 1)]),
        ];
        let metrics = MetricAggregator::default().aggregate("", &lines, 100.0, &no_emotion());

        assert_eq!(metrics.line_count, 2);
        assert_eq!(metrics.line_syllables, vec![3, 4]);
        assert_eq!(metrics.total_syllables, 7);
        assert_eq!(metrics.unique_words, 5);
        assert_eq!(metrics.flow_consistency, 99.5);
    }
}
