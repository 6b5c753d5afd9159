//! Rhyme Detection.
//!
//! Compares the end words of consecutive lines by suffix. A pair rhymes when
//! the last two characters match or the last three match. The two checks are
//! independent and the test is deliberately loose.

use serde::{Deserialize, Serialize};

use super::tokenizer::word_chars;

/// Minimum end word length (exclusive) for a pair to be compared
const MIN_END_WORD_LEN: usize = 2;

/// Outcome of rhyme detection over a set of lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RhymeReport {
    /// Cleaned end word of each line
    pub end_words: Vec<String>,
    /// Number of consecutive pairs that rhyme
    pub rhyme_count: usize,
    /// Rhyme density in percent (0.0 - 100.0)
    pub score: f64,
}

/// Consecutive-line suffix rhyme detector
#[derive(Debug, Clone, Copy, Default)]
pub struct RhymeDetector;

impl RhymeDetector {
    pub fn new() -> Self {
        Self
    }

    /// Rhyme score in [0, 100]
    pub fn score(&self, lines: &[&str]) -> f64 {
        self.analyze(lines).score
    }

    /// Full rhyme analysis
    pub fn analyze(&self, lines: &[&str]) -> RhymeReport {
        let end_words: Vec<String> = lines.iter().filter_map(|line| end_word(line)).collect();

        if lines.len() < 2 {
            return RhymeReport {
                end_words,
                rhyme_count: 0,
                score: 0.0,
            };
        }

        let rhyme_count = end_words
            .windows(2)
            .filter(|pair| suffixes_rhyme(&pair[0], &pair[1]))
            .count();

        let pairs = end_words.len().saturating_sub(1).max(1);
        let score = (rhyme_count as f64 / pairs as f64 * 100.0).clamp(0.0, 100.0);

        RhymeReport {
            end_words,
            rhyme_count,
            score,
        }
    }
}

/// Last whitespace-delimited token with non-word characters removed, lower-cased.
/// `None` for a line with no tokens.
pub fn end_word(line: &str) -> Option<String> {
    line.split_whitespace()
        .last()
        .map(|token| word_chars(token).to_lowercase())
}

/// Suffix rhyme test between two end words
pub fn suffixes_rhyme(previous: &str, current: &str) -> bool {
    let previous: Vec<char> = previous.chars().collect();
    let current: Vec<char> = current.chars().collect();

    if previous.len() <= MIN_END_WORD_LEN || current.len() <= MIN_END_WORD_LEN {
        return false;
    }

    suffix(&previous, 2) == suffix(&current, 2) || suffix(&previous, 3) == suffix(&current, 3)
}

fn suffix(chars: &[char], n: usize) -> &[char] {
    &chars[chars.len().saturating_sub(n)..]
}
