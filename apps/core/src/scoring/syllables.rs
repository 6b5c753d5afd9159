//! Syllable Estimation.
//!
//! Two-tier strategy: pronouncing dictionary lookup first, vowel-group
//! heuristic when the dictionary is absent or does not know the word.
//! Invented words and slang always land in the heuristic, so its exact
//! behavior drives most flow scores.

use std::sync::Arc;

use super::lexicon::Lexicon;
use super::tokenizer::{normalize, word_chars};

/// Vowels for the heuristic, `y` included
const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Where a syllable count came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyllableSource {
    Dictionary,
    Heuristic,
}

/// Syllable estimator backed by the shared lexicon
#[derive(Debug, Clone)]
pub struct SyllableEstimator {
    lexicon: Arc<Lexicon>,
}

impl SyllableEstimator {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Estimated syllables in `word`, always at least 1
    pub fn estimate(&self, word: &str) -> u32 {
        self.estimate_with_source(word).0
    }

    /// Estimate and report which tier answered
    pub fn estimate_with_source(&self, word: &str) -> (u32, SyllableSource) {
        let cleaned = word_chars(word).to_lowercase();

        // Contractions keep their apostrophe in dictionary keys
        if let Some(dict) = self.lexicon.dictionary() {
            let found = dict
                .lookup(&normalize(word))
                .or_else(|| dict.lookup(&cleaned));
            if let Some(count) = found {
                return (count.max(1), SyllableSource::Dictionary);
            }
        }

        (heuristic_count(&cleaned), SyllableSource::Heuristic)
    }
}

/// Vowel-group heuristic.
///
/// Counts non-vowel → vowel transitions in the lower-cased word, drops one for
/// a trailing `e` when more than one group was found, and never returns less
/// than 1.
pub fn heuristic_count(word: &str) -> u32 {
    let word = word.to_lowercase();
    let mut count: u32 = 0;
    let mut prev_was_vowel = false;

    for c in word.chars() {
        let is_vowel = VOWELS.contains(&c);
        if is_vowel && !prev_was_vowel {
            count += 1;
        }
        prev_was_vowel = is_vowel;
    }

    if word.ends_with('e') && count > 1 {
        count -= 1;
    }

    count.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::lexicon::PronouncingDictionary;

    fn builtin_estimator() -> SyllableEstimator {
        SyllableEstimator::new(Arc::new(Lexicon::builtin().unwrap()))
    }

    #[test]
    fn test_heuristic_known_values() {
        assert_eq!(heuristic_count("sun"), 1);
        assert_eq!(heuristic_count("under"), 2);
        assert_eq!(heuristic_count("beautiful"), 3);
        assert_eq!(heuristic_count("rhythm"), 1);
        assert_eq!(heuristic_count("yellow"), 2);
    }

    #[test]
    fn test_heuristic_silent_e() {
        assert_eq!(heuristic_count("make"), 1);
        assert_eq!(heuristic_count("fire"), 1);
        // Single group ending in e keeps its one syllable
        assert_eq!(heuristic_count("the"), 1);
        assert_eq!(heuristic_count("be"), 1);
    }

    #[test]
    fn test_heuristic_is_case_insensitive() {
        assert_eq!(heuristic_count("UNDER"), heuristic_count("under"));
    }

    #[test]
    fn test_floor_for_empty_and_non_alphabetic() {
        let estimator = builtin_estimator();
        assert_eq!(estimator.estimate(""), 1);
        assert_eq!(estimator.estimate("!!!"), 1);
        assert_eq!(estimator.estimate("1234"), 1);
        assert_eq!(heuristic_count("grr"), 1);
    }

    #[test]
    fn test_estimate_strips_punctuation() {
        let estimator = builtin_estimator();
        assert_eq!(estimator.estimate("Under,"), 2);
        assert_eq!(estimator.estimate("\"beautiful!\""), 3);
    }

    #[test]
    fn test_estimate_always_positive() {
        let estimator = builtin_estimator();
        for word in ["a", "I", "why", "strengths", "onomatopoeia", "skrrt", "eee"] {
            assert!(estimator.estimate(word) >= 1, "estimate('{}') < 1", word);
        }
    }

    #[test]
    fn test_dictionary_takes_priority() {
        let dict = PronouncingDictionary::parse("RHYTHM  R IH1 DH AH0 M\n").unwrap();
        let lexicon = Lexicon::builtin().unwrap().with_dictionary(dict);
        let estimator = SyllableEstimator::new(Arc::new(lexicon));

        assert_eq!(
            estimator.estimate_with_source("Rhythm"),
            (2, SyllableSource::Dictionary)
        );
        // Unknown word falls back to the heuristic
        assert_eq!(
            estimator.estimate_with_source("skrrt"),
            (1, SyllableSource::Heuristic)
        );
    }

    #[test]
    fn test_dictionary_finds_contractions() {
        let dict = PronouncingDictionary::parse("DON'T  D OW1 N T\nYOU'RE  Y UH1 R\n").unwrap();
        let lexicon = Lexicon::builtin().unwrap().with_dictionary(dict);
        let estimator = SyllableEstimator::new(Arc::new(lexicon));

        assert_eq!(
            estimator.estimate_with_source("Don't,"),
            (1, SyllableSource::Dictionary)
        );
        assert_eq!(
            estimator.estimate_with_source("you're!"),
            (1, SyllableSource::Dictionary)
        );
    }

    #[test]
    fn test_dictionary_zero_vowel_entry_is_floored() {
        let dict = PronouncingDictionary::parse("HMM  HH M\n").unwrap();
        let lexicon = Lexicon::builtin().unwrap().with_dictionary(dict);
        let estimator = SyllableEstimator::new(Arc::new(lexicon));
        assert_eq!(estimator.estimate("hmm"), 1);
    }
}
