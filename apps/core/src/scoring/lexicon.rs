//! Shared read-only lexicon data.
//!
//! Holds the emotion word categories and the optional pronouncing dictionary.
//! Built once at startup, then shared behind an `Arc` by every analyzer.
//! Nothing here is mutated after construction.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::ScoringError;

/// Positive emotion words
const POSITIVE_WORDS: &[&str] = &[
    "love", "joy", "happy", "smile", "dream", "hope", "light", "peace", "free", "win",
];

/// Negative emotion words
const NEGATIVE_WORDS: &[&str] = &[
    "hate", "pain", "sad", "cry", "fear", "dark", "lost", "hurt", "broken", "mad",
];

/// High-intensity words, weighted heavier than positive/negative
const INTENSE_WORDS: &[&str] = &[
    "fire", "burn", "rage", "passion", "wild", "crazy", "insane", "extreme",
];

/// Emotion word category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionKind {
    Positive,
    Negative,
    Intense,
}

impl EmotionKind {
    /// Points added per whole-word occurrence
    pub fn weight(&self) -> f64 {
        match self {
            EmotionKind::Positive | EmotionKind::Negative => 10.0,
            EmotionKind::Intense => 15.0,
        }
    }
}

/// One emotion category with its compiled whole-word matcher
#[derive(Debug, Clone)]
pub struct EmotionCategory {
    pub kind: EmotionKind,
    pub words: Vec<String>,
    pattern: Regex,
}

impl EmotionCategory {
    /// Build a category from a word list. An empty list is a malformed lexicon.
    pub fn new(kind: EmotionKind, words: &[&str]) -> Result<Self, ScoringError> {
        if words.is_empty() {
            return Err(ScoringError::Lexicon(format!(
                "Emotion category {:?} has no words",
                kind
            )));
        }

        let words: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
        let alternation = words
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).map_err(|e| {
            ScoringError::Lexicon(format!("Invalid pattern for {:?}: {}", kind, e))
        })?;

        Ok(Self {
            kind,
            words,
            pattern,
        })
    }

    /// Count case-insensitive whole-word occurrences in `text`
    pub fn count_in(&self, text: &str) -> usize {
        self.pattern.find_iter(text).count()
    }
}

/// Word → syllable count table in CMU pronouncing dictionary format.
#[derive(Debug, Clone, Default)]
pub struct PronouncingDictionary {
    entries: HashMap<String, u32>,
}

impl PronouncingDictionary {
    /// Parse dictionary text.
    ///
    /// Each entry is `WORD  PH1 PH2 ...`. Vowel phonemes carry a stress digit
    /// (`AH0`, `AW1`), so the syllable count is the number of phonemes ending
    /// in a digit. `;;;` lines are comments; `WORD(2)` alternates are skipped.
    pub fn parse(source: &str) -> Result<Self, ScoringError> {
        let mut entries = HashMap::new();

        for (index, raw_line) in source.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with(";;;") {
                continue;
            }

            let mut parts = line.split_whitespace();
            let Some(word) = parts.next() else {
                continue;
            };
            let phonemes: Vec<&str> = parts.collect();
            if phonemes.is_empty() {
                return Err(ScoringError::Lexicon(format!(
                    "Dictionary line {}: entry '{}' has no phonemes",
                    index + 1,
                    word
                )));
            }

            if word.ends_with(')') && word.contains('(') {
                continue;
            }

            let syllables = phonemes
                .iter()
                .filter(|p| p.chars().last().is_some_and(|c| c.is_ascii_digit()))
                .count() as u32;

            entries.entry(word.to_lowercase()).or_insert(syllables);
        }

        Ok(Self { entries })
    }

    /// Load a dictionary file from disk
    pub fn load(path: &Path) -> Result<Self, ScoringError> {
        info!("Loading pronouncing dictionary from {:?}", path);
        let source = fs::read_to_string(path)?;
        let dictionary = Self::parse(&source)?;
        info!("Pronouncing dictionary loaded: {} entries", dictionary.len());
        Ok(dictionary)
    }

    /// Syllable count for an already lower-cased word. `None` means not found.
    pub fn lookup(&self, word: &str) -> Option<u32> {
        self.entries.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Immutable lexicon shared across analyses
#[derive(Debug, Clone)]
pub struct Lexicon {
    emotion: Vec<EmotionCategory>,
    dictionary: Option<PronouncingDictionary>,
}

impl Lexicon {
    /// Built-in emotion categories, no pronouncing dictionary
    pub fn builtin() -> Result<Self, ScoringError> {
        let emotion = vec![
            EmotionCategory::new(EmotionKind::Positive, POSITIVE_WORDS)?,
            EmotionCategory::new(EmotionKind::Negative, NEGATIVE_WORDS)?,
            EmotionCategory::new(EmotionKind::Intense, INTENSE_WORDS)?,
        ];
        debug!("Built-in lexicon ready ({} emotion categories)", emotion.len());

        Ok(Self {
            emotion,
            dictionary: None,
        })
    }

    /// Attach a pronouncing dictionary as the primary syllable source
    pub fn with_dictionary(mut self, dictionary: PronouncingDictionary) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    /// Built-in lexicon plus the dictionary at `path`, if one is given
    pub fn load(dictionary_path: Option<&Path>) -> Result<Self, ScoringError> {
        let lexicon = Self::builtin()?;
        match dictionary_path {
            Some(path) => Ok(lexicon.with_dictionary(PronouncingDictionary::load(path)?)),
            None => Ok(lexicon),
        }
    }

    pub fn emotion_categories(&self) -> &[EmotionCategory] {
        &self.emotion
    }

    pub fn dictionary(&self) -> Option<&PronouncingDictionary> {
        self.dictionary.as_ref()
    }
}
