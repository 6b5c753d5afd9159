//! Lyric Tokenizer.
//!
//! Splits raw lyric text into whitespace-delimited words and non-empty lines.
//! No lemmatization, no locale awareness: what you see is what gets counted.

/// Punctuation stripped from both ends of a word before uniqueness counting
pub const STRIP_PUNCTUATION: &[char] = &['.', ',', '!', '?', '"', ';'];

/// Tokenized view over a lyric text. Borrows from the source string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedLyrics<'a> {
    /// Every whitespace-delimited token, in order
    pub words: Vec<&'a str>,
    /// Trimmed, non-empty lines, in order
    pub lines: Vec<&'a str>,
}

impl<'a> TokenizedLyrics<'a> {
    /// Tokenize a lyric text
    pub fn new(text: &'a str) -> Self {
        Self {
            words: split_words(text),
            lines: split_lines(text),
        }
    }

    /// True when at least one token carries a letter or digit
    pub fn has_content(&self) -> bool {
        self.words
            .iter()
            .any(|w| w.chars().any(|c| c.is_alphanumeric()))
    }
}

/// One word of a lyric line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordToken {
    /// Token as it appeared in the text
    pub raw: String,
    /// Punctuation-stripped, lower-cased form
    pub normalized: String,
    /// Estimated syllable count (>= 1)
    pub syllables: u32,
}

/// Words of one non-empty line with their syllable total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    pub words: Vec<WordToken>,
    pub syllables: u32,
}

impl LineRecord {
    pub fn new(words: Vec<WordToken>) -> Self {
        let syllables = words.iter().map(|w| w.syllables).sum();
        Self { words, syllables }
    }
}

/// Split text on any whitespace
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Split text on newlines, trimming each line and dropping blank ones
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Normalized form used to decide whether two words are "the same" word.
///
/// Strips [`STRIP_PUNCTUATION`] from both ends, then lower-cases. Inner
/// punctuation (apostrophes, hyphens) is kept.
pub fn normalize(word: &str) -> String {
    word.to_lowercase()
        .trim_matches(|c: char| STRIP_PUNCTUATION.contains(&c))
        .to_string()
}

/// Keep only word characters (letters, digits, underscore)
pub fn word_chars(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}
