use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::error::ScoringError;

/// Minimum non-whitespace characters a lyric text must keep after sanitization.
pub const MIN_MEANINGFUL_CHARS: usize = 10;
/// Maximum characters accepted after sanitization.
pub const MAX_TEXT_CHARS: usize = 50_000;

// NOTE: expect() is acceptable here: the patterns are literals
static MARKUP_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Invalid regex: markup tag pattern"));
static DISPLAY_UNSAFE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[<>"'&]"#).expect("Invalid regex: display field pattern"));

/// A lyric analysis request.
///
/// Only `text` is scored; the other fields are display metadata carried for
/// the caller.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LyricsInput {
    /// The lyric text. Accepted as `lyrics` as well.
    #[serde(alias = "lyrics")]
    pub text: String,
    /// Song title.
    #[validate(length(max = 200))]
    #[serde(default = "default_title")]
    pub title: String,
    /// Artist name.
    #[validate(length(max = 200))]
    #[serde(default = "default_artist")]
    pub artist: String,
    /// Requesting user.
    #[validate(length(max = 100))]
    #[serde(default = "default_user_id")]
    pub user_id: String,
}

fn default_title() -> String {
    "Untitled".to_string()
}

fn default_artist() -> String {
    "Unknown".to_string()
}

fn default_user_id() -> String {
    "anonymous".to_string()
}

impl LyricsInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            title: default_title(),
            artist: default_artist(),
            user_id: default_user_id(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = artist.into();
        self
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Sanitized and validated copy of this input.
    ///
    /// Strips markup from the text and unsafe characters from title/artist,
    /// then enforces the text bounds and field lengths.
    pub fn sanitized(&self) -> Result<Self, ScoringError> {
        let input = Self {
            text: sanitize_text(&self.text)?,
            title: clean_display_field(&self.title),
            artist: clean_display_field(&self.artist),
            user_id: self.user_id.trim().to_string(),
        };
        input.validate()?;
        Ok(input)
    }
}

/// Strip markup tags from lyric text and enforce its length bounds.
pub fn sanitize_text(raw: &str) -> Result<String, ScoringError> {
    if raw.trim().is_empty() {
        return Err(ScoringError::InvalidInput(
            "Lyrics cannot be empty".to_string(),
        ));
    }

    let cleaned = MARKUP_TAG.replace_all(raw, "").into_owned();

    let meaningful = cleaned.chars().filter(|c| !c.is_whitespace()).count();
    if meaningful < MIN_MEANINGFUL_CHARS {
        return Err(ScoringError::InvalidInput(format!(
            "Lyrics must contain at least {} characters of text (found {})",
            MIN_MEANINGFUL_CHARS, meaningful
        )));
    }

    let length = cleaned.chars().count();
    if length > MAX_TEXT_CHARS {
        return Err(ScoringError::InvalidInput(format!(
            "Lyrics exceed {} characters (found {})",
            MAX_TEXT_CHARS, length
        )));
    }

    Ok(cleaned)
}

/// Remove characters that could break out of an HTML context, then trim.
pub fn clean_display_field(value: &str) -> String {
    DISPLAY_UNSAFE.replace_all(value, "").trim().to_string()
}
