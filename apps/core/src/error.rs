use std::io;
use thiserror::Error;

/// Engine-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error)]
pub enum ScoringError {
    /// The lyric text cannot be scored (empty, too short, too long, or no words left).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Represents field validation errors on a `LyricsInput`.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents malformed lexicon or dictionary data. Fatal at startup.
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// Represents configuration-related errors (e.g., bad environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Clone for ScoringError {
    fn clone(&self) -> Self {
        match self {
            ScoringError::InvalidInput(s) => ScoringError::InvalidInput(s.clone()),
            ScoringError::Validation(s) => ScoringError::Validation(s.clone()),
            ScoringError::Lexicon(s) => ScoringError::Lexicon(s.clone()),
            ScoringError::Config(s) => ScoringError::Config(s.clone()),
            ScoringError::Io(e) => ScoringError::Io(io::Error::new(e.kind(), e.to_string())),
        }
    }
}

impl From<validator::ValidationErrors> for ScoringError {
    fn from(err: validator::ValidationErrors) -> Self {
        ScoringError::Validation(format!("Validation errors: {}", err))
    }
}

impl From<serde_json::Error> for ScoringError {
    fn from(err: serde_json::Error) -> Self {
        ScoringError::Validation(format!("JSON error: {}", err))
    }
}

impl ScoringError {
    /// Whether the caller sent something unusable (maps to a client error status).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ScoringError::InvalidInput(_) | ScoringError::Validation(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_classification() {
        assert!(ScoringError::InvalidInput("empty".into()).is_client_error());
        assert!(ScoringError::Validation("title".into()).is_client_error());
        assert!(!ScoringError::Lexicon("bad".into()).is_client_error());
        assert!(!ScoringError::Config("bad".into()).is_client_error());
    }

    #[test]
    fn test_clone_preserves_message() {
        let err = ScoringError::Io(io::Error::new(io::ErrorKind::NotFound, "missing.dict"));
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }
}
