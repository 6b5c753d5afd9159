//! Lyric Analyzer - Main orchestrator for the scoring module.
//!
//! Runs the pipeline strictly in order:
//! 1. Sanitize and tokenize
//! 2. Syllables per word and per line
//! 3. Rhyme and emotion scores
//! 4. Aggregate metrics
//! 5. Labels and insights
//!
//! The analyzer owns no mutable state. One instance can serve any number of
//! concurrent callers.

use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::bundle::{AnalysisMetadata, MetricsBundle};
use super::classifier::{classify, Labels};
use super::emotion::EmotionScorer;
use super::insights::generate;
use super::lexicon::Lexicon;
use super::metrics::{LyricMetrics, MetricAggregator};
use super::rhyme::RhymeDetector;
use super::syllables::SyllableEstimator;
use super::tokenizer::{normalize, LineRecord, TokenizedLyrics, WordToken};
use crate::config::EngineConfig;
use crate::error::ScoringError;
use crate::models::{sanitize_text, LyricsInput};

/// Main lyric analyzer that orchestrates all scoring components
#[derive(Debug, Clone)]
pub struct LyricAnalyzer {
    syllables: SyllableEstimator,
    rhyme: RhymeDetector,
    emotion: EmotionScorer,
    aggregator: MetricAggregator,
    model_name: String,
}

impl LyricAnalyzer {
    /// Create an analyzer over a shared lexicon
    pub fn new(lexicon: Arc<Lexicon>, config: &EngineConfig) -> Self {
        Self {
            syllables: SyllableEstimator::new(Arc::clone(&lexicon)),
            rhyme: RhymeDetector::new(),
            emotion: EmotionScorer::new(lexicon),
            aggregator: MetricAggregator::new(config.energy_model),
            model_name: config.model_name.clone(),
        }
    }

    /// Load the lexicon described by `config` and build an analyzer on it
    pub fn from_config(config: &EngineConfig) -> Result<Self, ScoringError> {
        let lexicon = Lexicon::load(config.dictionary_path.as_deref())?;
        Ok(Self::new(Arc::new(lexicon), config))
    }

    /// Analyzer with the built-in lexicon and default configuration
    pub fn with_defaults() -> Result<Self, ScoringError> {
        Ok(Self::new(
            Arc::new(Lexicon::builtin()?),
            &EngineConfig::default(),
        ))
    }

    /// Analyze lyric text and produce a metrics bundle
    pub fn analyze(&self, text: &str) -> Result<MetricsBundle, ScoringError> {
        let start = Instant::now();

        let (metrics, labels) = self.score(text)?;
        let insights = generate(&metrics);
        let metadata = AnalysisMetadata {
            analysis_date: Utc::now(),
            model: self.model_name.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            energy_model: self.aggregator.energy_model(),
        };

        let bundle = MetricsBundle::assemble(&metrics, labels, insights, metadata);

        info!("Lyric analysis complete: {}", bundle.summary());
        debug!("Lyric analysis took {:?}", start.elapsed());

        Ok(bundle)
    }

    /// Validate a full request, then analyze its text
    pub fn analyze_input(&self, input: &LyricsInput) -> Result<MetricsBundle, ScoringError> {
        let input = input.sanitized()?;
        debug!(
            "Analyzing '{}' by '{}' for user '{}'",
            input.title, input.artist, input.user_id
        );
        self.analyze(&input.text)
    }

    /// Numeric metrics and labels, without insights or metadata
    pub fn score(&self, text: &str) -> Result<(LyricMetrics, Labels), ScoringError> {
        let text = sanitize_text(text)?;
        let tokens = TokenizedLyrics::new(&text);

        if tokens.lines.is_empty() || !tokens.has_content() {
            return Err(ScoringError::InvalidInput(
                "No words found in lyrics".to_string(),
            ));
        }

        let lines = self.build_lines(&tokens.lines);
        let rhyme = self.rhyme.score(&tokens.lines);
        let emotion = self.emotion.analyze(&text);

        debug!(
            "Tokenized {} words over {} lines (rhyme {:.1}, emotion {:.1})",
            tokens.words.len(),
            lines.len(),
            rhyme,
            emotion.score
        );

        let metrics = self.aggregator.aggregate(&text, &lines, rhyme, &emotion);
        let labels = classify(&metrics);

        Ok((metrics, labels))
    }

    fn build_lines(&self, lines: &[&str]) -> Vec<LineRecord> {
        lines
            .iter()
            .map(|line| {
                let words = line
                    .split_whitespace()
                    .map(|raw| WordToken {
                        raw: raw.to_string(),
                        normalized: normalize(raw),
                        syllables: self.syllables.estimate(raw),
                    })
                    .collect();
                LineRecord::new(words)
            })
            .collect()
    }
}
