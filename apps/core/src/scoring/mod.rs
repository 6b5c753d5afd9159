//! # Scoring Module
//!
//! Deterministic lyric scoring. Turns raw lyric text into a [`MetricsBundle`]
//! using surface statistics and fixed word lists only.
//!
//! ## Components
//! - `tokenizer`: words and non-empty lines
//! - `syllables`: dictionary lookup with vowel-group fallback
//! - `rhyme`: consecutive end-word suffix matching
//! - `emotion`: lexicon + punctuation emotion score
//! - `metrics`: aggregation into complexity, flow and energy
//! - `classifier`: persona / intensity / rhyme variety ladders
//! - `insights`: strengths and suggestions
//! - `lexicon`: shared read-only word lists and pronouncing dictionary
//! - `bundle`: output data structure
//! - `analyzer`: main orchestrator

pub mod analyzer;
pub mod bundle;
pub mod classifier;
pub mod emotion;
pub mod insights;
pub mod lexicon;
pub mod metrics;
pub mod rhyme;
pub mod syllables;
pub mod tokenizer;

pub use analyzer::LyricAnalyzer;
pub use bundle::{
    AnalysisMetadata, ComplexityGroup, DashboardGroup, EnergyGroup, FlowGroup, MetricsBundle,
};
pub use classifier::{Intensity, Labels, Persona, RhymeVariety};
pub use emotion::{EmotionBreakdown, EmotionScorer};
pub use insights::Insights;
pub use lexicon::{EmotionKind, Lexicon, PronouncingDictionary};
pub use metrics::{EnergyModel, LyricMetrics, MetricAggregator};
pub use rhyme::{RhymeDetector, RhymeReport};
pub use syllables::{SyllableEstimator, SyllableSource};
pub use tokenizer::{LineRecord, TokenizedLyrics, WordToken};
