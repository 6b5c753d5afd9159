//! LyricScore core: deterministic lyric scoring engine.

pub mod config;
pub mod error;
pub mod models;
pub mod scoring;
pub mod telemetry;

pub use config::EngineConfig;
pub use error::ScoringError;
pub use models::LyricsInput;
pub use scoring::{LyricAnalyzer, MetricsBundle};

#[cfg(test)]
mod tests;
