//! Metrics Bundle - Output structure for lyric analysis.
//!
//! Field names are the wire contract consumed by the dashboard frontend
//! (`avgSyllables`, `rhymeVariety`, `stressPoints`, ...), so every group is
//! serialized in camelCase.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::classifier::{Intensity, Labels, Persona, RhymeVariety};
use super::insights::Insights;
use super::metrics::{EnergyModel, LyricMetrics};

/// Lexical complexity scores (0.0 - 100.0)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityGroup {
    pub overall: f64,
    pub creativity: f64,
    pub lexical_diversity: f64,
    pub emotion: f64,
    pub structure: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyGroup {
    pub persona: Persona,
    /// Energy level (0.0 - 100.0)
    pub level: f64,
    pub intensity: Intensity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowGroup {
    /// Flow consistency (0.0 - 100.0)
    pub consistency: f64,
    /// Average syllables per word, rounded to two decimals
    pub avg_syllables: f64,
    pub stress_points: u32,
    pub rhyme_variety: RhymeVariety,
}

/// Aggregate counters for the dashboard tiles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardGroup {
    pub sessions: u32,
    pub words: usize,
    pub minutes: usize,
    pub avg_energy: u32,
    pub favorite_persona: Persona,
    pub lexical_diversity: u32,
    pub unique_words: usize,
    pub total_syllables: u32,
    pub rhyme_score: u32,
    pub emotion_score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMetadata {
    pub analysis_date: DateTime<Utc>,
    pub model: String,
    pub version: String,
    pub energy_model: EnergyModel,
}

/// Complete result of one lyric analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsBundle {
    pub complexity: ComplexityGroup,
    pub energy: EnergyGroup,
    pub flow: FlowGroup,
    pub dashboard: DashboardGroup,
    pub insights: Insights,
    pub metadata: AnalysisMetadata,
}

impl MetricsBundle {
    /// Assemble the wire bundle from scored metrics and labels
    pub fn assemble(
        metrics: &LyricMetrics,
        labels: Labels,
        insights: Insights,
        metadata: AnalysisMetadata,
    ) -> Self {
        Self {
            complexity: ComplexityGroup {
                overall: metrics.complexity,
                creativity: metrics.creativity,
                lexical_diversity: metrics.lexical_diversity,
                emotion: metrics.emotion,
                structure: metrics.structure,
            },
            energy: EnergyGroup {
                persona: labels.persona,
                level: metrics.energy,
                intensity: labels.intensity,
            },
            flow: FlowGroup {
                consistency: metrics.flow_consistency,
                avg_syllables: round_to(metrics.avg_syllables, 2),
                stress_points: metrics.stress_points,
                rhyme_variety: labels.rhyme_variety,
            },
            dashboard: DashboardGroup {
                sessions: 1,
                words: metrics.word_count,
                minutes: metrics.minutes,
                avg_energy: percent(metrics.energy),
                favorite_persona: labels.persona,
                lexical_diversity: percent(metrics.lexical_diversity),
                unique_words: metrics.unique_words,
                total_syllables: metrics.total_syllables,
                rhyme_score: percent(metrics.rhyme),
                emotion_score: percent(metrics.emotion),
            },
            insights,
            metadata,
        }
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Persona: {}, Energy: {:.1} ({}), Complexity: {:.1}, Flow: {:.1}, Rhyme: {}, Words: {}",
            self.energy.persona,
            self.energy.level,
            self.energy.intensity,
            self.complexity.overall,
            self.flow.consistency,
            self.flow.rhyme_variety,
            self.dashboard.words
        )
    }
}

/// Round to `decimals` places, halves to the even neighbour
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// Round a [0, 100] score to a whole dashboard percentage, halves to even
fn percent(value: f64) -> u32 {
    value.clamp(0.0, 100.0).round_ties_even() as u32
}
