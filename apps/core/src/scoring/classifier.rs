//! Label Classification.
//!
//! Threshold ladders over aggregated scores. Each ladder is evaluated top-down
//! and the first matching rung wins.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::metrics::LyricMetrics;

/// Overall character of the lyrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Persona {
    Energetic,
    Calm,
    Emotional,
    Intellectual,
    Balanced,
}

impl Persona {
    pub fn label(&self) -> &'static str {
        match self {
            Persona::Energetic => "Energetic",
            Persona::Calm => "Calm",
            Persona::Emotional => "Emotional",
            Persona::Intellectual => "Intellectual",
            Persona::Balanced => "Balanced",
        }
    }
}

/// Energy intensity band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intensity {
    High,
    Moderate,
    Low,
}

impl Intensity {
    pub fn label(&self) -> &'static str {
        match self {
            Intensity::High => "High",
            Intensity::Moderate => "Moderate",
            Intensity::Low => "Low",
        }
    }
}

/// Rhyme density band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RhymeVariety {
    Complex,
    Moderate,
    Simple,
}

impl RhymeVariety {
    pub fn label(&self) -> &'static str {
        match self {
            RhymeVariety::Complex => "Complex",
            RhymeVariety::Moderate => "Moderate",
            RhymeVariety::Simple => "Simple",
        }
    }
}

macro_rules! impl_display_via_label {
    ($($t:ty),*) => {
        $(impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.label())
            }
        })*
    };
}

impl_display_via_label!(Persona, Intensity, RhymeVariety);

/// All categorical labels for one analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    pub persona: Persona,
    pub intensity: Intensity,
    pub rhyme_variety: RhymeVariety,
}

/// Persona ladder: energy extremes first, then emotion, then complexity
pub fn classify_persona(energy: f64, emotion: f64, complexity: f64) -> Persona {
    if energy > 80.0 {
        Persona::Energetic
    } else if energy < 30.0 {
        Persona::Calm
    } else if emotion > 70.0 {
        Persona::Emotional
    } else if complexity > 80.0 {
        Persona::Intellectual
    } else {
        Persona::Balanced
    }
}

pub fn classify_intensity(energy: f64) -> Intensity {
    if energy > 85.0 {
        Intensity::High
    } else if energy > 60.0 {
        Intensity::Moderate
    } else {
        Intensity::Low
    }
}

pub fn classify_rhyme_variety(rhyme: f64) -> RhymeVariety {
    if rhyme > 70.0 {
        RhymeVariety::Complex
    } else if rhyme > 40.0 {
        RhymeVariety::Moderate
    } else {
        RhymeVariety::Simple
    }
}

/// Classify aggregated metrics
pub fn classify(metrics: &LyricMetrics) -> Labels {
    Labels {
        persona: classify_persona(metrics.energy, metrics.emotion, metrics.complexity),
        intensity: classify_intensity(metrics.energy),
        rhyme_variety: classify_rhyme_variety(metrics.rhyme),
    }
}
