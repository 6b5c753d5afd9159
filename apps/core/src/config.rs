//! Engine configuration.
//!
//! Read from the process environment, after loading a `.env` file if present.
//!
//! | Variable                  | Meaning                                   |
//! |---------------------------|-------------------------------------------|
//! | `LYRICSCORE_DICTIONARY`   | Path to a CMU pronouncing dictionary      |
//! | `LYRICSCORE_ENERGY_MODEL` | `blended` (default) or `punctuation`      |
//! | `LYRICSCORE_MODEL_NAME`   | Model label written to bundle metadata    |

use std::env;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::error::ScoringError;
use crate::scoring::EnergyModel;

pub const DICTIONARY_ENV: &str = "LYRICSCORE_DICTIONARY";
pub const ENERGY_MODEL_ENV: &str = "LYRICSCORE_ENERGY_MODEL";
pub const MODEL_NAME_ENV: &str = "LYRICSCORE_MODEL_NAME";

pub const DEFAULT_MODEL_NAME: &str = "computational-v1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Optional pronouncing dictionary; the heuristic is used alone without it
    pub dictionary_path: Option<PathBuf>,
    pub energy_model: EnergyModel,
    pub model_name: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dictionary_path: None,
            energy_model: EnergyModel::default(),
            model_name: DEFAULT_MODEL_NAME.to_string(),
        }
    }
}

impl EngineConfig {
    /// Load `.env` (if any), then read the environment
    pub fn from_env() -> Result<Self, ScoringError> {
        if let Ok(path) = dotenv::dotenv() {
            info!("Loaded environment from {:?}", path);
        }
        Self::from_process_env()
    }

    /// Read the environment as it is, without touching `.env`
    pub fn from_process_env() -> Result<Self, ScoringError> {
        let mut config = Self::default();

        if let Some(path) = non_empty_var(DICTIONARY_ENV) {
            config.dictionary_path = Some(PathBuf::from(path));
        }

        if let Some(model) = non_empty_var(ENERGY_MODEL_ENV) {
            config.energy_model = model.parse()?;
        }

        if let Some(name) = non_empty_var(MODEL_NAME_ENV) {
            config.model_name = name;
        }

        debug!("Engine configuration: {:?}", config);
        Ok(config)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        temp_env::with_vars_unset([DICTIONARY_ENV, ENERGY_MODEL_ENV, MODEL_NAME_ENV], || {
            let config = EngineConfig::from_process_env().unwrap();
            assert_eq!(config, EngineConfig::default());
            assert_eq!(config.energy_model, EnergyModel::Blended);
            assert_eq!(config.model_name, DEFAULT_MODEL_NAME);
        });
    }

    #[test]
    fn test_reads_all_variables() {
        temp_env::with_vars(
            [
                (DICTIONARY_ENV, Some("/usr/share/dict/cmudict.dict")),
                (ENERGY_MODEL_ENV, Some("punctuation")),
                (MODEL_NAME_ENV, Some("studio-v2")),
            ],
            || {
                let config = EngineConfig::from_process_env().unwrap();
                assert_eq!(
                    config.dictionary_path,
                    Some(PathBuf::from("/usr/share/dict/cmudict.dict"))
                );
                assert_eq!(config.energy_model, EnergyModel::Punctuation);
                assert_eq!(config.model_name, "studio-v2");
            },
        );
    }

    #[test]
    fn test_blank_values_are_ignored() {
        temp_env::with_vars(
            [(DICTIONARY_ENV, Some("  ")), (ENERGY_MODEL_ENV, Some(""))],
            || {
                let config = EngineConfig::from_process_env().unwrap();
                assert!(config.dictionary_path.is_none());
                assert_eq!(config.energy_model, EnergyModel::Blended);
            },
        );
    }

    #[test]
    fn test_unknown_energy_model_is_config_error() {
        temp_env::with_var(ENERGY_MODEL_ENV, Some("turbo"), || {
            let err = EngineConfig::from_process_env().unwrap_err();
            assert!(matches!(err, ScoringError::Config(_)));
        });
    }
}
