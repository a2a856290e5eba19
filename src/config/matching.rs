//! Matching engine configuration

use serde::Deserialize;

use super::ValidationError;
use crate::domain::matching::{
    LearningPolicy, MatchSettings, DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_MAX_ALTERNATIVES,
    DEFAULT_MIN_SAMPLES,
};

/// Tunables for match resolution and learning
#[derive(Debug, Clone, Deserialize)]
pub struct MatchingConfig {
    /// Runner-ups reported with a match
    #[serde(default = "default_max_alternatives")]
    pub max_alternatives: usize,

    /// Observations before learning may overwrite an expected answer
    #[serde(default = "default_min_samples")]
    pub learning_min_samples: u64,

    /// Majority share required to overwrite, inclusive
    #[serde(default = "default_confidence_threshold")]
    pub learning_confidence_threshold: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            max_alternatives: default_max_alternatives(),
            learning_min_samples: default_min_samples(),
            learning_confidence_threshold: default_confidence_threshold(),
        }
    }
}

fn default_max_alternatives() -> usize {
    DEFAULT_MAX_ALTERNATIVES
}

fn default_min_samples() -> u64 {
    DEFAULT_MIN_SAMPLES
}

fn default_confidence_threshold() -> f64 {
    DEFAULT_CONFIDENCE_THRESHOLD
}

impl MatchingConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_alternatives == 0 {
            return Err(ValidationError::ZeroMaxAlternatives);
        }
        if self.learning_min_samples == 0 {
            return Err(ValidationError::ZeroMinSamples);
        }
        let threshold = self.learning_confidence_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ValidationError::InvalidConfidenceThreshold(threshold));
        }
        Ok(())
    }

    pub fn match_settings(&self) -> MatchSettings {
        MatchSettings {
            max_alternatives: self.max_alternatives,
        }
    }

    pub fn learning_policy(&self) -> LearningPolicy {
        LearningPolicy {
            min_samples: self.learning_min_samples,
            confidence_threshold: self.learning_confidence_threshold,
        }
    }
}
