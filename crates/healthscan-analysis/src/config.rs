use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Tunables for condition ranking and id resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Conditions at or below this percentage are dropped.
    pub min_probability: u32,
    /// Upper bound on the number of ranked conditions returned.
    pub max_conditions: usize,
    /// Fail on unknown symptom ids instead of dropping them with a warning.
    pub reject_unknown_ids: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_probability: 20,
            max_conditions: 5,
            reject_unknown_ids: false,
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.min_probability > 100 {
            return Err(AnalysisError::InvalidConfig(format!(
                "min_probability must be between 0 and 100, got {}",
                self.min_probability
            )));
        }
        if self.max_conditions == 0 {
            return Err(AnalysisError::InvalidConfig(
                "max_conditions must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
