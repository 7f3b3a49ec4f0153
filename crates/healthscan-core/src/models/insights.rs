use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::analysis::{MatchedSymptom, RankedCondition};
use crate::models::condition::SeverityBand;
use crate::models::emotion::{EmotionalAnalysis, LifestyleFactors, SentimentAnalysis};

/// Symptom, mood and lifestyle analysis of one journal entry, combined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthInsights {
    pub emotion: EmotionalAnalysis,
    pub sentiment: SentimentAnalysis,
    /// Empty when the entry mentions no known symptom.
    pub matched_symptoms: Vec<MatchedSymptom>,
    /// Mild when no symptom was mentioned.
    pub severity: SeverityBand,
    pub possible_conditions: Vec<RankedCondition>,
    pub lifestyle: LifestyleFactors,
    /// Symptom advice first, then mood advice, without repeats.
    pub recommendations: Vec<String>,
    pub risk_factors: Vec<String>,
}
