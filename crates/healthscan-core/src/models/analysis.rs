use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::condition::SeverityBand;
use crate::models::symptom::{SymptomCategory, SymptomSeverity};

/// What the caller hands to the analyzer: free text or a symptom selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum AnalysisInput {
    Text(String),
    SymptomIds(Vec<String>),
}

impl AnalysisInput {
    pub fn text(text: impl Into<String>) -> Self {
        AnalysisInput::Text(text.into())
    }

    pub fn symptom_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AnalysisInput::SymptomIds(ids.into_iter().map(Into::into).collect())
    }
}

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AnalysisStage {
    Idle,
    Normalizing,
    Matching,
    Scoring,
    Ranking,
    Aggregating,
    Done,
}

impl AnalysisStage {
    /// The stage that follows this one. `Done` is terminal.
    pub fn next(self) -> Option<AnalysisStage> {
        match self {
            AnalysisStage::Idle => Some(AnalysisStage::Normalizing),
            AnalysisStage::Normalizing => Some(AnalysisStage::Matching),
            AnalysisStage::Matching => Some(AnalysisStage::Scoring),
            AnalysisStage::Scoring => Some(AnalysisStage::Ranking),
            AnalysisStage::Ranking => Some(AnalysisStage::Aggregating),
            AnalysisStage::Aggregating => Some(AnalysisStage::Done),
            AnalysisStage::Done => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisStage::Idle => "idle",
            AnalysisStage::Normalizing => "normalizing",
            AnalysisStage::Matching => "matching",
            AnalysisStage::Scoring => "scoring",
            AnalysisStage::Ranking => "ranking",
            AnalysisStage::Aggregating => "aggregating",
            AnalysisStage::Done => "done",
        }
    }
}

impl fmt::Display for AnalysisStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One symptom hit found in free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SymptomMatch {
    pub symptom_id: String,
    /// The keyword that produced the hit.
    pub keyword: String,
    /// Severity adjective found in the mentioning sentence (medium if none).
    pub mention_severity: SymptomSeverity,
}

/// Output of the pattern matcher. Lives for a single analysis call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MatchResult {
    pub matched: Vec<SymptomMatch>,
    pub category_counts: BTreeMap<SymptomCategory, u32>,
}

impl MatchResult {
    pub fn is_empty(&self) -> bool {
        self.matched.is_empty()
    }

    pub fn symptom_ids(&self) -> impl Iterator<Item = &str> {
        self.matched.iter().map(|m| m.symptom_id.as_str())
    }
}

/// A matched symptom as reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MatchedSymptom {
    pub id: String,
    pub name: String,
    pub category: SymptomCategory,
    pub severity: SymptomSeverity,
    /// Only present for free-text input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub mention_severity: Option<SymptomSeverity>,
}

/// A condition together with its symptom-overlap percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RankedCondition {
    pub condition_id: String,
    pub name: String,
    pub severity: SeverityBand,
    /// Share of the condition's defining symptoms that were matched, 0–100.
    /// Not a calibrated statistical probability.
    pub probability: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalysisResult {
    /// Sorted by probability descending, then condition id ascending.
    pub possible_conditions: Vec<RankedCondition>,
    pub severity: SeverityBand,
    /// Duplicate-free, in first-seen order.
    pub recommendations: Vec<String>,
    pub should_seek_care: bool,
    pub matched_symptoms: Vec<MatchedSymptom>,
    /// Supplied ids that the taxonomy does not know; dropped before ranking.
    #[serde(default)]
    pub unrecognized_symptom_ids: Vec<String>,
}

impl AnalysisResult {
    pub fn top_condition(&self) -> Option<&RankedCondition> {
        self.possible_conditions.first()
    }
}
