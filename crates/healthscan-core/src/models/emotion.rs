use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::analysis::SymptomMatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EmotionalState {
    Neutral,
    Stressed,
    Fatigued,
    Positive,
    Frustrated,
    Depressed,
}

impl EmotionalState {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionalState::Neutral => "neutral",
            EmotionalState::Stressed => "stressed",
            EmotionalState::Fatigued => "fatigued",
            EmotionalState::Positive => "positive",
            EmotionalState::Frustrated => "frustrated",
            EmotionalState::Depressed => "depressed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EmotionalAnalysis {
    pub state: EmotionalState,
    /// 0–100.
    pub confidence: u8,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SentimentAnalysis {
    pub sentiment: Sentiment,
    /// 0–100.
    pub confidence: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SleepQuality {
    Poor,
    Good,
    Normal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ActivityLevel {
    Low,
    High,
    Normal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StressLevel {
    High,
    Low,
    Normal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LifestyleFactors {
    pub sleep: SleepQuality,
    pub activity: ActivityLevel,
    pub stress: StressLevel,
}

/// Everything a free-text journal entry says about symptoms, mood and habits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthContext {
    pub symptoms: Vec<SymptomMatch>,
    pub emotional_state: Option<EmotionalState>,
    pub lifestyle: LifestyleFactors,
}
