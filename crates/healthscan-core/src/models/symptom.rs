use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Body-system grouping a symptom belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SymptomCategory {
    General,
    Respiratory,
    Cardiovascular,
    Neurological,
    Gastrointestinal,
    Musculoskeletal,
    Psychological,
    Dermatological,
    Endocrine,
    Immune,
    Reproductive,
    Sensory,
}

impl SymptomCategory {
    pub const ALL: [SymptomCategory; 12] = [
        SymptomCategory::General,
        SymptomCategory::Respiratory,
        SymptomCategory::Cardiovascular,
        SymptomCategory::Neurological,
        SymptomCategory::Gastrointestinal,
        SymptomCategory::Musculoskeletal,
        SymptomCategory::Psychological,
        SymptomCategory::Dermatological,
        SymptomCategory::Endocrine,
        SymptomCategory::Immune,
        SymptomCategory::Reproductive,
        SymptomCategory::Sensory,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SymptomCategory::General => "General",
            SymptomCategory::Respiratory => "Respiratory",
            SymptomCategory::Cardiovascular => "Cardiovascular",
            SymptomCategory::Neurological => "Neurological",
            SymptomCategory::Gastrointestinal => "Gastrointestinal",
            SymptomCategory::Musculoskeletal => "Musculoskeletal",
            SymptomCategory::Psychological => "Psychological",
            SymptomCategory::Dermatological => "Dermatological",
            SymptomCategory::Endocrine => "Endocrine",
            SymptomCategory::Immune => "Immune",
            SymptomCategory::Reproductive => "Reproductive",
            SymptomCategory::Sensory => "Sensory",
        }
    }
}

impl fmt::Display for SymptomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SymptomCategory {
    type Err = CoreError;

    /// Case-insensitive, so `respiratory` and `Respiratory` both parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

/// Intrinsic severity of a symptom, and the severity of a single mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SymptomSeverity {
    Low,
    Medium,
    High,
}

impl SymptomSeverity {
    /// Numeric weight used when averaging severities (low=1, medium=2, high=3).
    pub fn weight(&self) -> u32 {
        match self {
            SymptomSeverity::Low => 1,
            SymptomSeverity::Medium => 2,
            SymptomSeverity::High => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SymptomSeverity::Low => "low",
            SymptomSeverity::Medium => "medium",
            SymptomSeverity::High => "high",
        }
    }
}

impl fmt::Display for SymptomSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SymptomSeverity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(SymptomSeverity::Low),
            "medium" => Ok(SymptomSeverity::Medium),
            "high" => Ok(SymptomSeverity::High),
            _ => Err(CoreError::InvalidValue {
                kind: "symptom severity",
                value: s.to_string(),
            }),
        }
    }
}

/// A reportable health sign. Reference data, never mutated after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Symptom {
    pub id: String,
    pub name: String,
    pub category: SymptomCategory,
    pub severity: SymptomSeverity,
    /// Lowercase match strings. Single words are matched against tokens,
    /// phrases against sentences. Empty means "match on the name".
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub description: Option<String>,
}
