use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::symptom::SymptomSeverity;

/// Qualitative severity bucket. Mild/moderate/severe correspond to the
/// low/medium/high wording used for individual symptoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SeverityBand {
    Mild,
    Moderate,
    Severe,
}

impl SeverityBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityBand::Mild => "mild",
            SeverityBand::Moderate => "moderate",
            SeverityBand::Severe => "severe",
        }
    }

    /// The same bucket expressed on the low/medium/high scale.
    pub fn as_symptom_severity(&self) -> SymptomSeverity {
        match self {
            SeverityBand::Mild => SymptomSeverity::Low,
            SeverityBand::Moderate => SymptomSeverity::Medium,
            SeverityBand::Severe => SymptomSeverity::High,
        }
    }
}

impl From<SymptomSeverity> for SeverityBand {
    fn from(severity: SymptomSeverity) -> Self {
        match severity {
            SymptomSeverity::Low => SeverityBand::Mild,
            SymptomSeverity::Medium => SeverityBand::Moderate,
            SymptomSeverity::High => SeverityBand::Severe,
        }
    }
}

impl fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeverityBand {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mild" | "low" => Ok(SeverityBand::Mild),
            "moderate" | "medium" => Ok(SeverityBand::Moderate),
            "severe" | "high" => Ok(SeverityBand::Severe),
            _ => Err(CoreError::InvalidValue {
                kind: "severity band",
                value: s.to_string(),
            }),
        }
    }
}

/// A named condition defined by the set of symptoms associated with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Condition {
    pub id: String,
    pub name: String,
    /// Symptom ids, in declaration order. Treated as a set when ranking.
    pub required_symptoms: Vec<String>,
    pub severity: SeverityBand,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub description: Option<String>,
}
