use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::condition::SeverityBand;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BloodPressure {
    pub systolic: u32,
    pub diastolic: u32,
}

/// Vital signs read from a report. `None` means "not recorded".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VitalSigns {
    pub blood_pressure: Option<BloodPressure>,
    pub heart_rate: Option<u32>,
    pub temperature: Option<f64>,
    pub respiratory_rate: Option<u32>,
    pub oxygen_saturation: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalFinding {
    pub description: String,
    pub severity: SeverityBand,
    /// Body system name, "General" when no system keyword matched.
    pub system: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskPriority {
    Low,
    Moderate,
    High,
}

impl RiskPriority {
    pub fn weight(&self) -> u32 {
        match self {
            RiskPriority::Low => 1,
            RiskPriority::Moderate => 2,
            RiskPriority::High => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskFactor {
    pub description: String,
    pub priority: RiskPriority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Urgency {
    Routine,
    Soon,
    Immediate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportMetrics {
    pub severity: SeverityBand,
    /// 0–100.
    pub confidence: u8,
    pub urgency: Urgency,
}

/// Result of analyzing the text of an uploaded medical report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportAnalysis {
    pub findings: Vec<ClinicalFinding>,
    pub vitals: VitalSigns,
    pub risk_factors: Vec<RiskFactor>,
    pub recommendations: Vec<String>,
    pub follow_up: String,
    pub metrics: ReportMetrics,
}
