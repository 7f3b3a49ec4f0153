use serde::{Deserialize, Serialize};

use healthscan_core::models::condition::SeverityBand;
use healthscan_core::models::symptom::SymptomCategory;

/// Base advice for each severity band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityLadder {
    pub mild: Vec<String>,
    pub moderate: Vec<String>,
    pub severe: Vec<String>,
}

impl SeverityLadder {
    pub fn for_band(&self, band: SeverityBand) -> &[String] {
        match band {
            SeverityBand::Mild => &self.mild,
            SeverityBand::Moderate => &self.moderate,
            SeverityBand::Severe => &self.severe,
        }
    }
}

impl Default for SeverityLadder {
    fn default() -> Self {
        crate::tables::recommendations::severity_ladder()
    }
}

/// Advice attached to a whole symptom category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecommendations {
    pub category: SymptomCategory,
    pub recommendations: Vec<String>,
}
