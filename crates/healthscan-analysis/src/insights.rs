//! One-pass journal analysis: symptoms, mood and lifestyle together.

use tracing::debug;

use healthscan_core::models::analysis::AnalysisInput;
use healthscan_core::models::condition::SeverityBand;
use healthscan_core::models::emotion::{SleepQuality, StressLevel};
use healthscan_core::models::insights::HealthInsights;
use healthscan_taxonomy::Taxonomy;

use crate::emotion::{analyze_emotional_state, analyze_sentiment, extract_health_context};
use crate::normalize::normalize;
use crate::pipeline::Analyzer;
use crate::recommend::RecommendationSet;
use crate::{AnalysisConfig, AnalysisError};

pub const RISK_SEVERE_SYMPTOMS: &str = "Multiple severe symptoms detected";
pub const RISK_HIGH_STRESS: &str = "High stress levels detected";
pub const RISK_POOR_SLEEP: &str = "Poor sleep patterns identified";

/// Analyze a journal entry for symptoms, mood and lifestyle at once.
///
/// An entry that mentions no known symptom is not an error here: the
/// symptom half comes back mild and empty while mood and lifestyle are
/// still reported. Only blank text fails with [`AnalysisError::EmptyInput`].
pub fn analyze_health_text(
    text: &str,
    taxonomy: &Taxonomy,
    config: AnalysisConfig,
) -> Result<HealthInsights, AnalysisError> {
    let analyzer = Analyzer::new(taxonomy, config)?;
    if normalize(text).is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let symptoms = match analyzer.analyze(&AnalysisInput::text(text)) {
        Ok(result) => Some(result),
        Err(AnalysisError::EmptyInput) => None,
        Err(e) => return Err(e),
    };

    let emotion = analyze_emotional_state(text);
    let sentiment = analyze_sentiment(text);
    let context = extract_health_context(text, taxonomy);

    let (matched_symptoms, severity, possible_conditions, symptom_advice) = match symptoms {
        Some(result) => (
            result.matched_symptoms,
            result.severity,
            result.possible_conditions,
            result.recommendations,
        ),
        None => (Vec::new(), SeverityBand::Mild, Vec::new(), Vec::new()),
    };

    let mut recommendations = RecommendationSet::new();
    recommendations.extend(&symptom_advice);
    recommendations.extend(&emotion.recommendations);

    let mut risk_factors = Vec::new();
    if severity == SeverityBand::Severe {
        risk_factors.push(RISK_SEVERE_SYMPTOMS.to_string());
    }
    if context.lifestyle.stress == StressLevel::High {
        risk_factors.push(RISK_HIGH_STRESS.to_string());
    }
    if context.lifestyle.sleep == SleepQuality::Poor {
        risk_factors.push(RISK_POOR_SLEEP.to_string());
    }

    debug!(
        symptoms = matched_symptoms.len(),
        state = emotion.state.as_str(),
        risks = risk_factors.len(),
        "health insights"
    );

    Ok(HealthInsights {
        emotion,
        sentiment,
        matched_symptoms,
        severity,
        possible_conditions,
        lifestyle: context.lifestyle,
        recommendations: recommendations.into_vec(),
        risk_factors,
    })
}
