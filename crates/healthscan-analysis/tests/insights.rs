use healthscan_analysis::error::AnalysisError;
use healthscan_analysis::insights::{
    analyze_health_text, RISK_HIGH_STRESS, RISK_POOR_SLEEP, RISK_SEVERE_SYMPTOMS,
};
use healthscan_analysis::AnalysisConfig;
use healthscan_core::models::condition::SeverityBand;
use healthscan_core::models::emotion::{EmotionalState, SleepQuality, StressLevel};
use healthscan_taxonomy::builtin;

fn insights(text: &str) -> healthscan_core::models::insights::HealthInsights {
    analyze_health_text(text, builtin(), AnalysisConfig::default()).unwrap()
}

#[test]
fn severe_symptoms_are_a_risk_factor() {
    let result = insights("Crushing chest pain and I am short of breath.");

    assert_eq!(result.severity, SeverityBand::Severe);
    assert_eq!(result.risk_factors, vec![RISK_SEVERE_SYMPTOMS]);
    assert_eq!(result.recommendations[0], "Seek immediate medical attention");
    let matched: Vec<&str> = result.matched_symptoms.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(matched, vec!["shortness_breath", "chest_pain"]);
}

#[test]
fn mood_only_entry_still_reports_stress() {
    let result = insights("Work has me so stressed lately.");

    assert!(result.matched_symptoms.is_empty());
    assert!(result.possible_conditions.is_empty());
    assert_eq!(result.severity, SeverityBand::Mild);
    assert_eq!(result.emotion.state, EmotionalState::Stressed);
    assert_eq!(result.lifestyle.stress, StressLevel::High);
    assert_eq!(result.risk_factors, vec![RISK_HIGH_STRESS]);
    assert_eq!(result.recommendations, result.emotion.recommendations);
}

#[test]
fn trouble_sleeping_is_a_symptom_and_a_risk() {
    let result = insights("Trouble sleeping again.");

    let matched: Vec<&str> = result.matched_symptoms.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(matched, vec!["insomnia"]);
    assert_eq!(result.lifestyle.sleep, SleepQuality::Poor);
    assert_eq!(result.risk_factors, vec![RISK_POOR_SLEEP]);
}

#[test]
fn risk_factors_keep_a_fixed_order() {
    let result = insights("Chest pain and short of breath. Feeling stressed.");
    assert_eq!(result.risk_factors, vec![RISK_SEVERE_SYMPTOMS, RISK_HIGH_STRESS]);
}

#[test]
fn symptom_advice_comes_before_mood_advice_without_repeats() {
    let result = insights("Stressed out and coughing all day.");

    let breathing = "Practice deep breathing exercises";
    assert_eq!(
        result.recommendations.iter().filter(|r| *r == breathing).count(),
        1
    );
    // The mood list opens with the same line, so its second entry marks
    // where mood advice starts.
    let meditation = result
        .recommendations
        .iter()
        .position(|r| r == "Try meditation or mindfulness")
        .unwrap();
    let humidifier = result
        .recommendations
        .iter()
        .position(|r| r == "Use a humidifier if needed")
        .unwrap();
    assert!(humidifier < meditation);
}

#[test]
fn blank_entry_is_empty_input() {
    for text in ["", "  \n "] {
        let err = analyze_health_text(text, builtin(), AnalysisConfig::default()).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyInput));
    }
}

#[test]
fn invalid_config_is_rejected_before_analysis() {
    let config = AnalysisConfig {
        max_conditions: 0,
        ..AnalysisConfig::default()
    };
    let err = analyze_health_text("Feeling great", builtin(), config).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidConfig(_)));
}
