use healthscan_core::error::CoreError;
use healthscan_core::models::analysis::{AnalysisInput, AnalysisStage};
use healthscan_core::models::condition::SeverityBand;
use healthscan_core::models::symptom::{SymptomCategory, SymptomSeverity};

#[test]
fn category_parses_case_insensitively() {
    assert_eq!(
        "respiratory".parse::<SymptomCategory>().unwrap(),
        SymptomCategory::Respiratory
    );
    assert_eq!(
        " Cardiovascular ".parse::<SymptomCategory>().unwrap(),
        SymptomCategory::Cardiovascular
    );
}

#[test]
fn unknown_category_is_rejected() {
    let err = "skeletal".parse::<SymptomCategory>().unwrap_err();
    assert!(matches!(err, CoreError::UnknownCategory(ref v) if v == "skeletal"));
}

#[test]
fn category_serializes_as_display_name() {
    let json = serde_json::to_string(&SymptomCategory::Gastrointestinal).unwrap();
    assert_eq!(json, "\"Gastrointestinal\"");
}

#[test]
fn severity_weights_follow_low_medium_high() {
    assert_eq!(SymptomSeverity::Low.weight(), 1);
    assert_eq!(SymptomSeverity::Medium.weight(), 2);
    assert_eq!(SymptomSeverity::High.weight(), 3);
}

#[test]
fn severity_band_accepts_both_scales() {
    assert_eq!("medium".parse::<SeverityBand>().unwrap(), SeverityBand::Moderate);
    assert_eq!("Severe".parse::<SeverityBand>().unwrap(), SeverityBand::Severe);
    assert!("critical".parse::<SeverityBand>().is_err());
    assert_eq!(SeverityBand::Mild.as_symptom_severity(), SymptomSeverity::Low);
    assert_eq!(SeverityBand::from(SymptomSeverity::High), SeverityBand::Severe);
}

#[test]
fn analysis_input_uses_tagged_representation() {
    let input = AnalysisInput::symptom_ids(["fever", "cough"]);
    let json = serde_json::to_value(&input).unwrap();
    assert_eq!(json["type"], "symptom_ids");
    assert_eq!(json["value"][1], "cough");

    let parsed: AnalysisInput =
        serde_json::from_str(r#"{"type":"text","value":"I have a fever"}"#).unwrap();
    assert_eq!(parsed, AnalysisInput::text("I have a fever"));
}

#[test]
fn stages_run_from_idle_to_done() {
    let mut stage = AnalysisStage::Idle;
    let mut seen = vec![stage];
    while let Some(next) = stage.next() {
        seen.push(next);
        stage = next;
    }
    assert_eq!(
        seen,
        vec![
            AnalysisStage::Idle,
            AnalysisStage::Normalizing,
            AnalysisStage::Matching,
            AnalysisStage::Scoring,
            AnalysisStage::Ranking,
            AnalysisStage::Aggregating,
            AnalysisStage::Done,
        ]
    );
}
