use healthscan_analysis::report::{analyze_report, extract_vital_signs, parse_sections};
use healthscan_core::models::condition::SeverityBand;
use healthscan_core::models::report::{BloodPressure, RiskPriority, Urgency};

const ADMISSION_NOTE: &str = "\
Vital Signs: BP 150/95, HR 105, Temp 38.5, RR 18, O2 95%

Findings:
Mild tenderness in the lower abdomen. Significant irregular heart rhythm noted.

History: Type 2 diabetes, former smoker.
Medications: warfarin 5mg daily, aspirin 81mg
";

#[test]
fn sections_are_split_on_labels_and_blank_lines() {
    let sections = parse_sections(ADMISSION_NOTE);
    assert_eq!(
        sections.vitals.as_deref(),
        Some("BP 150/95, HR 105, Temp 38.5, RR 18, O2 95%")
    );
    assert_eq!(
        sections.findings.as_deref(),
        Some("Mild tenderness in the lower abdomen. Significant irregular heart rhythm noted.")
    );
    assert_eq!(sections.history.as_deref(), Some("Type 2 diabetes, former smoker."));
    assert_eq!(
        sections.medications.as_deref(),
        Some("warfarin 5mg daily, aspirin 81mg")
    );
}

#[test]
fn multi_line_sections_are_kept_whole() {
    let sections = parse_sections("VITAL SIGNS:\n  BP 120/80\nHR 72\n\nUnrelated trailing note");
    assert_eq!(sections.vitals.as_deref(), Some("BP 120/80\nHR 72"));
    assert_eq!(sections.findings, None);
}

#[test]
fn vital_signs_are_read_from_their_labels() {
    let vitals = extract_vital_signs("BP: 118/76\nHR 64\nTemperature 37.0\nRR 14\nSpO2 91%");
    assert_eq!(
        vitals.blood_pressure,
        Some(BloodPressure {
            systolic: 118,
            diastolic: 76
        })
    );
    assert_eq!(vitals.heart_rate, Some(64));
    assert_eq!(vitals.temperature, Some(37.0));
    assert_eq!(vitals.respiratory_rate, Some(14));
    assert_eq!(vitals.oxygen_saturation, Some(91));

    let nothing = extract_vital_signs("stable");
    assert_eq!(nothing.blood_pressure, None);
    assert_eq!(nothing.heart_rate, None);
}

#[test]
fn admission_note_is_urgent() {
    let analysis = analyze_report(ADMISSION_NOTE);

    assert_eq!(analysis.findings.len(), 2);
    assert_eq!(analysis.findings[0].severity, SeverityBand::Mild);
    assert_eq!(analysis.findings[0].system, "Gastrointestinal");
    assert_eq!(analysis.findings[1].severity, SeverityBand::Severe);
    assert_eq!(analysis.findings[1].system, "Cardiovascular");

    let risks: Vec<(&str, RiskPriority)> = analysis
        .risk_factors
        .iter()
        .map(|r| (r.description.as_str(), r.priority))
        .collect();
    assert_eq!(
        risks,
        vec![
            ("Elevated systolic blood pressure", RiskPriority::High),
            ("Elevated diastolic blood pressure", RiskPriority::Moderate),
            ("Elevated heart rate", RiskPriority::Moderate),
            ("Elevated body temperature", RiskPriority::Moderate),
            ("History of diabetes requires careful monitoring", RiskPriority::High),
            (
                "Smoking history increases cardiovascular and respiratory risk",
                RiskPriority::Moderate
            ),
            (
                "Increased bleeding risk with combined anticoagulants",
                RiskPriority::High
            ),
        ]
    );

    // Weights 1 + 3 from findings and 3+2+2+2+3+2+3 from risks, mean 21 / 9.
    assert_eq!(analysis.metrics.severity, SeverityBand::Moderate);
    assert_eq!(analysis.metrics.urgency, Urgency::Immediate);
    assert_eq!(analysis.metrics.confidence, 100);
    assert_eq!(
        analysis.follow_up,
        "Immediate medical attention required. Please seek emergency care."
    );

    assert_eq!(
        analysis.recommendations,
        vec![
            "Follow a balanced, fiber-rich diet",
            "Report persistent abdominal pain or bleeding",
            "Regular blood pressure monitoring",
            "Heart-healthy diet",
            "Regular cardiovascular exercise",
            "Urgent medical consultation recommended",
            "Regular blood pressure monitoring recommended",
            "Consider lifestyle modifications for blood pressure management",
        ]
    );
}

#[test]
fn moderate_finding_schedules_a_visit() {
    let analysis = analyze_report("Findings: Moderate inflammation of the airway.");
    assert_eq!(analysis.findings[0].system, "Respiratory");
    assert_eq!(analysis.metrics.severity, SeverityBand::Moderate);
    assert_eq!(analysis.metrics.urgency, Urgency::Soon);
    assert_eq!(analysis.metrics.confidence, 75);
    assert_eq!(
        analysis.follow_up,
        "Schedule follow-up appointment within 48-72 hours."
    );
}

#[test]
fn minor_finding_is_routine() {
    let analysis = analyze_report("Findings: Minimal scarring noted.");
    assert_eq!(analysis.findings[0].system, "General");
    assert_eq!(analysis.metrics.severity, SeverityBand::Mild);
    assert_eq!(analysis.metrics.urgency, Urgency::Routine);
    assert!(analysis.recommendations.is_empty());
    assert_eq!(analysis.follow_up, "Schedule routine follow-up within 2 weeks.");
}

#[test]
fn empty_report_has_base_confidence() {
    let analysis = analyze_report("");
    assert!(analysis.findings.is_empty());
    assert!(analysis.risk_factors.is_empty());
    assert_eq!(analysis.metrics.severity, SeverityBand::Mild);
    assert_eq!(analysis.metrics.urgency, Urgency::Routine);
    assert_eq!(analysis.metrics.confidence, 70);
}

#[test]
fn history_and_medication_risks_stay_in_their_sections() {
    let analysis = analyze_report(
        "Findings: Patient reports diabetes in the family.\n\nMedications: warfarin",
    );
    assert!(analysis.risk_factors.is_empty());
}

#[test]
fn low_oxygen_is_a_high_risk() {
    let analysis = analyze_report("Vital Signs:\nBP 120/80\nSpO2 89%");
    assert_eq!(analysis.risk_factors.len(), 1);
    assert_eq!(analysis.risk_factors[0].description, "Low oxygen saturation");
    assert_eq!(analysis.metrics.urgency, Urgency::Immediate);
    // Base plus blood pressure only.
    assert_eq!(analysis.metrics.confidence, 80);
}

#[test]
fn single_line_report_still_splits() {
    let text = "Vital Signs: BP 150/95, HR 88. Findings: Severe lung opacity. History: diabetes.";
    let sections = parse_sections(text);
    assert_eq!(sections.vitals.as_deref(), Some("BP 150/95, HR 88."));
    assert_eq!(sections.findings.as_deref(), Some("Severe lung opacity."));
    assert_eq!(sections.history.as_deref(), Some("diabetes."));

    let analysis = analyze_report(text);
    assert_eq!(analysis.findings.len(), 1);
    assert_eq!(analysis.findings[0].severity, SeverityBand::Severe);
    assert_eq!(analysis.findings[0].system, "Respiratory");
    assert!(analysis
        .risk_factors
        .iter()
        .any(|r| r.description == "History of diabetes requires careful monitoring"));
}

#[test]
fn label_words_without_a_colon_stay_in_their_section() {
    let text = "Findings: Stable chest film.\nHistory of smoking was not confirmed by the patient.";
    let sections = parse_sections(text);
    assert_eq!(sections.history, None);
    assert_eq!(
        sections.findings.as_deref(),
        Some("Stable chest film.\nHistory of smoking was not confirmed by the patient.")
    );
    assert!(analyze_report(text).risk_factors.is_empty());
}

#[test]
fn fahrenheit_temperatures_are_converted() {
    let normal = analyze_report("Vital Signs: Temp 98.6, HR 72\n");
    assert_eq!(normal.vitals.temperature, Some(37.0));
    assert!(normal.risk_factors.is_empty());

    let feverish = extract_vital_signs("Temp 101.3F");
    assert_eq!(feverish.temperature, Some(38.5));
    let analysis = analyze_report("Vital Signs: Temperature: 101.3 °F");
    assert_eq!(analysis.risk_factors[0].description, "Elevated body temperature");

    assert_eq!(extract_vital_signs("Temp 37.2C").temperature, Some(37.2));
    assert_eq!(extract_vital_signs("Temp 39 C, HR 90").temperature, Some(39.0));
}
