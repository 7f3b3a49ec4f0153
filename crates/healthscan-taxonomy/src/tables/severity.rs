use healthscan_core::models::condition::SeverityBand;
use healthscan_core::models::symptom::SymptomSeverity;

/// Adjectives that set the severity of a symptom mention, checked in order.
pub static MENTION_INDICATORS: &[(SymptomSeverity, &[&str])] = &[
    (SymptomSeverity::High, &["severe", "intense", "extreme", "unbearable"]),
    (SymptomSeverity::Medium, &["moderate", "noticeable", "uncomfortable"]),
    (SymptomSeverity::Low, &["mild", "slight", "minor"]),
];

/// Wording that sets the severity of a report finding, checked in order.
/// "mild to moderate" sits under moderate, so it must be checked before
/// the bare "mild".
pub static FINDING_INDICATORS: &[(SeverityBand, &[&str])] = &[
    (SeverityBand::Severe, &["severe", "critical", "extreme", "significant"]),
    (SeverityBand::Moderate, &["moderate", "mild to moderate", "concerning"]),
    (SeverityBand::Mild, &["mild", "minimal", "slight"]),
];
