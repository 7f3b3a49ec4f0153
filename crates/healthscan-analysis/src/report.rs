//! Clinical report analysis over pre-extracted report text.
//!
//! The report is split into labelled sections (vital signs, findings,
//! history, medications). Vitals are read with fixed patterns, findings are
//! classified per sentence, and risk factors come from out-of-range vitals,
//! history keywords and medication combinations.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use healthscan_core::models::condition::SeverityBand;
use healthscan_core::models::report::{
    BloodPressure, ClinicalFinding, ReportAnalysis, ReportMetrics, RiskFactor, RiskPriority,
    Urgency, VitalSigns,
};
use healthscan_taxonomy::tables::clinical::{
    BODY_SYSTEMS, GENERAL_SYSTEM, HIGH_BLOOD_PRESSURE_RECOMMENDATIONS, MEDICATION_INTERACTIONS,
    RISK_CONDITIONS, URGENT_CONSULTATION, VITAL_THRESHOLDS,
};
use healthscan_taxonomy::tables::severity::FINDING_INDICATORS;

use crate::recommend::RecommendationSet;
use crate::severity::{band_for_mean, mean_weight};

const BASE_CONFIDENCE: u32 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Vitals,
    Findings,
    History,
    Medications,
}

/// Text of each recognised section. Absent sections are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSections {
    pub vitals: Option<String>,
    pub findings: Option<String>,
    pub history: Option<String>,
    pub medications: Option<String>,
}

impl ReportSections {
    fn slot(&mut self, section: Section) -> &mut Option<String> {
        match section {
            Section::Vitals => &mut self.vitals,
            Section::Findings => &mut self.findings,
            Section::History => &mut self.history,
            Section::Medications => &mut self.medications,
        }
    }
}

static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(vital signs|findings|history|medications?)\s*:")
        .expect("section header pattern is valid")
});
static BLANK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t\r]*\n").expect("blank line pattern is valid"));

static BLOOD_PRESSURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bBP:?\s*(\d{2,3})\s*/\s*(\d{2,3})").expect("BP pattern is valid")
});
static HEART_RATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bHR:?\s*(\d{2,3})\b").expect("HR pattern is valid"));
static TEMPERATURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bTemp(?:erature)?:?\s*(\d{2,3}(?:\.\d)?)\s*°?\s*([CF])?\b")
        .expect("temperature pattern is valid")
});
static RESPIRATORY_RATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bRR:?\s*(\d{1,2})\b").expect("RR pattern is valid"));
static OXYGEN_SATURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:sp)?o2:?\s*(\d{1,3})\s*%?").expect("O2 pattern is valid")
});

fn header_section(label: &str) -> Section {
    match label.to_ascii_lowercase().as_str() {
        "vital signs" => Section::Vitals,
        "findings" => Section::Findings,
        "history" => Section::History,
        _ => Section::Medications,
    }
}

/// Split report text into sections.
///
/// A header is a label followed by a colon, anywhere in the text, so
/// reports flattened onto one line still split. A section runs from its
/// header to the next header or the first blank line, whichever comes
/// first. Lines are trimmed and a repeated header appends on a new line.
pub fn parse_sections(text: &str) -> ReportSections {
    let headers: Vec<(Section, usize, usize)> = HEADER
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some((header_section(&caps[1]), whole.start(), whole.end()))
        })
        .collect();

    let mut sections = ReportSections::default();
    for (i, &(section, _, body_start)) in headers.iter().enumerate() {
        let body_end = headers.get(i + 1).map_or(text.len(), |&(_, start, _)| start);
        let raw = text[body_start..body_end].trim_start();
        let raw = BLANK_LINE.find(raw).map_or(raw, |blank| &raw[..blank.start()]);

        let body = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n");
        if body.is_empty() {
            continue;
        }

        let slot = sections.slot(section);
        match slot {
            Some(existing) => {
                existing.push('\n');
                existing.push_str(&body);
            }
            None => *slot = Some(body),
        }
    }

    sections
}

/// Readings above this are taken as Fahrenheit when no unit is given.
const FAHRENHEIT_CUTOFF: f64 = 45.0;

/// Body temperature in °C, rounded to one decimal when converted.
fn read_temperature(text: &str) -> Option<f64> {
    let caps = TEMPERATURE.captures(text)?;
    let value: f64 = caps.get(1)?.as_str().parse().ok()?;
    let fahrenheit = match caps.get(2) {
        Some(unit) => unit.as_str().eq_ignore_ascii_case("f"),
        None => value > FAHRENHEIT_CUTOFF,
    };
    if fahrenheit {
        Some(((value - 32.0) * 5.0 / 9.0 * 10.0).round() / 10.0)
    } else {
        Some(value)
    }
}

fn capture<T: std::str::FromStr>(pattern: &Regex, text: &str) -> Option<T> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Read vital signs from the vitals section text.
pub fn extract_vital_signs(vitals_text: &str) -> VitalSigns {
    let blood_pressure = BLOOD_PRESSURE.captures(vitals_text).and_then(|caps| {
        Some(BloodPressure {
            systolic: caps.get(1)?.as_str().parse().ok()?,
            diastolic: caps.get(2)?.as_str().parse().ok()?,
        })
    });

    VitalSigns {
        blood_pressure,
        heart_rate: capture(&HEART_RATE, vitals_text),
        temperature: read_temperature(vitals_text),
        respiratory_rate: capture(&RESPIRATORY_RATE, vitals_text),
        oxygen_saturation: capture(&OXYGEN_SATURATION, vitals_text),
    }
}

fn body_system(sentence: &str) -> &'static str {
    BODY_SYSTEMS
        .iter()
        .find(|system| system.keywords.iter().any(|k| sentence.contains(k)))
        .map_or(GENERAL_SYSTEM, |system| system.name)
}

fn finding_severity(sentence: &str) -> SeverityBand {
    FINDING_INDICATORS
        .iter()
        .find(|(_, indicators)| indicators.iter().any(|i| sentence.contains(i)))
        .map_or(SeverityBand::Moderate, |(band, _)| *band)
}

/// One finding per non-empty sentence of the findings section.
pub fn analyze_findings(findings_text: &str) -> Vec<ClinicalFinding> {
    findings_text
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|sentence| {
            let lowered = sentence.to_lowercase();
            ClinicalFinding {
                description: sentence.to_string(),
                severity: finding_severity(&lowered),
                system: body_system(&lowered).to_string(),
            }
        })
        .collect()
}

fn risk(description: &str, priority: RiskPriority) -> RiskFactor {
    RiskFactor {
        description: description.to_string(),
        priority,
    }
}

fn systolic_is_high(vitals: &VitalSigns) -> bool {
    vitals
        .blood_pressure
        .is_some_and(|bp| bp.systolic > VITAL_THRESHOLDS.systolic_high)
}

/// Out-of-range vitals, risky history and medication combinations.
pub fn assess_risk_factors(sections: &ReportSections, vitals: &VitalSigns) -> Vec<RiskFactor> {
    let limits = &VITAL_THRESHOLDS;
    let mut risks = Vec::new();

    if systolic_is_high(vitals) {
        risks.push(risk("Elevated systolic blood pressure", RiskPriority::High));
    }
    if vitals
        .blood_pressure
        .is_some_and(|bp| bp.diastolic > limits.diastolic_high)
    {
        risks.push(risk("Elevated diastolic blood pressure", RiskPriority::Moderate));
    }
    if vitals.heart_rate.is_some_and(|hr| hr > limits.heart_rate_high) {
        risks.push(risk("Elevated heart rate", RiskPriority::Moderate));
    }
    if vitals
        .temperature
        .is_some_and(|t| t > limits.temperature_high)
    {
        risks.push(risk("Elevated body temperature", RiskPriority::Moderate));
    }
    if vitals
        .respiratory_rate
        .is_some_and(|rr| rr > limits.respiratory_rate_high)
    {
        risks.push(risk("Elevated respiratory rate", RiskPriority::Moderate));
    }
    if vitals
        .oxygen_saturation
        .is_some_and(|o2| o2 < limits.oxygen_saturation_low)
    {
        risks.push(risk("Low oxygen saturation", RiskPriority::High));
    }

    if let Some(history) = &sections.history {
        let history = history.to_lowercase();
        for condition in RISK_CONDITIONS {
            if history.contains(condition.keyword) {
                risks.push(risk(condition.description, condition.priority));
            }
        }
    }

    if let Some(medications) = &sections.medications {
        let medications = medications.to_lowercase();
        for interaction in MEDICATION_INTERACTIONS {
            if interaction
                .medications
                .iter()
                .all(|med| medications.contains(med))
            {
                risks.push(risk(interaction.description, interaction.priority));
            }
        }
    }

    risks
}

fn report_recommendations(
    findings: &[ClinicalFinding],
    risks: &[RiskFactor],
    vitals: &VitalSigns,
) -> Vec<String> {
    let mut set = RecommendationSet::new();

    for finding in findings {
        if let Some(system) = BODY_SYSTEMS.iter().find(|s| s.name == finding.system) {
            set.extend(system.recommendations);
        }
    }
    if risks.iter().any(|r| r.priority == RiskPriority::High) {
        set.insert(URGENT_CONSULTATION);
    }
    if systolic_is_high(vitals) {
        set.extend(HIGH_BLOOD_PRESSURE_RECOMMENDATIONS);
    }

    set.into_vec()
}

fn report_metrics(
    findings: &[ClinicalFinding],
    risks: &[RiskFactor],
    vitals: &VitalSigns,
) -> ReportMetrics {
    let weights = findings
        .iter()
        .map(|f| f.severity.as_symptom_severity().weight())
        .chain(risks.iter().map(|r| r.priority.weight()));
    let severity = mean_weight(weights)
        .map(band_for_mean)
        .unwrap_or(SeverityBand::Mild);

    let mut confidence = BASE_CONFIDENCE + 5 * findings.len() as u32;
    if vitals.blood_pressure.is_some() {
        confidence += 10;
    }
    if vitals.heart_rate.is_some() {
        confidence += 5;
    }
    if vitals.temperature.is_some() {
        confidence += 5;
    }

    let has_high_risk = risks.iter().any(|r| r.priority == RiskPriority::High);
    let urgency = if has_high_risk || severity == SeverityBand::Severe {
        Urgency::Immediate
    } else if severity == SeverityBand::Moderate {
        Urgency::Soon
    } else {
        Urgency::Routine
    };

    ReportMetrics {
        severity,
        confidence: confidence.min(100) as u8,
        urgency,
    }
}

pub fn follow_up(urgency: Urgency) -> &'static str {
    match urgency {
        Urgency::Immediate => "Immediate medical attention required. Please seek emergency care.",
        Urgency::Soon => "Schedule follow-up appointment within 48-72 hours.",
        Urgency::Routine => "Schedule routine follow-up within 2 weeks.",
    }
}

/// Analyze the plain text of a medical report.
pub fn analyze_report(text: &str) -> ReportAnalysis {
    let sections = parse_sections(text);

    let vitals = sections
        .vitals
        .as_deref()
        .map(extract_vital_signs)
        .unwrap_or_default();
    let findings = sections
        .findings
        .as_deref()
        .map(analyze_findings)
        .unwrap_or_default();
    let risk_factors = assess_risk_factors(&sections, &vitals);
    let recommendations = report_recommendations(&findings, &risk_factors, &vitals);
    let metrics = report_metrics(&findings, &risk_factors, &vitals);

    debug!(
        findings = findings.len(),
        risks = risk_factors.len(),
        severity = %metrics.severity,
        "report analyzed"
    );

    ReportAnalysis {
        findings,
        vitals,
        risk_factors,
        recommendations,
        follow_up: follow_up(metrics.urgency).to_string(),
        metrics,
    }
}
