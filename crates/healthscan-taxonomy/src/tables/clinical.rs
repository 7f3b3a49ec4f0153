//! Reference data for reading clinical reports: body systems, vital-sign
//! reference ranges, history risk keywords and medication interactions.

use healthscan_core::models::report::RiskPriority;

pub struct BodySystem {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub recommendations: &'static [&'static str],
}

/// Checked in order; the first system with a keyword hit wins.
pub static BODY_SYSTEMS: &[BodySystem] = &[
    BodySystem {
        name: "Cardiovascular",
        keywords: &["heart", "pulse", "cardiac", "circulation", "blood pressure"],
        recommendations: &[
            "Regular blood pressure monitoring",
            "Heart-healthy diet",
            "Regular cardiovascular exercise",
        ],
    },
    BodySystem {
        name: "Respiratory",
        keywords: &["lung", "breathing", "respiratory", "oxygen", "airway"],
        recommendations: &[
            "Monitor oxygen saturation",
            "Breathing exercises",
            "Avoid respiratory irritants",
        ],
    },
    BodySystem {
        name: "Neurological",
        keywords: &["brain", "neural", "cognitive", "consciousness", "mental"],
        recommendations: &[
            "Neurological follow-up as advised",
            "Report any new headaches, weakness or confusion",
        ],
    },
    BodySystem {
        name: "Gastrointestinal",
        keywords: &["abdomen", "abdominal", "bowel", "liver", "stomach"],
        recommendations: &[
            "Follow a balanced, fiber-rich diet",
            "Report persistent abdominal pain or bleeding",
        ],
    },
];

/// Name used for findings that match no body system.
pub const GENERAL_SYSTEM: &str = "General";

/// Thresholds beyond which a vital sign counts as a risk factor.
pub struct VitalThresholds {
    pub systolic_high: u32,
    pub diastolic_high: u32,
    pub heart_rate_high: u32,
    pub temperature_high: f64,
    pub respiratory_rate_high: u32,
    pub oxygen_saturation_low: u32,
}

pub static VITAL_THRESHOLDS: VitalThresholds = VitalThresholds {
    systolic_high: 140,
    diastolic_high: 90,
    heart_rate_high: 100,
    temperature_high: 38.3,
    respiratory_rate_high: 20,
    oxygen_saturation_low: 92,
};

pub struct RiskCondition {
    pub keyword: &'static str,
    pub description: &'static str,
    pub priority: RiskPriority,
}

pub static RISK_CONDITIONS: &[RiskCondition] = &[
    RiskCondition {
        keyword: "diabetes",
        description: "History of diabetes requires careful monitoring",
        priority: RiskPriority::High,
    },
    RiskCondition {
        keyword: "hypertension",
        description: "Hypertension increases cardiovascular risk",
        priority: RiskPriority::High,
    },
    RiskCondition {
        keyword: "asthma",
        description: "History of asthma increases respiratory risk",
        priority: RiskPriority::Moderate,
    },
    RiskCondition {
        keyword: "smok",
        description: "Smoking history increases cardiovascular and respiratory risk",
        priority: RiskPriority::Moderate,
    },
];

pub struct MedicationInteraction {
    /// All of these must appear in the medication list.
    pub medications: &'static [&'static str],
    pub description: &'static str,
    pub priority: RiskPriority,
}

pub static MEDICATION_INTERACTIONS: &[MedicationInteraction] = &[
    MedicationInteraction {
        medications: &["warfarin", "aspirin"],
        description: "Increased bleeding risk with combined anticoagulants",
        priority: RiskPriority::High,
    },
    MedicationInteraction {
        medications: &["lisinopril", "potassium"],
        description: "Risk of elevated potassium with ACE inhibitor and potassium supplements",
        priority: RiskPriority::Moderate,
    },
];

pub const URGENT_CONSULTATION: &str = "Urgent medical consultation recommended";

pub static HIGH_BLOOD_PRESSURE_RECOMMENDATIONS: &[&str] = &[
    "Regular blood pressure monitoring recommended",
    "Consider lifestyle modifications for blood pressure management",
];
