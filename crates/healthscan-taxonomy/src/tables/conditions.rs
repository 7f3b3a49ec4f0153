use healthscan_core::models::condition::{Condition, SeverityBand};

fn condition(
    id: &str,
    name: &str,
    required_symptoms: &[&str],
    severity: SeverityBand,
    recommendations: &[&str],
) -> Condition {
    Condition {
        id: id.to_string(),
        name: name.to_string(),
        required_symptoms: required_symptoms.iter().map(|s| s.to_string()).collect(),
        severity,
        recommendations: recommendations.iter().map(|r| r.to_string()).collect(),
        description: None,
    }
}

/// Built-in condition table. Every required symptom id must exist in
/// [`super::symptoms::symptoms`].
pub fn conditions() -> Vec<Condition> {
    vec![
        condition(
            "common_cold",
            "Common Cold",
            &["cough", "sore_throat", "fever", "fatigue"],
            SeverityBand::Mild,
            &[
                "Rest and stay hydrated",
                "Over-the-counter cold medications may help",
                "Use saline nasal drops",
                "Monitor symptoms for worsening",
            ],
        ),
        condition(
            "flu",
            "Influenza",
            &["fever", "headache", "muscle_pain", "fatigue", "cough"],
            SeverityBand::Moderate,
            &[
                "Rest and isolate to prevent spread",
                "Stay hydrated and monitor temperature",
                "Consider antiviral medications if caught early",
            ],
        ),
        condition(
            "covid19",
            "COVID-19",
            &["fever", "cough", "shortness_breath", "fatigue", "loss_taste_smell"],
            SeverityBand::Severe,
            &[
                "Isolate immediately",
                "Contact healthcare provider",
                "Monitor oxygen levels",
                "Seek emergency care if breathing becomes difficult",
            ],
        ),
        condition(
            "migraine",
            "Migraine",
            &["headache", "nausea", "sensitivity_light"],
            SeverityBand::Moderate,
            &[
                "Rest in a quiet, dark room",
                "Apply cold or warm compress",
                "Practice stress management techniques",
            ],
        ),
        condition(
            "tension_headache",
            "Tension Headache",
            &["headache", "muscle_pain", "anxiety"],
            SeverityBand::Mild,
            &[
                "Apply heat to tense neck and shoulder muscles",
                "Take regular breaks from screens",
                "Practice relaxation techniques",
            ],
        ),
        condition(
            "gastroenteritis",
            "Gastroenteritis",
            &["nausea", "vomiting", "diarrhea", "abdominal_pain", "fever"],
            SeverityBand::Moderate,
            &[
                "Drink small amounts of fluid often",
                "Use oral rehydration solutions",
                "Eat bland foods as tolerated",
                "Seek care if unable to keep fluids down",
            ],
        ),
        condition(
            "pneumonia",
            "Pneumonia",
            &["fever", "cough", "shortness_breath", "chest_pain", "fatigue"],
            SeverityBand::Severe,
            &[
                "Contact a healthcare provider promptly",
                "Monitor breathing and oxygen levels",
                "Seek emergency care if lips or face turn bluish",
            ],
        ),
        condition(
            "arrhythmia",
            "Heart Arrhythmia",
            &["palpitations", "irregular_heartbeat", "dizziness", "chest_pressure"],
            SeverityBand::Severe,
            &[
                "Contact a healthcare provider about heart rhythm symptoms",
                "Avoid caffeine and other stimulants",
                "Seek emergency care if fainting or chest pain occurs",
            ],
        ),
        condition(
            "allergic_reaction",
            "Allergic Reaction",
            &["rash", "congestion", "wheezing", "edema"],
            SeverityBand::Moderate,
            &[
                "Avoid known allergens",
                "Consider an over-the-counter antihistamine",
                "Seek emergency care if swelling affects breathing",
            ],
        ),
    ]
}
