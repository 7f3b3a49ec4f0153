use healthscan_core::models::symptom::{Symptom, SymptomCategory, SymptomSeverity};

fn symptom(
    id: &str,
    name: &str,
    category: SymptomCategory,
    severity: SymptomSeverity,
    keywords: &[&str],
) -> Symptom {
    Symptom {
        id: id.to_string(),
        name: name.to_string(),
        category,
        severity,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        description: None,
    }
}

/// Built-in symptom table.
///
/// Keywords are matched by substring, so a stem like "wheez" covers
/// "wheezing" and "wheezy". Phrases are matched against whole sentences.
pub fn symptoms() -> Vec<Symptom> {
    use SymptomCategory::*;
    use SymptomSeverity::*;

    vec![
        // General
        symptom("fever", "Fever", General, Medium, &["fever", "high temperature"]),
        symptom("fatigue", "Fatigue", General, Medium, &["fatigue", "tired", "exhausted"]),
        symptom("weakness", "Weakness", General, Medium, &["weak"]),
        symptom("malaise", "General Discomfort", General, Low, &["malaise", "unwell"]),
        symptom("chills", "Chills", General, Low, &["chills", "shivering"]),
        // Respiratory
        symptom("cough", "Cough", Respiratory, Medium, &["cough"]),
        symptom(
            "shortness_breath",
            "Shortness of Breath",
            Respiratory,
            High,
            &["shortness of breath", "short of breath", "breathless"],
        ),
        symptom("chest_pain", "Chest Pain", Respiratory, High, &["chest pain"]),
        symptom("wheezing", "Wheezing", Respiratory, Medium, &["wheez"]),
        symptom("sore_throat", "Sore Throat", Respiratory, Low, &["sore throat"]),
        symptom(
            "congestion",
            "Nasal Congestion",
            Respiratory,
            Low,
            &["congest", "runny nose", "stuffy nose"],
        ),
        // Cardiovascular
        symptom(
            "palpitations",
            "Heart Palpitations",
            Cardiovascular,
            High,
            &["palpitation", "heart racing", "racing heart"],
        ),
        symptom(
            "irregular_heartbeat",
            "Irregular Heartbeat",
            Cardiovascular,
            High,
            &["irregular heartbeat", "arrhythmia"],
        ),
        symptom(
            "chest_pressure",
            "Chest Pressure",
            Cardiovascular,
            High,
            &["chest pressure", "chest tightness", "tight chest"],
        ),
        symptom(
            "edema",
            "Swelling in Extremities",
            Cardiovascular,
            Medium,
            &["swelling", "swollen", "edema"],
        ),
        // Neurological
        symptom("headache", "Headache", Neurological, Medium, &["headache"]),
        symptom("dizziness", "Dizziness", Neurological, Medium, &["dizz", "lightheaded"]),
        symptom("confusion", "Confusion", Neurological, High, &["confus", "disoriented"]),
        symptom("memory_loss", "Memory Loss", Neurological, High, &["memory loss", "forgetful"]),
        symptom(
            "loss_taste_smell",
            "Loss of Taste or Smell",
            Neurological,
            Medium,
            &["loss of taste", "loss of smell", "can't taste", "can't smell"],
        ),
        // Gastrointestinal
        symptom("nausea", "Nausea", Gastrointestinal, Medium, &["nausea", "nauseous", "queasy"]),
        symptom("vomiting", "Vomiting", Gastrointestinal, Medium, &["vomit", "throwing up"]),
        symptom("diarrhea", "Diarrhea", Gastrointestinal, Medium, &["diarrhea", "diarrhoea"]),
        symptom(
            "abdominal_pain",
            "Abdominal Pain",
            Gastrointestinal,
            Medium,
            &["abdominal pain", "stomach pain", "stomach ache", "stomachache"],
        ),
        // Musculoskeletal
        symptom(
            "muscle_pain",
            "Muscle Pain",
            Musculoskeletal,
            Medium,
            &["muscle pain", "muscle ache", "body ache", "aching"],
        ),
        symptom("joint_pain", "Joint Pain", Musculoskeletal, Medium, &["joint pain", "stiff joints"]),
        // Psychological
        symptom("anxiety", "Anxiety", Psychological, Medium, &["anxious", "anxiety", "panic"]),
        symptom(
            "insomnia",
            "Insomnia",
            Psychological,
            Low,
            &["insomnia", "trouble sleeping", "can't sleep"],
        ),
        // Dermatological
        symptom("rash", "Skin Rash", Dermatological, Low, &["rash", "hives", "itchy skin"]),
        // Sensory
        symptom(
            "sensitivity_light",
            "Sensitivity to Light",
            Sensory,
            Low,
            &["sensitivity to light", "light sensitivity", "photophobia"],
        ),
    ]
}
