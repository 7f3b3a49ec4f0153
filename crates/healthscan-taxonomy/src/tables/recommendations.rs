use healthscan_core::models::symptom::SymptomCategory;

use crate::recommendations::{CategoryRecommendations, SeverityLadder};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn severity_ladder() -> SeverityLadder {
    SeverityLadder {
        mild: strings(&[
            "Monitor symptoms for 24-48 hours",
            "Get adequate rest and maintain hydration",
            "Over-the-counter remedies may help relieve symptoms",
        ]),
        moderate: strings(&[
            "Schedule an appointment with your healthcare provider",
            "Monitor symptoms closely for any changes",
            "Rest and stay hydrated",
        ]),
        severe: strings(&[
            "Seek immediate medical attention",
            "Document all symptoms and their onset times",
        ]),
    }
}

pub fn category_recommendations() -> Vec<CategoryRecommendations> {
    let entry = |category, items: &[&str]| CategoryRecommendations {
        category,
        recommendations: strings(items),
    };

    vec![
        entry(
            SymptomCategory::General,
            &["Get adequate rest", "Stay hydrated", "Monitor symptoms"],
        ),
        entry(
            SymptomCategory::Respiratory,
            &[
                "Practice deep breathing exercises",
                "Use a humidifier if needed",
                "Avoid respiratory irritants",
            ],
        ),
        entry(
            SymptomCategory::Cardiovascular,
            &[
                "Monitor blood pressure",
                "Limit sodium intake",
                "Stay physically active as tolerated",
            ],
        ),
        entry(
            SymptomCategory::Neurological,
            &[
                "Keep a symptom diary noting possible triggers",
                "Avoid driving if dizzy or confused",
            ],
        ),
        entry(
            SymptomCategory::Gastrointestinal,
            &[
                "Stay hydrated with small, frequent sips",
                "Eat bland, easy-to-digest foods",
                "Avoid alcohol and fatty foods",
            ],
        ),
        entry(
            SymptomCategory::Musculoskeletal,
            &[
                "Rest the affected area",
                "Apply ice or heat as appropriate",
                "Stretch gently as tolerated",
            ],
        ),
        entry(
            SymptomCategory::Psychological,
            &[
                "Practice relaxation techniques",
                "Maintain a regular sleep schedule",
                "Consider talking to a mental health professional",
            ],
        ),
        entry(
            SymptomCategory::Dermatological,
            &[
                "Keep the affected skin clean and dry",
                "Avoid scratching",
                "Note any new soaps, foods or medications",
            ],
        ),
        entry(
            SymptomCategory::Sensory,
            &["Rest your eyes in a dim room", "Limit exposure to bright light"],
        ),
    ]
}
