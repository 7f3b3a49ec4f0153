use healthscan_core::models::emotion::{ActivityLevel, EmotionalState, SleepQuality, StressLevel};

/// Keyword patterns per emotional state. Declaration order breaks ties.
pub static EMOTION_PATTERNS: &[(EmotionalState, &[&str])] = &[
    (EmotionalState::Stressed, &["stressed", "overwhelmed", "anxiety", "worried"]),
    (EmotionalState::Fatigued, &["tired", "exhausted", "fatigue", "drained"]),
    (EmotionalState::Positive, &["happy", "energetic", "motivated", "great"]),
    (EmotionalState::Frustrated, &["frustrated", "angry", "annoyed", "upset"]),
    (EmotionalState::Depressed, &["sad", "depressed", "down", "hopeless"]),
];

/// Whole-word indicators used when extracting a journal entry's mood.
pub static CONTEXT_STATES: &[(EmotionalState, &[&str])] = &[
    (EmotionalState::Stressed, &["stressed", "overwhelmed", "anxiety", "worried"]),
    (EmotionalState::Fatigued, &["tired", "exhausted", "fatigue", "drained"]),
    (EmotionalState::Positive, &["happy", "energetic", "motivated", "great"]),
];

pub static POSITIVE_WORDS: &[&str] = &[
    "energetic",
    "well-rested",
    "great",
    "better",
    "good",
    "happy",
    "improving",
    "strong",
    "focused",
    "relaxed",
];

pub static NEGATIVE_WORDS: &[&str] = &[
    "tired",
    "fatigue",
    "pain",
    "weak",
    "stressed",
    "anxious",
    "worried",
    "difficulty",
    "trouble",
    "poor",
];

pub static SLEEP_PATTERNS: &[(SleepQuality, &[&str])] = &[
    (SleepQuality::Poor, &["trouble sleeping", "insomnia", "poor sleep"]),
    (SleepQuality::Good, &["well rested", "good sleep", "sleeping well"]),
];

pub static ACTIVITY_PATTERNS: &[(ActivityLevel, &[&str])] = &[
    (ActivityLevel::Low, &["sedentary", "inactive", "not exercising"]),
    (ActivityLevel::High, &["active", "exercise", "working out"]),
];

pub static STRESS_PATTERNS: &[(StressLevel, &[&str])] = &[
    (StressLevel::High, &["stressed", "anxiety", "overwhelmed"]),
    (StressLevel::Low, &["relaxed", "calm", "peaceful"]),
];

/// Advice per emotional state. States without an entry get
/// [`GENERAL_RECOMMENDATIONS`].
pub static STATE_RECOMMENDATIONS: &[(EmotionalState, &[&str])] = &[
    (
        EmotionalState::Stressed,
        &[
            "Practice deep breathing exercises",
            "Try meditation or mindfulness",
            "Take regular breaks",
            "Consider stress management techniques",
        ],
    ),
    (
        EmotionalState::Fatigued,
        &[
            "Ensure adequate sleep",
            "Maintain a regular sleep schedule",
            "Consider energy management techniques",
            "Review your daily routine",
        ],
    ),
    (
        EmotionalState::Frustrated,
        &[
            "Take a break from the situation",
            "Practice calming techniques",
            "Express your feelings constructively",
            "Consider talking to someone",
        ],
    ),
    (
        EmotionalState::Depressed,
        &[
            "Reach out to a mental health professional",
            "Maintain social connections",
            "Establish a daily routine",
            "Practice self-care activities",
        ],
    ),
];

pub fn state_recommendations(state: EmotionalState) -> &'static [&'static str] {
    STATE_RECOMMENDATIONS
        .iter()
        .find(|(s, _)| *s == state)
        .map(|(_, recs)| *recs)
        .unwrap_or(GENERAL_RECOMMENDATIONS)
}

pub static GENERAL_RECOMMENDATIONS: &[&str] = &[
    "Maintain a balanced lifestyle",
    "Practice regular exercise",
    "Ensure adequate sleep",
    "Stay connected with others",
];
