//! Mood, sentiment and lifestyle cues in free-text journal entries.

use tracing::debug;

use healthscan_core::models::emotion::{
    ActivityLevel, EmotionalAnalysis, EmotionalState, HealthContext, LifestyleFactors, Sentiment,
    SentimentAnalysis, SleepQuality, StressLevel,
};
use healthscan_taxonomy::tables::emotions::{
    ACTIVITY_PATTERNS, CONTEXT_STATES, EMOTION_PATTERNS, GENERAL_RECOMMENDATIONS,
    NEGATIVE_WORDS, POSITIVE_WORDS, SLEEP_PATTERNS, STRESS_PATTERNS, state_recommendations,
};
use healthscan_taxonomy::Taxonomy;

use crate::matcher::{count_hits, first_label, match_symptoms};
use crate::normalize::{normalize, NormalizedText};

/// Confidence points per matched pattern.
const CONFIDENCE_PER_HIT: usize = 25;

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Classify the dominant emotional state of `text`.
///
/// A state scores one point per pattern that some word contains. The
/// highest score wins, earlier states win ties, and confidence is 25 points
/// per hit capped at 100. Text with no hits is neutral at full confidence.
pub fn analyze_emotional_state(text: &str) -> EmotionalAnalysis {
    let normalized = normalize(text);

    let mut best: Option<(EmotionalState, usize)> = None;
    for (state, patterns) in EMOTION_PATTERNS {
        let count = count_hits(&normalized, *patterns);
        if count > 0 && best.is_none_or(|(_, top)| count > top) {
            best = Some((*state, count));
        }
    }

    match best {
        None => EmotionalAnalysis {
            state: EmotionalState::Neutral,
            confidence: 100,
            recommendations: to_strings(GENERAL_RECOMMENDATIONS),
        },
        Some((state, count)) => {
            debug!(state = state.as_str(), hits = count, "emotional state");
            EmotionalAnalysis {
                state,
                confidence: (count * CONFIDENCE_PER_HIT).min(100) as u8,
                recommendations: to_strings(state_recommendations(state)),
            }
        }
    }
}

/// Positive versus negative wording, counted per word.
pub fn analyze_sentiment(text: &str) -> SentimentAnalysis {
    let normalized = normalize(text);

    let mut positive = 0usize;
    let mut negative = 0usize;
    for word in &normalized.words {
        if POSITIVE_WORDS.iter().any(|p| word.contains(p)) {
            positive += 1;
        }
        if NEGATIVE_WORDS.iter().any(|p| word.contains(p)) {
            negative += 1;
        }
    }

    let total = positive + negative;
    if total == 0 {
        return SentimentAnalysis {
            sentiment: Sentiment::Neutral,
            confidence: 100,
        };
    }

    let sentiment = match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    };
    let confidence = (100.0 * positive.max(negative) as f64 / total as f64).round() as u8;

    SentimentAnalysis {
        sentiment,
        confidence,
    }
}

/// Symptoms, mood and lifestyle cues mentioned in a journal entry.
pub fn extract_health_context(text: &str, taxonomy: &Taxonomy) -> HealthContext {
    let normalized = normalize(text);

    HealthContext {
        symptoms: match_symptoms(&normalized, taxonomy.symptoms()).matched,
        emotional_state: context_state(&normalized),
        lifestyle: lifestyle_factors(&normalized),
    }
}

/// First listed state with an indicator equal to a whole word. Punctuation
/// around a word is ignored.
fn context_state(text: &NormalizedText) -> Option<EmotionalState> {
    let words: Vec<&str> = text
        .words
        .iter()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .collect();

    CONTEXT_STATES
        .iter()
        .find(|(_, indicators)| words.iter().any(|w| indicators.contains(w)))
        .map(|(state, _)| *state)
}

fn lifestyle_factors(text: &NormalizedText) -> LifestyleFactors {
    LifestyleFactors {
        sleep: first_label(text, SLEEP_PATTERNS).unwrap_or(SleepQuality::Normal),
        activity: first_label(text, ACTIVITY_PATTERNS).unwrap_or(ActivityLevel::Normal),
        stress: first_label(text, STRESS_PATTERNS).unwrap_or(StressLevel::Normal),
    }
}
