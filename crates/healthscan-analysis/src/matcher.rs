//! Keyword matching over normalized text.
//!
//! Matching is by substring, not whole word: the keyword "cough" hits the
//! token "coughing" and "weak" hits "weakness". Keywords that contain
//! whitespace can never sit inside a single token, so they are matched
//! against sentences instead.

use std::collections::BTreeMap;

use healthscan_core::models::analysis::{MatchResult, SymptomMatch};
use healthscan_core::models::symptom::{Symptom, SymptomSeverity};
use healthscan_taxonomy::tables::severity::MENTION_INDICATORS;

use crate::normalize::NormalizedText;

/// Whether `keyword` (already lowercase) occurs in `text`.
pub fn contains_keyword(text: &NormalizedText, keyword: &str) -> bool {
    if keyword.contains(char::is_whitespace) {
        text.sentences.iter().any(|s| s.contains(keyword))
    } else {
        text.words.iter().any(|w| w.contains(keyword))
    }
}

/// The first keyword of `keywords` that occurs in `text`.
pub fn first_hit<'k, K: AsRef<str>>(text: &NormalizedText, keywords: &'k [K]) -> Option<&'k str> {
    keywords
        .iter()
        .map(AsRef::as_ref)
        .find(|k| contains_keyword(text, k))
}

/// How many distinct keywords of `keywords` occur in `text`.
pub fn count_hits<K: AsRef<str>>(text: &NormalizedText, keywords: &[K]) -> usize {
    keywords
        .iter()
        .filter(|k| contains_keyword(text, (*k).as_ref()))
        .count()
}

/// The first label in a `(label, keywords)` table with any hit.
pub fn first_label<L: Copy>(text: &NormalizedText, table: &[(L, &[&str])]) -> Option<L> {
    table
        .iter()
        .find(|(_, keywords)| first_hit(text, *keywords).is_some())
        .map(|(label, _)| *label)
}

/// Severity adjective in the first sentence mentioning `keyword`.
/// Defaults to medium when the sentence carries none.
pub fn mention_severity(text: &NormalizedText, keyword: &str) -> SymptomSeverity {
    let Some(sentence) = text.sentences.iter().find(|s| s.contains(keyword)) else {
        return SymptomSeverity::Medium;
    };

    MENTION_INDICATORS
        .iter()
        .find(|(_, indicators)| indicators.iter().any(|i| sentence.contains(i)))
        .map(|(severity, _)| *severity)
        .unwrap_or(SymptomSeverity::Medium)
}

/// Match `symptoms` against `text`, in taxonomy order.
///
/// Each matched symptom is reported once, with its first hitting keyword.
/// Category counts grow by one for every hitting keyword.
pub fn match_symptoms(text: &NormalizedText, symptoms: &[Symptom]) -> MatchResult {
    let mut matched = Vec::new();
    let mut category_counts = BTreeMap::new();

    for symptom in symptoms {
        let Some(keyword) = first_hit(text, &symptom.keywords) else {
            continue;
        };

        let hits = count_hits(text, &symptom.keywords) as u32;
        *category_counts.entry(symptom.category).or_insert(0) += hits;

        matched.push(SymptomMatch {
            symptom_id: symptom.id.clone(),
            keyword: keyword.to_string(),
            mention_severity: mention_severity(text, keyword),
        });
    }

    MatchResult {
        matched,
        category_counts,
    }
}
