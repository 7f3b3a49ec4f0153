//! The analysis facade: normalize, match, score, rank, aggregate.

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashSet};

use tracing::{debug, warn};

use healthscan_core::models::analysis::{
    AnalysisInput, AnalysisResult, AnalysisStage, MatchedSymptom,
};
use healthscan_core::models::condition::SeverityBand;
use healthscan_core::models::symptom::{Symptom, SymptomCategory, SymptomSeverity};
use healthscan_taxonomy::Taxonomy;

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::matcher::match_symptoms;
use crate::normalize::normalize;
use crate::{ranker, recommend, severity};

/// Top-condition probability above which care is always advised.
const SEEK_CARE_PROBABILITY: u8 = 80;

/// Runs analyses against one taxonomy with one config.
///
/// Holds only shared references and plain values, so it is cheap to build
/// per request and safe to share between threads.
#[derive(Debug, Clone, Copy)]
pub struct Analyzer<'t> {
    taxonomy: &'t Taxonomy,
    config: AnalysisConfig,
}

/// A symptom resolved from the input, with its mention severity when the
/// input was free text.
struct Resolved<'t> {
    symptom: &'t Symptom,
    mention: Option<SymptomSeverity>,
}

struct Resolution<'t> {
    symptoms: Vec<Resolved<'t>>,
    unrecognized: Vec<String>,
    category_counts: BTreeMap<SymptomCategory, u32>,
}

struct StageTracker {
    stage: AnalysisStage,
}

impl StageTracker {
    fn new() -> Self {
        Self {
            stage: AnalysisStage::Idle,
        }
    }

    fn advance(&mut self) {
        if let Some(next) = self.stage.next() {
            debug!(from = %self.stage, to = %next, "analysis stage");
            self.stage = next;
        }
    }
}

impl<'t> Analyzer<'t> {
    pub fn new(taxonomy: &'t Taxonomy, config: AnalysisConfig) -> Result<Self, AnalysisError> {
        config.validate()?;
        Ok(Self { taxonomy, config })
    }

    pub fn taxonomy(&self) -> &'t Taxonomy {
        self.taxonomy
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Run the full pipeline on one input.
    ///
    /// Fails with [`AnalysisError::EmptyInput`] when no known symptom comes
    /// out of the input. No partial result is returned on error.
    pub fn analyze(&self, input: &AnalysisInput) -> Result<AnalysisResult, AnalysisError> {
        let mut tracker = StageTracker::new();

        let resolution = match input {
            AnalysisInput::Text(text) => self.resolve_text(text, &mut tracker)?,
            AnalysisInput::SymptomIds(ids) => self.resolve_ids(ids, &mut tracker)?,
        };
        if resolution.symptoms.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        tracker.advance(); // scoring
        let severity = severity::score(resolution.symptoms.iter().map(|r| r.symptom));

        tracker.advance(); // ranking
        let ranked = ranker::rank(
            resolution.symptoms.iter().map(|r| r.symptom.id.as_str()),
            self.taxonomy.conditions(),
            &self.config,
        )?;

        tracker.advance(); // aggregating
        let categories = ranked_categories(&resolution.symptoms, &resolution.category_counts);
        let recommendations = recommend::aggregate(&ranked, severity, &categories, self.taxonomy);

        let should_seek_care = severity == SeverityBand::Severe
            || ranked
                .first()
                .is_some_and(|top| top.probability > SEEK_CARE_PROBABILITY);

        let matched_symptoms = resolution
            .symptoms
            .iter()
            .map(|r| MatchedSymptom {
                id: r.symptom.id.clone(),
                name: r.symptom.name.clone(),
                category: r.symptom.category,
                severity: r.symptom.severity,
                mention_severity: r.mention,
            })
            .collect();

        tracker.advance(); // done
        debug!(
            %severity,
            conditions = ranked.len(),
            recommendations = recommendations.len(),
            should_seek_care,
            "analysis complete"
        );

        Ok(AnalysisResult {
            possible_conditions: ranked,
            severity,
            recommendations,
            should_seek_care,
            matched_symptoms,
            unrecognized_symptom_ids: resolution.unrecognized,
        })
    }

    fn resolve_text(
        &self,
        text: &str,
        tracker: &mut StageTracker,
    ) -> Result<Resolution<'t>, AnalysisError> {
        tracker.advance(); // normalizing
        let normalized = normalize(text);
        if normalized.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        tracker.advance(); // matching
        let matches = match_symptoms(&normalized, self.taxonomy.symptoms());
        debug!(
            words = normalized.words.len(),
            matched = matches.matched.len(),
            categories = ?matches.category_counts,
            "matched free text"
        );

        let symptoms = matches
            .matched
            .iter()
            .filter_map(|m| {
                self.taxonomy.symptom(&m.symptom_id).map(|symptom| Resolved {
                    symptom,
                    mention: Some(m.mention_severity),
                })
            })
            .collect();

        Ok(Resolution {
            symptoms,
            unrecognized: Vec::new(),
            category_counts: matches.category_counts,
        })
    }

    fn resolve_ids(
        &self,
        ids: &[String],
        tracker: &mut StageTracker,
    ) -> Result<Resolution<'t>, AnalysisError> {
        tracker.advance(); // normalizing
        let mut seen = HashSet::new();
        let ids: Vec<&str> = ids
            .iter()
            .map(|id| id.trim())
            .filter(|id| !id.is_empty())
            .filter(|id| seen.insert(*id))
            .collect();
        if ids.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        tracker.advance(); // matching
        let mut symptoms = Vec::with_capacity(ids.len());
        let mut unrecognized = Vec::new();
        let mut category_counts = BTreeMap::new();
        for id in ids {
            match self.taxonomy.symptom(id) {
                Some(symptom) => {
                    *category_counts.entry(symptom.category).or_insert(0) += 1;
                    symptoms.push(Resolved {
                        symptom,
                        mention: None,
                    });
                }
                None if self.config.reject_unknown_ids => {
                    return Err(AnalysisError::UnknownSymptomId(id.to_string()));
                }
                None => {
                    warn!(symptom_id = id, "dropping unknown symptom id");
                    unrecognized.push(id.to_string());
                }
            }
        }

        Ok(Resolution {
            symptoms,
            unrecognized,
            category_counts,
        })
    }
}

/// Matched categories, most hits first. Equal counts keep first-seen order.
fn ranked_categories(
    symptoms: &[Resolved<'_>],
    counts: &BTreeMap<SymptomCategory, u32>,
) -> Vec<SymptomCategory> {
    let mut categories = Vec::new();
    for resolved in symptoms {
        if !categories.contains(&resolved.symptom.category) {
            categories.push(resolved.symptom.category);
        }
    }
    categories.sort_by_key(|c| Reverse(counts.get(c).copied().unwrap_or(0)));
    categories
}

/// Analyze one input against `taxonomy` with `config`.
pub fn analyze(
    input: &AnalysisInput,
    taxonomy: &Taxonomy,
    config: AnalysisConfig,
) -> Result<AnalysisResult, AnalysisError> {
    Analyzer::new(taxonomy, config)?.analyze(input)
}
